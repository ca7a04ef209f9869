//! Error types for lunarbar.
//!
//! Every crate in the workspace reports failures through the single
//! `thiserror`-derived [`Error`] enum defined here. Precondition checks use
//! the [`ensure!`](crate::ensure) and [`fail!`](crate::fail) macros.
//!
//! Only [`Error::Conversion`] is a hard error for callers of the annotation
//! core. [`Error::MissingComponent`] and [`Error::Fetch`] are logged and
//! degraded by the component that produced them.

use thiserror::Error;

/// The top-level error type used throughout lunarbar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date lies outside the range covered by the lunisolar tables.
    #[error("{0} is outside the supported lunar calendar range")]
    Conversion(String),

    /// A date could not be decomposed into one of its calendar components.
    #[error("missing calendar component: {0}")]
    MissingComponent(String),

    /// External holiday data could not be obtained.
    #[error("holiday data unavailable: {0}")]
    Fetch(String),

    /// Gregorian date construction or arithmetic failed.
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Dataset or configuration text could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Return `true` for errors the annotation core must surface to callers.
    pub fn is_hard(&self) -> bool {
        matches!(self, Error::Conversion(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e.to_string())
    }
}

/// Shorthand `Result` type used throughout lunarbar.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// ```
/// use lb_core::{ensure, errors::Error};
/// fn month(m: u8) -> lb_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(5).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Conversion(...))` immediately.
///
/// The message names what fell outside the lunar tables: a date, or a
/// lunar year.
///
/// ```
/// use lb_core::{fail, errors::Error};
/// fn before_epoch() -> lb_core::errors::Result<()> {
///     fail!("1899-12-31");
/// }
/// assert_eq!(
///     before_epoch(),
///     Err(Error::Conversion("1899-12-31".into()))
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Conversion(format!($($msg)*)))
    };
}
