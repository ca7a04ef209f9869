//! # lb-core
//!
//! Core error definitions and settings for lunarbar.
//!
//! This crate provides the building blocks shared across all other crates
//! in the workspace: the error hierarchy, the `ensure!` / `fail!` macros,
//! and the [`Settings`] value.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Library settings (time zone for solar terms, label spacing).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{Settings, CHINA_STANDARD_OFFSET_MINUTES};
