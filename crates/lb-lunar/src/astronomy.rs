//! Low-precision solar position, enough to place solar terms on the right
//! civil day.
//!
//! Instants are Julian Ephemeris Days (JDE, Terrestrial Time). The apparent
//! geocentric longitude uses the truncated series from Meeus, *Astronomical
//! Algorithms*, ch. 25 (about 0.01°, i.e. a quarter of an hour of solar
//! motion). [`delta_t_seconds`] converts to Universal Time with the
//! Espenak–Meeus polynomials.

/// JDE of J2000.0.
pub const J2000: f64 = 2_451_545.0;

/// Mean tropical year in days.
pub const TROPICAL_YEAR: f64 = 365.242_189;

/// JDE of the March equinox of 2000.
const EQUINOX_2000: f64 = 2_451_623.81;

/// Julian Day Number of the day before serial 1 (1899-12-31).
const SERIAL_JDN_OFFSET: i64 = 2_415_020;

const MAX_ITERATIONS: usize = 50;
const TOLERANCE_DEGREES: f64 = 1e-7;

fn normalize_degrees(x: f64) -> f64 {
    x.rem_euclid(360.0)
}

/// Apparent geocentric ecliptic longitude of the Sun, in degrees
/// `[0, 360)`, at `jde`.
pub fn apparent_solar_longitude(jde: f64) -> f64 {
    let t = (jde - J2000) / 36_525.0;
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1_934.136 * t).to_radians();
    // Aberration and nutation in longitude.
    normalize_degrees(l0 + c - 0.005_69 - 0.004_78 * omega.sin())
}

/// TT − UT in seconds for a decimal Gregorian `year`.
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494_119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
            - 0.000_197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.844_93 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2_547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.334_5 * t - 0.060_374 * t.powi(2)
            + 0.001_727_5 * t.powi(3)
            + 0.000_651_814 * t.powi(4)
            + 0.000_023_735_99 * t.powi(5)
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.322_17 * t + 0.005_589 * t.powi(2)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.562_8 * (2_150.0 - year)
    }
}

/// JDE at which the Sun's apparent longitude equals `longitude` degrees
/// during Gregorian `year`.
///
/// Longitudes from 285° (小寒) up to 360° fall in January–March, after the
/// previous year's March equinox; the others follow the equinox of `year`.
pub fn solar_longitude_crossing(year: i32, longitude: f64) -> f64 {
    let base_year = if longitude >= 285.0 { year - 1 } else { year };
    let mut jde = EQUINOX_2000
        + TROPICAL_YEAR * f64::from(base_year - 2000)
        + longitude / 360.0 * TROPICAL_YEAR;
    for _ in 0..MAX_ITERATIONS {
        let delta = (longitude - apparent_solar_longitude(jde) + 180.0).rem_euclid(360.0) - 180.0;
        jde += delta * TROPICAL_YEAR / 360.0;
        if delta.abs() < TOLERANCE_DEGREES {
            break;
        }
    }
    jde
}

/// Serial day number (1900-01-01 = 1) of the civil day containing `jde`
/// in a zone `utc_offset_minutes` east of UTC.
pub fn civil_serial(jde: f64, utc_offset_minutes: i32) -> i32 {
    let year = 2000.0 + (jde - J2000) / 365.25;
    let local = jde - delta_t_seconds(year) / 86_400.0 + 0.5 + f64::from(utc_offset_minutes) / 1_440.0;
    (local.floor() as i64 - SERIAL_JDN_OFFSET) as i32
}
