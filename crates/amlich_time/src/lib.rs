//! Calendar and solar math for the Vietnamese lunar calendar.
//!
//! This crate provides:
//! - Julian Day Number ↔ Gregorian calendar conversions
//! - The Sun's apparent ecliptic longitude (Meeus low-precision series)
//! - Solar-term (tiết khí) index determination
//!
//! Everything here is a pure function over integers and `f64`; no state,
//! no I/O.

pub mod julian;
pub mod solar;

pub use julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD, gregorian_from_jdn, jdn_from_gregorian};
pub use solar::{INDOCHINA_TZ_HOURS, solar_term_index, sun_ecliptic_longitude};
