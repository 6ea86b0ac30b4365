//! Convenience wrapper for the amlich Vietnamese lunar calendar.
//!
//! Re-exports the full public surface of the workspace so callers only
//! need `use amlich_rs::*`, and adds [`day_info`], which gathers the lunar
//! date and all of its labels in one call.
//!
//! # Quick start
//!
//! ```
//! use amlich_rs::*;
//!
//! let info = day_info(5, 2, 2000);
//! assert_eq!((info.lunar.day, info.lunar.month, info.lunar.year), (1, 1, 2000));
//! assert_eq!(info.year_can_chi, "Canh Thìn");
//! assert_eq!(info.tiet_khi, TietKhi::LapXuan);
//! ```

pub mod convenience;

pub use convenience::{DayInfo, day_info};

// Re-export core types so callers don't need to depend on the inner
// crates directly.
pub use amlich_core::{
    LunarDate, MAX_YEAR, MIN_YEAR, MonthBoundary, YearCode, decode_lunar_year, find_lunar_date,
    lunar_date_for, year_code,
};

pub use amlich_canchi::{
    ALL_CAN, ALL_CHI, ALL_TIET_KHI, Can, Chi, TietKhi, day_can_chi, month_can_chi,
    tiet_khi_for_jdn, year_can_chi,
};

pub use amlich_time::{
    INDOCHINA_TZ_HOURS, gregorian_from_jdn, jdn_from_gregorian, solar_term_index,
    sun_ecliptic_longitude,
};
