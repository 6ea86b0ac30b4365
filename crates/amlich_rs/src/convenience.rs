//! One-call aggregation of a day's lunar date and labels.

use amlich_canchi::{TietKhi, day_can_chi, month_can_chi, tiet_khi_for_jdn, year_can_chi};
use amlich_core::{LunarDate, lunar_date_for};

/// Everything the calendar derives for one Gregorian day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayInfo {
    /// The lunar date (sentinel when the input year is unsupported).
    pub lunar: LunarDate,
    /// Can Chi of the lunar year, e.g. `"Canh Thìn"`.
    pub year_can_chi: String,
    /// Can Chi of the lunar month, intercalary repeats marked.
    pub month_can_chi: String,
    /// Can Chi of the day, derived from the Julian Day Number.
    pub day_can_chi: String,
    /// Solar term in effect on the day.
    pub tiet_khi: TietKhi,
}

/// Convert a Gregorian date and derive all of its labels in one call.
///
/// The Can Chi labels describe the *lunar* year and month the day falls
/// in, so a pre-Tết January date carries the previous year's names.
/// When the input year is outside 1900–2199 the `lunar` field is the
/// sentinel and the year/month labels carry no meaning; check
/// [`LunarDate::is_valid`] before displaying them.
pub fn day_info(day: u32, month: u32, year: i32) -> DayInfo {
    let lunar = lunar_date_for(day, month, year);
    DayInfo {
        year_can_chi: year_can_chi(lunar.year),
        month_can_chi: month_can_chi(&lunar),
        day_can_chi: day_can_chi(&lunar),
        tiet_khi: tiet_khi_for_jdn(lunar.jd),
        lunar,
    }
}
