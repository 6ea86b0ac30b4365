//! Vietnamese lunar calendar core: solar → lunar date conversion.
//!
//! This crate provides:
//! - The packed year-code table covering Gregorian 1900–2199
//! - [`YearCode`] decoding and per-year [`MonthBoundary`] lists
//! - [`find_lunar_date`], locating a Julian Day Number in a boundary list
//! - [`lunar_date_for`], the top-level Gregorian → [`LunarDate`] conversion
//!
//! All computation is table-driven and bounded (a lookup plus a walk over
//! at most 13 months); nothing is cached or mutated, so every function is
//! safe to call concurrently.
//!
//! # Example
//!
//! ```
//! use amlich_core::lunar_date_for;
//!
//! // Tết of the year Canh Thìn
//! let lunar = lunar_date_for(5, 2, 2000);
//! assert_eq!((lunar.day, lunar.month, lunar.year), (1, 1, 2000));
//! assert!(!lunar.leap);
//! ```

pub mod decode;
pub mod year_code;

use amlich_time::jdn_from_gregorian;

pub use decode::{MonthBoundary, YearCode, decode_lunar_year};
pub use year_code::{MAX_YEAR, MIN_YEAR, year_code};

/// A Vietnamese lunar calendar date.
///
/// `jd` is the canonical absolute-time key: within the supported range it
/// corresponds uniquely and monotonically to `(year, month, leap, day)`.
/// The sentinel for "no valid result" zeroes the calendar fields while
/// keeping the computed `jd` for reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    /// Day of the lunar month, 1–30 (0 in the sentinel).
    pub day: u32,
    /// Lunar month number, 1–12 (0 in the sentinel).
    pub month: u32,
    /// Gregorian year under which the lunar year began (0 in the sentinel).
    pub year: i32,
    /// True if this occurrence of `month` is the intercalary repeat.
    pub leap: bool,
    /// Julian Day Number of this lunar day.
    pub jd: i64,
}

impl LunarDate {
    /// The "no valid result" value: calendar fields zeroed, `jd` kept.
    pub const fn sentinel(jd: i64) -> Self {
        Self {
            day: 0,
            month: 0,
            year: 0,
            leap: false,
            jd,
        }
    }

    /// False for the sentinel produced on out-of-range input.
    pub const fn is_valid(&self) -> bool {
        self.year != 0
    }
}

/// Locate `target_jdn` in a month-boundary list.
///
/// Picks the last boundary with `jd <= target_jdn`; the day number is the
/// offset from that month's start plus one. Returns the sentinel when
/// `target_jdn` precedes every boundary (the date belongs to the previous
/// lunar year; see [`lunar_date_for`] for the fallback).
///
/// # Panics
///
/// Panics if `boundaries` is empty. A decoded year always has 12 or 13
/// entries, so an empty list is a caller bug, not a data condition.
pub fn find_lunar_date(target_jdn: i64, boundaries: &[MonthBoundary]) -> LunarDate {
    assert!(!boundaries.is_empty(), "month boundary list is empty");
    debug_assert!(boundaries.windows(2).all(|w| w[0].jd < w[1].jd));

    let Some(entry) = boundaries.iter().take_while(|b| b.jd <= target_jdn).last() else {
        return LunarDate::sentinel(target_jdn);
    };
    LunarDate {
        day: (target_jdn - entry.jd + 1) as u32,
        month: entry.month,
        year: entry.year,
        leap: entry.leap,
        jd: target_jdn,
    }
}

/// Convert a Gregorian calendar date to its Vietnamese lunar date.
///
/// For years outside 1900–2199 the sentinel is returned with `jd` still
/// computed. A date before the year's Tết still belongs to the previous
/// lunar year and is located against the previous year's boundaries;
/// January 1900 has no 1899 table to fall back to and also yields the
/// sentinel.
pub fn lunar_date_for(day: u32, month: u32, year: i32) -> LunarDate {
    let jd = jdn_from_gregorian(day, month, year);
    let Some(boundaries) = decode_lunar_year(year) else {
        return LunarDate::sentinel(jd);
    };
    if jd < boundaries[0].jd {
        let Some(previous) = decode_lunar_year(year - 1) else {
            return LunarDate::sentinel(jd);
        };
        return find_lunar_date(jd, &previous);
    }
    find_lunar_date(jd, &boundaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tet_2000() {
        let lunar = lunar_date_for(5, 2, 2000);
        assert_eq!(lunar.day, 1);
        assert_eq!(lunar.month, 1);
        assert_eq!(lunar.year, 2000);
        assert!(!lunar.leap);
        assert_eq!(lunar.jd, 2_451_580);
    }

    #[test]
    fn pre_tet_fallback() {
        // 1 Jan 2000 is before Tết 2000, so it falls in month 11 of the
        // lunar year that began in 1999
        let lunar = lunar_date_for(1, 1, 2000);
        assert_eq!(lunar.day, 25);
        assert_eq!(lunar.month, 11);
        assert_eq!(lunar.year, 1999);
        assert!(!lunar.leap);
        assert_eq!(lunar.jd, 2_451_545);
    }

    #[test]
    fn intercalary_month_date() {
        // 1 Aug 2017 falls in the intercalary sixth month of Đinh Dậu
        let lunar = lunar_date_for(1, 8, 2017);
        assert_eq!(lunar.day, 10);
        assert_eq!(lunar.month, 6);
        assert!(lunar.leap);
    }

    #[test]
    fn out_of_range_sentinel() {
        let lunar = lunar_date_for(1, 1, 1899);
        assert!(!lunar.is_valid());
        assert_eq!((lunar.day, lunar.month, lunar.year), (0, 0, 0));
        assert_ne!(lunar.jd, 0, "jd is still computed for reference");

        let lunar = lunar_date_for(1, 1, 2200);
        assert!(!lunar.is_valid());
    }

    #[test]
    fn january_1900_has_no_previous_year() {
        // Before Tết 1900 (31 Jan) the previous lunar year would need the
        // 1899 table, which the data does not cover
        let lunar = lunar_date_for(1, 1, 1900);
        assert!(!lunar.is_valid());
        assert_eq!(lunar.jd, 2_415_021);
    }

    #[test]
    fn first_supported_tet() {
        let lunar = lunar_date_for(31, 1, 1900);
        assert_eq!((lunar.day, lunar.month, lunar.year), (1, 1, 1900));
    }

    #[test]
    fn locate_boundary_start_is_day_one() {
        let boundaries = decode_lunar_year(2017).unwrap();
        for boundary in &boundaries {
            let lunar = find_lunar_date(boundary.jd, &boundaries);
            assert_eq!(lunar.day, 1, "month {} leap {}", boundary.month, boundary.leap);
            assert_eq!(lunar.month, boundary.month);
            assert_eq!(lunar.leap, boundary.leap);
        }
    }

    #[test]
    fn locate_before_first_boundary_is_sentinel() {
        let boundaries = decode_lunar_year(2000).unwrap();
        let lunar = find_lunar_date(boundaries[0].jd - 1, &boundaries);
        assert!(!lunar.is_valid());
        assert_eq!(lunar.jd, boundaries[0].jd - 1);
    }

    #[test]
    #[should_panic(expected = "month boundary list is empty")]
    fn locate_empty_list_panics() {
        find_lunar_date(2_451_545, &[]);
    }
}
