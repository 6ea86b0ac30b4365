//! Year-code decoding and lunar month boundaries.

use amlich_time::jdn_from_gregorian;

use crate::year_code::year_code;

/// One year's packed code, decoded into named fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCode {
    /// Days from January 1 of the Gregorian year to Tết (lunar New Year's
    /// Day). Observed range in the table: 20–50.
    pub tet_offset: u32,
    /// Length in days (29 or 30) of each regular month 1–12.
    pub month_lengths: [u32; 12],
    /// Intercalary month number, if the year has one.
    pub leap_month: Option<u32>,
    /// Length in days (29 or 30) of the intercalary month. Meaningless
    /// when `leap_month` is `None`.
    pub leap_month_length: u32,
}

impl YearCode {
    /// Decode a packed 24-bit year code.
    ///
    /// Layout (bit 0 = least significant):
    /// - bits 23–17: Tết offset from January 1
    /// - bit 16: intercalary month length (set → 30 days)
    /// - bits 15–4: regular month lengths, month m at bit 16−m (set → 30)
    /// - bits 3–0: intercalary month number, 0 → none
    pub fn decode(raw: u32) -> Self {
        let mut month_lengths = [0_u32; 12];
        for (i, length) in month_lengths.iter_mut().enumerate() {
            *length = 29 + ((raw >> (15 - i)) & 1);
        }
        let leap = raw & 0xf;
        Self {
            tet_offset: raw >> 17,
            month_lengths,
            leap_month: if leap == 0 { None } else { Some(leap) },
            leap_month_length: 29 + ((raw >> 16) & 1),
        }
    }

    /// Total days in the lunar year (twelve regular months plus the
    /// intercalary month when present).
    pub fn days_in_year(&self) -> u32 {
        let regular: u32 = self.month_lengths.iter().sum();
        match self.leap_month {
            Some(_) => regular + self.leap_month_length,
            None => regular,
        }
    }
}

/// Start (day 1) of one lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBoundary {
    /// Lunar month number, 1–12.
    pub month: u32,
    /// True for the intercalary repeat of `month`.
    pub leap: bool,
    /// Gregorian year whose Tết starts this lunar year.
    pub year: i32,
    /// Julian Day Number of day 1 of this month.
    pub jd: i64,
}

/// Month boundaries of the lunar year beginning in `year`, chronological
/// and strictly increasing by `jd`: 12 entries, or 13 when the year has an
/// intercalary month. `None` outside 1900–2199.
pub fn decode_lunar_year(year: i32) -> Option<Vec<MonthBoundary>> {
    let code = YearCode::decode(year_code(year)?);
    let mut boundaries = Vec::with_capacity(12 + usize::from(code.leap_month.is_some()));
    let mut jd = jdn_from_gregorian(1, 1, year) + i64::from(code.tet_offset);
    for month in 1..=12_u32 {
        boundaries.push(MonthBoundary {
            month,
            leap: false,
            year,
            jd,
        });
        jd += i64::from(code.month_lengths[(month - 1) as usize]);
        if code.leap_month == Some(month) {
            boundaries.push(MonthBoundary {
                month,
                leap: true,
                year,
                jd,
            });
            jd += i64::from(code.leap_month_length);
        }
    }
    Some(boundaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_2000() {
        // 0x46c960: Tết offset 35, no intercalary month
        let code = YearCode::decode(0x46c960);
        assert_eq!(code.tet_offset, 35);
        assert_eq!(code.leap_month, None);
        assert_eq!(
            code.month_lengths,
            [30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 29]
        );
        assert_eq!(code.days_in_year(), 354);
    }

    #[test]
    fn decode_2017_intercalary() {
        // 0x375176: intercalary month 6, 30 days
        let code = YearCode::decode(0x375176);
        assert_eq!(code.leap_month, Some(6));
        assert_eq!(code.leap_month_length, 30);
        assert_eq!(code.tet_offset, 27);
    }

    #[test]
    fn boundaries_2000() {
        let boundaries = decode_lunar_year(2000).unwrap();
        assert_eq!(boundaries.len(), 12);
        // Tết 2000: 5 Feb 2000
        assert_eq!(boundaries[0].jd, 2_451_580);
        assert_eq!(boundaries[0].month, 1);
        assert!(!boundaries[0].leap);
    }

    #[test]
    fn boundaries_2017_leap_position() {
        let boundaries = decode_lunar_year(2017).unwrap();
        assert_eq!(boundaries.len(), 13);
        // Regular month 6 starts at index 5, its intercalary repeat follows
        assert_eq!(boundaries[5].month, 6);
        assert!(!boundaries[5].leap);
        assert_eq!(boundaries[5].jd, 2_457_929);
        assert_eq!(boundaries[6].month, 6);
        assert!(boundaries[6].leap);
        assert_eq!(boundaries[6].jd, 2_457_958);
        assert_eq!(boundaries[7].month, 7);
        assert_eq!(boundaries[7].jd, 2_457_988);
    }

    #[test]
    fn boundaries_strictly_increasing() {
        for year in [1900, 1955, 2000, 2017, 2100, 2199] {
            let boundaries = decode_lunar_year(year).unwrap();
            assert!(
                boundaries.windows(2).all(|w| w[0].jd < w[1].jd),
                "year {year}"
            );
        }
    }

    #[test]
    fn out_of_range_years() {
        assert_eq!(decode_lunar_year(1899), None);
        assert_eq!(decode_lunar_year(2200), None);
    }
}
