//! The Sun's apparent ecliptic longitude and solar-term placement.

use std::f64::consts::PI;

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Time-zone offset of Indochina Time (UTC+7), the civil zone of the
/// Vietnamese calendar.
pub const INDOCHINA_TZ_HOURS: f64 = 7.0;

/// Sun's apparent ecliptic longitude in radians, normalized to [0, 2π).
///
/// Meeus low-precision series: mean longitude plus a three-term equation
/// of centre. Good to roughly 0.01 deg, which places a civil day within a
/// 15-deg solar term with large margin.
pub fn sun_ecliptic_longitude(jd_instant: f64) -> f64 {
    let t = (jd_instant - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let t2 = t * t;
    let dr = PI / 180.0;

    // Mean anomaly and mean longitude, in degrees.
    let m = 357.529_10 + 35_999.050_30 * t - 0.000_155_9 * t2 - 0.000_000_48 * t2 * t;
    let l0 = 280.466_45 + 36_000.769_83 * t + 0.000_303_2 * t2;

    // Equation of centre.
    let dl = (1.914_600 - 0.004_817 * t - 0.000_014 * t2) * (dr * m).sin()
        + (0.019_993 - 0.000_101 * t) * (dr * 2.0 * m).sin()
        + 0.000_290 * (dr * 3.0 * m).sin();

    normalize_two_pi((l0 + dl) * dr)
}

/// Solar-term index (0..=23) in effect at the start of a civil day.
///
/// The longitude is sampled at local midnight: `jdn - 0.5` is UT midnight
/// of the JDN's civil day, shifted west by the zone offset. Index 0 starts
/// at longitude 0 (March equinox); each term spans 15 deg.
pub fn solar_term_index(jdn_midnight: i64, tz_hours: f64) -> usize {
    let instant = jdn_midnight as f64 - 0.5 - tz_hours / 24.0;
    let longitude = sun_ecliptic_longitude(instant);
    (((longitude / PI) * 12.0).floor() as usize).min(23)
}

/// Normalize an angle in radians to [0, 2π).
fn normalize_two_pi(rad: f64) -> f64 {
    let r = rad % (2.0 * PI);
    if r < 0.0 { r + 2.0 * PI } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::jdn_from_gregorian;

    #[test]
    fn longitude_in_range() {
        for jdn in [2_415_021, 2_440_588, 2_451_545, 2_524_593] {
            let lon = sun_ecliptic_longitude(jdn as f64);
            assert!((0.0..2.0 * PI).contains(&lon), "lon {lon} for jdn {jdn}");
        }
    }

    #[test]
    fn longitude_known_values() {
        // J2000.0: Sun near 280.46 deg ecliptic longitude
        let lon = sun_ecliptic_longitude(2_451_545.0);
        assert!((lon - 4.893_591_648_627).abs() < 1e-9, "got {lon}");
        // 2000 March equinox window: longitude just short of wrapping to 0
        let lon = sun_ecliptic_longitude(2_451_623.5);
        assert!((lon - 6.277_916_055_585).abs() < 1e-9, "got {lon}");
    }

    #[test]
    fn term_index_range() {
        for day in 0..366 {
            let idx = solar_term_index(2_451_545 + day, INDOCHINA_TZ_HOURS);
            assert!(idx <= 23, "index {idx} on day offset {day}");
        }
    }

    #[test]
    fn term_index_solstice_and_equinox() {
        // 25 Dec 2000: winter solstice term (270 deg), index 18
        let jdn = jdn_from_gregorian(25, 12, 2000);
        assert_eq!(solar_term_index(jdn + 1, INDOCHINA_TZ_HOURS), 18);
        // 21 Mar 2000: March equinox term, index 0
        let jdn = jdn_from_gregorian(21, 3, 2000);
        assert_eq!(solar_term_index(jdn + 1, INDOCHINA_TZ_HOURS), 0);
        // 7 Jul 1984: index 7
        let jdn = jdn_from_gregorian(7, 7, 1984);
        assert_eq!(solar_term_index(jdn + 1, INDOCHINA_TZ_HOURS), 7);
    }
}
