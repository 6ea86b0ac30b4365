//! C-facing adapter for the amlich Vietnamese lunar calendar.
//!
//! Intended for firmware and embedded consumers: plain `#[repr(C)]`
//! structs, status codes instead of panics, and label strings written as
//! NUL-terminated UTF-8 into caller-supplied buffers.

use amlich_canchi::{day_can_chi, month_can_chi, tiet_khi_for_jdn, year_can_chi};
use amlich_core::{LunarDate, lunar_date_for};

/// ABI version for downstream bindings.
pub const AMLICH_API_VERSION: u32 = 1;

/// Buffer size that fits every label this library produces, including the
/// NUL terminator.
pub const AMLICH_LABEL_CAPACITY: usize = 64;

/// C-facing status codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmlichStatus {
    Ok = 0,
    /// Input year outside 1900–2199; the sentinel date is still written.
    OutOfRange = 1,
    NullPointer = 2,
    BufferTooSmall = 3,
    InvalidDate = 4,
    Internal = 255,
}

/// C-compatible lunar date.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmlichLunarDate {
    /// Day of the lunar month, 1–30 (0 in the sentinel).
    pub day: i32,
    /// Lunar month number, 1–12 (0 in the sentinel).
    pub month: i32,
    /// Gregorian year under which the lunar year began (0 in the sentinel).
    pub year: i32,
    /// 1 for the intercalary repeat of `month`, else 0.
    pub leap: u8,
    /// Julian Day Number of this lunar day.
    pub jd: i64,
}

impl From<LunarDate> for AmlichLunarDate {
    fn from(value: LunarDate) -> Self {
        Self {
            day: value.day as i32,
            month: value.month as i32,
            year: value.year,
            leap: u8::from(value.leap),
            jd: value.jd,
        }
    }
}

impl TryFrom<&AmlichLunarDate> for LunarDate {
    type Error = AmlichStatus;

    fn try_from(value: &AmlichLunarDate) -> Result<Self, Self::Error> {
        let day = u32::try_from(value.day).map_err(|_| AmlichStatus::InvalidDate)?;
        let month = u32::try_from(value.month).map_err(|_| AmlichStatus::InvalidDate)?;
        Ok(Self {
            day,
            month,
            year: value.year,
            leap: value.leap != 0,
            jd: value.jd,
        })
    }
}

/// Convert a Gregorian date using C-compatible types.
pub fn amlich_lunar_date_internal(day: u32, month: u32, year: i32) -> (AmlichLunarDate, AmlichStatus) {
    let lunar = lunar_date_for(day, month, year);
    let status = if lunar.is_valid() {
        AmlichStatus::Ok
    } else {
        AmlichStatus::OutOfRange
    };
    (AmlichLunarDate::from(lunar), status)
}

/// Return ABI version of the exported C API.
#[unsafe(no_mangle)]
pub extern "C" fn amlich_api_version() -> u32 {
    AMLICH_API_VERSION
}

/// Convert a Gregorian date to a lunar date.
///
/// Writes the result (the sentinel for unsupported years, with the Julian
/// Day Number still filled in) and returns `OutOfRange` in that case.
///
/// # Safety
/// `out` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn amlich_lunar_date(
    day: u32,
    month: u32,
    year: i32,
    out: *mut AmlichLunarDate,
) -> AmlichStatus {
    ffi_boundary(|| {
        if out.is_null() {
            return AmlichStatus::NullPointer;
        }
        let (lunar, status) = amlich_lunar_date_internal(day, month, year);
        // SAFETY: Pointer is checked for null above and written once.
        unsafe { *out = lunar };
        status
    })
}

/// Write the Can Chi name of a Gregorian year.
///
/// # Safety
/// `buf` must be a valid, non-null pointer to at least `cap` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn amlich_year_can_chi(
    year: i32,
    buf: *mut u8,
    cap: usize,
) -> AmlichStatus {
    ffi_boundary(|| {
        // SAFETY: Forwarded to write_c_utf8, which checks the pointer and
        // stays within cap bytes.
        unsafe { write_c_utf8(&year_can_chi(year), buf, cap) }
    })
}

/// Write the Can Chi name of a lunar day.
///
/// A `jd` of 0 yields the `"Invalid Day"` marker, as in the library API.
///
/// # Safety
/// `lunar` must be valid and non-null; `buf` must be a valid, non-null
/// pointer to at least `cap` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn amlich_day_can_chi(
    lunar: *const AmlichLunarDate,
    buf: *mut u8,
    cap: usize,
) -> AmlichStatus {
    ffi_boundary(|| {
        if lunar.is_null() {
            return AmlichStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null and only borrowed for this call.
        let lunar_ref = unsafe { &*lunar };
        match LunarDate::try_from(lunar_ref) {
            // SAFETY: Forwarded to write_c_utf8, which checks the pointer
            // and stays within cap bytes.
            Ok(date) => unsafe { write_c_utf8(&day_can_chi(&date), buf, cap) },
            Err(status) => status,
        }
    })
}

/// Write the Can Chi name of a lunar month, intercalary repeats marked.
///
/// # Safety
/// `lunar` must be valid and non-null; `buf` must be a valid, non-null
/// pointer to at least `cap` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn amlich_month_can_chi(
    lunar: *const AmlichLunarDate,
    buf: *mut u8,
    cap: usize,
) -> AmlichStatus {
    ffi_boundary(|| {
        if lunar.is_null() {
            return AmlichStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null and only borrowed for this call.
        let lunar_ref = unsafe { &*lunar };
        match LunarDate::try_from(lunar_ref) {
            // SAFETY: Forwarded to write_c_utf8, which checks the pointer
            // and stays within cap bytes.
            Ok(date) => unsafe { write_c_utf8(&month_can_chi(&date), buf, cap) },
            Err(status) => status,
        }
    })
}

/// Write the solar-term name in effect on the civil day of `jd`.
///
/// # Safety
/// `buf` must be a valid, non-null pointer to at least `cap` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn amlich_tiet_khi(jd: i64, buf: *mut u8, cap: usize) -> AmlichStatus {
    ffi_boundary(|| {
        // SAFETY: Forwarded to write_c_utf8, which checks the pointer and
        // stays within cap bytes.
        unsafe { write_c_utf8(tiet_khi_for_jdn(jd).name(), buf, cap) }
    })
}

fn ffi_boundary(f: impl FnOnce() -> AmlichStatus) -> AmlichStatus {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(status) => status,
        Err(_) => AmlichStatus::Internal,
    }
}

/// Write `input` as NUL-terminated UTF-8 into a caller buffer.
///
/// # Safety
/// `buf` must point to at least `cap` writable bytes when non-null.
unsafe fn write_c_utf8(input: &str, buf: *mut u8, cap: usize) -> AmlichStatus {
    if buf.is_null() {
        return AmlichStatus::NullPointer;
    }
    let bytes = input.as_bytes();
    if bytes.len() + 1 > cap {
        return AmlichStatus::BufferTooSmall;
    }
    // SAFETY: The caller guarantees cap writable bytes and we stay within
    // bytes.len() + 1 <= cap.
    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf, bytes.len());
        *buf.add(bytes.len()) = 0;
    }
    AmlichStatus::Ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_conversion_ok() {
        let (lunar, status) = amlich_lunar_date_internal(5, 2, 2000);
        assert_eq!(status, AmlichStatus::Ok);
        assert_eq!((lunar.day, lunar.month, lunar.year), (1, 1, 2000));
        assert_eq!(lunar.leap, 0);
    }

    #[test]
    fn internal_conversion_out_of_range() {
        let (lunar, status) = amlich_lunar_date_internal(1, 1, 2200);
        assert_eq!(status, AmlichStatus::OutOfRange);
        assert_eq!(lunar.year, 0);
        assert_ne!(lunar.jd, 0);
    }

    #[test]
    fn struct_round_trip() {
        let date = LunarDate {
            day: 10,
            month: 6,
            year: 2017,
            leap: true,
            jd: 2_457_967,
        };
        let c = AmlichLunarDate::from(date);
        assert_eq!(LunarDate::try_from(&c), Ok(date));
    }

    #[test]
    fn negative_fields_rejected() {
        let c = AmlichLunarDate {
            day: -1,
            month: 1,
            year: 2000,
            leap: 0,
            jd: 2_451_580,
        };
        assert_eq!(LunarDate::try_from(&c), Err(AmlichStatus::InvalidDate));
    }
}
