//! Exercises the exported C ABI the way a C caller would.

use std::ffi::CStr;
use std::ptr;

use amlich_ffi_c::{
    AMLICH_API_VERSION, AMLICH_LABEL_CAPACITY, AmlichLunarDate, AmlichStatus, amlich_api_version,
    amlich_day_can_chi, amlich_lunar_date, amlich_month_can_chi, amlich_tiet_khi,
    amlich_year_can_chi,
};

fn read_label(buf: &[u8]) -> &str {
    CStr::from_bytes_until_nul(buf).unwrap().to_str().unwrap()
}

#[test]
fn api_version_is_stable() {
    assert_eq!(amlich_api_version(), AMLICH_API_VERSION);
}

#[test]
fn lunar_date_through_the_abi() {
    let mut out = AmlichLunarDate {
        day: 0,
        month: 0,
        year: 0,
        leap: 0,
        jd: 0,
    };
    let status = unsafe { amlich_lunar_date(2, 9, 1945, &mut out) };
    assert_eq!(status, AmlichStatus::Ok);
    assert_eq!((out.day, out.month, out.year, out.leap), (26, 7, 1945, 0));
}

#[test]
fn out_of_range_writes_sentinel() {
    let mut out = AmlichLunarDate {
        day: 9,
        month: 9,
        year: 9,
        leap: 1,
        jd: 9,
    };
    let status = unsafe { amlich_lunar_date(1, 1, 2200, &mut out) };
    assert_eq!(status, AmlichStatus::OutOfRange);
    assert_eq!((out.day, out.month, out.year), (0, 0, 0));
    assert_ne!(out.jd, 0);
}

#[test]
fn null_out_pointer() {
    let status = unsafe { amlich_lunar_date(1, 1, 2000, ptr::null_mut()) };
    assert_eq!(status, AmlichStatus::NullPointer);
}

#[test]
fn year_label_through_the_abi() {
    let mut buf = [0_u8; AMLICH_LABEL_CAPACITY];
    let status = unsafe { amlich_year_can_chi(1984, buf.as_mut_ptr(), buf.len()) };
    assert_eq!(status, AmlichStatus::Ok);
    assert_eq!(read_label(&buf), "Giáp Tý");
}

#[test]
fn day_and_month_labels_through_the_abi() {
    let mut lunar = AmlichLunarDate {
        day: 0,
        month: 0,
        year: 0,
        leap: 0,
        jd: 0,
    };
    let status = unsafe { amlich_lunar_date(5, 2, 2000, &mut lunar) };
    assert_eq!(status, AmlichStatus::Ok);

    let mut buf = [0_u8; AMLICH_LABEL_CAPACITY];
    let status = unsafe { amlich_month_can_chi(&lunar, buf.as_mut_ptr(), buf.len()) };
    assert_eq!(status, AmlichStatus::Ok);
    assert_eq!(read_label(&buf), "Mậu Dần");

    let status = unsafe { amlich_day_can_chi(&lunar, buf.as_mut_ptr(), buf.len()) };
    assert_eq!(status, AmlichStatus::Ok);
    assert!(!read_label(&buf).is_empty());
}

#[test]
fn invalid_day_marker_through_the_abi() {
    let lunar = AmlichLunarDate {
        day: 0,
        month: 0,
        year: 0,
        leap: 0,
        jd: 0,
    };
    let mut buf = [0_u8; AMLICH_LABEL_CAPACITY];
    let status = unsafe { amlich_day_can_chi(&lunar, buf.as_mut_ptr(), buf.len()) };
    assert_eq!(status, AmlichStatus::Ok);
    assert_eq!(read_label(&buf), "Invalid Day");
}

#[test]
fn tiet_khi_through_the_abi() {
    let mut buf = [0_u8; AMLICH_LABEL_CAPACITY];
    // 25 Dec 2000, JDN 2451904: winter solstice term
    let status = unsafe { amlich_tiet_khi(2_451_904, buf.as_mut_ptr(), buf.len()) };
    assert_eq!(status, AmlichStatus::Ok);
    assert_eq!(read_label(&buf), "Đông chí");
}

#[test]
fn buffer_too_small() {
    let mut buf = [0_u8; 4];
    let status = unsafe { amlich_year_can_chi(1984, buf.as_mut_ptr(), buf.len()) };
    assert_eq!(status, AmlichStatus::BufferTooSmall);
}
