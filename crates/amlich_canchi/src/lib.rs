//! Can Chi (Stem-Branch) and Tiết Khí (solar term) labels.
//!
//! This crate provides:
//! - The 10 Heavenly Stems ([`Can`]), 12 Earthly Branches ([`Chi`]) and
//!   24 solar terms ([`TietKhi`]) with their fixed Vietnamese names
//! - Stem-Branch derivation for years, lunar months and days
//! - Solar-term lookup for a Julian Day Number
//!
//! The cycle arithmetic uses `rem_euclid` throughout, so any `i64` input
//! (including the sentinel values of an invalid
//! [`LunarDate`](amlich_core::LunarDate)) indexes the tables without
//! panicking.

pub mod can_chi;
pub mod tiet_khi;

pub use can_chi::{
    ALL_CAN, ALL_CHI, Can, Chi, day_can_chi, month_can_chi, year_can_chi,
};
pub use tiet_khi::{ALL_TIET_KHI, TietKhi, tiet_khi_for_jdn};
