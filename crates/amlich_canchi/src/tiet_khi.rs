//! The 24 solar terms (Tiết Khí) of the Vietnamese calendar.

use amlich_time::{INDOCHINA_TZ_HOURS, solar_term_index};

/// The 24 solar terms, index 0 at ecliptic longitude 0 (March equinox),
/// one term per 15 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TietKhi {
    XuanPhan,
    ThanhMinh,
    CocVu,
    LapHa,
    TieuMan,
    MangChung,
    HaChi,
    TieuThu,
    DaiThu,
    LapThu,
    XuThu,
    BachLo,
    ThuPhan,
    HanLo,
    SuongGiang,
    LapDong,
    TieuTuyet,
    DaiTuyet,
    DongChi,
    TieuHan,
    DaiHan,
    LapXuan,
    VuThuy,
    KinhTrap,
}

/// All 24 terms in longitude order (index 0 = Xuân phân).
pub const ALL_TIET_KHI: [TietKhi; 24] = [
    TietKhi::XuanPhan,
    TietKhi::ThanhMinh,
    TietKhi::CocVu,
    TietKhi::LapHa,
    TietKhi::TieuMan,
    TietKhi::MangChung,
    TietKhi::HaChi,
    TietKhi::TieuThu,
    TietKhi::DaiThu,
    TietKhi::LapThu,
    TietKhi::XuThu,
    TietKhi::BachLo,
    TietKhi::ThuPhan,
    TietKhi::HanLo,
    TietKhi::SuongGiang,
    TietKhi::LapDong,
    TietKhi::TieuTuyet,
    TietKhi::DaiTuyet,
    TietKhi::DongChi,
    TietKhi::TieuHan,
    TietKhi::DaiHan,
    TietKhi::LapXuan,
    TietKhi::VuThuy,
    TietKhi::KinhTrap,
];

impl TietKhi {
    /// Vietnamese name of the solar term.
    pub const fn name(self) -> &'static str {
        match self {
            Self::XuanPhan => "Xuân phân",
            Self::ThanhMinh => "Thanh minh",
            Self::CocVu => "Cốc vũ",
            Self::LapHa => "Lập hạ",
            Self::TieuMan => "Tiểu mãn",
            Self::MangChung => "Mang chủng",
            Self::HaChi => "Hạ chí",
            Self::TieuThu => "Tiểu thử",
            Self::DaiThu => "Đại thử",
            Self::LapThu => "Lập thu",
            Self::XuThu => "Xử thử",
            Self::BachLo => "Bạch lộ",
            Self::ThuPhan => "Thu phân",
            Self::HanLo => "Hàn lộ",
            Self::SuongGiang => "Sương giáng",
            Self::LapDong => "Lập đông",
            Self::TieuTuyet => "Tiểu tuyết",
            Self::DaiTuyet => "Đại tuyết",
            Self::DongChi => "Đông chí",
            Self::TieuHan => "Tiểu hàn",
            Self::DaiHan => "Đại hàn",
            Self::LapXuan => "Lập xuân",
            Self::VuThuy => "Vũ Thủy",
            Self::KinhTrap => "Kinh trập",
        }
    }

    /// 0-based index (Xuân phân=0 .. Kinh trập=23).
    pub const fn index(self) -> u8 {
        match self {
            Self::XuanPhan => 0,
            Self::ThanhMinh => 1,
            Self::CocVu => 2,
            Self::LapHa => 3,
            Self::TieuMan => 4,
            Self::MangChung => 5,
            Self::HaChi => 6,
            Self::TieuThu => 7,
            Self::DaiThu => 8,
            Self::LapThu => 9,
            Self::XuThu => 10,
            Self::BachLo => 11,
            Self::ThuPhan => 12,
            Self::HanLo => 13,
            Self::SuongGiang => 14,
            Self::LapDong => 15,
            Self::TieuTuyet => 16,
            Self::DaiTuyet => 17,
            Self::DongChi => 18,
            Self::TieuHan => 19,
            Self::DaiHan => 20,
            Self::LapXuan => 21,
            Self::VuThuy => 22,
            Self::KinhTrap => 23,
        }
    }
}

/// Solar term in effect on the civil day of a Julian Day Number, in the
/// calendar's fixed UTC+7 zone.
pub fn tiet_khi_for_jdn(jdn: i64) -> TietKhi {
    ALL_TIET_KHI[solar_term_index(jdn + 1, INDOCHINA_TZ_HOURS)]
}
