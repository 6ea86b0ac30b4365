//! The sexagenary (Can Chi) cycle: 10 Heavenly Stems × 12 Earthly Branches.
//!
//! Stems and branches each cycle independently; their pairing repeats
//! every 60 steps. Years, lunar months and days all carry a Can Chi name,
//! each derived from a different fixed offset into the cycles.

use amlich_core::LunarDate;

/// The 10 Heavenly Stems (Thiên Can).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Can {
    Giap,
    At,
    Binh,
    Dinh,
    Mau,
    Ky,
    Canh,
    Tan,
    Nham,
    Quy,
}

/// All 10 stems in cycle order (index 0 = Giáp).
pub const ALL_CAN: [Can; 10] = [
    Can::Giap,
    Can::At,
    Can::Binh,
    Can::Dinh,
    Can::Mau,
    Can::Ky,
    Can::Canh,
    Can::Tan,
    Can::Nham,
    Can::Quy,
];

impl Can {
    /// Vietnamese name of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Giap => "Giáp",
            Self::At => "Ất",
            Self::Binh => "Bính",
            Self::Dinh => "Đinh",
            Self::Mau => "Mậu",
            Self::Ky => "Kỷ",
            Self::Canh => "Canh",
            Self::Tan => "Tân",
            Self::Nham => "Nhâm",
            Self::Quy => "Quý",
        }
    }

    /// 0-based index (Giáp=0 .. Quý=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Giap => 0,
            Self::At => 1,
            Self::Binh => 2,
            Self::Dinh => 3,
            Self::Mau => 4,
            Self::Ky => 5,
            Self::Canh => 6,
            Self::Tan => 7,
            Self::Nham => 8,
            Self::Quy => 9,
        }
    }

    /// Stem at a position of the 10-cycle; negative positions wrap.
    pub fn from_cycle(position: i64) -> Self {
        ALL_CAN[position.rem_euclid(10) as usize]
    }
}

/// The 12 Earthly Branches (Địa Chi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chi {
    Ty,
    Suu,
    Dan,
    Mao,
    Thin,
    Ti,
    Ngo,
    Mui,
    Than,
    Dau,
    Tuat,
    Hoi,
}

/// All 12 branches in cycle order (index 0 = Tý).
pub const ALL_CHI: [Chi; 12] = [
    Chi::Ty,
    Chi::Suu,
    Chi::Dan,
    Chi::Mao,
    Chi::Thin,
    Chi::Ti,
    Chi::Ngo,
    Chi::Mui,
    Chi::Than,
    Chi::Dau,
    Chi::Tuat,
    Chi::Hoi,
];

impl Chi {
    /// Vietnamese name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ty => "Tý",
            Self::Suu => "Sửu",
            Self::Dan => "Dần",
            Self::Mao => "Mão",
            Self::Thin => "Thìn",
            Self::Ti => "Tỵ",
            Self::Ngo => "Ngọ",
            Self::Mui => "Mùi",
            Self::Than => "Thân",
            Self::Dau => "Dậu",
            Self::Tuat => "Tuất",
            Self::Hoi => "Hợi",
        }
    }

    /// 0-based index (Tý=0 .. Hợi=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ty => 0,
            Self::Suu => 1,
            Self::Dan => 2,
            Self::Mao => 3,
            Self::Thin => 4,
            Self::Ti => 5,
            Self::Ngo => 6,
            Self::Mui => 7,
            Self::Than => 8,
            Self::Dau => 9,
            Self::Tuat => 10,
            Self::Hoi => 11,
        }
    }

    /// Branch at a position of the 12-cycle; negative positions wrap.
    pub fn from_cycle(position: i64) -> Self {
        ALL_CHI[position.rem_euclid(12) as usize]
    }
}

/// Can Chi name of a Gregorian year, e.g. `"Giáp Tý"` for 1984.
pub fn year_can_chi(year: i32) -> String {
    let year = i64::from(year);
    format!(
        "{} {}",
        Can::from_cycle(year + 6).name(),
        Chi::from_cycle(year + 8).name()
    )
}

/// Can Chi name of a lunar day, keyed by its Julian Day Number.
///
/// A `jd` of 0 marks an invalid date and yields `"Invalid Day"` instead of
/// a garbage cycle name.
pub fn day_can_chi(lunar: &LunarDate) -> String {
    if lunar.jd == 0 {
        return "Invalid Day".to_string();
    }
    format!(
        "{} {}",
        Can::from_cycle(lunar.jd + 9).name(),
        Chi::from_cycle(lunar.jd + 1).name()
    )
}

/// Can Chi name of a lunar month; the intercalary repeat is marked.
pub fn month_can_chi(lunar: &LunarDate) -> String {
    let position = i64::from(lunar.year) * 12 + i64::from(lunar.month) + 3;
    let mut name = format!(
        "{} {}",
        Can::from_cycle(position).name(),
        Chi::from_cycle(i64::from(lunar.month) + 1).name()
    );
    if lunar.leap {
        name.push_str(" (intercalary)");
    }
    name
}
