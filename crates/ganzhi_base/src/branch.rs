//! Earthly branches (dizhi), the 12-term half of the sexagenary cycle.
//!
//! Branch relations used across the engine:
//! - Triad (三合): branches whose indices agree modulo 4.
//! - Pair (六合): index sum ≡ 1 (mod 12).
//! - Clash (六冲): indices 6 apart.
//! - Harm (六害): index sum ≡ 7 (mod 12).

use crate::element::Element;
use crate::stem::Polarity;
use crate::zodiac::{ALL_ZODIACS, Zodiac};

/// The 12 earthly branches starting from Zi (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// Number of branches in the cycle.
pub const BRANCH_COUNT: i64 = 12;

/// The four triad groups (三合局), keyed by `index % 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Triad {
    /// 申子辰
    Water,
    /// 巳酉丑
    Metal,
    /// 寅午戌
    Fire,
    /// 亥卯未
    Wood,
}

impl Branch {
    /// Chinese character of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin romanisation.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at any integer position, reduced modulo 12.
    pub fn from_index(n: i64) -> Branch {
        ALL_BRANCHES[n.rem_euclid(BRANCH_COUNT) as usize]
    }

    /// Look up a branch by its Chinese character or pinyin (case-insensitive).
    pub fn from_name(s: &str) -> Option<Branch> {
        ALL_BRANCHES
            .into_iter()
            .find(|b| b.name() == s || b.pinyin().eq_ignore_ascii_case(s))
    }

    /// Element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// Yang for even indices, Yin for odd.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Zodiac animal sharing this branch's position.
    pub const fn zodiac(self) -> Zodiac {
        ALL_ZODIACS[self.index() as usize]
    }

    /// The diametrically opposite branch (六冲).
    pub fn opposite(self) -> Branch {
        Self::from_index(self.index() as i64 + 6)
    }

    /// The branch forming a pair (六合) with this one.
    pub fn pair(self) -> Branch {
        Self::from_index(13 - self.index() as i64)
    }

    /// Triad group (三合局) this branch belongs to.
    pub const fn triad(self) -> Triad {
        match self.index() % 4 {
            0 => Triad::Water,
            1 => Triad::Metal,
            2 => Triad::Fire,
            _ => Triad::Wood,
        }
    }

    /// True when both branches belong to the same triad (includes `self == other`).
    pub const fn is_triad_with(self, other: Branch) -> bool {
        self.index() % 4 == other.index() % 4
    }

    /// True for the six pairs 子丑 寅亥 卯戌 辰酉 巳申 午未.
    pub const fn is_pair_with(self, other: Branch) -> bool {
        (self.index() + other.index()) % 12 == 1
    }

    /// True when the branches are 6 apart.
    pub const fn clashes_with(self, other: Branch) -> bool {
        (self.index() + 6) % 12 == other.index()
    }

    /// True for the six harms 子未 丑午 寅巳 卯辰 申亥 酉戌.
    pub const fn harms(self, other: Branch) -> bool {
        (self.index() + other.index()) % 12 == 7
    }
}

impl Triad {
    /// The triad's three members, in cycle order.
    pub fn members(self) -> [Branch; 3] {
        let start = match self {
            Self::Water => 0,
            Self::Metal => 1,
            Self::Fire => 2,
            Self::Wood => 3,
        };
        [
            Branch::from_index(start),
            Branch::from_index(start + 4),
            Branch::from_index(start + 8),
        ]
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
