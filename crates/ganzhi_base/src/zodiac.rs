//! Zodiac animals (shengxiao), positionally aligned with the earthly branches.

use crate::branch::Branch;

/// The 12 zodiac animals starting from Rat (鼠).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 zodiac animals in branch order (0 = Rat).
pub const ALL_ZODIACS: [Zodiac; 12] = [
    Zodiac::Rat,
    Zodiac::Ox,
    Zodiac::Tiger,
    Zodiac::Rabbit,
    Zodiac::Dragon,
    Zodiac::Snake,
    Zodiac::Horse,
    Zodiac::Goat,
    Zodiac::Monkey,
    Zodiac::Rooster,
    Zodiac::Dog,
    Zodiac::Pig,
];

impl Zodiac {
    /// Chinese character of the animal.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "鼠",
            Self::Ox => "牛",
            Self::Tiger => "虎",
            Self::Rabbit => "兔",
            Self::Dragon => "龙",
            Self::Snake => "蛇",
            Self::Horse => "马",
            Self::Goat => "羊",
            Self::Monkey => "猴",
            Self::Rooster => "鸡",
            Self::Dog => "狗",
            Self::Pig => "猪",
        }
    }

    /// English name of the animal.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    /// 0-based index, equal to the aligned branch index.
    pub const fn index(self) -> u8 {
        match self {
            Self::Rat => 0,
            Self::Ox => 1,
            Self::Tiger => 2,
            Self::Rabbit => 3,
            Self::Dragon => 4,
            Self::Snake => 5,
            Self::Horse => 6,
            Self::Goat => 7,
            Self::Monkey => 8,
            Self::Rooster => 9,
            Self::Dog => 10,
            Self::Pig => 11,
        }
    }

    /// The branch sharing this animal's position.
    pub fn branch(self) -> Branch {
        Branch::from_index(self.index() as i64)
    }

    /// Look up an animal by Chinese character or English name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Zodiac> {
        ALL_ZODIACS
            .into_iter()
            .find(|z| z.name() == s || z.english_name().eq_ignore_ascii_case(s))
    }
}

/// Zodiac animal of a Gregorian year: `branches[(year - 4) mod 12]`.
pub fn zodiac_for_year(year: i32) -> Zodiac {
    ALL_ZODIACS[(year as i64 - 4).rem_euclid(12) as usize]
}

impl std::fmt::Display for Zodiac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
