//! Zodiac pair compatibility.
//!
//! Score = 70, then +25 for a shared triad, +20 for a pair, -20 for a clash,
//! -10 for a harm, clamped to [60, 99]. The relations are mutually exclusive,
//! and everything here depends only on the unordered pair of signs.

use crate::seeded::{deterministic_int, pair_seed};
use crate::zodiac::Zodiac;

/// Score before relation adjustments.
pub const BASE_SCORE: i32 = 70;
/// Lowest reported score.
pub const MIN_SCORE: u8 = 60;
/// Highest reported score.
pub const MAX_SCORE: u8 = 99;

/// Branch relation between two signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Same triad group (三合), including identical signs.
    Triad,
    /// Paired affinity (六合).
    Pair,
    /// Diametric opposition (六冲).
    Clash,
    /// Harm (六害).
    Harm,
    Neutral,
}

impl Relation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Triad => "三合",
            Self::Pair => "六合",
            Self::Clash => "六冲",
            Self::Harm => "六害",
            Self::Neutral => "平",
        }
    }

    /// Score adjustment applied to the base.
    pub const fn adjustment(self) -> i32 {
        match self {
            Self::Triad => 25,
            Self::Pair => 20,
            Self::Clash => -20,
            Self::Harm => -10,
            Self::Neutral => 0,
        }
    }
}

/// Qualitative band of a compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Challenging,
    Fair,
    Good,
    Excellent,
}

impl Tier {
    pub const fn from_score(score: u8) -> Tier {
        match score {
            90.. => Self::Excellent,
            80..=89 => Self::Good,
            70..=79 => Self::Fair,
            _ => Self::Challenging,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "天作之合",
            Self::Good => "相合",
            Self::Fair => "尚可",
            Self::Challenging => "需磨合",
        }
    }
}

/// Per-aspect scores, each in [50, 99].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubScores {
    pub emotion: u8,
    pub communication: u8,
    pub family: u8,
}

/// Full compatibility result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompatibilityResult {
    pub score: u8,
    pub relation: Relation,
    pub tier: Tier,
    pub sub_scores: SubScores,
}

/// Relation between two signs (symmetric).
pub fn relation(a: Zodiac, b: Zodiac) -> Relation {
    let (ba, bb) = (a.branch(), b.branch());
    if ba.is_triad_with(bb) {
        Relation::Triad
    } else if ba.is_pair_with(bb) {
        Relation::Pair
    } else if ba.clashes_with(bb) {
        Relation::Clash
    } else if ba.harms(bb) {
        Relation::Harm
    } else {
        Relation::Neutral
    }
}

/// Compatibility score in [60, 99]; `zodiac_score(a, b) == zodiac_score(b, a)`.
pub fn zodiac_score(a: Zodiac, b: Zodiac) -> u8 {
    let raw = BASE_SCORE + relation(a, b).adjustment();
    raw.clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u8
}

/// Score, relation, tier and sub-scores for a pair of signs.
pub fn compatibility(a: Zodiac, b: Zodiac) -> CompatibilityResult {
    let score = zodiac_score(a, b);
    let seed = pair_seed(a.index(), b.index());
    let sub = |k: i64| {
        let jitter = deterministic_int(seed * 3 + k, -10, 10);
        (score as i64 + jitter).clamp(50, 99) as u8
    };
    CompatibilityResult {
        score,
        relation: relation(a, b),
        tier: Tier::from_score(score),
        sub_scores: SubScores {
            emotion: sub(0),
            communication: sub(1),
            family: sub(2),
        },
    }
}
