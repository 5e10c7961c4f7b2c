//! Types for daily almanac results.

use chrono::NaiveDate;
use ganzhi_base::{Branch, Pillar, Zodiac};

/// Cardinal direction of the day's taboo (煞方).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    pub const fn name(self) -> &'static str {
        match self {
            Self::East => "东",
            Self::South => "南",
            Self::West => "西",
            Self::North => "北",
        }
    }
}

/// Day spirits referenced by the almanac.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deity {
    // Special-day virtues
    TianDe,
    YueDe,
    // Everyday auspicious spirits
    TianEn,
    MuCang,
    ShiDe,
    MinRi,
    TianMa,
    YiHou,
    XuShi,
    FuSheng,
    // Black-path spirits
    TianXing,
    ZhuQue,
    BaiHu,
    TianLao,
    XuanWu,
    GouChen,
}

impl Deity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::TianDe => "天德",
            Self::YueDe => "月德",
            Self::TianEn => "天恩",
            Self::MuCang => "母仓",
            Self::ShiDe => "时德",
            Self::MinRi => "民日",
            Self::TianMa => "天马",
            Self::YiHou => "益后",
            Self::XuShi => "续世",
            Self::FuSheng => "福生",
            Self::TianXing => "天刑",
            Self::ZhuQue => "朱雀",
            Self::BaiHu => "白虎",
            Self::TianLao => "天牢",
            Self::XuanWu => "玄武",
            Self::GouChen => "勾陈",
        }
    }

    pub const fn is_auspicious(self) -> bool {
        !matches!(
            self,
            Self::TianXing
                | Self::ZhuQue
                | Self::BaiHu
                | Self::TianLao
                | Self::XuanWu
                | Self::GouChen
        )
    }
}

/// Activities listed under 宜 / 忌.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Marriage,
    Sacrifice,
    Travel,
    Groundbreaking,
    OpenBusiness,
    Trade,
    MoveIn,
    PlaceBed,
    Repair,
    Planting,
    CollectWealth,
    SeekDoctor,
}

/// All activities, in almanac order.
pub const ALL_ACTIVITIES: [Activity; 12] = [
    Activity::Marriage,
    Activity::Sacrifice,
    Activity::Travel,
    Activity::Groundbreaking,
    Activity::OpenBusiness,
    Activity::Trade,
    Activity::MoveIn,
    Activity::PlaceBed,
    Activity::Repair,
    Activity::Planting,
    Activity::CollectWealth,
    Activity::SeekDoctor,
];

impl Activity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Marriage => "嫁娶",
            Self::Sacrifice => "祭祀",
            Self::Travel => "出行",
            Self::Groundbreaking => "动土",
            Self::OpenBusiness => "开市",
            Self::Trade => "交易",
            Self::MoveIn => "入宅",
            Self::PlaceBed => "安床",
            Self::Repair => "修造",
            Self::Planting => "栽种",
            Self::CollectWealth => "纳财",
            Self::SeekDoctor => "求医",
        }
    }
}

/// Fortune of one double-hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HourFortune {
    pub pillar: Pillar,
    pub auspicious: bool,
}

impl HourFortune {
    pub fn branch(&self) -> Branch {
        self.pillar.branch
    }
}

/// Everything the almanac says about one calendar day.
///
/// For a fixed date every field is fixed; repeated computation yields an
/// equal record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DailyDivinationRecord {
    pub date: NaiveDate,
    /// Epoch-based day pillar (not the chart day pillar).
    pub day_pillar: Pillar,
    /// Zodiac sign clashed by the day branch (冲).
    pub clash: Zodiac,
    /// Taboo direction (煞).
    pub taboo_direction: Direction,
    pub auspicious_deities: Vec<Deity>,
    pub inauspicious_deity: Deity,
    /// 宜
    pub suitable: Vec<Activity>,
    /// 忌
    pub avoid: Vec<Activity>,
    /// Overall luck, 60..=99.
    pub luck_score: u8,
    /// Twelve double-hours from 子 to 亥.
    pub hours: [HourFortune; 12],
}
