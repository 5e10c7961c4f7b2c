//! Daily almanac: day pillar, clash, taboo direction, day spirits, and
//! seeded activity / hour fortunes.
//!
//! The day pillar here counts days from a known 甲子 day, which is the
//! calendrically faithful rule. It is independent of the simplified chart
//! day pillar in `ganzhi_base::pillar`.

use chrono::{Datelike, NaiveDate};
use ganzhi_base::{
    Branch, Pillar, Stem, Triad, Zodiac, date_seed, deterministic_int, deterministic_slice,
    hour_pillar, seeded_random,
};

use crate::almanac_types::{
    ALL_ACTIVITIES, DailyDivinationRecord, Deity, Direction, HourFortune,
};

/// 2000-01-07 is a 甲子 day.
pub const JIAZI_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 7) {
    Some(date) => date,
    None => panic!("2000-01-07 is a valid date"),
};

/// Number of activities listed under each of 宜 and 忌.
pub const ACTIVITIES_PER_LIST: usize = 4;

/// Seeded values below this make an hour inauspicious.
const HOUR_LUCK_CUTOFF: f64 = 0.4;

const FALLBACK_DEITIES: [Deity; 8] = [
    Deity::TianEn,
    Deity::MuCang,
    Deity::ShiDe,
    Deity::MinRi,
    Deity::TianMa,
    Deity::YiHou,
    Deity::XuShi,
    Deity::FuSheng,
];

const BLACK_PATH: [Deity; 6] = [
    Deity::TianXing,
    Deity::ZhuQue,
    Deity::BaiHu,
    Deity::TianLao,
    Deity::XuanWu,
    Deity::GouChen,
];

fn days_since_epoch(date: NaiveDate) -> i64 {
    (date - JIAZI_EPOCH).num_days()
}

/// Day pillar by day count from the 甲子 epoch.
pub fn almanac_day_pillar(date: NaiveDate) -> Pillar {
    Pillar::from_cycle_index(days_since_epoch(date))
}

/// Sign clashed by the day: the animal of the opposite branch.
pub fn clash_sign(day_branch: Branch) -> Zodiac {
    day_branch.opposite().zodiac()
}

/// Taboo direction by triad: 申子辰 south, 寅午戌 north, 巳酉丑 east, 亥卯未 west.
pub const fn taboo_direction(day_branch: Branch) -> Direction {
    match day_branch.triad() {
        Triad::Water => Direction::South,
        Triad::Fire => Direction::North,
        Triad::Metal => Direction::East,
        Triad::Wood => Direction::West,
    }
}

/// 天德 stem for a month, where the virtue falls on a stem.
const fn tian_de_stem(month: u32) -> Option<Stem> {
    match month {
        1 => Some(Stem::Ding),
        3 => Some(Stem::Ren),
        4 => Some(Stem::Xin),
        6 => Some(Stem::Jia),
        7 => Some(Stem::Gui),
        9 => Some(Stem::Bing),
        10 => Some(Stem::Yi),
        12 => Some(Stem::Geng),
        _ => None,
    }
}

/// 月德 stem, by the triad of the month branch (month 1 = 寅).
fn yue_de_stem(month: u32) -> Stem {
    match Branch::from_index(month as i64 + 1).triad() {
        Triad::Fire => Stem::Bing,
        Triad::Water => Stem::Ren,
        Triad::Wood => Stem::Jia,
        Triad::Metal => Stem::Geng,
    }
}

/// Auspicious spirits for a (month, day stem).
///
/// Special days yield 天德 and/or 月德; other days take two consecutive
/// entries of the everyday list starting at `(stem + month) mod 8`.
pub fn auspicious_deities(month: u32, day_stem: Stem) -> Vec<Deity> {
    let mut out = Vec::with_capacity(2);
    if tian_de_stem(month) == Some(day_stem) {
        out.push(Deity::TianDe);
    }
    if yue_de_stem(month) == day_stem {
        out.push(Deity::YueDe);
    }
    if out.is_empty() {
        let len = FALLBACK_DEITIES.len();
        let start = (day_stem.index() as usize + month as usize) % len;
        out.push(FALLBACK_DEITIES[start]);
        out.push(FALLBACK_DEITIES[(start + 1) % len]);
    }
    out
}

/// Black-path spirit for the day branch (`branch mod 6`).
pub fn inauspicious_deity(day_branch: Branch) -> Deity {
    BLACK_PATH[day_branch.index() as usize % BLACK_PATH.len()]
}

fn hour_fortunes(day_pillar: Pillar, seed: i64) -> [HourFortune; 12] {
    std::array::from_fn(|i| {
        let pillar = hour_pillar(day_pillar.stem, (i * 2) as u32);
        let auspicious = !pillar.branch.clashes_with(day_pillar.branch)
            && seeded_random(seed * 100 + i as i64) >= HOUR_LUCK_CUTOFF;
        HourFortune { pillar, auspicious }
    })
}

/// Compute the almanac record for a date. Pure; the cache in
/// [`crate::cache`] only avoids recomputation.
pub fn daily_divination(date: NaiveDate) -> DailyDivinationRecord {
    let day_pillar = almanac_day_pillar(date);
    let seed = date_seed(date.year(), date.month(), date.day());

    let mut shuffled = deterministic_slice(&ALL_ACTIVITIES, ACTIVITIES_PER_LIST * 2, seed);
    let avoid = shuffled.split_off(ACTIVITIES_PER_LIST);

    DailyDivinationRecord {
        date,
        day_pillar,
        clash: clash_sign(day_pillar.branch),
        taboo_direction: taboo_direction(day_pillar.branch),
        auspicious_deities: auspicious_deities(date.month(), day_pillar.stem),
        inauspicious_deity: inauspicious_deity(day_pillar.branch),
        suitable: shuffled,
        avoid,
        luck_score: deterministic_int(seed, 60, 99) as u8,
        hours: hour_fortunes(day_pillar, seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_is_jiazi() {
        assert_eq!(JIAZI_EPOCH, ymd(2000, 1, 7));
        assert_eq!(days_since_epoch(JIAZI_EPOCH), 0);
        assert_eq!(days_since_epoch(ymd(2000, 1, 1)), -6);
        assert_eq!(almanac_day_pillar(ymd(2000, 1, 7)).name(), "甲子");
        assert_eq!(almanac_day_pillar(ymd(2000, 1, 6)).name(), "癸亥");
    }

    #[test]
    fn known_day_pillars() {
        assert_eq!(almanac_day_pillar(ymd(2000, 1, 1)).name(), "戊午");
        assert_eq!(almanac_day_pillar(ymd(2024, 2, 10)).name(), "甲辰");
    }

    #[test]
    fn consecutive_days_advance_by_one() {
        let a = almanac_day_pillar(ymd(2025, 3, 1)).cycle_index();
        let b = almanac_day_pillar(ymd(2025, 3, 2)).cycle_index();
        assert_eq!((a + 1) % 60, b);
    }

    #[test]
    fn clash_and_taboo_for_chen_day() {
        assert_eq!(clash_sign(Branch::Chen), Zodiac::Dog);
        assert_eq!(taboo_direction(Branch::Chen), Direction::South);
        assert_eq!(taboo_direction(Branch::Wu), Direction::North);
        assert_eq!(taboo_direction(Branch::You), Direction::East);
        assert_eq!(taboo_direction(Branch::Mao), Direction::West);
    }

    #[test]
    fn each_direction_has_three_branches() {
        for dir in [Direction::East, Direction::South, Direction::West, Direction::North] {
            let n = ganzhi_base::ALL_BRANCHES
                .iter()
                .filter(|&&b| taboo_direction(b) == dir)
                .count();
            assert_eq!(n, 3, "{dir:?}");
        }
    }

    #[test]
    fn special_day_deities() {
        // Month 1: 天德 丁, 月德 丙
        assert_eq!(auspicious_deities(1, Stem::Ding), vec![Deity::TianDe]);
        assert_eq!(auspicious_deities(1, Stem::Bing), vec![Deity::YueDe]);
        // Month 3: 天德 壬 and 月德 壬 coincide
        assert_eq!(
            auspicious_deities(3, Stem::Ren),
            vec![Deity::TianDe, Deity::YueDe]
        );
    }

    #[test]
    fn fallback_deities() {
        // Month 2, 乙 (1): start = 3 → 民日, 天马
        assert_eq!(
            auspicious_deities(2, Stem::Yi),
            vec![Deity::MinRi, Deity::TianMa]
        );
        // Wraps around the end of the list: 癸 (9) + 12 = 21 % 8 = 5
        assert_eq!(
            auspicious_deities(12, Stem::Gui),
            vec![Deity::YiHou, Deity::XuShi]
        );
    }

    #[test]
    fn inauspicious_by_branch() {
        assert_eq!(inauspicious_deity(Branch::Zi), Deity::TianXing);
        assert_eq!(inauspicious_deity(Branch::Wu), Deity::TianXing);
        assert_eq!(inauspicious_deity(Branch::Hai), Deity::GouChen);
        assert!(!inauspicious_deity(Branch::Chen).is_auspicious());
    }

    #[test]
    fn record_is_reproducible() {
        let date = ymd(2024, 2, 10);
        assert_eq!(daily_divination(date), daily_divination(date));
    }

    #[test]
    fn record_fields() {
        let rec = daily_divination(ymd(2024, 2, 10));
        assert_eq!(rec.day_pillar.name(), "甲辰");
        assert_eq!(rec.clash, Zodiac::Dog);
        assert_eq!(rec.taboo_direction, Direction::South);
        assert_eq!(rec.suitable.len(), ACTIVITIES_PER_LIST);
        assert_eq!(rec.avoid.len(), ACTIVITIES_PER_LIST);
        assert!(rec.suitable.iter().all(|a| !rec.avoid.contains(a)));
        assert!((60..=99).contains(&rec.luck_score));
        assert!(rec.auspicious_deities.iter().all(|d| d.is_auspicious()));
    }

    #[test]
    fn clashing_hour_is_never_auspicious() {
        let rec = daily_divination(ymd(2024, 2, 10));
        // 辰 day clashes 戌 hour (index 10)
        assert_eq!(rec.hours[10].branch(), Branch::Xu);
        assert!(!rec.hours[10].auspicious);
        for (i, h) in rec.hours.iter().enumerate() {
            assert_eq!(h.branch().index() as usize, i);
        }
    }
}
