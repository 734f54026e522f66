//! Four Pillars chart construction and day-master resolution.
//!
//! Only the Day pillar is anchored to an exact day count. The Year and Month
//! pillars use Gregorian-year and solar-month shortcuts that ignore the
//! lunisolar new-year boundary; the Hour pillar depends on the Day stem.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;
use tracing::trace;

use crate::element::Element;
use crate::moment::days_since_epoch;
use crate::symbols::{Branch, Stem};

/// Offset aligning the stem cycle so that 1900-01-01 resolves to 戊 (index 4).
const DAY_STEM_OFFSET: i64 = 4;
/// Offset aligning the branch cycle so that 1900-01-01 resolves to 戌 (index 10).
const DAY_BRANCH_OFFSET: i64 = 10;

/// A (stem, branch) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub stem: &'static Stem,
    pub branch: &'static Branch,
}

impl Pillar {
    /// Script label of the pair, e.g. `甲木辰`.
    pub fn script(&self) -> String {
        format!("{}{}", self.stem.script, self.branch.script)
    }
}

/// Year, Month, Day and Hour pillars derived from one birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillarsChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillarsChart {
    /// The Day stem.
    pub fn day_master(&self) -> &'static Stem {
        self.day.stem
    }

    /// Pillars in Year, Month, Day, Hour order.
    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub fn stems(&self) -> [&'static Stem; 4] {
        self.pillars().map(|p| p.stem)
    }

    pub fn branches(&self) -> [&'static Branch; 4] {
        self.pillars().map(|p| p.branch)
    }

    /// Per-element tally with stems weighted 2 and branches weighted 1,
    /// indexed by [`Element::index`].
    pub fn element_histogram(&self) -> [u32; 5] {
        let mut hist = [0u32; 5];
        for stem in self.stems() {
            hist[stem.element.index()] += 2;
        }
        for branch in self.branches() {
            hist[branch.element.index()] += 1;
        }
        hist
    }

    /// Histogram bucket for one element.
    pub fn element_count(&self, element: Element) -> u32 {
        self.element_histogram()[element.index()]
    }
}

/// Branch index for an hour of day.
///
/// Each branch covers two hours, offset so that 23:00–00:59 maps to 子
/// (index 0).
pub fn hour_branch_index(hour: u32) -> usize {
    ((hour as usize + 1) / 2) % 12
}

/// Resolves the day master for a birth date.
///
/// The time-of-day is accepted for symmetry with [`build_four_pillars`]; the
/// truncated day count means only the date selects the stem.
pub fn resolve_day_stem(date: NaiveDate, _time: NaiveTime) -> &'static Stem {
    Stem::cyclic(days_since_epoch(date) + DAY_STEM_OFFSET)
}

/// Builds the full Four Pillars chart for a birth date and time.
pub fn build_four_pillars(date: NaiveDate, time: NaiveTime) -> FourPillarsChart {
    let year = i64::from(date.year());
    let month = i64::from(date.month());
    let days = days_since_epoch(date);

    let year_pillar = Pillar {
        stem: Stem::cyclic(year - 4),
        branch: Branch::cyclic(year - 4),
    };

    let month_pillar = Pillar {
        stem: Stem::cyclic((year - 4) * 12 + (month - 1)),
        branch: Branch::cyclic(month + 1),
    };

    let day_stem = resolve_day_stem(date, time);
    let day_pillar = Pillar {
        stem: day_stem,
        branch: Branch::cyclic(days + DAY_BRANCH_OFFSET),
    };

    let hour_branch = hour_branch_index(time.hour()) as i64;
    let hour_pillar = Pillar {
        stem: Stem::cyclic(i64::from(day_stem.index) * 2 + hour_branch),
        branch: Branch::cyclic(hour_branch),
    };

    let chart = FourPillarsChart {
        year: year_pillar,
        month: month_pillar,
        day: day_pillar,
        hour: hour_pillar,
    };
    trace!(
        %date,
        days,
        year = %chart.year.script(),
        month = %chart.month.script(),
        day = %chart.day.script(),
        hour = %chart.hour.script(),
        "built four pillars"
    );
    chart
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn epoch_day_is_wu_xu() {
        let chart = build_four_pillars(ymd(1900, 1, 1), hm(0, 0));
        assert_eq!(chart.day.stem.index, 4);
        assert_eq!(chart.day.branch.index, 10);
        assert_eq!(chart.day.script(), "戊土戌");
    }

    #[test]
    fn resolve_day_stem_matches_chart() {
        let date = ymd(1985, 6, 20);
        let time = hm(14, 30);
        assert_eq!(
            resolve_day_stem(date, time),
            build_four_pillars(date, time).day_master()
        );
    }

    #[test]
    fn day_stem_advances_one_per_day() {
        let a = resolve_day_stem(ymd(2000, 2, 28), hm(12, 0));
        let b = resolve_day_stem(ymd(2000, 2, 29), hm(12, 0));
        let c = resolve_day_stem(ymd(2000, 3, 1), hm(12, 0));
        assert_eq!((a.index + 1) % 10, b.index);
        assert_eq!((b.index + 1) % 10, c.index);
    }

    #[test]
    fn day_stem_ignores_time() {
        let date = ymd(1975, 1, 20);
        assert_eq!(resolve_day_stem(date, hm(0, 0)), resolve_day_stem(date, hm(23, 59)));
    }

    #[test]
    fn year_pillar_1984_is_jia_zi() {
        let chart = build_four_pillars(ymd(1984, 6, 1), hm(12, 0));
        assert_eq!(chart.year.stem.id, "jia");
        assert_eq!(chart.year.branch.id, "zi");
    }

    #[test]
    fn year_pillar_ignores_lunar_new_year() {
        let jan = build_four_pillars(ymd(1990, 1, 2), hm(12, 0));
        let dec = build_four_pillars(ymd(1990, 12, 30), hm(12, 0));
        assert_eq!(jan.year, dec.year);
    }

    #[test]
    fn month_branch_formula() {
        for m in 1..=12u32 {
            let chart = build_four_pillars(ymd(2001, m, 1), hm(12, 0));
            assert_eq!(chart.month.branch.index as u32, (m + 1) % 12);
        }
    }

    #[test]
    fn hour_branch_windows() {
        assert_eq!(hour_branch_index(23), 0);
        assert_eq!(hour_branch_index(0), 0);
        assert_eq!(hour_branch_index(1), 1);
        assert_eq!(hour_branch_index(2), 1);
        assert_eq!(hour_branch_index(11), 6);
        assert_eq!(hour_branch_index(12), 6);
        assert_eq!(hour_branch_index(22), 11);
    }

    #[test]
    fn hour_stem_follows_day_stem() {
        let chart = build_four_pillars(ymd(1990, 1, 15), hm(10, 0));
        let expected = (chart.day.stem.index as usize * 2 + chart.hour.branch.index as usize) % 10;
        assert_eq!(chart.hour.stem.index as usize, expected);
    }

    #[test]
    fn histogram_totals_twelve() {
        let chart = build_four_pillars(ymd(1968, 3, 12), hm(4, 30));
        assert_eq!(chart.element_histogram().iter().sum::<u32>(), 12);
    }

    #[test]
    fn histogram_known_chart() {
        // 庚金午 丙火寅 甲木辰 己土巳
        let chart = build_four_pillars(ymd(1990, 1, 15), hm(10, 0));
        assert_eq!(chart.element_histogram(), [3, 4, 3, 2, 0]);
        assert_eq!(chart.element_count(Element::Fire), 4);
    }

    #[test]
    fn pre_epoch_dates_stay_in_range() {
        let chart = build_four_pillars(ymd(1850, 3, 3), hm(5, 0));
        assert!(chart.day.stem.index < 10);
        assert!(chart.day.branch.index < 12);
        assert_eq!(
            chart.day.stem.index as i64,
            (days_since_epoch(ymd(1850, 3, 3)) + 4).rem_euclid(10)
        );
    }
}
