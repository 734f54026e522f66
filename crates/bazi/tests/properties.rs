use calimea_bazi::{
    BAND_MAX, BAND_MIN, BirthMoment, build_four_pillars, derive_band_weights, hour_branch_index,
    raw_band_scores, resolve_day_stem, score_affinity,
};
use chrono::{Days, NaiveDate, NaiveTime};

/// Every 7th day from 1880 through 2060, at four spread-out hours.
fn sample_moments() -> Vec<BirthMoment> {
    let start = NaiveDate::from_ymd_opt(1880, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2060, 12, 31).unwrap();
    let hours = [0, 7, 13, 23];
    let mut out = Vec::new();
    let mut date = start;
    while date <= end {
        for &h in &hours {
            out.push(BirthMoment::new(date, NaiveTime::from_hms_opt(h, 30, 0).unwrap()));
        }
        date = date.checked_add_days(Days::new(7)).unwrap();
    }
    out
}

#[test]
fn chart_is_deterministic() {
    for m in sample_moments().into_iter().step_by(97) {
        let a = build_four_pillars(m.date(), m.time());
        let b = build_four_pillars(m.date(), m.time());
        assert_eq!(a, b);
        assert_eq!(score_affinity(&a).to_bits(), score_affinity(&b).to_bits());
        assert_eq!(derive_band_weights(&a), derive_band_weights(&b));
    }
}

#[test]
fn indices_always_in_range() {
    for m in sample_moments() {
        let chart = build_four_pillars(m.date(), m.time());
        for p in chart.pillars() {
            assert!(p.stem.index < 10, "stem out of range for {:?}", m);
            assert!(p.branch.index < 12, "branch out of range for {:?}", m);
        }
    }
}

#[test]
fn hour_branch_in_range_for_every_hour() {
    for h in 0..24 {
        assert!(hour_branch_index(h) < 12);
    }
}

#[test]
fn midnight_window_wraps() {
    assert_eq!(hour_branch_index(23), hour_branch_index(0));
    let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
    let late = build_four_pillars(date, NaiveTime::from_hms_opt(23, 59, 0).unwrap());
    let early = build_four_pillars(date, NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    assert_eq!(late.hour, early.hour);
}

#[test]
fn every_two_hour_window_is_distinct() {
    let mut seen: Vec<usize> = (0..24).step_by(2).map(|h| hour_branch_index(h + 1)).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 12);
}

#[test]
fn affinity_bounds_and_precision() {
    for m in sample_moments() {
        let chart = build_four_pillars(m.date(), m.time());
        let a = score_affinity(&chart);
        assert!((0.5..=1.0).contains(&a), "affinity {a} out of bounds for {:?}", m);
        let hundredths = a * 100.0;
        assert!(
            (hundredths - hundredths.round()).abs() < 1e-9,
            "affinity {a} has more than two decimals"
        );
    }
}

#[test]
fn band_weight_bounds_and_dominance() {
    for m in sample_moments() {
        let chart = build_four_pillars(m.date(), m.time());
        let w = derive_band_weights(&chart);
        for v in [w.stability, w.flow, w.clarity] {
            assert!((BAND_MIN..=BAND_MAX).contains(&v), "weight {v} out of bounds");
        }
        let top = w.stability.max(w.flow).max(w.clarity);
        assert_eq!(top, BAND_MAX, "strongest channel not at max for {:?}", m);

        let raw = raw_band_scores(&chart);
        let strongest = if raw.stability == raw.max() {
            w.stability
        } else if raw.flow == raw.max() {
            w.flow
        } else {
            w.clarity
        };
        assert_eq!(strongest, top);
    }
}

#[test]
fn day_stem_cycles_every_ten_days() {
    let time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    let mut date = NaiveDate::from_ymd_opt(1960, 2, 20).unwrap();
    for _ in 0..200 {
        let later = date.checked_add_days(Days::new(10)).unwrap();
        assert_eq!(resolve_day_stem(date, time), resolve_day_stem(later, time));
        date = date.succ_opt().unwrap();
    }
}
