mod common;

use rusty_golf_stats::model::{HoleScore, PlayerStats, Round};
use rusty_golf_stats::stats::{
    Improvement, PerHoleSeries, TrendSeries, average_total, improvement, improvement_or,
    last_nine_series, per_hole_series, round_label, trend_series,
};

#[test]
fn improvement_is_first_minus_last() {
    let imp = improvement(&[80, 75]).expect("two rounds");
    assert_eq!(imp.value, 5);
    assert_eq!(imp.percentage, "+6.3%");
    assert!(imp.is_non_negative());
}

#[test]
fn worse_scores_are_negative() {
    let imp = improvement(&[80, 84]).expect("two rounds");
    assert_eq!(imp.value, -4);
    assert_eq!(imp.percentage, "-5.0%");
    assert!(!imp.is_non_negative());
}

#[test]
fn too_few_rounds_keep_default() {
    assert_eq!(improvement(&[]), None);
    assert_eq!(improvement(&[80]), None);
    let kept = improvement_or(&[80], Improvement::default());
    assert_eq!(kept.value, 0);
    assert_eq!(kept.percentage, "0%");
}

#[test]
fn zero_first_total_does_not_divide() {
    let imp = improvement(&[0, 0]).expect("two rounds");
    assert_eq!(imp.value, 0);
    assert_eq!(imp.percentage, "+0.0%");
}

#[test]
fn last_nine_takes_nine_positional_holes() {
    let round = common::round_with_strokes(&[5; 18], "2025-05-06 15:04");
    let series = last_nine_series(&round);
    assert_eq!(series.len(), 9);
    assert_eq!(series.labels.first().map(String::as_str), Some("Hole 1"));
    assert_eq!(series.labels.last().map(String::as_str), Some("Hole 9"));
    assert_eq!(series.total_strokes(), 45);
}

#[test]
fn last_nine_follows_stored_order_not_hole_numbers() {
    // back nine played first
    let holes = (10..=18).chain(1..=9).map(|n| HoleScore::new(n, 4, n)).collect();
    let series = last_nine_series(&Round::new(holes));
    assert_eq!(series.len(), 9);
    assert_eq!(series.strokes, (10..=18).collect::<Vec<u32>>());
    assert_eq!(series.labels.first().map(String::as_str), Some("Hole 1"));
    assert_eq!(series.total_strokes(), (10..=18).sum::<u32>());
}

#[test]
fn last_nine_of_short_round_is_shorter() {
    let round = common::round_with_strokes(&[4; 5], "2025-05-06 15:04");
    assert_eq!(last_nine_series(&round).len(), 5);
}

#[test]
fn other_strokes_never_negative() {
    let round = Round::new(vec![
        HoleScore::new(1, 4, 2).with_putts(3).with_penalties(1),
        HoleScore::new(2, 4, 6).with_putts(2).with_penalties(1),
    ]);
    let series = per_hole_series(&round);
    assert_eq!(series.other_strokes, vec![0, 3]);
    assert_eq!(series.labels, vec!["Hole 1", "Hole 2"]);
}

#[test]
fn trend_is_chronological_and_windowed() {
    let mut rounds: Vec<Round> = (0..12)
        .map(|i| common::round_totalling(70 + i, &format!("2025-05-{:02} 10:00", 20 - i)))
        .collect();
    rounds[0].date = None;
    let series = trend_series(&rounds, 10);
    assert_eq!(series.len(), 10);
    // most recent round ends the series
    assert_eq!(series.total_scores.last(), Some(&70));
    assert_eq!(series.total_scores.first(), Some(&79));
    assert_eq!(series.labels[0], "R1: May 11");
    assert_eq!(series.labels[9], "R10: Unknown date");
}

#[test]
fn round_labels() {
    let date = common::at("2025-05-06 15:04");
    assert_eq!(round_label(3, Some(&date)), "R3: May 6");
    assert_eq!(round_label(1, None), "R1: Unknown date");
}

#[test]
fn average_rounds_like_math_round() {
    assert_eq!(average_total(&[]), None);
    assert_eq!(average_total(&[80, 78, 75]), Some(78));
    assert_eq!(average_total(&[71, 72]), Some(72));
}

#[test]
fn placeholders() {
    let line = PerHoleSeries::placeholder_line(18);
    assert_eq!(line.len(), 18);
    assert!(line.strokes.iter().all(|s| *s == 4));
    assert!(line.putts.iter().all(|p| *p == 2));
    assert!(line.par.iter().all(|p| *p == 4));

    let bars = PerHoleSeries::placeholder_bars(9);
    assert_eq!(bars.total_strokes(), 0);

    let trend = TrendSeries::placeholder(10);
    assert_eq!(trend.labels[0], "Round 1");
    assert_eq!(trend.total_scores, vec![0; 10]);
}

#[test]
fn sample_trend_improvement() {
    let stats: PlayerStats = common::sample_stats();
    let series = trend_series(&stats.scores_list, 10);
    assert_eq!(series.total_scores, vec![80, 78, 75]);
    let imp = improvement(&series.total_scores).expect("three rounds");
    assert_eq!((imp.value, imp.percentage.as_str()), (5, "+6.3%"));
}
