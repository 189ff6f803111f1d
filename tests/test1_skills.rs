mod common;

use rusty_golf_stats::model::PlayerStats;
use rusty_golf_stats::stats::{
    Metric, MetricSet, SkillCategory, derive_player_metrics, skill_scores, skill_scores_for,
};

fn by_category(stats: &PlayerStats) -> Vec<(SkillCategory, f64, f64)> {
    skill_scores_for(stats)
        .iter()
        .map(|s| (s.category, s.current_skill, s.target_skill))
        .collect()
}

#[test]
fn five_categories_in_fixed_order_with_offsets() {
    let scores = skill_scores_for(&common::sample_stats());
    let categories: Vec<_> = scores.iter().map(|s| s.category).collect();
    assert_eq!(categories, SkillCategory::ALL.to_vec());

    let offsets: Vec<f64> = scores
        .iter()
        .map(|s| s.target_skill - s.current_skill)
        .collect();
    assert_eq!(offsets, vec![40.0, 40.0, 20.0, 20.0, 40.0]);
}

#[test]
fn missing_stats_fall_back_to_defaults() {
    let scores = by_category(&PlayerStats::default());
    assert_eq!(
        scores,
        vec![
            (SkillCategory::Putting, 100.0, 140.0),
            (SkillCategory::Scoring, 93.0, 133.0),
            (SkillCategory::Fairways, 0.0, 20.0),
            (SkillCategory::Greens, 0.0, 20.0),
            (SkillCategory::Penalties, 100.0, 140.0),
        ]
    );
    for (_, current, target) in scores {
        assert!(current.is_finite() && target.is_finite());
    }
}

#[test]
fn sample_player_scores() {
    let scores = by_category(&common::sample_stats());
    assert_eq!(scores[0], (SkillCategory::Putting, 0.0, 40.0));
    assert_eq!(scores[1], (SkillCategory::Scoring, 80.0, 120.0));
    assert_eq!(scores[2], (SkillCategory::Fairways, 45.0, 65.0));
    assert_eq!(scores[3], (SkillCategory::Greens, 30.0, 50.0));
    assert_eq!(scores[4], (SkillCategory::Penalties, 70.0, 110.0));
}

#[test]
fn current_skill_never_negative_for_extreme_input() {
    let stats = PlayerStats {
        avg_putts_per_round: Some(1e9),
        avg_score_per_round: Some(1e9),
        avg_penalities_per_round: Some(1e9),
        fairway_hit_percentage: Some(-50.0),
        gir_percentage: Some(-1e9),
        ..PlayerStats::default()
    };
    for s in skill_scores_for(&stats) {
        assert!(s.current_skill >= 0.0, "{:?} went negative", s.category);
        assert_eq!(s.target_skill, s.current_skill + s.category.target_offset());
    }
}

#[test]
fn non_finite_inputs_use_defaults() {
    let stats = PlayerStats {
        avg_score_per_round: Some(f64::NAN),
        fairway_hit_percentage: Some(f64::INFINITY),
        ..PlayerStats::default()
    };
    let metrics = derive_player_metrics(&stats);
    assert_eq!(metrics.get(Metric::AvgScorePerRound), 72.0);
    assert_eq!(metrics.get(Metric::FairwayHitPercentage), 0.0);
}

#[test]
fn skill_scores_from_partial_metric_set() {
    let metrics: MetricSet = [(Metric::GirPercentage, 55.0)].into_iter().collect();
    let scores = skill_scores(&metrics);
    assert_eq!(scores[3].current_skill, 55.0);
    assert_eq!(scores[1].current_skill, 93.0);
}
