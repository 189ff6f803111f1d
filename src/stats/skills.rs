use serde::Serialize;

use super::metrics::{Metric, MetricSet, derive_player_metrics};
use super::normalize::floor_at_zero;
use crate::model::PlayerStats;

/// Benchmark "scratch" round used by the scoring axis.
pub const SCRATCH_BASELINE: f64 = 65.0;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Putting,
    Scoring,
    Fairways,
    Greens,
    Penalties,
}

impl SkillCategory {
    /// Radar axis order. Consumers must not reorder.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Putting,
        SkillCategory::Scoring,
        SkillCategory::Fairways,
        SkillCategory::Greens,
        SkillCategory::Penalties,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Putting => "Putting",
            SkillCategory::Scoring => "Scoring",
            SkillCategory::Fairways => "Fairways",
            SkillCategory::Greens => "Greens",
            SkillCategory::Penalties => "Penalties",
        }
    }

    #[must_use]
    pub fn target_offset(self) -> f64 {
        match self {
            SkillCategory::Putting | SkillCategory::Scoring | SkillCategory::Penalties => 40.0,
            SkillCategory::Fairways | SkillCategory::Greens => 20.0,
        }
    }

    // Floored at zero, no ceiling.
    fn current_skill(self, metrics: &MetricSet) -> f64 {
        match self {
            SkillCategory::Putting => {
                floor_at_zero(100.0 - metrics.get(Metric::AvgPuttsPerRound) * 5.0)
            }
            SkillCategory::Scoring => {
                floor_at_zero(100.0 - (metrics.get(Metric::AvgScorePerRound) - SCRATCH_BASELINE))
            }
            SkillCategory::Fairways => floor_at_zero(metrics.get(Metric::FairwayHitPercentage)),
            SkillCategory::Greens => floor_at_zero(metrics.get(Metric::GirPercentage)),
            SkillCategory::Penalties => {
                floor_at_zero(100.0 - metrics.get(Metric::AvgPenaltiesPerRound) * 20.0)
            }
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct SkillScore {
    pub category: SkillCategory,
    pub current_skill: f64,
    pub target_skill: f64,
}

/// The five radar axes, always all of them and always in [`SkillCategory::ALL`] order.
#[must_use]
pub fn skill_scores(metrics: &MetricSet) -> [SkillScore; 5] {
    SkillCategory::ALL.map(|category| {
        let current_skill = category.current_skill(metrics);
        SkillScore {
            category,
            current_skill,
            target_skill: current_skill + category.target_offset(),
        }
    })
}

#[must_use]
pub fn skill_scores_for(stats: &PlayerStats) -> [SkillScore; 5] {
    skill_scores(&derive_player_metrics(stats))
}
