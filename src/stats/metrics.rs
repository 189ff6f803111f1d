use serde::Serialize;
use std::collections::BTreeMap;

use super::normalize::{finite_or, percentage, ratio};
use crate::model::{PlayerStats, Round};

/// What a player averages when the backend has nothing on record.
pub const DEFAULT_AVG_SCORE: f64 = 72.0;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    AvgPuttsPerRound,
    AvgScorePerRound,
    AvgPenaltiesPerRound,
    FairwayHitPercentage,
    GirPercentage,
    Handicap,
    TotalStrokes,
    TotalPutts,
    TotalPar,
    TotalPenalties,
    FairwaysHit,
    GreensInRegulation,
    HolesPlayed,
    PuttsPerHole,
    PenaltiesPerHole,
    FrontNine,
    BackNine,
}

impl Metric {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::AvgPuttsPerRound => "avg_putts_per_round",
            Metric::AvgScorePerRound => "avg_score_per_round",
            Metric::AvgPenaltiesPerRound => "avg_penalties_per_round",
            Metric::FairwayHitPercentage => "fairway_hit_percentage",
            Metric::GirPercentage => "gir_percentage",
            Metric::Handicap => "handicap",
            Metric::TotalStrokes => "total_strokes",
            Metric::TotalPutts => "total_putts",
            Metric::TotalPar => "total_par",
            Metric::TotalPenalties => "total_penalties",
            Metric::FairwaysHit => "fairways_hit",
            Metric::GreensInRegulation => "greens_in_regulation",
            Metric::HolesPlayed => "holes_played",
            Metric::PuttsPerHole => "putts_per_hole",
            Metric::PenaltiesPerHole => "penalties_per_hole",
            Metric::FrontNine => "front_nine",
            Metric::BackNine => "back_nine",
        }
    }

    #[must_use]
    pub fn default_value(self) -> f64 {
        match self {
            Metric::AvgScorePerRound => DEFAULT_AVG_SCORE,
            _ => 0.0,
        }
    }
}

/// Named scalar metrics. Reading a metric that was never set yields its default, so a
/// `MetricSet` never hands out NaN.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct MetricSet(BTreeMap<Metric, f64>);

impl MetricSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, metric: Metric, value: f64) {
        let value = if value.is_finite() {
            value
        } else {
            metric.default_value()
        };
        self.0.insert(metric, value);
    }

    #[must_use]
    pub fn get(&self, metric: Metric) -> f64 {
        self.0
            .get(&metric)
            .copied()
            .unwrap_or_else(|| metric.default_value())
    }

    #[must_use]
    pub fn contains(&self, metric: Metric) -> bool {
        self.0.contains_key(&metric)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Metric, f64)> for MetricSet {
    fn from_iter<I: IntoIterator<Item = (Metric, f64)>>(iter: I) -> Self {
        let mut set = MetricSet::new();
        for (metric, value) in iter {
            set.insert(metric, value);
        }
        set
    }
}

/// Player-level metrics with the configured defaults applied.
#[must_use]
pub fn derive_player_metrics(stats: &PlayerStats) -> MetricSet {
    [
        (Metric::AvgPuttsPerRound, stats.avg_putts_per_round),
        (Metric::AvgScorePerRound, stats.avg_score_per_round),
        (Metric::AvgPenaltiesPerRound, stats.avg_penalities_per_round),
        (Metric::FairwayHitPercentage, stats.fairway_hit_percentage),
        (Metric::GirPercentage, stats.gir_percentage),
        (Metric::Handicap, stats.handicap),
    ]
    .into_iter()
    .map(|(metric, value)| (metric, finite_or(value, metric.default_value())))
    .collect()
}

#[must_use]
pub fn derive_round_metrics(round: &Round) -> MetricSet {
    let totals = round.totals();
    let holes = f64::from(totals.holes_played);
    [
        (Metric::TotalStrokes, f64::from(totals.total_strokes)),
        (Metric::TotalPutts, f64::from(totals.total_putts)),
        (Metric::TotalPar, f64::from(totals.total_par)),
        (Metric::TotalPenalties, f64::from(totals.total_penalties)),
        (Metric::FairwaysHit, f64::from(totals.fairways_hit_count)),
        (Metric::GreensInRegulation, f64::from(totals.greens_in_regulation_count)),
        (Metric::HolesPlayed, holes),
        (
            Metric::FairwayHitPercentage,
            percentage(totals.fairways_hit_count, totals.holes_played),
        ),
        (
            Metric::GirPercentage,
            percentage(totals.greens_in_regulation_count, totals.holes_played),
        ),
        (Metric::PuttsPerHole, ratio(f64::from(totals.total_putts), holes)),
        (Metric::PenaltiesPerHole, ratio(f64::from(totals.total_penalties), holes)),
        (Metric::FrontNine, f64::from(round.front_nine_score())),
        (Metric::BackNine, f64::from(round.back_nine_score())),
    ]
    .into_iter()
    .collect()
}

/// Recomputes per-round averages over the valid, non-empty rounds given.
/// With nothing to average every field stays absent; the handicap is never computed here.
#[must_use]
pub fn aggregate_rounds(rounds: &[Round]) -> PlayerStats {
    let counted: Vec<&Round> = rounds
        .iter()
        .filter(|r| !r.hole_scores.is_empty() && r.is_valid())
        .collect();
    if counted.is_empty() {
        return PlayerStats::default();
    }

    let n = counted.len() as f64;
    let sum = |f: fn(&Round) -> u32| counted.iter().map(|r| f(r)).fold(0u32, u32::saturating_add);

    let holes = sum(Round::holes_played);
    PlayerStats {
        avg_putts_per_round: Some(ratio(f64::from(sum(Round::total_putts)), n)),
        avg_score_per_round: Some(ratio(f64::from(sum(Round::total_strokes)), n)),
        avg_penalities_per_round: Some(ratio(f64::from(sum(Round::total_penalties)), n)),
        fairway_hit_percentage: Some(percentage(sum(Round::fairways_hit_count), holes)),
        gir_percentage: Some(percentage(sum(Round::greens_in_regulation_count), holes)),
        scores_list: Vec::new(),
        handicap: None,
    }
}
