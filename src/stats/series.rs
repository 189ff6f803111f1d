use chrono::NaiveDateTime;
use serde::Serialize;

use super::normalize::{js_round, other_strokes, signed_percent};
use crate::model::{HoleScore, Round, format_short_date};

/// Holes shown by the "last 9 holes" bar chart.
pub const LAST_HOLES_WINDOW: usize = 9;
/// Rounds shown by the trend chart.
pub const DEFAULT_TREND_WINDOW: usize = 10;

/// Parallel per-hole arrays for one round, indexed by play order.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PerHoleSeries {
    pub labels: Vec<String>,
    pub strokes: Vec<u32>,
    pub putts: Vec<u32>,
    pub par: Vec<u32>,
    pub penalties: Vec<u32>,
    pub other_strokes: Vec<u32>,
}

impl PerHoleSeries {
    fn push(&mut self, label: String, hole: &HoleScore) {
        self.labels.push(label);
        self.strokes.push(hole.strokes);
        self.putts.push(hole.putts);
        self.par.push(hole.par);
        self.penalties.push(hole.penalties);
        self.other_strokes
            .push(other_strokes(hole.strokes, hole.putts, hole.penalties));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn total_strokes(&self) -> u32 {
        self.strokes.iter().fold(0u32, |acc, s| acc.saturating_add(*s))
    }

    /// Stand-in line chart: every hole a par 4 played in 4 with 2 putts.
    #[must_use]
    pub fn placeholder_line(holes: usize) -> Self {
        let mut series = Self::default();
        for n in 1..=holes {
            let hole = HoleScore::new(0, 4, 4).with_putts(2);
            series.push(format!("Hole {n}"), &hole);
        }
        series
    }

    /// Stand-in bar chart: zeroed holes.
    #[must_use]
    pub fn placeholder_bars(holes: usize) -> Self {
        let mut series = Self::default();
        for n in 1..=holes {
            series.push(format!("Hole {n}"), &HoleScore::default());
        }
        series
    }
}

/// Every hole of the round, labelled by its hole number.
#[must_use]
pub fn per_hole_series(round: &Round) -> PerHoleSeries {
    let mut series = PerHoleSeries::default();
    for hole in &round.hole_scores {
        series.push(format!("Hole {}", hole.hole_number), hole);
    }
    series
}

/// The first nine holes as stored, labelled by position. The slice is positional: it does
/// not look at hole numbers or dates.
#[must_use]
pub fn last_nine_series(round: &Round) -> PerHoleSeries {
    let mut series = PerHoleSeries::default();
    for (idx, hole) in round.hole_scores.iter().take(LAST_HOLES_WINDOW).enumerate() {
        series.push(format!("Hole {}", idx + 1), hole);
    }
    series
}

/// Per-round totals in chronological order.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub total_scores: Vec<u32>,
    pub total_putts: Vec<u32>,
    pub total_par: Vec<u32>,
}

impl TrendSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn placeholder(rounds: usize) -> Self {
        Self {
            labels: (1..=rounds).map(|n| format!("Round {n}")).collect(),
            total_scores: vec![0; rounds],
            total_putts: vec![0; rounds],
            total_par: vec![0; rounds],
        }
    }
}

/// `"R3: May 6"`, `n` being 1-based in chronological order.
#[must_use]
pub fn round_label(n: usize, date: Option<&NaiveDateTime>) -> String {
    match date {
        Some(date) => format!("R{n}: {}", format_short_date(date)),
        None => format!("R{n}: Unknown date"),
    }
}

/// `scores_list` is most recent first; the series comes out oldest first and holds at most
/// `window` rounds.
#[must_use]
pub fn trend_series(scores_list: &[Round], window: usize) -> TrendSeries {
    let mut series = TrendSeries::default();
    let recent: Vec<&Round> = scores_list.iter().take(window).collect();
    for (idx, round) in recent.into_iter().rev().enumerate() {
        series.labels.push(round_label(idx + 1, round.date.as_ref()));
        series.total_scores.push(round.total_strokes());
        series.total_putts.push(round.total_putts());
        series.total_par.push(round.total_par());
    }
    series
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Improvement {
    pub value: i64,
    pub percentage: String,
}

impl Default for Improvement {
    fn default() -> Self {
        Self {
            value: 0,
            percentage: "0%".to_string(),
        }
    }
}

impl Improvement {
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        self.value >= 0
    }
}

/// First minus last of a chronological totals array, as a value and a signed percent of the
/// first. `None` when there are fewer than two totals.
#[must_use]
pub fn improvement(totals: &[u32]) -> Option<Improvement> {
    if totals.len() < 2 {
        return None;
    }
    let (Some(&first), Some(&last)) = (totals.first(), totals.last()) else {
        return None;
    };
    let value = i64::from(first) - i64::from(last);
    let percent = if first == 0 {
        0.0
    } else {
        value as f64 / f64::from(first) * 100.0
    };
    Some(Improvement {
        value,
        percentage: signed_percent(value >= 0, percent),
    })
}

/// Like [`improvement`] but keeps `prior` when there is not enough data.
#[must_use]
pub fn improvement_or(totals: &[u32], prior: Improvement) -> Improvement {
    improvement(totals).unwrap_or(prior)
}

/// Rounded mean of the totals, `None` for no rounds.
#[must_use]
pub fn average_total(totals: &[u32]) -> Option<i64> {
    if totals.is_empty() {
        return None;
    }
    let sum: f64 = totals.iter().map(|t| f64::from(*t)).sum();
    Some(js_round(sum / totals.len() as f64) as i64)
}
