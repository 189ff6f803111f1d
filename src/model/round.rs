use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::hole::HoleScore;
use super::utils::{lenient_i64, lenient_string, lenient_timestamp, lenient_vec};

/// One played round. Hole order is play order; nothing here is mutated after the round is
/// submitted, later views re-fetch it from the backend.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Round {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub course_id: Option<i64>,
    #[serde(default, alias = "course", deserialize_with = "lenient_string")]
    pub course_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tee_name: Option<String>,
    #[serde(default, alias = "date_played", deserialize_with = "lenient_timestamp")]
    pub date: Option<NaiveDateTime>,
    #[serde(default, alias = "note", deserialize_with = "lenient_string")]
    pub notes: Option<String>,
    #[serde(default, alias = "scores", deserialize_with = "lenient_vec")]
    pub hole_scores: Vec<HoleScore>,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundTotals {
    pub total_strokes: u32,
    pub total_putts: u32,
    pub total_par: u32,
    pub fairways_hit_count: u32,
    pub greens_in_regulation_count: u32,
    pub total_penalties: u32,
    pub holes_played: u32,
}

impl Round {
    #[must_use]
    pub fn new(hole_scores: Vec<HoleScore>) -> Self {
        Self {
            hole_scores,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = Some(date);
        self
    }

    fn sum_by(&self, f: impl Fn(&HoleScore) -> u32) -> u32 {
        self.hole_scores.iter().map(f).fold(0u32, u32::saturating_add)
    }

    #[must_use]
    pub fn total_strokes(&self) -> u32 {
        self.sum_by(|h| h.strokes)
    }

    #[must_use]
    pub fn total_putts(&self) -> u32 {
        self.sum_by(|h| h.putts)
    }

    #[must_use]
    pub fn total_par(&self) -> u32 {
        self.sum_by(|h| h.par)
    }

    #[must_use]
    pub fn total_penalties(&self) -> u32 {
        self.sum_by(|h| h.penalties)
    }

    #[must_use]
    pub fn fairways_hit_count(&self) -> u32 {
        self.sum_by(|h| u32::from(h.fairway_hit))
    }

    #[must_use]
    pub fn greens_in_regulation_count(&self) -> u32 {
        self.sum_by(|h| u32::from(h.green_in_regulation))
    }

    #[must_use]
    pub fn holes_played(&self) -> u32 {
        u32::try_from(self.hole_scores.len()).unwrap_or(u32::MAX)
    }

    /// Strokes on holes numbered 1 through 9.
    #[must_use]
    pub fn front_nine_score(&self) -> u32 {
        self.hole_scores
            .iter()
            .filter(|h| h.hole_number <= 9)
            .map(|h| h.strokes)
            .fold(0u32, u32::saturating_add)
    }

    /// Strokes on holes numbered 10 and up.
    #[must_use]
    pub fn back_nine_score(&self) -> u32 {
        self.hole_scores
            .iter()
            .filter(|h| h.hole_number > 9)
            .map(|h| h.strokes)
            .fold(0u32, u32::saturating_add)
    }

    /// A round counts only when every hole has a recorded stroke count.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.hole_scores.iter().all(HoleScore::is_recorded)
    }

    #[must_use]
    pub fn totals(&self) -> RoundTotals {
        RoundTotals {
            total_strokes: self.total_strokes(),
            total_putts: self.total_putts(),
            total_par: self.total_par(),
            fairways_hit_count: self.fairways_hit_count(),
            greens_in_regulation_count: self.greens_in_regulation_count(),
            total_penalties: self.total_penalties(),
            holes_played: self.holes_played(),
        }
    }
}
