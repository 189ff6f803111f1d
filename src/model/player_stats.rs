use serde::{Deserialize, Serialize};

use super::round::Round;
use super::utils::{lenient_f64, lenient_vec};

/// Aggregate statistics as the backend reports them. Every field may be missing.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PlayerStats {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_putts_per_round: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_score_per_round: Option<f64>,
    // the backend spells it this way
    #[serde(
        default,
        alias = "avg_penalties_per_round",
        deserialize_with = "lenient_f64"
    )]
    pub avg_penalities_per_round: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fairway_hit_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub gir_percentage: Option<f64>,
    /// Most recent first.
    #[serde(default, deserialize_with = "lenient_vec")]
    pub scores_list: Vec<Round>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub handicap: Option<f64>,
}

impl PlayerStats {
    #[must_use]
    pub fn most_recent_round(&self) -> Option<&Round> {
        self.scores_list.first()
    }
}
