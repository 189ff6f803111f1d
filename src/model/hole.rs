use serde::{Deserialize, Serialize};

use super::utils::{lenient_bool, lenient_u32};

/// One hole of a played round.
///
/// `strokes == 0` means the value never arrived; such a hole makes its round invalid.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct HoleScore {
    #[serde(default, alias = "hole", deserialize_with = "lenient_u32")]
    pub hole_number: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub par: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub yardage: u32,
    #[serde(default, alias = "handicap", deserialize_with = "lenient_u32")]
    pub handicap_rating: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub strokes: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub putts: u32,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub fairway_hit: bool,
    #[serde(default, alias = "gir", deserialize_with = "lenient_bool")]
    pub green_in_regulation: bool,
    #[serde(default, alias = "pen", deserialize_with = "lenient_u32")]
    pub penalties: u32,
}

impl HoleScore {
    #[must_use]
    pub fn new(hole_number: u32, par: u32, strokes: u32) -> Self {
        Self {
            hole_number,
            par,
            strokes,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_putts(mut self, putts: u32) -> Self {
        self.putts = putts;
        self
    }

    #[must_use]
    pub fn with_penalties(mut self, penalties: u32) -> Self {
        self.penalties = penalties;
        self
    }

    #[must_use]
    pub fn with_fairway_hit(mut self, hit: bool) -> Self {
        self.fairway_hit = hit;
        self
    }

    #[must_use]
    pub fn with_gir(mut self, gir: bool) -> Self {
        self.green_in_regulation = gir;
        self
    }

    #[must_use]
    pub fn is_recorded(&self) -> bool {
        self.strokes >= 1
    }

    /// Score relative to par, negative under par.
    #[must_use]
    pub fn to_par(&self) -> i64 {
        i64::from(self.strokes) - i64::from(self.par)
    }
}
