use serde::Serialize;

/// Payload for `POST /api/rounds/` (and the per-player variant).
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundSubmission {
    pub course_id: i64,
    pub tee_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tee_id: Option<i64>,
    pub notes: String,
    pub hole_scores: Vec<HoleScoreSubmission>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleScoreSubmission {
    pub hole_number: u32,
    pub strokes: u32,
    pub putts: u32,
    pub fairway_hit: bool,
    pub green_in_regulation: bool,
    pub penalties: u32,
}
