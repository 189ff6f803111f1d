use serde::{Deserialize, Serialize};

use super::utils::{lenient_bool, lenient_f64, lenient_i64, lenient_string, lenient_u32};

/// A leaderboard entry as the backend lists it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LeaderboardUser {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_online: bool,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total_rounds: u32,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub average_score: Option<f64>,
}

impl LeaderboardUser {
    #[must_use]
    pub fn player_id(&self) -> Option<i64> {
        self.id.or(self.user_id)
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Unknown User")
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerStatus {
    Online,
    Offline,
}

impl PlayerStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PlayerStatus::Online => "Online",
            PlayerStatus::Offline => "Offline",
        }
    }
}

impl From<bool> for PlayerStatus {
    fn from(online: bool) -> Self {
        if online {
            PlayerStatus::Online
        } else {
            PlayerStatus::Offline
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LeaderboardRow {
    pub rank: String,
    pub user: String,
    pub status: PlayerStatus,
    pub handicap: f64,
    pub average_score: f64,
    pub total_rounds: u32,
}

impl LeaderboardRow {
    #[must_use]
    pub fn from_user(rank: usize, user: &LeaderboardUser, handicap: f64) -> Self {
        Self {
            rank: rank.to_string(),
            user: user.display_name().to_string(),
            status: PlayerStatus::from(user.is_online),
            handicap,
            average_score: user.average_score.unwrap_or(0.0),
            total_rounds: user.total_rounds,
        }
    }
}
