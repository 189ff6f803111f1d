#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use rusty_golf_stats::controller::backend::GolfApi;
use rusty_golf_stats::model::{
    AuthContext, Course, HoleScore, LeaderboardUser, LoginResponse, PlayerStats, Round,
    RoundSubmission, parse_course_list,
};
use rusty_golf_stats::mvu::error::AppError;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn at(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M").expect("fixture timestamp")
}

/// Eighteen holes, all par 4, scored `strokes[i]` with two putts and no penalties.
pub fn round_with_strokes(strokes: &[u32], date: &str) -> Round {
    let holes = strokes
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            HoleScore::new(u32::try_from(idx + 1).expect("hole index"), 4, *s).with_putts(2)
        })
        .collect();
    let mut round = Round::new(holes).with_date(at(date));
    round.course_name = Some("Pebble Creek".to_string());
    round
}

/// Round whose total is `total`: 17 holes of 4 and one hole carrying the rest.
pub fn round_totalling(total: u32, date: &str) -> Round {
    let mut strokes = vec![4u32; 17];
    strokes.push(total.saturating_sub(4 * 17).max(1));
    round_with_strokes(&strokes, date)
}

pub fn sample_stats() -> PlayerStats {
    PlayerStats {
        avg_putts_per_round: Some(32.0),
        avg_score_per_round: Some(85.0),
        avg_penalities_per_round: Some(1.5),
        fairway_hit_percentage: Some(45.0),
        gir_percentage: Some(30.0),
        scores_list: vec![
            round_totalling(75, "2025-05-06 15:04"),
            round_totalling(78, "2025-04-20 09:30"),
            round_totalling(80, "2025-04-01 08:15"),
        ],
        handicap: Some(12.4),
    }
}

pub fn sample_course_json() -> serde_json::Value {
    json!({
        "courses": [{
            "id": 7,
            "club_name": "Pebble Creek Golf Club",
            "course_name": "Pebble Creek",
            "location": {"address": "1 Links Rd", "city": "Springfield", "state": "IL", "country": "USA"},
            "tees": {
                "male": [{
                    "tee_name": "Blue",
                    "course_rating": 71.2,
                    "slope_rating": 128,
                    "total_yards": 6500,
                    "number_of_holes": 9,
                    "par_total": 36,
                    "holes": [
                        {"par": 4, "yardage": 380, "handicap": 5},
                        {"par": 3, "yardage": 165, "handicap": 9},
                        {"par": 5, "yardage": 520, "handicap": 1}
                    ]
                }],
                "female": [{
                    "tee_name": "Red",
                    "number_of_holes": 9,
                    "par_total": 36,
                    "holes": []
                }]
            }
        }]
    })
}

pub fn sample_courses() -> Vec<Course> {
    parse_course_list(sample_course_json())
}

pub fn leaderboard_users() -> Vec<LeaderboardUser> {
    serde_json::from_value(json!([
        {"id": 1, "username": "alice", "is_online": true, "total_rounds": 12, "average_score": 81.5},
        {"id": 2, "username": "bob", "is_online": false, "total_rounds": 4, "average_score": 95.0},
        {"username": "ghost", "total_rounds": 0}
    ]))
    .expect("leaderboard fixture")
}

/// In-memory backend. Stats not listed answer `NotFound`.
pub struct FakeApi {
    pub stats: HashMap<i64, Result<PlayerStats, AppError>>,
    pub leaderboard: Result<Vec<LeaderboardUser>, AppError>,
    pub courses: Result<Vec<Course>, AppError>,
    pub submit_result: Result<(), AppError>,
    pub login_result: Result<LoginResponse, AppError>,
    /// Stats requests never complete.
    pub stall_stats: bool,
    pub submitted: Mutex<Vec<(i64, RoundSubmission)>>,
    pub stats_calls: AtomicUsize,
    pub seen_tokens: Mutex<Vec<Option<String>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            stats: HashMap::new(),
            leaderboard: Ok(Vec::new()),
            courses: Ok(Vec::new()),
            submit_result: Ok(()),
            login_result: Err(AppError::Unauthorized),
            stall_stats: false,
            submitted: Mutex::new(Vec::new()),
            stats_calls: AtomicUsize::new(0),
            seen_tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn with_stats(mut self, player_id: i64, stats: Result<PlayerStats, AppError>) -> Self {
        self.stats.insert(player_id, stats);
        self
    }

    pub fn stats_calls(&self) -> usize {
        self.stats_calls.load(Ordering::SeqCst)
    }

    pub fn submitted(&self) -> Vec<(i64, RoundSubmission)> {
        self.submitted.lock().expect("lock").clone()
    }
}

#[async_trait]
impl GolfApi for FakeApi {
    async fn get_player_stats(
        &self,
        auth: &AuthContext,
        player_id: i64,
    ) -> Result<PlayerStats, AppError> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_tokens
            .lock()
            .expect("lock")
            .push(auth.token().map(str::to_string));
        if self.stall_stats {
            std::future::pending::<()>().await;
        }
        self.stats
            .get(&player_id)
            .cloned()
            .unwrap_or_else(|| Err(AppError::NotFound(format!("player {player_id}"))))
    }

    async fn search_courses(
        &self,
        _auth: &AuthContext,
        term: &str,
    ) -> Result<Vec<Course>, AppError> {
        let term = term.to_lowercase();
        self.courses.clone().map(|courses| {
            courses
                .into_iter()
                .filter(|c| c.display_name().to_lowercase().contains(&term))
                .collect()
        })
    }

    async fn submit_round(
        &self,
        _auth: &AuthContext,
        player_id: i64,
        round: &RoundSubmission,
    ) -> Result<(), AppError> {
        self.submit_result.clone()?;
        self.submitted
            .lock()
            .expect("lock")
            .push((player_id, round.clone()));
        Ok(())
    }

    async fn get_leaderboard(&self, _auth: &AuthContext) -> Result<Vec<LeaderboardUser>, AppError> {
        self.leaderboard.clone()
    }

    async fn login(&self, _username: &str, _password: &str) -> Result<LoginResponse, AppError> {
        self.login_result.clone()
    }
}
