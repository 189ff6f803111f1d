use maud::Markup;
use std::collections::HashMap;
use std::hash::BuildHasher;
use tokio_util::sync::CancellationToken;

use super::error::AppError;
use crate::controller::backend::GolfApi;
use crate::controller::dashboard::data_service::{
    DashboardData, LOAD_ERROR_NOTICE, build_dashboard, load_player_stats,
};
use crate::controller::leaderboard::{default_leaderboard_rows, load_leaderboard};
use crate::controller::response::wants_json;
use crate::model::{AuthContext, LeaderboardRow, PlayerStats};
use crate::view::dashboard::render_dashboard_page;

#[derive(Debug, Clone)]
pub struct DashboardModel {
    pub player_id: i64,
    pub want_json: bool,
    pub trend_window: usize,
    pub signed_in: bool,
    pub stats: Option<PlayerStats>,
    pub stats_done: bool,
    pub leaderboard: Option<Vec<LeaderboardRow>>,
    pub notices: Vec<String>,
    pub session_expired: bool,
    pub data: Option<DashboardData>,
    pub markup: Option<Markup>,
    pub error: Option<AppError>,
}

impl DashboardModel {
    #[must_use]
    pub fn new(player_id: i64, want_json: bool, trend_window: usize) -> Self {
        Self {
            player_id,
            want_json,
            trend_window,
            signed_in: false,
            stats: None,
            stats_done: false,
            leaderboard: None,
            notices: Vec::new(),
            session_expired: false,
            data: None,
            markup: None,
            error: None,
        }
    }

    fn ready(&self) -> bool {
        self.stats_done && self.leaderboard.is_some()
    }

    fn notice(&mut self, text: &str) {
        if !self.notices.iter().any(|n| n == text) {
            self.notices.push(text.to_string());
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    StatsLoaded(PlayerStats),
    StatsFailed(AppError),
    LeaderboardLoaded(Vec<LeaderboardRow>),
    LeaderboardFailed(AppError),
    Assembled(Box<DashboardData>, Option<Markup>),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    LoadStats,
    LoadLeaderboard,
    Assemble,
}

fn assemble_when_ready(model: &DashboardModel) -> Vec<Effect> {
    if model.ready() && model.data.is_none() {
        vec![Effect::Assemble]
    } else {
        vec![]
    }
}

pub fn update(model: &mut DashboardModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => vec![Effect::LoadStats, Effect::LoadLeaderboard],
        Msg::StatsLoaded(stats) => {
            model.stats = Some(stats);
            model.stats_done = true;
            assemble_when_ready(model)
        }
        Msg::StatsFailed(e) => {
            log::warn!("Stats for player {} unavailable: {e}", model.player_id);
            if e == AppError::Unauthorized {
                model.session_expired = true;
            }
            model.notice(LOAD_ERROR_NOTICE);
            model.stats_done = true;
            assemble_when_ready(model)
        }
        Msg::LeaderboardLoaded(rows) => {
            model.leaderboard = Some(rows);
            assemble_when_ready(model)
        }
        Msg::LeaderboardFailed(e) => {
            log::warn!("Leaderboard unavailable, using default rows: {e}");
            if e == AppError::Unauthorized {
                model.session_expired = true;
            }
            model.notice(LOAD_ERROR_NOTICE);
            model.leaderboard = Some(default_leaderboard_rows());
            assemble_when_ready(model)
        }
        Msg::Assembled(data, markup) => {
            model.data = Some(*data);
            model.markup = markup;
            vec![]
        }
        Msg::Cancelled => {
            model.error = Some(AppError::Cancelled);
            vec![]
        }
    }
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub api: &'a dyn GolfApi,
    pub auth: &'a AuthContext,
    pub cancel: &'a CancellationToken,
}

pub async fn run_effect(effect: Effect, model: &DashboardModel, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::LoadStats => {
            match load_player_stats(deps.api, deps.auth, model.player_id, deps.cancel).await {
                Ok(stats) => Msg::StatsLoaded(stats),
                Err(AppError::Cancelled) => Msg::Cancelled,
                Err(e) => Msg::StatsFailed(e),
            }
        }
        Effect::LoadLeaderboard => match load_leaderboard(deps.api, deps.auth, deps.cancel).await {
            Ok(rows) => Msg::LeaderboardLoaded(rows),
            Err(AppError::Cancelled) => Msg::Cancelled,
            Err(e) => Msg::LeaderboardFailed(e),
        },
        Effect::Assemble => {
            if deps.cancel.is_cancelled() {
                return Msg::Cancelled;
            }
            let data = build_dashboard(
                model.player_id,
                model.stats.as_ref(),
                model.leaderboard.clone().unwrap_or_default(),
                model.trend_window,
                model.notices.clone(),
            );
            let markup = (!model.want_json).then(|| render_dashboard_page(&data, model.signed_in));
            Msg::Assembled(Box::new(data), markup)
        }
    }
}

/// Reads `player` and `json` from the query. The signed-in user wins over `fallback_player`
/// when no player is named.
///
/// # Errors
///
/// Returns `AppError::Validation` when `player` is present but not a number.
pub fn decode_request_to_model<S: BuildHasher>(
    query: &HashMap<String, String, S>,
    auth: &AuthContext,
    fallback_player: i64,
    trend_window: usize,
) -> Result<DashboardModel, AppError> {
    let player_id = match query.get("player").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| AppError::Validation(format!("player '{raw}' is not a valid id")))?,
        None => auth.user_id().unwrap_or(fallback_player),
    };
    let mut model = DashboardModel::new(player_id, wants_json(query), trend_window);
    model.signed_in = auth.is_authenticated();
    Ok(model)
}
