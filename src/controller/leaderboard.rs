use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse};
use futures::future::join_all;
use serde_json::json;
use std::collections::HashMap;
use tokio_util::sync::CancellationToken;

use crate::args::CleanArgs;
use crate::controller::auth::{auth_from_request, session_expired_redirect};
use crate::controller::backend::{GolfApi, with_cancel};
use crate::model::{AuthContext, LeaderboardRow, LeaderboardUser, PlayerStatus};
use crate::controller::response::{html, wants_json};
use crate::mvu::error::AppError;
use crate::stats::normalize::finite_or;
use crate::view::leaderboard::render_leaderboard_page;

/// Shown when the backend leaderboard cannot be fetched.
#[must_use]
pub fn default_leaderboard_rows() -> Vec<LeaderboardRow> {
    vec![LeaderboardRow {
        rank: "1".to_string(),
        user: "John Doe".to_string(),
        status: PlayerStatus::Online,
        handicap: 5.4,
        average_score: 72.0,
        total_rounds: 120,
    }]
}

async fn handicap_for(
    api: &dyn GolfApi,
    auth: &AuthContext,
    user: &LeaderboardUser,
    cancel: &CancellationToken,
) -> Result<f64, AppError> {
    let Some(player_id) = user.player_id() else {
        return Ok(0.0);
    };
    match with_cancel(cancel, api.get_player_stats(auth, player_id)).await {
        Ok(stats) => Ok(finite_or(stats.handicap, 0.0)),
        Err(AppError::Cancelled) => Err(AppError::Cancelled),
        Err(e) => {
            log::warn!("Handicap for player {player_id} unavailable: {e}");
            Ok(0.0)
        }
    }
}

/// Fetches the leaderboard and each listed player's handicap concurrently. Rows are ranked
/// from 1 in the order the backend returns them.
///
/// # Errors
///
/// Will return `Err` if the leaderboard itself cannot be fetched or `cancel` fires.
pub async fn load_leaderboard(
    api: &dyn GolfApi,
    auth: &AuthContext,
    cancel: &CancellationToken,
) -> Result<Vec<LeaderboardRow>, AppError> {
    let users = with_cancel(cancel, api.get_leaderboard(auth)).await?;
    let handicaps = join_all(
        users
            .iter()
            .map(|user| handicap_for(api, auth, user, cancel)),
    )
    .await;

    let mut rows = Vec::with_capacity(users.len());
    for (idx, (user, handicap)) in users.iter().zip(handicaps).enumerate() {
        rows.push(LeaderboardRow::from_user(idx + 1, user, handicap?));
    }
    Ok(rows)
}

pub async fn leaderboard(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    api: Data<dyn GolfApi>,
    args: Data<CleanArgs>,
) -> HttpResponse {
    let mut auth = auth_from_request(&req, &args);
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();
    let want_json = wants_json(&query.0);

    let loaded = load_leaderboard(api.get_ref(), &auth, &cancel).await;
    let (rows, notice) = match loaded {
        Ok(rows) => (rows, None),
        Err(AppError::Unauthorized) if auth.is_authenticated() => {
            return session_expired_redirect(&mut auth);
        }
        Err(e) => {
            log::warn!("Leaderboard fetch failed, using default rows: {e}");
            (default_leaderboard_rows(), Some(e.to_string()))
        }
    };

    if want_json {
        HttpResponse::Ok().json(json!({ "rows": rows, "error": notice }))
    } else {
        html(render_leaderboard_page(&rows, notice.is_some(), auth.is_authenticated()))
    }
}
