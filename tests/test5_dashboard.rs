mod common;

use common::FakeApi;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use rusty_golf_stats::controller::dashboard::{LOAD_ERROR_NOTICE, build_dashboard};
use rusty_golf_stats::controller::leaderboard::{default_leaderboard_rows, load_leaderboard};
use rusty_golf_stats::model::{AuthContext, PlayerStats, PlayerStatus};
use rusty_golf_stats::mvu::dashboard::{DashboardModel, Deps, Effect, Msg, update};
use rusty_golf_stats::mvu::error::AppError;
use rusty_golf_stats::mvu::runtime::run_dashboard;

#[test]
fn empty_dashboard_uses_placeholders() {
    let data = build_dashboard(1, None, Vec::new(), 10, vec![LOAD_ERROR_NOTICE.to_string()]);
    assert!(data.recent_round.placeholder);
    assert_eq!(data.recent_round.series.len(), 18);
    assert_eq!(data.recent_round.total_score, 72);
    assert!(data.last_nine.placeholder);
    assert_eq!(data.last_nine.series.len(), 9);
    assert_eq!(data.last_nine.note, "No notes available");
    assert!(data.trend.placeholder);
    assert_eq!(data.trend.series.len(), 10);
    assert_eq!(data.trend.improvement.percentage, "0%");
    assert_eq!(data.skills[1].current_skill, 93.0);
    assert_eq!(data.handicap, 0.0);
    assert_eq!(data.notices, vec!["Error loading data".to_string()]);
}

#[test]
fn dashboard_from_stats() {
    let mut stats = common::sample_stats();
    stats.scores_list[0].notes = Some("  ".to_string());
    let data = build_dashboard(3, Some(&stats), default_leaderboard_rows(), 10, Vec::new());

    assert!(!data.recent_round.placeholder);
    assert_eq!(data.recent_round.total_score, 75);
    assert_eq!(data.recent_round.date_label, "May 6");
    assert_eq!(data.recent_round.course_name, "Pebble Creek");
    assert_eq!(data.recent_round.front_nine + data.recent_round.back_nine, 75);

    assert_eq!(data.last_nine.series.len(), 9);
    assert_eq!(data.last_nine.total_score, 36);
    assert_eq!(data.last_nine.date_label, "05/06/2025/03:04 PM");
    assert_eq!(data.last_nine.note, "No notes available");

    assert_eq!(data.trend.series.total_scores, vec![80, 78, 75]);
    assert_eq!(data.trend.improvement.value, 5);
    assert_eq!(data.trend.improvement.percentage, "+6.3%");
    assert_eq!(data.trend.average_score, Some(78));
    assert_eq!(data.handicap, 12.4);
    assert_eq!(data.leaderboard.len(), 1);
}

#[test]
fn trend_window_limits_rounds() {
    let stats = common::sample_stats();
    let data = build_dashboard(3, Some(&stats), Vec::new(), 2, Vec::new());
    assert_eq!(data.trend.series.total_scores, vec![78, 75]);
    assert_eq!(data.trend.improvement.value, 3);
}

#[test]
fn update_waits_for_both_fetches() {
    let mut model = DashboardModel::new(1, true, 10);
    assert_eq!(
        update(&mut model, Msg::PageLoad),
        vec![Effect::LoadStats, Effect::LoadLeaderboard]
    );
    assert!(update(&mut model, Msg::StatsLoaded(PlayerStats::default())).is_empty());
    assert_eq!(
        update(&mut model, Msg::LeaderboardFailed(AppError::Status(500))),
        vec![Effect::Assemble]
    );
    assert_eq!(model.leaderboard, Some(default_leaderboard_rows()));
    assert_eq!(model.notices, vec![LOAD_ERROR_NOTICE.to_string()]);
}

#[tokio::test]
async fn run_dashboard_with_fake_backend() -> Result<(), Box<dyn std::error::Error>> {
    common::init_logging();
    let mut api = FakeApi::new().with_stats(1, Ok(common::sample_stats()));
    api.leaderboard = Ok(common::leaderboard_users());
    let auth = AuthContext::new(Some("tok".to_string()), Some(1));
    let cancel = CancellationToken::new();
    let deps = Deps { api: &api, auth: &auth, cancel: &cancel };

    let mut model = DashboardModel::new(1, false, 10);
    run_dashboard(&mut model, Msg::PageLoad, deps).await?;

    let data = model.data.as_ref().ok_or("no data")?;
    assert!(data.notices.is_empty());
    assert_eq!(data.trend.improvement.percentage, "+6.3%");
    // leaderboard users 1 and 2 are looked up, the id-less one is not
    assert_eq!(data.leaderboard.len(), 3);
    assert_eq!(data.leaderboard[0].rank, "1");
    assert_eq!(data.leaderboard[0].handicap, 12.4);
    assert_eq!(data.leaderboard[1].handicap, 0.0);
    assert_eq!(data.leaderboard[1].status, PlayerStatus::Offline);
    assert_eq!(data.leaderboard[2].handicap, 0.0);
    assert!(model.markup.is_some());
    assert!(api
        .seen_tokens
        .lock()
        .map_err(|e| e.to_string())?
        .iter()
        .all(|t| t.as_deref() == Some("tok")));
    Ok(())
}

#[tokio::test]
async fn failed_stats_fall_back_with_notice() -> Result<(), Box<dyn std::error::Error>> {
    let mut api = FakeApi::new().with_stats(1, Err(AppError::Status(500)));
    api.leaderboard = Err(AppError::Network("refused".to_string()));
    let auth = AuthContext::default();
    let cancel = CancellationToken::new();
    let deps = Deps { api: &api, auth: &auth, cancel: &cancel };

    let mut model = DashboardModel::new(1, true, 10);
    run_dashboard(&mut model, Msg::PageLoad, deps).await?;

    let data = model.data.as_ref().ok_or("no data")?;
    assert_eq!(data.notices, vec![LOAD_ERROR_NOTICE.to_string()]);
    assert!(data.recent_round.placeholder);
    assert_eq!(data.leaderboard, default_leaderboard_rows());
    assert!(model.markup.is_none());
    assert!(!model.session_expired);
    Ok(())
}

#[tokio::test]
async fn unauthorized_marks_session_expired() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeApi::new().with_stats(1, Err(AppError::Unauthorized));
    let auth = AuthContext::new(Some("stale".to_string()), Some(1));
    let cancel = CancellationToken::new();
    let deps = Deps { api: &api, auth: &auth, cancel: &cancel };

    let mut model = DashboardModel::new(1, true, 10);
    run_dashboard(&mut model, Msg::PageLoad, deps).await?;
    assert!(model.session_expired);
    Ok(())
}

#[tokio::test]
async fn cancelled_request_renders_nothing() {
    let mut api = FakeApi::new();
    api.stall_stats = true;
    let auth = AuthContext::default();
    let cancel = CancellationToken::new();
    let deps = Deps { api: &api, auth: &auth, cancel: &cancel };

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let mut model = DashboardModel::new(1, false, 10);
    let result = run_dashboard(&mut model, Msg::PageLoad, deps).await;
    assert_eq!(result, Err(AppError::Cancelled));
    assert!(model.data.is_none());
    assert!(model.markup.is_none());
    assert_eq!(model.error, Some(AppError::Cancelled));
}

#[tokio::test]
async fn leaderboard_handicap_failures_become_zero() -> Result<(), Box<dyn std::error::Error>> {
    let mut api = FakeApi::new()
        .with_stats(1, Err(AppError::Status(502)))
        .with_stats(2, Ok(PlayerStats { handicap: Some(8.0), ..PlayerStats::default() }));
    api.leaderboard = Ok(common::leaderboard_users());
    let cancel = CancellationToken::new();

    let rows = load_leaderboard(&api, &AuthContext::default(), &cancel).await?;
    let handicaps: Vec<f64> = rows.iter().map(|r| r.handicap).collect();
    assert_eq!(handicaps, vec![0.0, 8.0, 0.0]);
    assert_eq!(api.stats_calls(), 2);
    let ranks: Vec<&str> = rows.iter().map(|r| r.rank.as_str()).collect();
    assert_eq!(ranks, vec!["1", "2", "3"]);
    Ok(())
}
