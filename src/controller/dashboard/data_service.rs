use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::controller::backend::{GolfApi, with_cancel};
use crate::model::{
    AuthContext, LeaderboardRow, PlayerStats, format_round_timestamp, format_short_date,
};
use crate::mvu::error::AppError;
use crate::stats::normalize::finite_or;
use crate::stats::{
    Improvement, LAST_HOLES_WINDOW, Metric, MetricSet, PerHoleSeries, SkillScore, TrendSeries,
    aggregate_rounds, average_total, derive_player_metrics, derive_round_metrics,
    improvement_or, last_nine_series, per_hole_series, skill_scores, trend_series,
};

pub const LOAD_ERROR_NOTICE: &str = "Error loading data";
const PLACEHOLDER_ROUND_HOLES: usize = 18;
const PLACEHOLDER_TOTAL: u32 = 72;

/// Line chart of the latest round.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecentRoundCard {
    pub series: PerHoleSeries,
    pub total_score: u32,
    pub date_label: String,
    pub course_name: String,
    pub front_nine: u32,
    pub back_nine: u32,
    pub placeholder: bool,
}

/// Stacked bars over the first nine holes of the latest round.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LastNineCard {
    pub series: PerHoleSeries,
    pub total_score: u32,
    pub date_label: String,
    pub note: String,
    pub placeholder: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TrendCard {
    pub series: TrendSeries,
    pub improvement: Improvement,
    pub average_score: Option<i64>,
    pub placeholder: bool,
}

/// Everything the overview page shows, in render order.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub player_id: i64,
    pub skills: [SkillScore; 5],
    pub metrics: MetricSet,
    pub recent_form: MetricSet,
    pub handicap: f64,
    pub recent_round: RecentRoundCard,
    pub last_nine: LastNineCard,
    pub trend: TrendCard,
    pub leaderboard: Vec<LeaderboardRow>,
    pub notices: Vec<String>,
}

/// # Errors
///
/// Will return `Err` if the backend call fails or `cancel` fires first.
pub async fn load_player_stats(
    api: &dyn GolfApi,
    auth: &AuthContext,
    player_id: i64,
    cancel: &CancellationToken,
) -> Result<PlayerStats, AppError> {
    with_cancel(cancel, api.get_player_stats(auth, player_id)).await
}

fn recent_round_card(stats: Option<&PlayerStats>) -> RecentRoundCard {
    let Some(round) = stats
        .and_then(PlayerStats::most_recent_round)
        .filter(|r| !r.hole_scores.is_empty())
    else {
        let series = PerHoleSeries::placeholder_line(PLACEHOLDER_ROUND_HOLES);
        return RecentRoundCard {
            series,
            total_score: PLACEHOLDER_TOTAL,
            date_label: "Today".to_string(),
            course_name: "Unknown Course".to_string(),
            front_nine: 0,
            back_nine: 0,
            placeholder: true,
        };
    };

    let metrics = derive_round_metrics(round);
    let series = per_hole_series(round);
    RecentRoundCard {
        total_score: series.total_strokes(),
        series,
        date_label: round
            .date
            .as_ref()
            .map_or_else(|| "Recent Round".to_string(), format_short_date),
        course_name: round
            .course_name
            .clone()
            .unwrap_or_else(|| "Unknown Course".to_string()),
        front_nine: metrics.get(Metric::FrontNine) as u32,
        back_nine: metrics.get(Metric::BackNine) as u32,
        placeholder: false,
    }
}

fn last_nine_card(stats: Option<&PlayerStats>) -> LastNineCard {
    let round = stats
        .and_then(PlayerStats::most_recent_round)
        .filter(|r| !r.hole_scores.is_empty());
    let Some(round) = round else {
        return LastNineCard {
            series: PerHoleSeries::placeholder_bars(LAST_HOLES_WINDOW),
            total_score: 0,
            date_label: String::new(),
            note: "No notes available".to_string(),
            placeholder: true,
        };
    };

    let series = last_nine_series(round);
    LastNineCard {
        total_score: series.total_strokes(),
        series,
        date_label: round
            .date
            .as_ref()
            .map(format_round_timestamp)
            .unwrap_or_default(),
        note: round
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("No notes available")
            .to_string(),
        placeholder: false,
    }
}

fn trend_card(stats: Option<&PlayerStats>, window: usize) -> TrendCard {
    let rounds = stats.map(|s| s.scores_list.as_slice()).unwrap_or_default();
    if rounds.is_empty() {
        return TrendCard {
            series: TrendSeries::placeholder(window),
            improvement: Improvement::default(),
            average_score: None,
            placeholder: true,
        };
    }
    let series = trend_series(rounds, window);
    TrendCard {
        improvement: improvement_or(&series.total_scores, Improvement::default()),
        average_score: average_total(&series.total_scores),
        series,
        placeholder: false,
    }
}

/// Assembles the overview from whatever was fetched. Missing pieces fall back to their
/// placeholder datasets; nothing here fails.
#[must_use]
pub fn build_dashboard(
    player_id: i64,
    stats: Option<&PlayerStats>,
    leaderboard: Vec<LeaderboardRow>,
    trend_window: usize,
    notices: Vec<String>,
) -> DashboardData {
    let base = PlayerStats::default();
    let metrics = derive_player_metrics(stats.unwrap_or(&base));
    let recent: Vec<_> = stats
        .map(|s| s.scores_list.iter().take(trend_window).cloned().collect())
        .unwrap_or_default();

    DashboardData {
        player_id,
        skills: skill_scores(&metrics),
        handicap: finite_or(Some(metrics.get(Metric::Handicap)), 0.0),
        recent_form: derive_player_metrics(&aggregate_rounds(&recent)),
        metrics,
        recent_round: recent_round_card(stats),
        last_nine: last_nine_card(stats),
        trend: trend_card(stats, trend_window),
        leaderboard,
        notices,
    }
}
