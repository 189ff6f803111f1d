use maud::{Markup, html};

use super::radar::render_radar;
use super::round_chart::{render_last_nine, render_recent_round};
use super::trend::render_trend;
use crate::controller::dashboard::DashboardData;
use crate::stats::{Metric, MetricSet};
use crate::view::index::{render_layout, render_notices};
use crate::view::leaderboard::render_leaderboard_table;

fn render_recent_form(form: &MetricSet, handicap: f64) -> Markup {
    html! {
        div class="card recent-form" {
            h2 class="card-title" { "Recent Form" }
            dl class="metric-list" {
                dt { "Handicap" } dd data-metric="handicap" { (format!("{handicap:.1}")) }
                @for (metric, label, suffix) in [
                    (Metric::AvgScorePerRound, "Average score", ""),
                    (Metric::AvgPuttsPerRound, "Putts per round", ""),
                    (Metric::AvgPenaltiesPerRound, "Penalties per round", ""),
                    (Metric::FairwayHitPercentage, "Fairways hit", "%"),
                    (Metric::GirPercentage, "Greens in regulation", "%"),
                ] {
                    dt { (label) }
                    dd data-metric=(metric.as_str()) { (format!("{:.1}", form.get(metric))) (suffix) }
                }
            }
        }
    }
}

/// The overview body, without the page shell.
#[must_use]
pub fn render_dashboard(data: &DashboardData) -> Markup {
    html! {
        (render_notices(&data.notices))
        div class="dashboard-grid" {
            (render_recent_round(&data.recent_round))
            (render_last_nine(&data.last_nine))
            (render_trend(&data.trend))
            (render_radar(&data.skills))
            (render_recent_form(&data.recent_form, data.handicap))
        }
        div class="card leaderboard-card" {
            h2 class="card-title" { "Leaderboard" }
            (render_leaderboard_table(&data.leaderboard))
        }
    }
}

#[must_use]
pub fn render_dashboard_page(data: &DashboardData, signed_in: bool) -> Markup {
    render_layout("Overview", signed_in, &render_dashboard(data))
}
