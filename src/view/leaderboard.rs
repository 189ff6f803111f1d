use maud::{Markup, html};

use crate::model::LeaderboardRow;
use crate::view::index::render_layout;

#[must_use]
pub fn render_leaderboard_table(rows: &[LeaderboardRow]) -> Markup {
    html! {
        table class="styled-table leaderboard" {
            thead {
                tr {
                    th { "Rank" }
                    th { "User" }
                    th { "Status" }
                    th { "Handicap" }
                    th { "Average Score" }
                    th { "Total Rounds" }
                }
            }
            tbody {
                @for row in rows {
                    tr {
                        td class="rank" { (row.rank) }
                        td class="user" { (row.user) }
                        td class="status" {
                            span class=(format!("chip status-{}", row.status.label().to_lowercase())) {
                                (row.status.label())
                            }
                        }
                        td class="handicap" { (format!("{:.1}", row.handicap)) }
                        td class="average" { (format!("{:.1}", row.average_score)) }
                        td class="rounds" { (row.total_rounds) }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_leaderboard_page(rows: &[LeaderboardRow], load_failed: bool, signed_in: bool) -> Markup {
    let content = html! {
        @if load_failed {
            div class="alert alert-error" role="alert" { "Error loading data" }
        }
        (render_leaderboard_table(rows))
    };
    render_layout("Leaderboard", signed_in, &content)
}
