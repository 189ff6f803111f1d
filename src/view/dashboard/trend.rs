use maud::{Markup, html};

use super::chart::{LineSeries, render_line_chart};
use crate::controller::dashboard::TrendCard;

#[must_use]
pub fn render_trend(card: &TrendCard) -> Markup {
    let s = &card.series;
    let chip = if card.improvement.is_non_negative() {
        "chip chip-positive"
    } else {
        "chip chip-negative"
    };
    html! {
        div class="card trend" {
            h2 class="card-title" { "Score Trend" }
            div class="card-headline" {
                span class="headline-value" {
                    @match card.average_score {
                        Some(avg) => { (avg) }
                        None => { "--" }
                    }
                }
                span class=(chip) { (card.improvement.percentage) }
            }
            p class="caption" {
                "Average score over the last " (s.len()) " rounds"
            }
            (render_line_chart(&s.labels, &[
                LineSeries { name: "Total Score", class: "strokes", values: &s.total_scores },
                LineSeries { name: "Total Putts", class: "putts", values: &s.total_putts },
                LineSeries { name: "Par", class: "par", values: &s.total_par },
            ], 1))
        }
    }
}
