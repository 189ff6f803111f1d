use maud::{Markup, html};

use super::chart::{LineSeries, render_legend, render_line_chart};
use crate::controller::dashboard::{LastNineCard, RecentRoundCard};

#[must_use]
pub fn render_recent_round(card: &RecentRoundCard) -> Markup {
    let s = &card.series;
    html! {
        div class="card recent-round" {
            h2 class="card-title" { "Golf Round Performance" }
            div class="card-headline" {
                span class="headline-value" { (card.total_score) }
                span class="chip chip-positive" { (card.date_label) }
            }
            p class="caption" { (card.course_name) }
            @if !card.placeholder {
                p class="caption nine-split" {
                    "Front 9: " (card.front_nine) " · Back 9: " (card.back_nine)
                }
            }
            (render_line_chart(&s.labels, &[
                LineSeries { name: "Strokes", class: "strokes", values: &s.strokes },
                LineSeries { name: "Putts", class: "putts", values: &s.putts },
                LineSeries { name: "Par", class: "par", values: &s.par },
            ], 3))
        }
    }
}

fn pct(value: u32, max: u32) -> String {
    if max == 0 {
        return "0%".to_string();
    }
    format!("{:.1}%", f64::from(value) * 100.0 / f64::from(max))
}

/// Per hole: putts, penalties and the remaining strokes stacked into one column.
#[must_use]
pub fn render_last_nine(card: &LastNineCard) -> Markup {
    let s = &card.series;
    // putts + penalties can exceed strokes on bad data, so scale by the tallest stack
    let max = s
        .putts
        .iter()
        .zip(&s.penalties)
        .zip(&s.other_strokes)
        .map(|((p, pen), o)| p.saturating_add(*pen).saturating_add(*o))
        .max()
        .unwrap_or(0);
    html! {
        div class="card last-nine" {
            h2 class="card-title" { "Last 9 Holes" }
            div class="card-headline" {
                span class="headline-value" { (card.total_score) }
                @if !card.date_label.is_empty() {
                    span class="chip" { (card.date_label) }
                }
            }
            p class="caption round-note" { (card.note) }
            div class="stacked-bars" {
                @for (((label, putts), penalties), other) in s.labels.iter().zip(&s.putts).zip(&s.penalties).zip(&s.other_strokes) {
                    div class="bar-column" {
                        div class="bar-stack" {
                            div class="bar-seg other" style=(format!("height: {}", pct(*other, max))) title=(format!("Other strokes: {other}")) {}
                            div class="bar-seg penalties" style=(format!("height: {}", pct(*penalties, max))) title=(format!("Penalties: {penalties}")) {}
                            div class="bar-seg putts" style=(format!("height: {}", pct(*putts, max))) title=(format!("Putts: {putts}")) {}
                        }
                        span class="bar-label" { (label) }
                    }
                }
            }
            (render_legend([("Putts", "putts"), ("Penalties", "penalties"), ("Other strokes", "other")].into_iter()))
        }
    }
}
