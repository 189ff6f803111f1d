use maud::{Markup, html};
use std::f64::consts::PI;

use crate::stats::SkillScore;

const SIZE: f64 = 300.0;
const RADIUS: f64 = 110.0;
const RINGS: usize = 4;

/// Radial scale: at least 100, widened when a target overshoots it.
#[must_use]
pub fn radar_scale(skills: &[SkillScore]) -> f64 {
    skills
        .iter()
        .map(|s| s.target_skill)
        .filter(|v| v.is_finite())
        .fold(100.0, f64::max)
}

fn vertex(idx: usize, count: usize, value: f64, scale: f64) -> (f64, f64) {
    let angle = 2.0 * PI * idx as f64 / count as f64 - PI / 2.0;
    let r = RADIUS * (value / scale).clamp(0.0, 1.0);
    let center = SIZE / 2.0;
    (center + r * angle.cos(), center + r * angle.sin())
}

fn polygon_points(values: impl Iterator<Item = f64>, count: usize, scale: f64) -> String {
    values
        .enumerate()
        .map(|(idx, v)| {
            let (x, y) = vertex(idx, count, v, scale);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn render_radar(skills: &[SkillScore]) -> Markup {
    let count = skills.len().max(1);
    let scale = radar_scale(skills);

    html! {
        div class="card radar-card" {
            h2 class="card-title" { "Skill Profile" }
            svg class="radar" viewBox=(format!("0 0 {SIZE} {SIZE}")) role="img" {
                @for ring in 1..=RINGS {
                    polygon class="radar-ring" fill="none"
                        points=(polygon_points(std::iter::repeat_n(scale * ring as f64 / RINGS as f64, count), count, scale)) {}
                }
                @for (idx, skill) in skills.iter().enumerate() {
                    @let (x, y) = vertex(idx, count, scale, scale);
                    line class="radar-spoke" x1=(SIZE / 2.0) y1=(SIZE / 2.0)
                        x2=(format!("{x:.1}")) y2=(format!("{y:.1}")) {}
                    text class="radar-label" text-anchor="middle"
                        x=(format!("{x:.1}")) y=(format!("{y:.1}")) { (skill.category.label()) }
                }
                polygon class="radar-target"
                    points=(polygon_points(skills.iter().map(|s| s.target_skill), count, scale)) {
                    title { "Target Skill" }
                }
                polygon class="radar-current"
                    points=(polygon_points(skills.iter().map(|s| s.current_skill), count, scale)) {
                    title { "Current Skill" }
                }
            }
            table class="styled-table radar-values" {
                thead { tr { th { "Skill" } th { "Current" } th { "Target" } } }
                tbody {
                    @for skill in skills {
                        tr data-category=(skill.category.label()) {
                            td { (skill.category.label()) }
                            td class="current" { (format!("{:.1}", skill.current_skill)) }
                            td class="target" { (format!("{:.1}", skill.target_skill)) }
                        }
                    }
                }
            }
        }
    }
}
