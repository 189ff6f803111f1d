use maud::{Markup, html};

pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 220.0;
const PADDING: f64 = 24.0;

/// One polyline of a line chart.
pub struct LineSeries<'a> {
    pub name: &'a str,
    pub class: &'a str,
    pub values: &'a [u32],
}

fn x_at(idx: usize, count: usize) -> f64 {
    if count <= 1 {
        return CHART_WIDTH / 2.0;
    }
    PADDING + (CHART_WIDTH - 2.0 * PADDING) * idx as f64 / (count - 1) as f64
}

fn y_at(value: u32, max: u32) -> f64 {
    let plot = CHART_HEIGHT - 2.0 * PADDING;
    if max == 0 {
        return CHART_HEIGHT - PADDING;
    }
    CHART_HEIGHT - PADDING - plot * f64::from(value) / f64::from(max)
}

fn points(values: &[u32], max: u32) -> String {
    values
        .iter()
        .enumerate()
        .map(|(idx, v)| format!("{:.1},{:.1}", x_at(idx, values.len()), y_at(*v, max)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// SVG line chart. Every `tick_every`-th label is printed under the x axis.
#[must_use]
pub fn render_line_chart(labels: &[String], series: &[LineSeries<'_>], tick_every: usize) -> Markup {
    let max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .max()
        .unwrap_or(0);
    let tick_every = tick_every.max(1);

    html! {
        svg class="line-chart" viewBox=(format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}"))
            preserveAspectRatio="none" role="img" {
            line class="axis" x1=(PADDING) y1=(CHART_HEIGHT - PADDING)
                x2=(CHART_WIDTH - PADDING) y2=(CHART_HEIGHT - PADDING) {}
            @for s in series {
                polyline class=(format!("series {}", s.class)) fill="none"
                    points=(points(s.values, max)) {
                    title { (s.name) }
                }
                @for (idx, v) in s.values.iter().enumerate() {
                    circle class=(format!("mark {}", s.class)) r="3"
                        cx=(format!("{:.1}", x_at(idx, s.values.len())))
                        cy=(format!("{:.1}", y_at(*v, max))) {
                        title { (labels.get(idx).map_or("", String::as_str)) ": " (v) }
                    }
                }
            }
            @for (idx, label) in labels.iter().enumerate() {
                @if (idx + 1) % tick_every == 0 || labels.len() <= tick_every {
                    text class="tick" text-anchor="middle"
                        x=(format!("{:.1}", x_at(idx, labels.len())))
                        y=(format!("{:.1}", CHART_HEIGHT - 4.0)) { (label) }
                }
            }
        }
        (render_legend(series.iter().map(|s| (s.name, s.class))))
    }
}

pub fn render_legend<'a>(entries: impl Iterator<Item = (&'a str, &'a str)>) -> Markup {
    html! {
        ul class="legend" {
            @for (name, class) in entries {
                li { span class=(format!("swatch {class}")) {} (name) }
            }
        }
    }
}
