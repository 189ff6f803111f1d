use maud::{Markup, html};

use crate::controller::rounds::RoundForm;
use crate::model::Tee;
use crate::view::index::render_layout;

const DEFAULT_ROWS: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormAlert {
    pub kind: AlertKind,
    pub message: String,
}

impl FormAlert {
    #[must_use]
    pub fn success(message: String) -> Self {
        Self { kind: AlertKind::Success, message }
    }

    #[must_use]
    pub fn error(message: String) -> Self {
        Self { kind: AlertKind::Error, message }
    }
}

/// What the round entry page shows.
#[derive(Debug, Clone, Default)]
pub struct RoundFormView {
    pub course: String,
    pub tee_name: String,
    pub tee: Option<Tee>,
    pub notes: String,
    pub alert: Option<FormAlert>,
    /// Values to put back into the form after a rejected submission.
    pub entered: Option<RoundForm>,
}

impl RoundFormView {
    #[must_use]
    pub fn new(course: &str, tee_name: &str) -> Self {
        Self {
            course: course.trim().to_string(),
            tee_name: tee_name.trim().to_string(),
            ..Self::default()
        }
    }

    fn rows(&self) -> u32 {
        match self.tee.as_ref().map(Tee::hole_count) {
            Some(n) if n > 0 => n,
            _ => DEFAULT_ROWS,
        }
    }
}

fn render_alert(alert: &FormAlert) -> Markup {
    let class = match alert.kind {
        AlertKind::Success => "alert alert-success",
        AlertKind::Error => "alert alert-error",
    };
    html! { div class=(class) role="alert" { (alert.message) } }
}

fn render_hole_row(view: &RoundFormView, n: u32) -> Markup {
    let par = view.tee.as_ref().and_then(|t| t.hole(n)).map(|h| h.par);
    let raw = view.entered.as_ref().and_then(|f| f.hole(n));
    let text = |v: Option<&Option<String>>| v.and_then(|o| o.clone()).unwrap_or_default();
    html! {
        tr data-hole=(n) {
            td { (n) }
            td class="par" { @if let Some(par) = par { (par) } @else { "-" } }
            td { input type="number" min="1" name=(format!("strokes_{n}")) value=(text(raw.map(|r| &r.strokes))); }
            td { input type="number" min="0" name=(format!("putts_{n}")) value=(text(raw.map(|r| &r.putts))); }
            td { input type="number" min="0" name=(format!("penalties_{n}")) value=(text(raw.map(|r| &r.penalties))); }
            td { input type="checkbox" name=(format!("fairway_{n}")) checked[raw.is_some_and(|r| r.fairway_hit)]; }
            td { input type="checkbox" name=(format!("gir_{n}")) checked[raw.is_some_and(|r| r.green_in_regulation)]; }
        }
    }
}

#[must_use]
pub fn render_round_form(view: &RoundFormView) -> Markup {
    html! {
        @if let Some(alert) = &view.alert {
            (render_alert(alert))
        }
        form class="round-form" method="post" action="/rounds" {
            label { "Course " input type="text" name="course" value=(view.course) required; }
            label { "Tee " input type="text" name="tee" value=(view.tee_name) required; }
            table class="styled-table holes" {
                thead {
                    tr {
                        th { "Hole" } th { "Par" } th { "Strokes" } th { "Putts" }
                        th { "Penalties" } th { "Fairway" } th { "GIR" }
                    }
                }
                tbody {
                    @for n in 1..=view.rows() {
                        (render_hole_row(view, n))
                    }
                }
            }
            label { "Notes " textarea name="notes" { (view.notes) } }
            button type="submit" { "Save round" }
        }
    }
}

#[must_use]
pub fn render_round_form_page(view: &RoundFormView) -> Markup {
    render_layout("Add Round", true, &render_round_form(view))
}
