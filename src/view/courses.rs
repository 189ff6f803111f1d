use maud::{Markup, html};

use crate::model::{Course, Gender, Tee};
use crate::view::index::render_layout;

fn new_round_link(course: &Course, tee: &Tee) -> String {
    reqwest::Url::parse_with_params(
        "http://localhost/rounds/new",
        &[("course", course.display_name()), ("tee", tee.tee_name.as_str())],
    )
    .map(|u| format!("{}?{}", u.path(), u.query().unwrap_or_default()))
    .unwrap_or_else(|_| "/rounds/new".to_string())
}

fn opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

fn render_tee_holes(tee: &Tee) -> Markup {
    html! {
        details class="tee-holes" {
            summary { "Holes" }
            table class="styled-table" {
                thead { tr { th { "Hole" } th { "Par" } th { "Yardage" } th { "Handicap" } } }
                tbody {
                    @for (idx, hole) in tee.holes.iter().enumerate() {
                        tr {
                            td { @if hole.hole_number > 0 { (hole.hole_number) } @else { (idx + 1) } }
                            td { (hole.par) }
                            td { (hole.yardage) }
                            td { (hole.handicap) }
                        }
                    }
                }
            }
        }
    }
}

fn render_tees(course: &Course, gender: Gender) -> Markup {
    let tees = course.tees.for_gender(gender);
    html! {
        @if !tees.is_empty() {
            h4 { (gender.label()) " tees" }
            table class="styled-table tees" {
                thead {
                    tr {
                        th { "Tee" } th { "Rating" } th { "Slope" } th { "Yards" }
                        th { "Par" } th { "Holes" } th {}
                    }
                }
                tbody {
                    @for tee in tees {
                        tr {
                            td class="tee-name" { (tee.tee_name) }
                            td { (opt(tee.course_rating)) }
                            td { (opt(tee.slope_rating)) }
                            td { (tee.total_yards) }
                            td { (tee.par_total) }
                            td { (tee.hole_count()) }
                            td { a class="add-round" href=(new_round_link(course, tee)) { "Add round" } }
                        }
                        @if !tee.holes.is_empty() {
                            tr class="tee-detail" { td colspan="7" { (render_tee_holes(tee)) } }
                        }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_course(course: &Course) -> Markup {
    let location = course.location.one_line();
    html! {
        section class="card course" {
            h3 class="course-name" { (course.display_name()) }
            @if let Some(club) = course.club_name.as_deref().filter(|c| *c != course.display_name()) {
                p class="caption" { (club) }
            }
            @if !location.is_empty() {
                p class="caption location" { (location) }
            }
            (render_tees(course, Gender::Male))
            (render_tees(course, Gender::Female))
        }
    }
}

#[must_use]
pub fn render_courses_page(term: &str, courses: &[Course], error: Option<&str>) -> Markup {
    let content = html! {
        form class="search" method="get" action="/courses" {
            input type="search" name="search" value=(term) placeholder="Search courses";
            button type="submit" { "Search" }
        }
        @if let Some(error) = error {
            div class="alert alert-error" role="alert" { (error) }
        }
        @if !term.is_empty() && courses.is_empty() && error.is_none() {
            p class="empty" { "No courses found." }
        }
        @for course in courses {
            (render_course(course))
        }
    };
    render_layout("Courses", true, &content)
}
