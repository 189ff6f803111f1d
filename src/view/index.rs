use maud::{DOCTYPE, Markup, html};

pub const APP_TITLE: &str = "Golf Stats";

fn render_nav(signed_in: bool) -> Markup {
    html! {
        nav class="top-nav" {
            a class="brand" href="/" { (APP_TITLE) }
            a href="/" { "Dashboard" }
            a href="/leaderboard" { "Leaderboard" }
            a href="/courses" { "Courses" }
            a href="/rounds/new" { "Add Round" }
            @if signed_in {
                a class="nav-auth" href="/signout" { "Sign out" }
            } @else {
                a class="nav-auth" href="/signin" { "Sign in" }
            }
        }
    }
}

/// Page shell shared by every route.
#[must_use]
pub fn render_layout(title: &str, signed_in: bool, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="stylesheet" type="text/css" href="/static/dashboard.css";
                title { (title) " | " (APP_TITLE) }
            }
            body {
                (render_nav(signed_in))
                main class="content" {
                    h1 { (title) }
                    (content)
                }
            }
        }
    }
}

#[must_use]
pub fn render_notices(notices: &[String]) -> Markup {
    html! {
        @for notice in notices {
            div class="alert alert-error" role="alert" { (notice) }
        }
    }
}
