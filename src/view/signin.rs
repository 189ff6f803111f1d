use maud::{Markup, html};

use crate::view::index::render_layout;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigninErrors {
    pub username: Option<String>,
    pub password: Option<String>,
    pub general: Option<String>,
}

impl SigninErrors {
    #[must_use]
    pub fn any(&self) -> bool {
        self.username.is_some() || self.password.is_some() || self.general.is_some()
    }
}

#[must_use]
pub fn render_signin_page(message: Option<&str>, username: &str, errors: &SigninErrors) -> Markup {
    let content = html! {
        @if let Some(message) = message.filter(|m| !m.trim().is_empty()) {
            div class="alert alert-info" role="status" { (message) }
        }
        @if let Some(general) = &errors.general {
            div class="alert alert-error" role="alert" { (general) }
        }
        form class="signin" method="post" action="/signin" {
            label {
                "Username "
                input type="text" name="username" value=(username) autocomplete="username" required;
            }
            @if let Some(e) = &errors.username { p class="field-error" { (e) } }
            label {
                "Password "
                input type="password" name="password" autocomplete="current-password" required;
            }
            @if let Some(e) = &errors.password { p class="field-error" { (e) } }
            button type="submit" { "Sign in" }
        }
    };
    render_layout("Sign in", false, &content)
}
