use actix_web::cookie::Cookie;
use actix_web::http::header::{AUTHORIZATION, LOCATION};
use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder};
use serde::Deserialize;
use std::collections::HashMap;

use crate::args::CleanArgs;
use crate::controller::backend::GolfApi;
use crate::model::{AuthContext, LoginResponse};
use crate::controller::response::html;
use crate::mvu::error::AppError;
use crate::view::signin::{SigninErrors, render_signin_page};

pub const TOKEN_COOKIE: &str = "token";
pub const USER_ID_COOKIE: &str = "userId";
pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";
const SIGN_IN_REQUIRED: &str = "Please sign in to continue.";
const MIN_PASSWORD_LEN: usize = 6;

/// Cookies first, then a bearer header, then the token given on the command line.
#[must_use]
pub fn auth_from_request(req: &HttpRequest, args: &CleanArgs) -> AuthContext {
    let user_id = req
        .cookie(USER_ID_COOKIE)
        .and_then(|c| c.value().trim().parse::<i64>().ok());

    if let Some(cookie) = req.cookie(TOKEN_COOKIE) {
        if !cookie.value().trim().is_empty() {
            return AuthContext::new(Some(cookie.value().to_string()), user_id);
        }
    }

    let bearer = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string());
    if bearer.is_some() {
        return AuthContext::new(bearer, user_id);
    }

    AuthContext::new(args.token.clone(), user_id)
}

fn signin_location(message: &str) -> String {
    reqwest::Url::parse_with_params("http://localhost/signin", &[("message", message)])
        .map(|u| format!("{}?{}", u.path(), u.query().unwrap_or_default()))
        .unwrap_or_else(|_| "/signin".to_string())
}

fn removal(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build(name, "").path("/").finish();
    cookie.make_removal();
    cookie
}

/// Mirrors `auth` into the session cookies; a cleared context removes them.
fn write_session(resp: &mut HttpResponseBuilder, auth: &AuthContext) {
    match auth.token() {
        Some(token) => resp.cookie(
            Cookie::build(TOKEN_COOKIE, token.to_string())
                .path("/")
                .http_only(true)
                .finish(),
        ),
        None => resp.cookie(removal(TOKEN_COOKIE)),
    };
    match auth.user_id() {
        Some(user_id) => resp.cookie(
            Cookie::build(USER_ID_COOKIE, user_id.to_string())
                .path("/")
                .finish(),
        ),
        None => resp.cookie(removal(USER_ID_COOKIE)),
    };
}

#[must_use]
pub fn redirect_to_signin(message: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, signin_location(message)))
        .finish()
}

/// The backend rejected the token: forget it and send the user back to sign in.
#[must_use]
pub fn session_expired_redirect(auth: &mut AuthContext) -> HttpResponse {
    auth.clear();
    let mut resp = HttpResponse::SeeOther();
    write_session(&mut resp, auth);
    resp.insert_header((LOCATION, signin_location(SESSION_EXPIRED)))
        .finish()
}

/// Route guard for pages that need a signed-in user.
///
/// # Errors
///
/// Returns the redirect response to send when no token is present.
pub fn require_auth(auth: &AuthContext) -> Result<(), HttpResponse> {
    if auth.is_authenticated() {
        Ok(())
    } else {
        Err(redirect_to_signin(SIGN_IN_REQUIRED))
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SigninForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl SigninForm {
    #[must_use]
    pub fn validate(&self) -> SigninErrors {
        SigninErrors {
            username: self
                .username
                .trim()
                .is_empty()
                .then(|| "Please enter your username.".to_string()),
            password: (self.password.chars().count() < MIN_PASSWORD_LEN).then(|| {
                format!("Password must be at least {MIN_PASSWORD_LEN} characters long.")
            }),
            general: None,
        }
    }
}

fn signed_in(login: &LoginResponse) -> HttpResponse {
    let mut auth = AuthContext::default();
    auth.set(login.access.clone(), login.user_id);
    let mut resp = HttpResponse::SeeOther();
    write_session(&mut resp, &auth);
    resp.insert_header((LOCATION, "/")).finish()
}

pub async fn signin_page(query: web::Query<HashMap<String, String>>) -> HttpResponse {
    let message = query.get("message").map(String::as_str);
    html(render_signin_page(message, "", &SigninErrors::default()))
}

pub async fn signin_submit(form: web::Form<SigninForm>, api: Data<dyn GolfApi>) -> HttpResponse {
    let form = form.into_inner();
    let mut errors = form.validate();
    if errors.any() {
        return html(render_signin_page(None, &form.username, &errors));
    }

    match api.login(form.username.trim(), &form.password).await {
        Ok(login) => {
            log::info!("User {} signed in", form.username.trim());
            signed_in(&login)
        }
        Err(AppError::Unauthorized | AppError::Status(400 | 401 | 403)) => {
            errors.general = Some("Invalid username or password.".to_string());
            html(render_signin_page(None, &form.username, &errors))
        }
        Err(e) => {
            log::warn!("Sign-in request failed: {e}");
            errors.general = Some("An error occurred. Please try again.".to_string());
            html(render_signin_page(None, &form.username, &errors))
        }
    }
}

pub async fn signout() -> HttpResponse {
    let mut resp = HttpResponse::SeeOther();
    write_session(&mut resp, &AuthContext::default());
    resp.insert_header((LOCATION, signin_location("You have been signed out.")))
        .finish()
}
