use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::args::{CleanArgs, RoundEndpoint};
use crate::model::{
    AuthContext, Course, LeaderboardUser, LoginRequest, LoginResponse, PlayerStats,
    RoundSubmission, parse_course_list,
};
use crate::mvu::error::AppError;

/// The REST backend that owns players, rounds and courses.
#[async_trait]
pub trait GolfApi: Send + Sync {
    async fn get_player_stats(
        &self,
        auth: &AuthContext,
        player_id: i64,
    ) -> Result<PlayerStats, AppError>;

    async fn search_courses(&self, auth: &AuthContext, term: &str)
    -> Result<Vec<Course>, AppError>;

    async fn submit_round(
        &self,
        auth: &AuthContext,
        player_id: i64,
        round: &RoundSubmission,
    ) -> Result<(), AppError>;

    async fn get_leaderboard(&self, auth: &AuthContext) -> Result<Vec<LeaderboardUser>, AppError>;

    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AppError>;
}

/// Races `fut` against `cancel`; a cancelled request never yields data.
///
/// # Errors
///
/// Returns `AppError::Cancelled` when the token fires first, otherwise whatever `fut` returns.
pub async fn with_cancel<T, F>(cancel: &CancellationToken, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(AppError::Cancelled),
        res = fut => res,
    }
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    round_endpoint: RoundEndpoint,
}

impl BackendClient {
    /// # Errors
    ///
    /// Will return `Err` if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        timeout: Option<Duration>,
        round_endpoint: RoundEndpoint,
    ) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            round_endpoint,
        })
    }

    /// # Errors
    ///
    /// Will return `Err` if the HTTP client cannot be built.
    pub fn from_args(args: &CleanArgs) -> Result<Self, AppError> {
        Self::new(
            &args.backend_url,
            args.request_timeout_secs.map(Duration::from_secs),
            args.submit_via,
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(builder: RequestBuilder, auth: &AuthContext) -> RequestBuilder {
        match auth.authorization_header() {
            Some(header) => builder.header(AUTHORIZATION, header),
            None => builder,
        }
    }

    fn check(resp: Response) -> Result<Response, AppError> {
        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(AppError::Unauthorized);
        }
        if !status.is_success() {
            return Err(AppError::Status(status.as_u16()));
        }
        Ok(resp)
    }
}

fn parse_leaderboard(value: Value) -> Vec<LeaderboardUser> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[async_trait]
impl GolfApi for BackendClient {
    async fn get_player_stats(
        &self,
        auth: &AuthContext,
        player_id: i64,
    ) -> Result<PlayerStats, AppError> {
        let url = self.url(&format!("/api/player/{player_id}/stats"));
        log::debug!("GET {url}");
        let resp = Self::authorized(self.client.get(&url), auth).send().await?;
        Ok(Self::check(resp)?.json::<PlayerStats>().await?)
    }

    async fn search_courses(
        &self,
        auth: &AuthContext,
        term: &str,
    ) -> Result<Vec<Course>, AppError> {
        let url = self.url("/api/course/search/");
        log::debug!("GET {url}?search={term}");
        let resp = Self::authorized(self.client.get(&url).query(&[("search", term)]), auth)
            .send()
            .await?;
        let value: Value = Self::check(resp)?.json().await?;
        Ok(parse_course_list(value))
    }

    async fn submit_round(
        &self,
        auth: &AuthContext,
        player_id: i64,
        round: &RoundSubmission,
    ) -> Result<(), AppError> {
        let path = match self.round_endpoint {
            RoundEndpoint::Rounds => "/api/rounds/".to_string(),
            RoundEndpoint::Player => format!("/api/player/{player_id}/round"),
        };
        let url = self.url(&path);
        log::debug!("POST {url}");
        let resp = Self::authorized(self.client.post(&url).json(round), auth)
            .send()
            .await?;
        Self::check(resp)?;
        Ok(())
    }

    async fn get_leaderboard(&self, auth: &AuthContext) -> Result<Vec<LeaderboardUser>, AppError> {
        let url = self.url("/api/leaderboard/");
        log::debug!("GET {url}");
        let resp = Self::authorized(self.client.get(&url), auth).send().await?;
        let value: Value = Self::check(resp)?.json().await?;
        Ok(parse_leaderboard(value))
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AppError> {
        let url = self.url("/api/user/login/");
        log::debug!("POST {url}");
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp = self.client.post(&url).json(&body).send().await?;
        let login: LoginResponse = Self::check(resp)?.json().await?;
        if login.access.is_empty() {
            return Err(AppError::Unauthorized);
        }
        Ok(login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn with_cancel_prefers_the_token() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let res: Result<u32, AppError> = with_cancel(&cancel, async { Ok(1) }).await;
        assert_eq!(res, Err(AppError::Cancelled));

        let live = CancellationToken::new();
        assert_eq!(with_cancel(&live, async { Ok(2) }).await, Ok(2));
    }

    #[test]
    fn base_url_is_normalized() {
        let client = BackendClient::new("http://localhost:8000//", None, RoundEndpoint::Rounds)
            .expect("client");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/api/leaderboard/"), "http://localhost:8000/api/leaderboard/");
    }

    #[test]
    fn leaderboard_keeps_parseable_rows() {
        let users = parse_leaderboard(json!([{"id": 1, "username": "a"}, 3, {"name": "b"}]));
        assert_eq!(users.len(), 2);
        assert!(parse_leaderboard(json!({"results": []})).is_empty());
    }
}
