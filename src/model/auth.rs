use serde::{Deserialize, Serialize};

use super::utils::{lenient_i64, lenient_string, lenient_text};

/// Who is asking. Filled in at sign-in, cleared at sign-out or when the backend rejects the
/// token; passed by reference to everything that talks to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    token: Option<String>,
    user_id: Option<i64>,
}

impl AuthContext {
    #[must_use]
    pub fn new(token: Option<String>, user_id: Option<i64>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
            user_id,
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    /// Replaces both fields. A blank token leaves the context signed out.
    pub fn set(&mut self, token: impl Into<String>, user_id: Option<i64>) {
        let token = token.into();
        self.token = if token.trim().is_empty() { None } else { Some(token) };
        self.user_id = user_id;
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.user_id = None;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(default, deserialize_with = "lenient_text")]
    pub access: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub refresh: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
}

impl From<&LoginResponse> for AuthContext {
    fn from(resp: &LoginResponse) -> Self {
        let mut auth = AuthContext::default();
        auth.set(resp.access.clone(), resp.user_id);
        auth
    }
}
