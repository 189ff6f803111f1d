use super::types::Args;

const SECRETS_LOCATIONS: [&str; 2] = ["/secrets/golf_token", "/run/secrets/golf_token"];

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) url.
pub fn check_backend_url(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    let parsed = reqwest::Url::parse(trimmed)
        .map_err(|e| format!("Backend url '{trimmed}' is not valid: {e}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.trim_end_matches('/').to_string()),
        other => Err(format!(
            "Backend url must use http or https, got '{other}'"
        )),
    }
}

/// # Errors
///
/// Will return `Err` if the value is not a whole number of at least 2.
pub fn check_trend_window(value: &str) -> Result<usize, String> {
    let window: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("Trend window '{value}' is not a number"))?;
    if window < 2 {
        return Err("Trend window needs at least 2 rounds".to_string());
    }
    Ok(window)
}

impl Args {
    /// Resolves the token from a secrets file when one is named.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the bind address is blank or the secrets file cannot be read.
    pub fn validate(&mut self) -> Result<(), String> {
        if self.bind.trim().is_empty() {
            return Err("Bind address is required".to_string());
        }
        if let Some(token) = self.token.clone() {
            if SECRETS_LOCATIONS.contains(&token.as_str()) {
                let contents = std::fs::read_to_string(&token)
                    .map_err(|e| format!("Cannot read token from {token}: {e}"))?;
                self.token = Some(contents.trim().to_string());
            }
        }
        Ok(())
    }
}
