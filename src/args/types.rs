use clap::{Parser, ValueEnum};

use crate::stats::DEFAULT_TREND_WINDOW;

/// Where finished rounds are posted.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundEndpoint {
    /// `POST /api/rounds/`
    #[default]
    Rounds,
    /// `POST /api/player/{id}/round`
    Player,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base url of the golf REST backend
    #[arg(
        short = 'b',
        long,
        value_name = "BACKEND_URL",
        default_value = "http://localhost:8000",
        value_parser = super::validation::check_backend_url
    )]
    pub backend_url: String,

    /// Address to bind the web server to
    #[arg(long, value_name = "ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,

    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,

    /// Player shown when the request names none and nobody is signed in
    #[arg(long, value_name = "PLAYER_ID", default_value = "1")]
    pub player_id: i64,

    /// Bearer token used when the request carries none; may point at a secrets file
    #[arg(short = 't', long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Backend endpoint used to submit rounds
    #[arg(long, value_name = "ENDPOINT", value_enum, default_value_t = RoundEndpoint::Rounds)]
    pub submit_via: RoundEndpoint,

    /// Number of recent rounds drawn on the trend chart
    #[arg(
        long,
        value_name = "ROUNDS",
        default_value = "10",
        value_parser = super::validation::check_trend_window
    )]
    pub trend_window: usize,

    /// Per-request timeout against the backend, in seconds
    #[arg(long, value_name = "SECONDS")]
    pub request_timeout_secs: Option<u64>,

    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: String,
}

/// Validated configuration handed to the web layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleanArgs {
    pub backend_url: String,
    pub bind: String,
    pub port: u16,
    pub player_id: i64,
    pub token: Option<String>,
    pub submit_via: RoundEndpoint,
    pub trend_window: usize,
    pub request_timeout_secs: Option<u64>,
    pub static_dir: String,
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        Self {
            backend_url: args.backend_url,
            bind: args.bind,
            port: args.port,
            player_id: args.player_id,
            token: args.token.filter(|t| !t.trim().is_empty()),
            submit_via: args.submit_via,
            trend_window: args.trend_window,
            request_timeout_secs: args.request_timeout_secs,
            static_dir: args.static_dir,
        }
    }
}

impl Default for CleanArgs {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            bind: "0.0.0.0".to_string(),
            port: 8081,
            player_id: 1,
            token: None,
            submit_via: RoundEndpoint::Rounds,
            trend_window: DEFAULT_TREND_WINDOW,
            request_timeout_secs: None,
            static_dir: "./static".to_string(),
        }
    }
}
