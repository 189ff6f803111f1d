use clap::Parser;

use rusty_golf_stats::args::validation::{check_backend_url, check_trend_window};
use rusty_golf_stats::args::{Args, CleanArgs, RoundEndpoint};

#[test]
fn backend_url_must_be_http() {
    assert_eq!(
        check_backend_url(" https://golf.example.com/ "),
        Ok("https://golf.example.com".to_string())
    );
    assert!(check_backend_url("ftp://golf.example.com").is_err());
    assert!(check_backend_url("not a url").is_err());
}

#[test]
fn trend_window_needs_two_rounds() {
    assert_eq!(check_trend_window("12"), Ok(12));
    assert!(check_trend_window("1").is_err());
    assert!(check_trend_window("ten").is_err());
}

#[test]
fn defaults_match_clean_args_default() {
    let mut args = Args::try_parse_from(["rusty-golf-stats"]).expect("defaults parse");
    args.validate().expect("defaults validate");
    assert_eq!(CleanArgs::new(args), CleanArgs::default());
}

#[test]
fn flags_are_read() {
    let mut args = Args::try_parse_from([
        "rusty-golf-stats",
        "--backend-url",
        "http://api:9000/",
        "--port",
        "9090",
        "--submit-via",
        "player",
        "--trend-window",
        "5",
        "--token",
        "abc",
    ])
    .expect("parse");
    args.validate().expect("validate");
    let clean = CleanArgs::new(args);
    assert_eq!(clean.backend_url, "http://api:9000");
    assert_eq!(clean.port, 9090);
    assert_eq!(clean.submit_via, RoundEndpoint::Player);
    assert_eq!(clean.trend_window, 5);
    assert_eq!(clean.token.as_deref(), Some("abc"));
}

#[test]
fn invalid_trend_window_is_a_parse_error() {
    assert!(Args::try_parse_from(["rusty-golf-stats", "--trend-window", "1"]).is_err());
}
