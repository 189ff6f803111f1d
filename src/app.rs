use actix_files::Files;
use actix_web::{HttpResponse, web};
use std::path::Path;

use crate::controller::{auth, courses, dashboard, leaderboard, rounds};

/// Registers every route on an `App`. Shared by the binary and the route tests.
pub fn configure(cfg: &mut web::ServiceConfig, static_dir: &str) {
    cfg.route("/", web::get().to(dashboard::dashboard))
        .route("/dashboard", web::get().to(dashboard::dashboard))
        .route("/leaderboard", web::get().to(leaderboard::leaderboard))
        .route("/courses", web::get().to(courses::courses))
        .route("/rounds/new", web::get().to(rounds::new_round))
        .route("/rounds", web::post().to(rounds::submit_round))
        .route("/signin", web::get().to(auth::signin_page))
        .route("/signin", web::post().to(auth::signin_submit))
        .route("/signout", web::get().to(auth::signout))
        .route("/health", web::get().to(HttpResponse::Ok));

    if Path::new(static_dir).is_dir() {
        cfg.service(Files::new("/static", static_dir));
    } else {
        log::warn!("Static directory {static_dir} not found, /static will not be served");
    }
}
