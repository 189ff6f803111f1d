pub mod args;
pub mod model;
pub mod stats;

pub mod controller {
    pub mod auth;
    pub mod backend;
    pub mod courses;
    pub mod dashboard;
    pub mod leaderboard;
    pub mod response;
    pub mod rounds;
}

pub mod mvu {
    pub mod dashboard;
    pub mod error;
    pub mod runtime;
}

pub mod view {
    pub mod courses;
    pub mod dashboard;
    pub mod index;
    pub mod leaderboard;
    pub mod rounds;
    pub mod signin;
}

pub mod app;
