pub mod auth;
pub mod course;
pub mod hole;
pub mod leaderboard;
pub mod player_stats;
pub mod round;
pub mod submission;
pub mod utils;

pub use auth::*;
pub use course::*;
pub use hole::*;
pub use leaderboard::*;
pub use player_stats::*;
pub use round::*;
pub use submission::*;
pub use utils::*;
