pub mod metrics;
pub mod normalize;
pub mod series;
pub mod skills;

pub use metrics::*;
pub use series::*;
pub use skills::*;
