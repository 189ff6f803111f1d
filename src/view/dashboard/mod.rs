pub mod chart;
pub mod radar;
pub mod round_chart;
pub mod template;
pub mod trend;

pub use chart::*;
pub use radar::*;
pub use round_chart::*;
pub use template::*;
pub use trend::*;
