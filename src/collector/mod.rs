pub mod forecast;
pub mod merger;
pub mod pipeline;

pub use forecast::{summarize_forecast, DaySummary};
pub use pipeline::{Collector, PassSummary};
