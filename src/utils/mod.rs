pub mod constants;
pub mod progress;
pub mod time;

pub use constants::*;
pub use progress::ProgressReporter;
pub use time::{format_unix_utc, now_utc};
