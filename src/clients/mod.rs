pub mod carbon;
pub mod weather;

pub use carbon::CarbonClient;
pub use weather::WeatherClient;
