pub mod carbon;
pub mod record;
pub mod region;
pub mod weather;

pub use carbon::{CarbonEntry, CarbonReading, CarbonResponse, CarbonSource, Intensity};
pub use record::CombinedRecord;
pub use region::Region;
pub use weather::{CurrentWeather, Forecast, ForecastSlot, WeatherReading};
