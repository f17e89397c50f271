use gridweather::collector::merger::{national_reading, regional_reading};
use gridweather::models::{CarbonResponse, CombinedRecord, CurrentWeather, Region, WeatherReading};
use gridweather::writers::CsvStore;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn london_weather() -> CurrentWeather {
    serde_json::from_value(serde_json::json!({
        "coord": {"lat": 51.5074, "lon": -0.1278},
        "main": {"temp": 14.2, "humidity": 80, "pressure": 1012},
        "weather": [{"description": "light rain"}],
        "wind": {"speed": 3.1},
        "dt": 1689424245,
        "name": "London"
    }))
    .unwrap()
}

fn london_carbon() -> CarbonResponse {
    serde_json::from_value(serde_json::json!({
        "data": [{
            "dnoregion": "London",
            "from": "2023-07-15T12:00Z",
            "intensity": {"forecast": 120, "index": "moderate"}
        }]
    }))
    .unwrap()
}

/// The worked example: region 13 with a complete regional payload must
/// produce exactly one fully populated row.
#[test]
fn test_london_pass_appends_expected_row() {
    let temp_dir = TempDir::new().unwrap();
    let store = CsvStore::new(temp_dir.path().join("weather_data.csv"));

    let region = Region::by_id(13).unwrap();
    let weather =
        WeatherReading::from_payload(region.weather_name, &london_weather(), Some((51.5074, -0.1278)));
    let carbon = regional_reading(&london_carbon(), region.carbon_name).unwrap();
    let record = CombinedRecord::merge(region.id, weather, carbon);

    store.append(&record).unwrap();

    let rows = store.read_records().unwrap();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.city, "London");
    assert_eq!(row.temperature, 14.2);
    assert_eq!(row.humidity, 80);
    assert_eq!(row.wind_speed, 3.1);
    assert_eq!(row.weather_description, "light rain");
    assert_eq!(row.carbon_intensity, Some(120));
    assert_eq!(row.carbon_index, "moderate");
    assert_eq!(row.region_name, "London");
    assert!(!row.collected_at.is_empty());
}

/// When the regional payload lacks a forecast value, the national tier
/// supplies the reading and the persisted region name says so.
#[test]
fn test_national_fallback_row_is_labelled_national() {
    let temp_dir = TempDir::new().unwrap();
    let store = CsvStore::new(temp_dir.path().join("weather_data.csv"));

    let region = Region::by_id(13).unwrap();
    let stale_regional: CarbonResponse = serde_json::from_value(serde_json::json!({
        "data": [{"dnoregion": "London", "intensity": {"actual": 95, "index": "low"}}]
    }))
    .unwrap();
    assert!(regional_reading(&stale_regional, region.carbon_name).is_none());

    let national: CarbonResponse = serde_json::from_value(serde_json::json!({
        "data": [{"from": "2023-07-15T12:00Z", "intensity": {"actual": 140, "forecast": 150}}]
    }))
    .unwrap();
    let carbon = national_reading(&national).unwrap();

    let weather = WeatherReading::from_payload(region.weather_name, &london_weather(), None);
    let record = CombinedRecord::merge(region.id, weather, carbon);
    store.append(&record).unwrap();

    let rows = store.read_records().unwrap();
    assert_eq!(rows[0].region_name, "National");
    assert_eq!(rows[0].carbon_intensity, Some(140));
    assert_eq!(rows[0].latitude, None);
}

/// Appending onto an existing store keeps every prior row byte-for-byte.
#[test]
fn test_append_extends_existing_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = CsvStore::new(temp_dir.path().join("weather_data.csv"));

    let region = Region::by_id(13).unwrap();
    let weather = WeatherReading::from_payload(region.weather_name, &london_weather(), None);
    let carbon = regional_reading(&london_carbon(), region.carbon_name).unwrap();

    for _ in 0..3 {
        let record = CombinedRecord::merge(region.id, weather.clone(), carbon.clone());
        store.append(&record).unwrap();
    }
    let before = store.read_records().unwrap();

    for _ in 0..2 {
        let record = CombinedRecord::merge(region.id, weather.clone(), carbon.clone());
        store.append(&record).unwrap();
    }

    let after = store.read_records().unwrap();
    assert_eq!(after.len(), 5);
    assert_eq!(&after[..3], &before[..]);
}

#[test]
fn test_catalog_covers_all_region_ids() {
    assert_eq!(Region::catalog().len(), 17);
    for id in 1..=17u8 {
        let region = Region::by_id(id).unwrap();
        assert_eq!(region.id, id);
    }
}
