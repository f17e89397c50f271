use serde::Deserialize;

/// Response body shared by `GET /regional/regionid/{id}`, `GET /intensity`
/// and `GET /intensity/forecast`: a sequence of time-bucketed entries.
#[derive(Debug, Clone, Deserialize)]
pub struct CarbonResponse {
    #[serde(default)]
    pub data: Vec<CarbonEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarbonEntry {
    pub from: Option<String>,
    pub dnoregion: Option<String>,
    pub intensity: Option<Intensity>,
}

/// The provider may report a predicted and/or a measured value for a
/// bucket, plus a categorical banding of the number.
#[derive(Debug, Clone, Deserialize)]
pub struct Intensity {
    pub actual: Option<i32>,
    pub forecast: Option<i32>,
    pub index: Option<String>,
}

/// Which endpoint a reading came from. National readings only appear when
/// the regional payload lacked a forecast value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarbonSource {
    Regional,
    National,
}

/// The fields the pipeline keeps from one carbon-intensity fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct CarbonReading {
    pub region_name: String,
    pub intensity: Option<i32>,
    pub forecast: Option<i32>,
    pub index: String,
    pub observed_at: Option<String>,
    pub source: CarbonSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_regional_entry() {
        let response: CarbonResponse = serde_json::from_value(serde_json::json!({
            "data": [{
                "dnoregion": "London",
                "from": "2023-07-15T12:00Z",
                "intensity": {"forecast": 120, "index": "moderate"}
            }]
        }))
        .unwrap();

        let entry = &response.data[0];
        assert_eq!(entry.dnoregion.as_deref(), Some("London"));
        let intensity = entry.intensity.as_ref().unwrap();
        assert_eq!(intensity.forecast, Some(120));
        assert_eq!(intensity.actual, None);
        assert_eq!(intensity.index.as_deref(), Some("moderate"));
    }

    #[test]
    fn test_deserialize_empty_payload() {
        let response: CarbonResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(response.data.is_empty());
    }
}
