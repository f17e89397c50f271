use crate::models::carbon::{CarbonReading, CarbonResponse, CarbonSource};
use crate::utils::constants::{MISSING_INDEX, NATIONAL_REGION_NAME};

/// Distil a regional carbon payload. Returns `None` — meaning "fall back
/// to national data" — when the payload has no entries or its first
/// entry's intensity object lacks a forecast value.
///
/// `fallback_name` is the catalog's DNO region name, used when the entry
/// itself omits `dnoregion`.
pub fn regional_reading(response: &CarbonResponse, fallback_name: &str) -> Option<CarbonReading> {
    let entry = response.data.first()?;
    let intensity = entry.intensity.as_ref()?;
    intensity.forecast?;

    Some(CarbonReading {
        region_name: entry
            .dnoregion
            .clone()
            .unwrap_or_else(|| fallback_name.to_string()),
        // Measured value wins over the prediction when both are present.
        intensity: intensity.actual.or(intensity.forecast),
        forecast: intensity.forecast,
        index: intensity
            .index
            .clone()
            .unwrap_or_else(|| MISSING_INDEX.to_string()),
        observed_at: entry.from.clone(),
        source: CarbonSource::Regional,
    })
}

/// Distil a national carbon payload into the fallback reading. `None`
/// only when the payload carries no entries at all; at this tier that is
/// terminal for the region's pass.
pub fn national_reading(response: &CarbonResponse) -> Option<CarbonReading> {
    let entry = response.data.first()?;
    let intensity = entry.intensity.as_ref();

    Some(CarbonReading {
        region_name: NATIONAL_REGION_NAME.to_string(),
        intensity: intensity.and_then(|i| i.actual.or(i.forecast)),
        forecast: intensity.and_then(|i| i.forecast),
        index: intensity
            .and_then(|i| i.index.clone())
            .unwrap_or_else(|| MISSING_INDEX.to_string()),
        observed_at: entry.from.clone(),
        source: CarbonSource::National,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn regional_payload(value: serde_json::Value) -> CarbonResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_regional_with_forecast() {
        let response = regional_payload(serde_json::json!({
            "data": [{
                "dnoregion": "London",
                "from": "2023-07-15T12:00Z",
                "intensity": {"forecast": 120, "index": "moderate"}
            }]
        }));

        let reading = regional_reading(&response, "London").unwrap();
        assert_eq!(reading.region_name, "London");
        assert_eq!(reading.intensity, Some(120));
        assert_eq!(reading.forecast, Some(120));
        assert_eq!(reading.index, "moderate");
        assert_eq!(reading.observed_at.as_deref(), Some("2023-07-15T12:00Z"));
        assert_eq!(reading.source, CarbonSource::Regional);
    }

    #[test]
    fn test_regional_prefers_actual_over_forecast() {
        let response = regional_payload(serde_json::json!({
            "data": [{
                "dnoregion": "Yorkshire",
                "intensity": {"actual": 95, "forecast": 120, "index": "low"}
            }]
        }));

        let reading = regional_reading(&response, "Yorkshire").unwrap();
        assert_eq!(reading.intensity, Some(95));
        assert_eq!(reading.forecast, Some(120));
    }

    #[test]
    fn test_regional_without_forecast_triggers_fallback() {
        // An actual value alone is not enough; a null forecast means the
        // regional feed is stale and the national tier takes over.
        let response = regional_payload(serde_json::json!({
            "data": [{
                "dnoregion": "London",
                "intensity": {"actual": 95, "index": "low"}
            }]
        }));

        assert!(regional_reading(&response, "London").is_none());
    }

    #[test]
    fn test_regional_empty_payload_triggers_fallback() {
        let response = regional_payload(serde_json::json!({"data": []}));
        assert!(regional_reading(&response, "London").is_none());

        let response = regional_payload(serde_json::json!({
            "data": [{"dnoregion": "London"}]
        }));
        assert!(regional_reading(&response, "London").is_none());
    }

    #[test]
    fn test_regional_missing_names_fall_back_to_catalog() {
        let response = regional_payload(serde_json::json!({
            "data": [{"intensity": {"forecast": 80}}]
        }));

        let reading = regional_reading(&response, "South Wales").unwrap();
        assert_eq!(reading.region_name, "South Wales");
        assert_eq!(reading.index, MISSING_INDEX);
        assert_eq!(reading.observed_at, None);
    }

    #[test]
    fn test_national_reading() {
        let response = regional_payload(serde_json::json!({
            "data": [{
                "from": "2023-07-15T12:00Z",
                "intensity": {"actual": 140, "forecast": 150, "index": "high"}
            }]
        }));

        let reading = national_reading(&response).unwrap();
        assert_eq!(reading.region_name, NATIONAL_REGION_NAME);
        assert_eq!(reading.intensity, Some(140));
        assert_eq!(reading.forecast, Some(150));
        assert_eq!(reading.index, "high");
        assert_eq!(reading.source, CarbonSource::National);
    }

    #[test]
    fn test_national_accepts_forecast_only() {
        let response = regional_payload(serde_json::json!({
            "data": [{"intensity": {"forecast": 150}}]
        }));

        let reading = national_reading(&response).unwrap();
        assert_eq!(reading.intensity, Some(150));
        assert_eq!(reading.index, MISSING_INDEX);
    }

    #[test]
    fn test_national_empty_payload_is_terminal() {
        let response = regional_payload(serde_json::json!({"data": []}));
        assert!(national_reading(&response).is_none());
    }
}
