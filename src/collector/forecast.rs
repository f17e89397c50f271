use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::weather::Forecast;

/// One day of the 5 day / 3 hour forecast, collapsed to a range and the
/// most frequent condition across the day's slots.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
    pub condition: String,
}

/// Collapse the provider's 3-hourly slots into at most five daily
/// summaries, in date order. Slots with unrepresentable timestamps are
/// dropped.
pub fn summarize_forecast(forecast: &Forecast) -> Vec<DaySummary> {
    let mut by_day: HashMap<NaiveDate, Vec<(f64, String)>> = HashMap::new();

    for slot in &forecast.list {
        let Some(when) = DateTime::<Utc>::from_timestamp(slot.dt, 0) else {
            continue;
        };
        let condition = slot
            .weather
            .first()
            .map(|c| c.description.clone())
            .unwrap_or_else(|| "unknown".to_string());

        by_day
            .entry(when.date_naive())
            .or_default()
            .push((slot.main.temp, condition));
    }

    let mut days: Vec<(NaiveDate, Vec<(f64, String)>)> = by_day.into_iter().collect();
    days.sort_by_key(|(date, _)| *date);

    days.into_iter()
        .take(5)
        .map(|(date, samples)| {
            let (min_temp, max_temp) = samples.iter().fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(min, max), (temp, _)| (min.min(*temp), max.max(*temp)),
            );

            let mut counts: HashMap<&str, usize> = HashMap::new();
            for (_, condition) in &samples {
                *counts.entry(condition.as_str()).or_insert(0) += 1;
            }
            let condition = counts
                .into_iter()
                .max_by_key(|(_, n)| *n)
                .map(|(c, _)| c.to_string())
                .unwrap_or_else(|| "unknown".to_string());

            DaySummary {
                date,
                min_temp,
                max_temp,
                condition,
            }
        })
        .collect()
}
