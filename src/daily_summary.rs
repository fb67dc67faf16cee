use std::collections::HashMap;
use serde::Serialize;
use crate::manager_owm::models::WeatherSample;

/// Min/max temperature for one calendar day, derived from intra-day samples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: String,
    pub min: f64,
    pub max: f64,
}

/// Groups a flat sequence of forecast samples into per-day min/max summaries.
///
/// One summary per distinct date, in first-occurrence order of the dates in
/// the input. The first sample of a date initializes both bounds, later
/// samples fold in with min/max. Values pass through at source precision.
///
/// # Arguments
///
/// * 'samples' - forecast samples in provider order
pub fn summarize_by_day(samples: &[WeatherSample]) -> Vec<DailySummary> {
    let mut days: Vec<DailySummary> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for sample in samples {
        let date = sample.dt_txt
            .split_whitespace()
            .next()
            .unwrap_or(sample.dt_txt.as_str())
            .to_string();

        match seen.get(&date) {
            Some(&i) => {
                days[i].min = days[i].min.min(sample.temp);
                days[i].max = days[i].max.max(sample.temp);
            }
            None => {
                seen.insert(date.clone(), days.len());
                days.push(DailySummary { date, min: sample.temp, max: sample.temp });
            }
        }
    }

    days
}
