use serde::{Deserialize, Serialize};

/// One persisted weather fetch, as returned by the history endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    pub temperature: f64,
    pub description: String,
    pub dt: String,
}
