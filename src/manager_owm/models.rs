use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct CurrentMain {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Deserialize)]
pub struct Description {
    pub description: String,
}

#[derive(Deserialize)]
pub struct FullCurrent {
    pub main: CurrentMain,
    #[serde(default)]
    pub weather: Vec<Description>,
}

#[derive(Deserialize)]
pub struct EntryMain {
    pub temp: f64,
}

#[derive(Deserialize)]
pub struct FullForecastEntry {
    pub dt_txt: String,
    pub main: EntryMain,
}

#[derive(Deserialize)]
pub struct FullForecast {
    pub list: Vec<FullForecastEntry>,
}

/// Current conditions for a city, reduced to what the views need
#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub description: String,
}

/// One timestamped temperature observation from a forecast response
#[derive(Debug, Clone, Serialize)]
pub struct WeatherSample {
    pub dt_txt: String,
    pub temp: f64,
}
