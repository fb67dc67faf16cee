use crate::daily_summary::DailySummary;
use crate::manager_owm::models::{CurrentConditions, WeatherSample};

/// Escapes user supplied text for embedding in HTML
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        title, body,
    )
}

/// The landing page with the city form
pub fn main_page() -> String {
    document(
        "Weather",
        "<h1>Weather</h1>\n\
         <form method=\"post\" action=\"/\">\n\
         <input type=\"text\" name=\"city\" placeholder=\"City name\">\n\
         <button type=\"submit\">Show weather</button>\n\
         </form>",
    )
}

/// Current weather for a city
pub fn result_page(city: &str, current: &CurrentConditions, dt: &str) -> String {
    let city = escape(city);
    let body = format!(
        "<h1>Weather in {}</h1>\n\
         <p>Temperature: {} &deg;C</p>\n\
         <p>Description: {}</p>\n\
         <p>Fetched: {}</p>",
        city, current.temperature, escape(&current.description), dt,
    );
    document(&format!("Weather in {}", city), &body)
}

/// Today's high and low for a city
pub fn today_page(city: &str, current: &CurrentConditions) -> String {
    let city = escape(city);
    let body = format!(
        "<h1>Today in {}</h1>\n\
         <p>High: {} &deg;C</p>\n\
         <p>Low: {} &deg;C</p>\n\
         <p>{}</p>",
        city, current.temp_max, current.temp_min, escape(&current.description),
    );
    document(&format!("Today in {}", city), &body)
}

/// The next 24 hours at 3 hour steps
pub fn hourly_page(city: &str, samples: &[WeatherSample]) -> String {
    let city = escape(city);
    let mut rows = String::new();
    for sample in samples {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{} &deg;C</td></tr>\n",
            escape(&sample.dt_txt), sample.temp,
        ));
    }
    let body = format!(
        "<h1>Hourly forecast for {}</h1>\n\
         <table>\n<tr><th>Time</th><th>Temperature</th></tr>\n{}</table>",
        city, rows,
    );
    document(&format!("Hourly forecast for {}", city), &body)
}

/// Per-day min/max over the forecast period
pub fn daily_page(city: &str, days: &[DailySummary]) -> String {
    let city = escape(city);
    let mut rows = String::new();
    for day in days {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{} &deg;C</td><td>{} &deg;C</td></tr>\n",
            escape(&day.date), day.min, day.max,
        ));
    }
    let body = format!(
        "<h1>Daily forecast for {}</h1>\n\
         <table>\n<tr><th>Date</th><th>Min</th><th>Max</th></tr>\n{}</table>",
        city, rows,
    );
    document(&format!("Daily forecast for {}", city), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_city_names() {
        let current = CurrentConditions {
            temperature: 10.0,
            temp_min: 8.0,
            temp_max: 12.0,
            description: "clear sky".to_string(),
        };

        let page = result_page("<script>alert(1)</script>", &current, "dt");
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn daily_page_lists_one_row_per_day() {
        let days = vec![
            DailySummary { date: "2026-01-01".to_string(), min: 1.0, max: 5.0 },
            DailySummary { date: "2026-01-02".to_string(), min: -2.0, max: 3.0 },
        ];

        let page = daily_page("Oslo", &days);
        assert_eq!(page.matches("<tr><td>2026-01-").count(), 2);
        assert!(page.contains("2026-01-02"));
    }
}
