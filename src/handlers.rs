use actix_web::{get, post, web, HttpResponse, Responder};
use actix_web::http::header;
use chrono::Local;
use log::{error, info};
use serde::{Deserialize, Serialize};
use crate::AppState;
use crate::daily_summary::summarize_by_day;
use crate::manager_owm::errors::OWMError;
use crate::pages;

#[derive(Deserialize, Debug)]
struct CityForm {
    #[serde(default)]
    city: String,
}

#[derive(Deserialize, Debug)]
struct CityRequest {
    #[serde(default)]
    city: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct FetchedWeather<'a> {
    city: &'a str,
    temperature: f64,
    description: &'a str,
    dt: &'a str,
}

/// Local time of the fetch, in the format the views and the history table use
fn fetch_time() -> String {
    Local::now().format("%d-%b-%Y %I:%M:%S %p").to_string()
}

/// Maps a provider error to a plain-text response for the HTML endpoints
fn html_error(city: &str, e: OWMError) -> HttpResponse {
    match e {
        OWMError::NotFound(_) => {
            HttpResponse::NotFound().body(format!("No data found for '{}'", city))
        }
        _ => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().content_type("text/html").body(pages::main_page())
}

#[post("/")]
pub async fn index_submit(form: web::Form<CityForm>) -> impl Responder {
    let city = form.city.trim();
    if city.is_empty() {
        return HttpResponse::Ok().content_type("text/html").body(pages::main_page());
    }

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/weather/{}", urlencoding::encode(city))))
        .finish()
}

#[post("/api/weather")]
pub async fn api_weather(body: web::Json<CityRequest>, data: web::Data<AppState>) -> impl Responder {
    info!("api weather request: {:?}", body);

    let city = body.city.trim();
    if city.is_empty() {
        return HttpResponse::BadRequest().json(ErrorBody { error: "City required".to_string() });
    }

    match data.owm.current(city).await {
        Ok(current) => {
            let dt = fetch_time();

            let db = data.db.lock().await;
            if let Err(e) = db.insert_record(city, current.temperature, &current.description, &dt) {
                error!("failed to insert weather record: {}", e);
                return HttpResponse::InternalServerError().json(ErrorBody { error: e.to_string() });
            }

            HttpResponse::Ok().json(FetchedWeather {
                city,
                temperature: current.temperature,
                description: &current.description,
                dt: &dt,
            })
        }
        Err(e @ OWMError::NotFound(_)) => {
            info!("{}", e);
            HttpResponse::NotFound().json(ErrorBody { error: "City not found or API error".to_string() })
        }
        Err(e) => {
            error!("failed to fetch current weather: {}", e);
            HttpResponse::InternalServerError().json(ErrorBody { error: e.to_string() })
        }
    }
}

#[get("/weather/{city}")]
pub async fn show_weather(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    let city = path.into_inner();
    info!("current weather request for '{}'", city);

    match data.owm.current(&city).await {
        Ok(current) => {
            let dt = fetch_time();

            let db = data.db.lock().await;
            if let Err(e) = db.insert_record(&city, current.temperature, &current.description, &dt) {
                error!("failed to insert weather record: {}", e);
                return HttpResponse::InternalServerError().body(format!("Error: {}", e));
            }

            HttpResponse::Ok().content_type("text/html").body(pages::result_page(&city, &current, &dt))
        }
        Err(e) => {
            error!("failed to fetch current weather: {}", e);
            html_error(&city, e)
        }
    }
}

#[get("/weather/{city}/today")]
pub async fn today_weather(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    let city = path.into_inner();
    info!("today weather request for '{}'", city);

    match data.owm.current(&city).await {
        Ok(current) => {
            HttpResponse::Ok().content_type("text/html").body(pages::today_page(&city, &current))
        }
        Err(e) => {
            error!("failed to fetch current weather: {}", e);
            html_error(&city, e)
        }
    }
}

#[get("/weather/{city}/hourly")]
pub async fn hourly_weather(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    let city = path.into_inner();
    info!("hourly forecast request for '{}'", city);

    match data.owm.forecast(&city).await {
        Ok(samples) => {
            // next 24 hours at 3 hour steps
            let next_day = &samples[..samples.len().min(8)];
            HttpResponse::Ok().content_type("text/html").body(pages::hourly_page(&city, next_day))
        }
        Err(e) => {
            error!("failed to fetch forecast: {}", e);
            html_error(&city, e)
        }
    }
}

/// Shared by the daily and weekly routes
async fn daily_view(city: &str, data: &web::Data<AppState>) -> HttpResponse {
    match data.owm.forecast(city).await {
        Ok(samples) => {
            let days = summarize_by_day(&samples);
            HttpResponse::Ok().content_type("text/html").body(pages::daily_page(city, &days))
        }
        Err(e) => {
            error!("failed to fetch forecast: {}", e);
            html_error(city, e)
        }
    }
}

#[get("/weather/{city}/daily")]
pub async fn daily_weather(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    let city = path.into_inner();
    info!("daily forecast request for '{}'", city);

    daily_view(&city, &data).await
}

// The provider only offers the 5 day forecast, so the weekly view is an
// alias of the daily one.
#[get("/weather/{city}/weekly")]
pub async fn weekly_weather(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    let city = path.into_inner();
    info!("weekly forecast request for '{}'", city);

    daily_view(&city, &data).await
}

#[get("/api/history")]
pub async fn api_history(data: web::Data<AppState>) -> impl Responder {
    let db = data.db.lock().await;

    match db.recent_history(6) {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => {
            error!("failed to read history: {}", e);
            HttpResponse::InternalServerError().json(ErrorBody { error: e.to_string() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{test, App};
    use actix_web::http::StatusCode;
    use tokio::sync::Mutex;
    use crate::manager_db::DB;
    use crate::manager_db::models::WeatherRecord;
    use crate::manager_owm::OWM;

    fn test_state() -> AppState {
        AppState {
            db: Arc::new(Mutex::new(DB::new(":memory:").unwrap())),
            owm: OWM::new("test-key").unwrap(),
        }
    }

    #[actix_web::test]
    async fn index_serves_city_form() {
        let app = test::init_service(App::new().service(index)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("name=\"city\""));
    }

    #[actix_web::test]
    async fn submitting_a_city_redirects_to_its_page() {
        let app = test::init_service(App::new().service(index_submit)).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_form([("city", "London")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let location = resp.headers().get(header::LOCATION).unwrap();
        assert_eq!(location.to_str().unwrap(), "/weather/London");
    }

    #[actix_web::test]
    async fn redirect_location_is_percent_encoded() {
        let app = test::init_service(App::new().service(index_submit)).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_form([("city", "New York")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let location = resp.headers().get(header::LOCATION).unwrap();
        assert_eq!(location.to_str().unwrap(), "/weather/New%20York");
    }

    #[actix_web::test]
    async fn submitting_an_empty_city_shows_the_form_again() {
        let app = test::init_service(App::new().service(index_submit)).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_form([("city", "   ")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("name=\"city\""));
    }

    #[actix_web::test]
    async fn api_weather_rejects_empty_city_before_any_network_call() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .service(api_weather),
        ).await;

        let req = test::TestRequest::post()
            .uri("/api/weather")
            .set_json(serde_json::json!({"city": "  "}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "City required");
    }

    #[actix_web::test]
    async fn history_returns_latest_records_most_recent_first() {
        let state = test_state();
        {
            let db = state.db.lock().await;
            for i in 0..8 {
                db.insert_record(&format!("City{}", i), i as f64, "clear sky", "dt").unwrap();
            }
        }

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(api_history),
        ).await;

        let req = test::TestRequest::get().uri("/api/history").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let records: Vec<WeatherRecord> = test::read_body_json(resp).await;
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].city, "City7");
        assert_eq!(records[5].city, "City2");
    }
}
