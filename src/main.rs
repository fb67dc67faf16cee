mod errors;
mod logging;
mod initialization;
mod handlers;
mod pages;
mod daily_summary;
mod manager_db;
mod manager_owm;

use std::sync::Arc;
use actix_web::{web, App, HttpServer};
use log::info;
use tokio::sync::Mutex;
use crate::errors::UnrecoverableError;
use crate::handlers::{api_history, api_weather, daily_weather, hourly_weather, index,
                      index_submit, show_weather, today_weather, weekly_weather};
use crate::initialization::config;
use crate::manager_db::DB;
use crate::manager_owm::OWM;

struct AppState {
    db: Arc<Mutex<DB>>,
    owm: OWM,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;

    let db: Arc<Mutex<DB>> = Arc::new(Mutex::new(DB::new(&config.db.db_path)?));
    let owm = OWM::new(&config.api_key)?;

    info!("listening on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState { db: db.clone(), owm: owm.clone() }))
            .service(index)
            .service(index_submit)
            .service(api_weather)
            .service(api_history)
            .service(show_weather)
            .service(today_weather)
            .service(hourly_weather)
            .service(daily_weather)
            .service(weekly_weather)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
