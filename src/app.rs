use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::index;
use crate::store::ReadingStore;
use crate::weather::WeatherClient;
use crate::weather_routes;

// Anything that goes in here must be a handle that is cheap to clone. The
// underlying state itself is shared.
#[derive(Clone)]
pub struct AppState {
    pub store: ReadingStore,
    pub weather: WeatherClient,
}

pub async fn create_app(config: &Config) -> Router {
    let store = ReadingStore::open(&config.database_path)
        .await
        .expect("failed to open reading database");

    let weather = WeatherClient::new(config.api_url.clone(), config.api_key.clone());

    router(AppState { store, weather })
}

pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(index::get_index))
        .nest("/weather", weather_routes::routes(state))
        .layer(TraceLayer::new_for_http());

    let assets_path = "assets";
    log::debug!("serving assets from {}", assets_path);
    app = app.fallback_service(ServeDir::new(assets_path));
    app
}
