use clap::Parser;
use std::net::SocketAddr;

mod app;
mod config;
mod error;
mod index;
mod store;
mod template;
mod weather;
mod weather_routes;

use app::create_app;
use config::Config;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Config::parse();

    let app = create_app(&config).await;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    log::info!("listening on {}", addr);
    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
