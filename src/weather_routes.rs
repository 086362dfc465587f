use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Form, Router, routing::post};
use serde::Deserialize;

use crate::app::AppState;
use crate::error::InternalError;
use crate::template::HtmlTemplate;
use crate::weather::WeatherError;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", post(post_weather))
        .with_state(state)
}

#[derive(Deserialize, Debug)]
struct WeatherForm {
    city: String,
}

#[derive(Template)]
#[template(path = "weather.html")]
struct WeatherTemplate {
    city: String,
    country: String,
    temperature: f64,
    description: String,
    icon: String,
    time: String,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    message: String,
}

async fn post_weather(
    State(state): State<AppState>,
    Form(form): Form<WeatherForm>,
) -> Result<Response, InternalError> {
    let reading = match state.weather.fetch_current(&form.city).await {
        Ok(reading) => reading,
        Err(WeatherError::CityNotFound) => {
            // A failed lookup is never persisted.
            return Ok(HtmlTemplate(ErrorTemplate {
                message: "City not found".to_string(),
            })
            .into_response());
        }
        Err(err) => return Err(err.into()),
    };

    state.store.insert_reading(&reading).await?;

    let time = reading.time();
    Ok(HtmlTemplate(WeatherTemplate {
        city: reading.city,
        country: reading.country,
        temperature: reading.temperature,
        description: reading.description,
        icon: reading.icon,
        time,
    })
    .into_response())
}
