use chrono::{Local, NaiveDateTime};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    /// The upstream answered with anything other than 200. The body is not
    /// consulted in that case.
    #[error("city not found")]
    CityNotFound,
    #[error("could not reach weather service: {source}")]
    RequestError {
        #[from]
        source: reqwest::Error,
    },
    #[error("invalid weather response: {source}")]
    DecodingError {
        #[from]
        source: serde_json::Error,
    },
    #[error("weather response contained no conditions")]
    MissingConditions,
}

/// One weather observation for a city. The timestamp is taken from the local
/// clock when the upstream response is parsed, not from the response itself.
#[derive(Debug, Clone)]
pub struct Reading {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub description: String,
    pub icon: String,
    pub timestamp: NaiveDateTime,
}

impl Reading {
    pub fn time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn date(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    fn from_response(
        response: CurrentResponse,
        timestamp: NaiveDateTime,
    ) -> Result<Reading, WeatherError> {
        let condition = response
            .weather
            .into_iter()
            .next()
            .ok_or(WeatherError::MissingConditions)?;
        Ok(Reading {
            city: response.name,
            country: response.sys.country,
            temperature: response.main.temp,
            description: condition.description,
            icon: condition.icon,
            timestamp,
        })
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    #[serde(default)]
    sys: Sys,
    main: Main,
    weather: Vec<Condition>,
}

#[derive(Debug, Default, Deserialize)]
struct Sys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct Main {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_url: String,
    api_key: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_url: String, api_key: String) -> WeatherClient {
        WeatherClient {
            api_url,
            api_key,
            http: Client::new(),
        }
    }

    /// Look up the current weather for a free-text city name. The query
    /// serializer percent-encodes the name, so spaces and accents are safe.
    pub async fn fetch_current(&self, city: &str) -> Result<Reading, WeatherError> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(WeatherError::CityNotFound);
        }

        let body = response.text().await?;
        let parsed: CurrentResponse = serde_json::from_str(&body)?;
        Reading::from_response(parsed, Local::now().naive_local())
    }
}
