use clap::Parser;
use std::path::PathBuf;

/// Everything the service needs to run, resolved once at startup and passed
/// down by reference. Flags take precedence over the environment.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Port the web interface listens on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Path to the sqlite database holding stored readings.
    #[arg(long, env = "DATABASE_PATH", default_value = "weather.sqlite3")]
    pub database_path: PathBuf,

    /// Current-weather endpoint queried by city name.
    #[arg(
        long,
        env = "API_URL",
        default_value = "https://api.openweathermap.org/data/2.5/weather"
    )]
    pub api_url: String,

    /// OpenWeatherMap API key.
    #[arg(long, env = "API_KEY")]
    pub api_key: String,
}
