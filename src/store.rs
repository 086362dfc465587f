use deadpool_sqlite::{Config, CreatePoolError, InteractError, Pool, PoolError, Runtime};
use rusqlite::params;
use std::path::Path;
use thiserror::Error;

use crate::weather::Reading;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not run statement: {source}")]
    SqliteError {
        #[from]
        source: rusqlite::Error,
    },
    #[error("could not set up database connection pool: {source}")]
    CreatePoolError {
        #[from]
        source: CreatePoolError,
    },
    #[error("could not check out database connection: {source}")]
    PoolError {
        #[from]
        source: PoolError,
    },
    #[error("database task failed: {source}")]
    InteractError {
        #[from]
        source: InteractError,
    },
}

const CREATE_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS weather_data (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        city TEXT NOT NULL,
        country TEXT NOT NULL,
        temperature REAL NOT NULL,
        description TEXT NOT NULL,
        time TEXT DEFAULT CURRENT_TIMESTAMP,
        date TEXT
    )";

const INSERT_READING: &str = "\
    INSERT INTO weather_data (city, country, temperature, description, time, date)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

/// Append-only storage for readings, backed by a pool of sqlite connections.
/// Cloning shares the pool.
#[derive(Clone)]
pub struct ReadingStore {
    pool: Pool,
}

impl ReadingStore {
    pub async fn open(path: impl AsRef<Path>) -> Result<ReadingStore, StoreError> {
        let pool = Config::new(path.as_ref()).create_pool(Runtime::Tokio1)?;
        Ok(ReadingStore { pool })
    }

    /// Store one reading as its own row. The table is created on first use;
    /// there is no uniqueness constraint, so looking up the same city twice
    /// stores two rows.
    pub async fn insert_reading(&self, reading: &Reading) -> Result<(), StoreError> {
        let connection = self.pool.get().await?;
        let reading = reading.clone();
        connection
            .interact(move |connection| -> Result<(), rusqlite::Error> {
                connection.execute(CREATE_TABLE, [])?;
                connection.execute(
                    INSERT_READING,
                    params![
                        reading.city,
                        reading.country,
                        reading.temperature,
                        reading.description,
                        reading.time(),
                        reading.date(),
                    ],
                )?;
                Ok(())
            })
            .await??;
        Ok(())
    }
}
