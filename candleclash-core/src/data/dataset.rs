//! Candle dataset documents and structured load errors.
//!
//! A dataset is produced offline (see the CLI `generate` command) and read
//! once at startup. The game only needs it to be non-empty and in
//! chronological order.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Candle;

/// Errors raised while loading or saving a dataset.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset contains no candles")]
    Empty,

    #[error("candle {index} at t={time} is not after the previous candle (t={previous})")]
    OutOfOrder { index: usize, time: i64, previous: i64 },
}

/// A ticker's candle sequence for one session, as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub ticker: String,
    pub date: String,
    /// Label of the base granularity, e.g. `5m`.
    pub timeframe: String,
    pub candles: Vec<Candle>,
}

impl Dataset {
    /// Parse and validate a dataset from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, DataError> {
        let dataset: Dataset = serde_json::from_str(content)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load and validate a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Write the dataset as pretty JSON. Creates parent directories if needed.
    pub fn save(&self, path: &Path) -> Result<(), DataError> {
        let io_err = |source| DataError::Io {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        std::fs::write(path, self.to_json_pretty()?).map_err(io_err)
    }

    pub fn to_json_pretty(&self) -> Result<String, DataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Non-empty with strictly increasing candle times.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.candles.is_empty() {
            return Err(DataError::Empty);
        }
        for (index, pair) in self.candles.windows(2).enumerate() {
            if pair[1].time <= pair[0].time {
                return Err(DataError::OutOfOrder {
                    index: index + 1,
                    time: pair[1].time,
                    previous: pair[0].time,
                });
            }
        }
        Ok(())
    }
}
