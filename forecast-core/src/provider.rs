use crate::model::{ForecastPayload, ResolvedLocation, Units};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Outcome classification for a geocoding lookup.
///
/// An empty match list is the normal, recoverable case: misspelled or
/// ambiguous input is expected, and the caller loops back to the user.
/// Everything else (transport failure, rejected status, malformed response)
/// is fatal and terminates the pipeline.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("city search for \"{city}\" returned no results")]
    NotFound { city: String },

    #[error(transparent)]
    Fatal(#[from] anyhow::Error),
}

impl ResolveError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }
}

/// Abstraction over the two outbound calls the pipeline makes.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Resolve a free-text city name to coordinates plus a canonical name.
    async fn geocode(&self, city: &str) -> Result<ResolvedLocation, ResolveError>;

    /// Fetch the multi-day forecast for resolved coordinates. Every failure
    /// here is fatal; no retry is attempted.
    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        units: Units,
    ) -> anyhow::Result<ForecastPayload>;
}
