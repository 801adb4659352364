//! Core library for the `forecast` console tool.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The provider abstraction over the geocoding and forecast endpoints
//! - Shared domain models and the table formatter
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries.

pub mod config;
pub mod format;
pub mod model;
pub mod provider;

pub use config::{API_KEY_ENV_VAR, Config, resolve_api_key};
pub use model::{ForecastEntry, ForecastPayload, ResolvedLocation, Units};
pub use provider::{ForecastProvider, ResolveError, openweather::OpenWeatherProvider};
