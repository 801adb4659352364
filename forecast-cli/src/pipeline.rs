//! Top-level orchestration: city resolution loop, unit collection,
//! forecast fetch, and report rendering.
//!
//! Input sources are injected as closures so the loops can be driven by
//! scripted input in tests; `main` wires in the interactive prompts.

use anyhow::Result;
use forecast_core::{ForecastProvider, ResolveError, ResolvedLocation, Units, format};
use tracing::{debug, info};

use crate::prompt;

/// Keep asking for a city until one resolves.
///
/// A not-found classification is the recoverable case: print the message
/// and re-prompt, with no attempt ceiling. A fatal classification
/// propagates and terminates the pipeline.
pub async fn resolve_city_loop(
    provider: &dyn ForecastProvider,
    mut read_city: impl FnMut() -> Result<String>,
) -> Result<ResolvedLocation> {
    loop {
        let city = read_city()?;
        debug!(%city, "resolving city");

        match provider.geocode(&city).await {
            Ok(location) => return Ok(location),
            Err(ResolveError::NotFound { city }) => {
                info!(%city, "no geocoding match, prompting again");
                println!("\tCity search for \"{city}\" returned no results. Please try again.");
            }
            Err(ResolveError::Fatal(err)) => return Err(err),
        }
    }
}

/// Run the whole pipeline and return the rendered report.
pub async fn run(
    provider: &dyn ForecastProvider,
    read_city: impl FnMut() -> Result<String>,
    read_units: impl FnMut() -> Result<String>,
) -> Result<String> {
    let location = resolve_city_loop(provider, read_city).await?;
    info!(
        latitude = location.latitude,
        longitude = location.longitude,
        "resolved {}",
        location.display_label()
    );

    let units = prompt::collect_units(read_units)?;
    debug!(%units, "unit preference collected");

    let payload = provider
        .forecast(location.latitude, location.longitude, units)
        .await?;

    let entries = format::extract(&payload);
    debug!(entries = entries.len(), "forecast extracted");

    Ok(format::render(&entries, &location.display_label(), units))
}
