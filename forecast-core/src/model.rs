use serde::Deserialize;

/// Unit system the user picked for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    /// Token the forecast endpoint expects in its `units` query parameter.
    pub fn as_query_param(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "˚C",
            Units::Imperial => "˚F",
        }
    }

    pub fn wind_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "km/h",
            Units::Imperial => "mi/h",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_param())
    }
}

/// A city resolved to coordinates by the geocoding endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    /// Region/state as reported by the provider; absent for many countries.
    pub region: Option<String>,
    pub country: String,
}

impl ResolvedLocation {
    /// Human-readable place label for the report banner.
    ///
    /// The region segment is omitted entirely when the provider record has
    /// no region, so `"Monaco; located in MC"` rather than a dangling comma.
    pub fn display_label(&self) -> String {
        match &self.region {
            Some(region) => format!("{}, {}; located in {}", self.name, region, self.country),
            None => format!("{}; located in {}", self.name, self.country),
        }
    }
}

/// One flattened row of the forecast table.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    /// Provider-formatted local time text, passed through verbatim.
    pub timestamp: String,
    pub temperature: f64,
    pub description: String,
    pub wind_speed: f64,
}

/// Raw 5-day / 3-hour forecast payload, parsed but otherwise untouched.
///
/// Only the fields the pipeline consumes are modeled; the provider sends
/// plenty more and serde ignores it.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    pub list: Vec<ForecastBucket>,
}

/// One 3-hour forecast bucket.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastBucket {
    pub dt_txt: String,
    pub main: BucketMain,
    pub weather: Vec<BucketCondition>,
    pub wind: BucketWind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BucketMain {
    pub temp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BucketCondition {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BucketWind {
    pub speed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_query_params() {
        assert_eq!(Units::Metric.as_query_param(), "metric");
        assert_eq!(Units::Imperial.as_query_param(), "imperial");
    }

    #[test]
    fn units_display_matches_query_param() {
        assert_eq!(Units::Metric.to_string(), "metric");
        assert_eq!(Units::Imperial.to_string(), "imperial");
    }

    #[test]
    fn units_suffixes() {
        assert_eq!(Units::Metric.temperature_suffix(), "˚C");
        assert_eq!(Units::Metric.wind_suffix(), "km/h");
        assert_eq!(Units::Imperial.temperature_suffix(), "˚F");
        assert_eq!(Units::Imperial.wind_suffix(), "mi/h");
    }

    #[test]
    fn display_label_with_region() {
        let loc = ResolvedLocation {
            latitude: 44.98,
            longitude: -93.27,
            name: "Minneapolis".to_string(),
            region: Some("Minnesota".to_string()),
            country: "US".to_string(),
        };

        assert_eq!(loc.display_label(), "Minneapolis, Minnesota; located in US");
    }

    #[test]
    fn display_label_without_region() {
        let loc = ResolvedLocation {
            latitude: 43.73,
            longitude: 7.42,
            name: "Monaco".to_string(),
            region: None,
            country: "MC".to_string(),
        };

        assert_eq!(loc.display_label(), "Monaco; located in MC");
    }
}
