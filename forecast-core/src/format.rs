//! Flattening the raw forecast payload into table rows and rendering them.

use crate::model::{ForecastEntry, ForecastPayload, Units};

/// Flatten the payload into one entry per 3-hour bucket.
///
/// Every bucket becomes exactly one entry, in payload order; nothing is
/// filtered, sampled, or deduplicated. A bucket with an empty condition
/// list gets an empty description instead of failing.
pub fn extract(payload: &ForecastPayload) -> Vec<ForecastEntry> {
    payload
        .list
        .iter()
        .map(|bucket| ForecastEntry {
            timestamp: bucket.dt_txt.clone(),
            temperature: bucket.main.temp,
            description: bucket
                .weather
                .first()
                .map(|condition| condition.description.clone())
                .unwrap_or_default(),
            wind_speed: bucket.wind.speed,
        })
        .collect()
}

/// Render the full report: title banner, column header, one row per entry.
pub fn render(entries: &[ForecastEntry], label: &str, units: Units) -> String {
    let mut out = title_bar(&format!("The 5 Day forecast for the city of {label}"));

    out.push_str(&four_column_row(
        "Date and Time   ",
        "Temperature",
        "Description",
        "Wind Speed",
    ));

    for entry in entries {
        let temperature = format!("{} {}", entry.temperature, units.temperature_suffix());
        let wind_speed = format!("{} {}", entry.wind_speed, units.wind_suffix());

        out.push_str(&four_column_row(
            &entry.timestamp,
            &temperature,
            &entry.description,
            &wind_speed,
        ));
    }

    out
}

fn title_bar(message: &str) -> String {
    let title = format!("*   {message}   *");
    let stars = "*".repeat(title.chars().count());
    format!("\n{stars}\n{title}\n{stars}\n")
}

// Columns use literal fixed delimiters, not content-width alignment.
fn four_column_row(c1: &str, c2: &str, c3: &str, c4: &str) -> String {
    format!("{c1}  ---  {c2}  ---  {c3}  --  {c4}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_with_buckets(n: usize) -> ForecastPayload {
        let buckets: Vec<String> = (0..n)
            .map(|i| {
                format!(
                    r#"{{"dt_txt":"2026-08-23 {:02}:00:00",
                        "main":{{"temp":{}.5}},
                        "weather":[{{"description":"scattered clouds"}}],
                        "wind":{{"speed":{}.1}}}}"#,
                    (i * 3) % 24,
                    10 + i,
                    i
                )
            })
            .collect();

        serde_json::from_str(&format!(r#"{{"list":[{}]}}"#, buckets.join(",")))
            .expect("fixture payload must parse")
    }

    #[test]
    fn extract_maps_every_bucket_in_order() {
        // 5 days at 8 buckets per day.
        let payload = payload_with_buckets(40);

        let entries = extract(&payload);

        assert_eq!(entries.len(), 40);
        assert_eq!(entries[0].timestamp, "2026-08-23 00:00:00");
        assert_eq!(entries[0].temperature, 10.5);
        assert_eq!(entries[0].description, "scattered clouds");
        assert_eq!(entries[0].wind_speed, 0.1);
        assert_eq!(entries[39].temperature, 49.5);
        assert_eq!(entries[39].wind_speed, 39.1);
    }

    #[test]
    fn extract_defaults_empty_condition_list_to_empty_description() {
        let payload: ForecastPayload = serde_json::from_str(
            r#"{"list":[{"dt_txt":"2026-08-23 12:00:00",
                        "main":{"temp":21.0},
                        "weather":[],
                        "wind":{"speed":4.2}}]}"#,
        )
        .unwrap();

        let entries = extract(&payload);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "");
    }

    #[test]
    fn render_metric_labels_every_row() {
        let payload = payload_with_buckets(3);
        let entries = extract(&payload);

        let report = render(&entries, "Minneapolis, Minnesota; located in US", Units::Metric);

        assert!(report.contains(
            "*   The 5 Day forecast for the city of Minneapolis, Minnesota; located in US   *"
        ));
        assert!(report.contains("Date and Time     ---  Temperature  ---  Description  --  Wind Speed"));
        assert_eq!(report.matches("˚C").count(), 3);
        assert_eq!(report.matches("km/h").count(), 3);
        assert!(!report.contains("˚F"));
        assert!(!report.contains("mi/h"));
    }

    #[test]
    fn render_imperial_labels_every_row() {
        let payload = payload_with_buckets(2);
        let entries = extract(&payload);

        let report = render(&entries, "Phoenix, Arizona; located in US", Units::Imperial);

        assert_eq!(report.matches("˚F").count(), 2);
        assert_eq!(report.matches("mi/h").count(), 2);
        assert!(!report.contains("˚C"));
        assert!(!report.contains("km/h"));
    }

    #[test]
    fn render_row_uses_fixed_delimiters() {
        let entries = vec![ForecastEntry {
            timestamp: "2026-08-23 09:00:00".to_string(),
            temperature: 15.52,
            description: "light rain".to_string(),
            wind_speed: 3.6,
        }];

        let report = render(&entries, "Testville; located in TS", Units::Metric);

        assert!(report.contains(
            "2026-08-23 09:00:00  ---  15.52 ˚C  ---  light rain  --  3.6 km/h"
        ));
    }

    #[test]
    fn banner_stars_match_title_width() {
        let banner = title_bar("hello");
        let lines: Vec<&str> = banner.trim_end().lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
        assert_eq!(lines[0], lines[2]);
    }
}
