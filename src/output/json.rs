use serde::Serialize;

use super::{Formatter, iso8601_timestamp};
use crate::error::Result;
use crate::processing::FilterReport;

pub struct JsonFormatter;

#[derive(Serialize)]
struct Stamped<'a> {
    ts: String,
    #[serde(flatten)]
    report: &'a FilterReport,
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &FilterReport) -> Result<String> {
        let stamped = Stamped {
            ts: iso8601_timestamp(),
            report,
        };
        Ok(serde_json::to_string_pretty(&stamped)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::sample_report;

    #[test]
    fn test_json_has_report_fields() {
        let json = JsonFormatter.format(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["samples"], 250);
        assert_eq!(value["clipped_samples"], 2);
        assert_eq!(value["sample_rate"], 44_100);
        assert_eq!(value["output_level"]["max"], 40_000.0);
        assert!(value["ts"].as_str().unwrap().ends_with('Z'));
    }
}
