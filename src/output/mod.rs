mod json;
mod text;

use chrono::Utc;

pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

use crate::error::Result;
use crate::processing::FilterReport;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

pub trait Formatter {
    fn format(&self, report: &FilterReport) -> Result<String>;
}

pub fn create_formatter(format: ReportFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        ReportFormat::Text => Box::new(TextFormatter::new(verbose)),
        ReportFormat::Json => Box::new(JsonFormatter),
    }
}

pub fn iso8601_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
pub(crate) fn sample_report() -> FilterReport {
    use crate::processing::LevelSummary;

    FilterReport {
        chunks: 3,
        samples: 250,
        clipped_samples: 2,
        peak_input: 1200.0,
        peak_output: 40_000.0,
        sample_rate: Some(44_100),
        output_level: Some(LevelSummary {
            mean: 0.5,
            std_dev: 100.25,
            min: -900.0,
            max: 40_000.0,
        }),
    }
}
