use super::Formatter;
use crate::error::Result;
use crate::processing::FilterReport;

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &FilterReport) -> Result<String> {
        let mut text = format!(
            "Filtered {} samples in {} chunks, {} clipped",
            report.samples, report.chunks, report.clipped_samples
        );
        if self.verbose {
            let rate = report
                .sample_rate
                .map_or("-".to_string(), |r| format!("{} Hz", r));
            text.push_str(&format!(
                "\n  peak in: {:.1}, peak out: {:.1}, rate: {}",
                report.peak_input, report.peak_output, rate
            ));
            if let Some(level) = &report.output_level {
                text.push_str(&format!(
                    "\n  output mean: {:.3}, std dev: {:.3}, range: [{:.1}, {:.1}]",
                    level.mean, level.std_dev, level.min, level.max
                ));
            }
        }
        Ok(text)
    }
}
