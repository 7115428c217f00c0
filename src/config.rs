//! Configuration for the PCM band-pass filter.
//!
//! Defaults reproduce the built-in 63-tap 5 kHz band-pass with 100-sample
//! chunks on raw PCM. Any field can be overridden from a TOML file:
//!
//! ```toml
//! chunk_size = 256
//! format = "wav"
//! taps = [0.25, 0.5, 0.25]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_SAMPLE_RATE};
use crate::error::{FilterError, Result};
use crate::signal_processing::{BANDPASS_5KHZ_44100, Coefficients};

/// On-disk sample format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StreamFormat {
    /// Headerless little-endian 16-bit samples; any header bytes are filtered
    /// as if they were audio
    #[default]
    Raw,
    /// Mono 16-bit integer WAV
    Wav,
}

/// Filter run configuration
///
/// # Example
/// ```
/// use pcm_bandpass::config::FilterConfig;
///
/// let config = FilterConfig::from_toml_str("chunk_size = 32").unwrap();
/// assert_eq!(config.chunk_size, 32);
/// assert_eq!(config.taps.len(), 63);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Maximum samples handed to the engine per call
    pub chunk_size: usize,
    /// Sample rate written to WAV output when the input carries none
    pub sample_rate: u32,
    /// Input and output sample format
    pub format: StreamFormat,
    /// FIR taps, applied newest-sample-first
    pub taps: Vec<f64>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            sample_rate: DEFAULT_SAMPLE_RATE,
            format: StreamFormat::Raw,
            taps: BANDPASS_5KHZ_44100.to_vec(),
        }
    }
}

impl FilterConfig {
    /// Parse and validate a TOML document; missing fields take defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| FilterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// Check ranges and tap contents
    pub fn validate(&self) -> Result<()> {
        self.validated_coefficients().map(|_| ())
    }

    /// Check ranges and return the tap set for the engine
    pub fn validated_coefficients(&self) -> Result<Coefficients> {
        if self.chunk_size == 0 {
            return Err(FilterError::Config(
                "chunk_size must be at least 1".to_string(),
            ));
        }
        if self.sample_rate == 0 {
            return Err(FilterError::Config(
                "sample_rate must be positive".to_string(),
            ));
        }
        self.coefficients()
    }

    /// Validated tap set for the engine
    pub fn coefficients(&self) -> Result<Coefficients> {
        Coefficients::new(self.taps.clone())
    }
}
