//! Numeric constants for the PCM filter pipeline
//!
//! Sample range limits for 16-bit conversion and the defaults the stream
//! processor falls back to when no configuration overrides them.

/// Largest value representable by a 16-bit signed sample, as a real.
pub const SAMPLE_MAX: f64 = i16::MAX as f64;

/// Smallest value representable by a 16-bit signed sample, as a real.
pub const SAMPLE_MIN: f64 = i16::MIN as f64;

/// Bytes per raw PCM sample (little-endian i16).
pub const BYTES_PER_SAMPLE: usize = 2;

/// Default number of samples handed to the engine per call.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Sample rate the built-in band-pass design targets.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Relative tolerance used when checking coefficient symmetry.
pub const SYMMETRY_EPSILON: f64 = 1e-9;
