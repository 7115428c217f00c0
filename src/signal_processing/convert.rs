//! Conversion between 16-bit PCM samples and the real-valued samples the
//! engine works on.

use crate::constants::{SAMPLE_MAX, SAMPLE_MIN};

/// Widen 16-bit samples to reals without scaling
///
/// `output` must be at least as long as `input`; extra slots are untouched.
pub fn i16_to_f64(input: &[i16], output: &mut [f64]) {
    for (out, &sample) in output.iter_mut().zip(input) {
        *out = f64::from(sample);
    }
}

/// Saturating real to 16-bit conversion
///
/// Values above `i16::MAX` clamp to it, values below `i16::MIN` clamp to it,
/// everything else truncates toward zero. NaN maps to 0.
pub fn f64_to_i16(value: f64) -> i16 {
    value.clamp(SAMPLE_MIN, SAMPLE_MAX) as i16
}

/// Convert a buffer of reals to 16-bit samples, returning how many clipped
///
/// `output` must be at least as long as `input`; extra slots are untouched.
pub fn f64_to_i16_buffer(input: &[f64], output: &mut [i16]) -> usize {
    let mut clipped = 0;
    for (out, &value) in output.iter_mut().zip(input) {
        if !(SAMPLE_MIN..=SAMPLE_MAX).contains(&value) {
            clipped += 1;
        }
        *out = f64_to_i16(value);
    }
    clipped
}
