use pcm_bandpass::StreamingFir;
use std::f64::consts::PI;

/// `[0, 1, 2, ..., len - 1]`
pub fn sawtooth(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64).collect()
}

/// Sine tone quantized to 16-bit samples
pub fn sine_i16(freq_hz: f64, amplitude: f64, sample_rate: u32, len: usize) -> Vec<i16> {
    (0..len)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            (amplitude * (2.0 * PI * freq_hz * t).sin()) as i16
        })
        .collect()
}

/// Whole-signal causal convolution with zero history, the reference the
/// streaming engine must reproduce
pub fn naive_convolve(taps: &[f64], signal: &[f64]) -> Vec<f64> {
    (0..signal.len())
        .map(|i| {
            let mut acc = 0.0f64;
            for (j, &tap) in taps.iter().enumerate() {
                let x = if i >= j { signal[i - j] } else { 0.0 };
                acc += tap * x;
            }
            acc
        })
        .collect()
}

/// Feed `signal` through `fir`, cycling through `sizes` for chunk lengths,
/// then issue the empty end-of-stream chunk
pub fn run_in_chunks(fir: &mut StreamingFir, signal: &[f64], sizes: &[usize]) -> Vec<f64> {
    let mut output = Vec::with_capacity(signal.len());
    let mut pos = 0;
    for &size in sizes.iter().cycle() {
        if pos >= signal.len() {
            break;
        }
        let end = (pos + size).min(signal.len());
        output.extend(fir.process_chunk(&signal[pos..end]).unwrap());
        pos = end;
    }
    assert!(fir.process_chunk(&[]).unwrap().is_empty());
    output
}
