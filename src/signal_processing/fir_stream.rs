use crate::error::{FilterError, Result};
use crate::signal_processing::{ChunkFilter, Coefficients, HistoryBuffer};

/// Streaming FIR convolution engine
///
/// Filters a signal one chunk at a time while producing exactly the output
/// that convolving the whole signal at once would. The last `num_taps - 1`
/// input samples are carried in a [`HistoryBuffer`] owned by the engine, so
/// independent streams need independent engines (or a [`reset`](Self::reset)
/// between them).
///
/// For each chunk of `n` samples:
///
/// ```text
/// output[i] = sum_{j=0}^{L-1} taps[j] * window[L-1+i-j],   i in 0..n
/// ```
///
/// where `window` is the carried history followed by the chunk and `L` is the
/// tap count. Accumulation is in `f64`.
#[derive(Debug, Clone)]
pub struct StreamingFir {
    coeffs: Coefficients,
    history: HistoryBuffer,
}

impl StreamingFir {
    /// Create an engine with silent history accepting chunks of up to
    /// `max_chunk` samples
    pub fn new(coeffs: Coefficients, max_chunk: usize) -> Result<Self> {
        let history = HistoryBuffer::new(coeffs.len(), max_chunk)?;
        Self::from_parts(coeffs, history)
    }

    /// Create an engine around an existing history buffer
    ///
    /// # Errors
    /// Returns `FilterError::TapCountMismatch` if `history` was sized for a
    /// different filter length than `coeffs`.
    pub fn from_parts(coeffs: Coefficients, history: HistoryBuffer) -> Result<Self> {
        if history.filter_len() != coeffs.len() {
            return Err(FilterError::TapCountMismatch {
                taps: coeffs.len(),
                history: history.filter_len(),
            });
        }
        if !coeffs.is_symmetric() {
            log::warn!(
                "{}-tap coefficient set is not symmetric; output will not be linear phase",
                coeffs.len()
            );
        }
        log::debug!(
            "FIR engine: {} taps, max chunk {} samples, history {} samples",
            coeffs.len(),
            history.max_chunk(),
            history.history_len()
        );
        Ok(Self { coeffs, history })
    }

    /// Filter one chunk into `output`
    ///
    /// An empty chunk is a valid no-op and can be used to mark end of stream.
    ///
    /// # Errors
    /// - `FilterError::LengthMismatch` if `input` and `output` differ in length
    /// - `FilterError::ChunkTooLong` if `input` exceeds the maximum chunk length
    ///
    /// On error neither `output` nor the carried history is modified.
    pub fn process(&mut self, input: &[f64], output: &mut [f64]) -> Result<()> {
        if input.len() != output.len() {
            return Err(FilterError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }

        let taps = self.coeffs.taps();
        let num_taps = taps.len();
        let window = self.history.append(input)?;

        for (i, out) in output.iter_mut().enumerate() {
            // window[i..i + num_taps] ends at the current sample; walk it
            // backward so taps[0] meets the newest sample.
            *out = taps
                .iter()
                .zip(window[i..i + num_taps].iter().rev())
                .fold(0.0f64, |acc, (&tap, &sample)| acc + tap * sample);
        }

        self.history.carry();
        log::trace!("Filtered chunk of {} samples", input.len());
        Ok(())
    }

    /// Filter one chunk, allocating the output
    pub fn process_chunk(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        let mut output = vec![0.0; input.len()];
        self.process(input, &mut output)?;
        Ok(output)
    }

    /// Return to silent history, as if no samples had been seen
    pub fn reset(&mut self) {
        self.history.reset();
    }

    /// Get the number of taps (filter length)
    pub fn num_taps(&self) -> usize {
        self.coeffs.len()
    }

    /// Largest chunk accepted by `process`
    pub fn max_chunk(&self) -> usize {
        self.history.max_chunk()
    }

    /// Get the group delay in samples (half the filter length for linear phase)
    pub fn group_delay_samples(&self) -> usize {
        self.coeffs.group_delay_samples()
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coeffs
    }
}

impl ChunkFilter for StreamingFir {
    fn filter_chunk(&mut self, input: &[f64], output: &mut [f64]) -> Result<()> {
        StreamingFir::process(self, input, output)
    }

    fn max_chunk(&self) -> usize {
        StreamingFir::max_chunk(self)
    }

    fn reset(&mut self) {
        StreamingFir::reset(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(taps: &[f64], max_chunk: usize) -> StreamingFir {
        StreamingFir::new(Coefficients::new(taps.to_vec()).unwrap(), max_chunk).unwrap()
    }

    #[test]
    fn test_moving_sum_across_chunks() {
        let mut fir = engine(&[1.0, 1.0, 1.0], 4);

        assert_eq!(fir.process_chunk(&[1.0, 2.0]).unwrap(), vec![1.0, 3.0]);
        assert_eq!(
            fir.process_chunk(&[3.0, 4.0, 5.0]).unwrap(),
            vec![6.0, 9.0, 12.0]
        );
    }

    #[test]
    fn test_taps_apply_newest_first() {
        // y[i] = 1*x[i] + 10*x[i-1] + 100*x[i-2]
        let mut fir = engine(&[1.0, 10.0, 100.0], 8);
        let output = fir.process_chunk(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(output, vec![1.0, 12.0, 123.0]);
    }

    #[test]
    fn test_empty_chunk_is_noop() {
        let mut fir = engine(&[0.5, 0.5], 4);
        fir.process_chunk(&[2.0, 4.0]).unwrap();
        assert!(fir.process_chunk(&[]).unwrap().is_empty());
        // History still holds the 4.0 from before the empty chunk.
        assert_eq!(fir.process_chunk(&[0.0]).unwrap(), vec![2.0]);
    }

    #[test]
    fn test_oversized_chunk_rejected_without_side_effects() {
        let mut fir = engine(&[1.0, 1.0], 2);
        fir.process_chunk(&[5.0]).unwrap();

        let mut output = [7.0; 3];
        let err = fir.process(&[1.0, 1.0, 1.0], &mut output).unwrap_err();
        assert!(matches!(err, FilterError::ChunkTooLong { len: 3, max: 2 }));
        assert_eq!(output, [7.0; 3]);

        assert_eq!(fir.process_chunk(&[1.0]).unwrap(), vec![6.0]);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut fir = engine(&[1.0], 4);
        let mut output = [0.0; 2];
        let err = fir.process(&[1.0, 2.0, 3.0], &mut output).unwrap_err();
        assert!(matches!(
            err,
            FilterError::LengthMismatch {
                input: 3,
                output: 2
            }
        ));
    }

    #[test]
    fn test_history_sized_for_other_filter_rejected() {
        let coeffs = Coefficients::new(vec![1.0, 2.0, 1.0]).unwrap();
        let history = HistoryBuffer::new(5, 10).unwrap();
        let err = StreamingFir::from_parts(coeffs, history).unwrap_err();
        assert!(matches!(
            err,
            FilterError::TapCountMismatch {
                taps: 3,
                history: 5
            }
        ));
    }

    #[test]
    fn test_reset_restores_silence() {
        let mut fir = engine(&[1.0, 1.0, 1.0], 4);
        let first = fir.process_chunk(&[1.0, 2.0, 3.0]).unwrap();
        fir.reset();
        let second = fir.process_chunk(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cloned_engines_are_independent() {
        let mut a = engine(&[1.0, 1.0], 4);
        a.process_chunk(&[3.0]).unwrap();
        let mut b = a.clone();

        assert_eq!(a.process_chunk(&[1.0]).unwrap(), vec![4.0]);
        assert_eq!(b.process_chunk(&[0.0]).unwrap(), vec![3.0]);
    }

    #[test]
    fn test_preset_dimensions() {
        let fir = StreamingFir::new(Coefficients::bandpass_5khz(), 100).unwrap();
        assert_eq!(fir.num_taps(), 63);
        assert_eq!(fir.max_chunk(), 100);
        assert_eq!(fir.group_delay_samples(), 31);
    }
}
