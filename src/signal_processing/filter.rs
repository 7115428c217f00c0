use crate::error::Result;

/// Common trait for chunk-at-a-time filters
///
/// Implemented by `StreamingFir`; `StreamProcessor` drives any implementor.
pub trait ChunkFilter {
    /// Filter `input` into `output`, which must have the same length
    fn filter_chunk(&mut self, input: &[f64], output: &mut [f64]) -> Result<()>;

    /// Largest chunk accepted by `filter_chunk`
    fn max_chunk(&self) -> usize;

    /// Forget all carried state
    fn reset(&mut self);
}
