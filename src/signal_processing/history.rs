use crate::error::{FilterError, Result};

/// Fixed-capacity sample buffer for chunked FIR convolution
///
/// Layout is `[ carried history (filter_len - 1) | new chunk (<= max_chunk) ]`.
/// At the start of every chunk the leading `filter_len - 1` slots hold the most
/// recent samples of the previous chunk in time order. A freshly created or
/// reset buffer is all zeros, i.e. silence before the stream starts.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    samples: Vec<f64>,
    filter_len: usize,
    max_chunk: usize,
    pending: usize,
}

impl HistoryBuffer {
    /// Create a zero-filled buffer for a filter of `filter_len` taps accepting
    /// chunks of at most `max_chunk` samples.
    ///
    /// # Errors
    /// Returns `FilterError::Config` if `filter_len` or `max_chunk` is zero.
    pub fn new(filter_len: usize, max_chunk: usize) -> Result<Self> {
        if filter_len == 0 {
            return Err(FilterError::Config("filter length must be at least 1".to_string()));
        }
        if max_chunk == 0 {
            return Err(FilterError::Config("max chunk length must be at least 1".to_string()));
        }
        Ok(Self {
            samples: vec![0.0; filter_len - 1 + max_chunk],
            filter_len,
            max_chunk,
            pending: 0,
        })
    }

    /// Zero the whole buffer
    pub fn reset(&mut self) {
        self.samples.fill(0.0);
        self.pending = 0;
    }

    pub fn filter_len(&self) -> usize {
        self.filter_len
    }

    pub fn max_chunk(&self) -> usize {
        self.max_chunk
    }

    /// Total storage: carried history plus the largest chunk
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    /// Number of carried-over samples (`filter_len - 1`)
    pub fn history_len(&self) -> usize {
        self.filter_len - 1
    }

    /// The carried history, oldest first
    pub fn history(&self) -> &[f64] {
        &self.samples[..self.history_len()]
    }

    /// Write `chunk` directly after the carried history and return the valid
    /// window `[history | chunk]` of `filter_len - 1 + chunk.len()` samples.
    ///
    /// # Errors
    /// Returns `FilterError::ChunkTooLong` if `chunk` exceeds the configured
    /// maximum; the buffer is left untouched.
    pub fn append(&mut self, chunk: &[f64]) -> Result<&[f64]> {
        if chunk.len() > self.max_chunk {
            return Err(FilterError::ChunkTooLong {
                len: chunk.len(),
                max: self.max_chunk,
            });
        }
        let start = self.history_len();
        let end = start + chunk.len();
        self.samples[start..end].copy_from_slice(chunk);
        self.pending = chunk.len();
        Ok(&self.samples[..end])
    }

    /// Carry the last `filter_len - 1` samples of the window built by the
    /// most recent `append` down to the front of the buffer.
    ///
    /// Only the chunk appended since the previous carry is consumed, so a
    /// second call without an `append` in between leaves the history as is.
    /// Slots past the history are left stale; they are overwritten by the next
    /// `append` before being read.
    pub fn carry(&mut self) {
        let consumed = std::mem::take(&mut self.pending);
        let history_len = self.history_len();
        self.samples.copy_within(consumed..consumed + history_len, 0);
    }
}
