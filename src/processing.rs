use rolling_stats::Stats;
use serde::Serialize;

use crate::audio::{PcmSink, PcmSource};
use crate::config::FilterConfig;
use crate::error::Result;
use crate::signal_processing::{ChunkFilter, StreamingFir, f64_to_i16_buffer, i16_to_f64};

/// Summary of the real-valued filter output before 16-bit conversion
#[derive(Debug, Clone, Serialize)]
pub struct LevelSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// What a single pass over a stream did
#[derive(Debug, Clone, Serialize)]
pub struct FilterReport {
    /// Non-empty chunks filtered
    pub chunks: usize,
    /// Samples read, equal to samples written
    pub samples: usize,
    /// Output samples saturated to the 16-bit range
    pub clipped_samples: usize,
    /// Largest absolute input sample
    pub peak_input: f64,
    /// Largest absolute real-valued output sample
    pub peak_output: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_level: Option<LevelSummary>,
}

/// Drives chunks from a [`PcmSource`] through a [`ChunkFilter`] into a
/// [`PcmSink`]
///
/// Conversion buffers are sized once from the filter's maximum chunk length.
pub struct StreamProcessor<F: ChunkFilter> {
    filter: F,
    pcm_in: Vec<i16>,
    real_in: Vec<f64>,
    real_out: Vec<f64>,
    pcm_out: Vec<i16>,
}

impl StreamProcessor<StreamingFir> {
    /// Build a FIR processor from validated configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        let fir = StreamingFir::new(config.validated_coefficients()?, config.chunk_size)?;
        Ok(Self::new(fir))
    }
}

impl<F: ChunkFilter> StreamProcessor<F> {
    pub fn new(filter: F) -> Self {
        let max_chunk = filter.max_chunk();
        Self {
            filter,
            pcm_in: vec![0; max_chunk],
            real_in: vec![0.0; max_chunk],
            real_out: vec![0.0; max_chunk],
            pcm_out: vec![0; max_chunk],
        }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut F {
        &mut self.filter
    }

    /// Filter `source` into `sink` until the source reports end of stream
    ///
    /// The end-of-stream read of zero samples is passed to the filter as an
    /// empty chunk before the sink is finalized. The filter keeps its history
    /// afterwards; call `reset` on it before starting an unrelated stream.
    pub fn run(
        &mut self,
        source: &mut dyn PcmSource,
        sink: &mut dyn PcmSink,
    ) -> Result<FilterReport> {
        let mut chunks = 0;
        let mut samples = 0;
        let mut clipped_samples = 0;
        let mut peak_input = 0.0f64;
        let mut peak_output = 0.0f64;
        let mut output_stats: Stats<f64> = Stats::new();

        log::debug!(
            "Starting stream with chunks of up to {} samples",
            self.pcm_in.len()
        );

        loop {
            let n = source.read_chunk(&mut self.pcm_in)?;

            i16_to_f64(&self.pcm_in[..n], &mut self.real_in[..n]);
            self.filter
                .filter_chunk(&self.real_in[..n], &mut self.real_out[..n])?;
            let clipped = f64_to_i16_buffer(&self.real_out[..n], &mut self.pcm_out[..n]);
            sink.write_chunk(&self.pcm_out[..n])?;

            if n == 0 {
                break;
            }

            for (&x, &y) in self.real_in[..n].iter().zip(&self.real_out[..n]) {
                peak_input = peak_input.max(x.abs());
                peak_output = peak_output.max(y.abs());
                output_stats.update(y);
            }
            if clipped > 0 {
                log::debug!("Chunk {}: {} samples clipped", chunks, clipped);
            }
            chunks += 1;
            samples += n;
            clipped_samples += clipped;
        }

        sink.finish()?;

        let output_level = (output_stats.count > 0).then(|| LevelSummary {
            mean: output_stats.mean,
            std_dev: output_stats.std_dev,
            min: output_stats.min,
            max: output_stats.max,
        });

        log::info!(
            "Filtered {} samples in {} chunks ({} clipped)",
            samples,
            chunks,
            clipped_samples
        );

        Ok(FilterReport {
            chunks,
            samples,
            clipped_samples,
            peak_input,
            peak_output,
            sample_rate: source.sample_rate(),
            output_level,
        })
    }
}
