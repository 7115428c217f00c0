use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use hound::{WavSpec, WavWriter};

use crate::error::{FilterError, Result};

/// Destination for filtered 16-bit mono samples
pub trait PcmSink {
    fn write_chunk(&mut self, samples: &[i16]) -> Result<()>;

    /// Flush buffered data and finalize any container header
    fn finish(&mut self) -> Result<()>;
}

/// Headerless little-endian 16-bit PCM
pub struct RawPcmSink<W: Write> {
    writer: W,
    bytes: Vec<u8>,
}

impl RawPcmSink<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> RawPcmSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            bytes: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PcmSink for RawPcmSink<W> {
    fn write_chunk(&mut self, samples: &[i16]) -> Result<()> {
        self.bytes.clear();
        self.bytes.extend(samples.iter().flat_map(|s| s.to_le_bytes()));
        self.writer.write_all(&self.bytes)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Mono 16-bit integer WAV
pub struct WavPcmSink<W: Write + Seek> {
    writer: Option<WavWriter<W>>,
}

/// WAV header for mono 16-bit integer samples
pub fn mono_i16_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

impl WavPcmSink<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P, sample_rate: u32) -> Result<Self> {
        let writer = WavWriter::create(path.as_ref(), mono_i16_spec(sample_rate))?;
        Ok(Self {
            writer: Some(writer),
        })
    }
}

impl<W: Write + Seek> WavPcmSink<W> {
    pub fn new(writer: W, sample_rate: u32) -> Result<Self> {
        let writer = WavWriter::new(writer, mono_i16_spec(sample_rate))?;
        Ok(Self {
            writer: Some(writer),
        })
    }
}

impl<W: Write + Seek> PcmSink for WavPcmSink<W> {
    fn write_chunk(&mut self, samples: &[i16]) -> Result<()> {
        let writer = self.writer.as_mut().ok_or_else(|| {
            FilterError::Io(std::io::Error::other("WAV sink already finalized"))
        })?;
        for &sample in samples {
            writer.write_sample(sample)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.take() {
            writer.finalize()?;
        }
        Ok(())
    }
}
