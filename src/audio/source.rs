use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use hound::WavReader;

use crate::constants::BYTES_PER_SAMPLE;
use crate::error::{FilterError, Result};

/// A stream of 16-bit mono samples read one chunk at a time
pub trait PcmSource {
    /// Fill the front of `buf` with up to `buf.len()` samples and return how
    /// many were read. Returning 0 means end of stream; a shorter positive
    /// count is a valid partial chunk.
    fn read_chunk(&mut self, buf: &mut [i16]) -> Result<usize>;

    /// Sample rate declared by the stream, if the format carries one
    fn sample_rate(&self) -> Option<u32>;
}

/// Headerless little-endian 16-bit PCM
pub struct RawPcmSource<R> {
    reader: R,
    bytes: Vec<u8>,
}

impl RawPcmSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> RawPcmSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            bytes: Vec::new(),
        }
    }

    /// Read until `want` bytes are buffered or the reader is exhausted
    fn fill(&mut self, want: usize) -> Result<usize> {
        self.bytes.resize(want, 0);
        let mut filled = 0;
        while filled < want {
            match self.reader.read(&mut self.bytes[filled..want]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> PcmSource for RawPcmSource<R> {
    fn read_chunk(&mut self, buf: &mut [i16]) -> Result<usize> {
        let filled = self.fill(buf.len() * BYTES_PER_SAMPLE)?;
        let count = filled / BYTES_PER_SAMPLE;

        if filled % BYTES_PER_SAMPLE != 0 {
            log::warn!(
                "Input ends with {} stray byte(s); dropped",
                filled % BYTES_PER_SAMPLE
            );
        }

        for (out, pair) in buf
            .iter_mut()
            .zip(self.bytes[..count * BYTES_PER_SAMPLE].chunks_exact(BYTES_PER_SAMPLE))
        {
            *out = i16::from_le_bytes([pair[0], pair[1]]);
        }
        Ok(count)
    }

    fn sample_rate(&self) -> Option<u32> {
        None
    }
}

/// Mono 16-bit integer WAV
pub struct WavPcmSource<R> {
    reader: WavReader<R>,
}

impl WavPcmSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(WavReader::open(path.as_ref())?)
    }
}

impl<R: Read> WavPcmSource<R> {
    pub fn new(reader: R) -> Result<Self> {
        Self::from_reader(WavReader::new(reader)?)
    }

    fn from_reader(reader: WavReader<R>) -> Result<Self> {
        let spec = reader.spec();

        if spec.channels != 1 {
            return Err(FilterError::UnsupportedFormat(format!(
                "expected mono WAV, got {} channels",
                spec.channels
            )));
        }
        if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
            return Err(FilterError::UnsupportedFormat(format!(
                "expected 16-bit integer samples, got {}-bit {:?}",
                spec.bits_per_sample, spec.sample_format
            )));
        }

        log::debug!(
            "WAV input: {} Hz, {} samples",
            spec.sample_rate,
            reader.len()
        );
        Ok(Self { reader })
    }
}

impl<R: Read> PcmSource for WavPcmSource<R> {
    fn read_chunk(&mut self, buf: &mut [i16]) -> Result<usize> {
        let mut count = 0;
        for (out, sample) in buf.iter_mut().zip(self.reader.samples::<i16>()) {
            *out = sample?;
            count += 1;
        }
        Ok(count)
    }

    fn sample_rate(&self) -> Option<u32> {
        Some(self.reader.spec().sample_rate)
    }
}
