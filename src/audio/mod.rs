pub mod sink;
pub mod source;

pub use sink::{PcmSink, RawPcmSink, WavPcmSink, mono_i16_spec};
pub use source::{PcmSource, RawPcmSource, WavPcmSource};
