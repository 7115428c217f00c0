pub mod coefficients;
pub mod convert;
pub mod filter;
pub mod fir_stream;
pub mod history;

pub use coefficients::{BANDPASS_5KHZ_44100, Coefficients};
pub use convert::{f64_to_i16, f64_to_i16_buffer, i16_to_f64};
pub use filter::ChunkFilter;
pub use fir_stream::StreamingFir;
pub use history::HistoryBuffer;
