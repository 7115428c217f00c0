pub mod audio;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod processing;
pub mod signal_processing;

pub use config::{FilterConfig, StreamFormat};
pub use error::{FilterError, Result};
pub use processing::{FilterReport, StreamProcessor};
pub use signal_processing::{Coefficients, HistoryBuffer, StreamingFir};
