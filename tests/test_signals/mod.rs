#![allow(dead_code, unused_imports)]

pub mod generate;

pub use generate::{naive_convolve, run_in_chunks, sawtooth, sine_i16};
