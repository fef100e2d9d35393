mod runner;

pub use runner::{decode_stream, present, run_analysis, Analysis};
