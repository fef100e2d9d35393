//! Decoding and presentation of lexer / parser / triad-optimizer results
//! produced by an external analyzer process.

pub mod analyzer;
pub mod cli;
pub mod error;
pub mod executor;
pub mod parser;
pub mod presentation;

pub use error::{AnalyzerFailure, RunError};
