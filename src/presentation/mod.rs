mod json;
mod text;

pub use json::JsonSink;
pub use text::TextSink;

use crate::parser::{LexemeRecord, TriadLine};
use std::io;

pub const TRIADS_ORIGINAL_LABEL: &str = "Исходные триады";
pub const TRIADS_OPTIMIZED_LABEL: &str = "Триады после оптимизации";

/// Receives the decoded results of one analysis run, in call order:
/// source, lexemes, tree, then each triad listing.
pub trait PresentationSink {
    fn show_source(&mut self, text: &str) -> io::Result<()>;
    fn show_lexemes(&mut self, lexemes: &[LexemeRecord]) -> io::Result<()>;
    fn show_tree(&mut self, tree: &str) -> io::Result<()>;
    fn show_triads(&mut self, label: &str, triads: &[TriadLine]) -> io::Result<()>;

    /// Called once after the last section.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
