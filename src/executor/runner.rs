use crate::analyzer::AnalyzerCollaborator;
use crate::error::RunError;
use crate::parser::{decode_utf8, parse_output, ParseResult};
use crate::presentation::{PresentationSink, TRIADS_OPTIMIZED_LABEL, TRIADS_ORIGINAL_LABEL};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Output of one successful analysis: the analysed source text and the decoded results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub source: String,
    pub result: ParseResult,
}

/// Read `source_path`, run the analyzer on it and decode its output.
///
/// The parser only runs when the analyzer succeeded; an analyzer failure
/// yields no partial result.
pub fn run_analysis(
    analyzer: &dyn AnalyzerCollaborator,
    source_path: &Path,
) -> Result<Analysis, RunError> {
    let source = fs::read_to_string(source_path).map_err(|e| RunError::Source {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })?;

    let output = analyzer.invoke(source_path)?;
    let result = parse_output(&output);
    info!(
        lexemes = result.lexemes.len(),
        triads_original = result.triads_original.len(),
        triads_optimized = result.triads_optimized.len(),
        "decoded analyzer output"
    );

    Ok(Analysis { source, result })
}

/// Decode a previously captured result stream without running the analyzer.
///
/// Invalid UTF-8 is replaced rather than rejected, like the analyzer's own output.
pub fn decode_stream(mut input: impl io::Read) -> Result<ParseResult, RunError> {
    let mut raw = Vec::new();
    input.read_to_end(&mut raw)?;
    debug!(bytes = raw.len(), "decoding saved result stream");
    Ok(parse_output(&decode_utf8(raw, "saved stream")))
}

/// Hand every pane of `result` to `sink`, in display order.
pub fn present(
    sink: &mut dyn PresentationSink,
    source: &str,
    result: &ParseResult,
) -> io::Result<()> {
    sink.show_source(source)?;
    sink.show_lexemes(&result.lexemes)?;
    sink.show_tree(&result.tree)?;
    sink.show_triads(TRIADS_ORIGINAL_LABEL, &result.triads_original)?;
    sink.show_triads(TRIADS_OPTIMIZED_LABEL, &result.triads_optimized)?;
    sink.finish()
}
