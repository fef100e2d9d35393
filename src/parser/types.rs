use serde::Serialize;
use std::fmt;

/// One token occurrence from the lexeme table: `lineNumber,tokenType,value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexemeRecord {
    /// Kept as text; the analyzer's numbering is not guaranteed numeric.
    pub line_number: String,
    pub token_type: String,
    pub value: String,
}

/// A single triad line, kept exactly as the analyzer printed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TriadLine(String);

impl TriadLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TriadLine {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for TriadLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything decoded from one analyzer run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub lexemes: Vec<LexemeRecord>,
    pub tree: String,
    pub triads_original: Vec<TriadLine>,
    pub triads_optimized: Vec<TriadLine>,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
            && self.tree.is_empty()
            && self.triads_original.is_empty()
            && self.triads_optimized.is_empty()
    }
}
