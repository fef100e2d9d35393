mod sections;
mod stream;
mod types;

pub use sections::{Section, TREE_MARKER, TRIADS_OPTIMIZED_MARKER, TRIADS_ORIGINAL_MARKER};
pub use stream::{decode_utf8, parse_lexeme_line, parse_output};
pub use types::{LexemeRecord, ParseResult, TriadLine};
