use super::sections::Section;
use super::types::{LexemeRecord, ParseResult, TriadLine};
use tracing::{trace, warn};

/// Decode raw result-stream bytes, replacing invalid UTF-8 instead of failing.
pub fn decode_utf8(bytes: Vec<u8>, origin: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(origin, "result stream is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Decode a `lineNumber,tokenType,value` line.
///
/// The split stops after the second comma so the value keeps any commas of
/// its own. Returns `None` for lines with fewer than three fields or an
/// empty token type.
pub fn parse_lexeme_line(line: &str) -> Option<LexemeRecord> {
    let mut parts = line.splitn(3, ',');
    let line_number = parts.next()?.trim();
    let token_type = parts.next()?.trim();
    let value = parts.next()?.trim();

    if token_type.is_empty() {
        return None;
    }

    Some(LexemeRecord {
        line_number: line_number.to_string(),
        token_type: token_type.to_string(),
        value: value.to_string(),
    })
}

/// Decode the analyzer's result stream into its four collections.
///
/// Never fails: lines that cannot be classified are dropped.
pub fn parse_output(output: &str) -> ParseResult {
    let mut result = ParseResult::default();
    let mut tree_lines: Vec<&str> = Vec::new();
    let mut section = Section::None;

    for (idx, line) in output.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        if let Some(next) = Section::transition(line) {
            trace!(line = idx + 1, from = ?section, to = ?next, "section marker");
            section = next;
            continue;
        }

        match section {
            Section::Tree => tree_lines.push(line),
            Section::TriadsOriginal => result.triads_original.push(TriadLine::new(line)),
            Section::TriadsOptimized => result.triads_optimized.push(TriadLine::new(line)),
            Section::None => match parse_lexeme_line(line) {
                Some(lexeme) => result.lexemes.push(lexeme),
                None => trace!(line = idx + 1, text = line, "dropping malformed lexeme line"),
            },
        }
    }

    result.tree = tree_lines.join("\n");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexeme(line_number: &str, token_type: &str, value: &str) -> LexemeRecord {
        LexemeRecord {
            line_number: line_number.into(),
            token_type: token_type.into(),
            value: value.into(),
        }
    }

    #[test]
    fn lexeme_line_is_trimmed() {
        assert_eq!(parse_lexeme_line(" 1 , ID ,  x "), Some(lexeme("1", "ID", "x")));
    }

    #[test]
    fn lexeme_value_keeps_commas() {
        assert_eq!(parse_lexeme_line("1,STR,a,b"), Some(lexeme("1", "STR", "a,b")));
    }

    #[test]
    fn lexeme_value_may_be_empty() {
        assert_eq!(parse_lexeme_line("3,EMPTY,"), Some(lexeme("3", "EMPTY", "")));
    }

    #[test]
    fn lexeme_line_needs_three_fields() {
        assert_eq!(parse_lexeme_line("garbage line"), None);
        assert_eq!(parse_lexeme_line("1,ID"), None);
    }

    #[test]
    fn lexeme_line_needs_token_type() {
        assert_eq!(parse_lexeme_line("1, ,x"), None);
    }

    #[test]
    fn sections_collect_their_lines() {
        let out = parse_output("1, ID, x\n2, NUM, 42\nTREE:\nA\nB\n");
        assert_eq!(out.lexemes, vec![lexeme("1", "ID", "x"), lexeme("2", "NUM", "42")]);
        assert_eq!(out.tree, "A\nB");
        assert!(out.triads_original.is_empty());
        assert!(out.triads_optimized.is_empty());
    }

    #[test]
    fn section_membership_is_sticky() {
        let out = parse_output("TREE:\n1,ID,x\nИсходные триады:\n2,ID,y\n");
        assert!(out.lexemes.is_empty());
        assert_eq!(out.tree, "1,ID,x");
        assert_eq!(out.triads_original, vec![TriadLine::from("2,ID,y")]);
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let out = parse_output("1,ID,x\r\nTREE:\r\nE\r\n");
        assert_eq!(out.lexemes, vec![lexeme("1", "ID", "x")]);
        assert_eq!(out.tree, "E");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(decode_utf8(b"TREE:\nA\xff".to_vec(), "test"), "TREE:\nA\u{fffd}");
        assert_eq!(decode_utf8(b"1,ID,x".to_vec(), "test"), "1,ID,x");
    }

    #[test]
    fn whitespace_only_triad_lines_are_kept() {
        let out = parse_output("Исходные триады:\n  \n1. or [a, b] \n");
        assert_eq!(
            out.triads_original,
            vec![TriadLine::from("  "), TriadLine::from("1. or [a, b] ")]
        );
    }
}
