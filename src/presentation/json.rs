use super::PresentationSink;
use crate::parser::{LexemeRecord, TriadLine};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Default, Serialize)]
struct Report {
    source: String,
    lexemes: Vec<LexemeRecord>,
    tree: String,
    triads: Vec<TriadListing>,
}

#[derive(Debug, Serialize)]
struct TriadListing {
    label: String,
    lines: Vec<TriadLine>,
}

/// Buffers every pane and writes a single pretty-printed JSON document on `finish`.
pub struct JsonSink<W: Write> {
    out: W,
    report: Report,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            report: Report::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PresentationSink for JsonSink<W> {
    fn show_source(&mut self, text: &str) -> io::Result<()> {
        self.report.source = text.to_string();
        Ok(())
    }

    fn show_lexemes(&mut self, lexemes: &[LexemeRecord]) -> io::Result<()> {
        self.report.lexemes = lexemes.to_vec();
        Ok(())
    }

    fn show_tree(&mut self, tree: &str) -> io::Result<()> {
        self.report.tree = tree.to_string();
        Ok(())
    }

    fn show_triads(&mut self, label: &str, triads: &[TriadLine]) -> io::Result<()> {
        self.report.triads.push(TriadListing {
            label: label.to_string(),
            lines: triads.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
