use super::PresentationSink;
use crate::parser::{LexemeRecord, TriadLine};
use std::io::{self, Write};

const LEXEME_HEADERS: [&str; 3] = ["№", "Тип", "Значение"];

/// Plain-text report, one titled block per result pane.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "== {} ==", title)
    }

    fn body(&mut self, text: &str) -> io::Result<()> {
        if !text.is_empty() {
            writeln!(self.out, "{}", text)?;
        }
        writeln!(self.out)
    }
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{}{}", cell, " ".repeat(fill))
}

impl<W: Write> PresentationSink for TextSink<W> {
    fn show_source(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.heading("Содержимое файла")?;
        self.body(text.trim_end_matches(['\r', '\n']))
    }

    fn show_lexemes(&mut self, lexemes: &[LexemeRecord]) -> io::Result<()> {
        self.heading("Результаты лексического анализа")?;

        let mut widths = LEXEME_HEADERS.map(|h| h.chars().count());
        for lexeme in lexemes {
            let cells = [&lexeme.line_number, &lexeme.token_type, &lexeme.value];
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let row = |cells: [&str; 3]| {
            cells
                .iter()
                .zip(widths)
                .map(|(cell, width)| pad(cell, width))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        writeln!(self.out, "{}", row(LEXEME_HEADERS))?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(self.out, "{}", rule.join("-+-"))?;
        for lexeme in lexemes {
            let line = row([
                lexeme.line_number.as_str(),
                lexeme.token_type.as_str(),
                lexeme.value.as_str(),
            ]);
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out)
    }

    fn show_tree(&mut self, tree: &str) -> io::Result<()> {
        self.heading("Дерево синтаксического разбора")?;
        self.body(tree)
    }

    fn show_triads(&mut self, label: &str, triads: &[TriadLine]) -> io::Result<()> {
        self.heading(label)?;
        let joined: Vec<&str> = triads.iter().map(TriadLine::as_str).collect();
        self.body(&joined.join("\n"))
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
