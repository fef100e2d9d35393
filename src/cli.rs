//! Command-line surface: argument parsing and dispatch.

use crate::analyzer::{AnalyzerConfig, ProcessAnalyzer};
use crate::error::RunError;
use crate::executor::{decode_stream, present, run_analysis};
use crate::presentation::{JsonSink, PresentationSink, TextSink};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Show the lexeme table, parse tree and triads produced by an external analyzer.
#[derive(Parser, Debug)]
#[command(name = "triad-viewer", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Report format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the analyzer on a source file and show its results
    Analyze {
        /// Source file to analyse
        source: PathBuf,

        /// Analyzer command line; the source path is appended as the last argument
        #[arg(long, env = "TRIAD_ANALYZER")]
        analyzer: String,

        /// Seconds to wait for the analyzer (0 waits forever)
        #[arg(long, env = "TRIAD_TIMEOUT")]
        timeout: Option<u64>,
    },

    /// Decode a saved result stream; reads stdin when no file is given
    Decode { stream: Option<PathBuf> },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn sink<'a>(self, out: &'a mut dyn Write) -> Box<dyn PresentationSink + 'a> {
        match self {
            OutputFormat::Text => Box::new(TextSink::new(out)),
            OutputFormat::Json => Box::new(JsonSink::new(out)),
        }
    }
}

impl Cli {
    pub fn execute(self, out: &mut dyn Write) -> Result<(), RunError> {
        let (source, result) = match self.command {
            Commands::Analyze {
                source,
                analyzer,
                timeout,
            } => {
                let config = AnalyzerConfig::from_command_line(&analyzer, timeout)?;
                let analysis = run_analysis(&ProcessAnalyzer::new(config), &source)?;
                (analysis.source, analysis.result)
            }
            Commands::Decode { stream } => {
                let result = match stream {
                    Some(path) => {
                        let file = File::open(&path).map_err(|e| RunError::Source {
                            path: path.clone(),
                            message: e.to_string(),
                        })?;
                        decode_stream(file)?
                    }
                    None => decode_stream(io::stdin().lock())?,
                };
                (String::new(), result)
            }
        };

        let mut sink = self.format.sink(out);
        present(sink.as_mut(), &source, &result)?;
        Ok(())
    }
}
