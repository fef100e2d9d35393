use crate::error::RunError;
use std::time::Duration;

/// How to launch the external analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub program: String,
    /// Arguments placed before the source path
    pub args: Vec<String>,
    /// `None` waits for the analyzer indefinitely
    pub timeout: Option<Duration>,
}

impl AnalyzerConfig {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    /// Build a config from a shell-style command line such as
    /// `wine ConsoleApplication1.exe`. A timeout of zero seconds means none.
    pub fn from_command_line(command: &str, timeout_secs: Option<u64>) -> Result<Self, RunError> {
        let words = shlex::split(command)
            .ok_or_else(|| RunError::Config(format!("unbalanced quotes in analyzer command: {command}")))?;

        let mut words = words.into_iter();
        let program = words
            .next()
            .ok_or_else(|| RunError::Config("analyzer command is empty".to_string()))?;

        Ok(Self {
            program,
            args: words.collect(),
            timeout: timeout_secs.filter(|&secs| secs > 0).map(Duration::from_secs),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_splits_program_and_args() {
        let config =
            AnalyzerConfig::from_command_line("wine \"C:/Analyzer Dir/a.exe\"", Some(5)).unwrap();
        assert_eq!(config.program, "wine");
        assert_eq!(config.args, vec!["C:/Analyzer Dir/a.exe".to_string()]);
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn zero_timeout_means_none() {
        let config = AnalyzerConfig::from_command_line("analyzer", Some(0)).unwrap();
        assert_eq!(config.timeout, None);
        assert!(config.args.is_empty());
    }

    #[test]
    fn empty_command_is_rejected() {
        assert!(matches!(
            AnalyzerConfig::from_command_line("   ", None),
            Err(RunError::Config(_))
        ));
    }

    #[test]
    fn unbalanced_quotes_are_rejected() {
        assert!(matches!(
            AnalyzerConfig::from_command_line("\"analyzer", None),
            Err(RunError::Config(_))
        ));
    }
}
