mod config;
mod session;

pub use config::AnalyzerConfig;
pub use session::{AnalyzerCollaborator, ProcessAnalyzer};
