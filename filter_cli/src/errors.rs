use std::fmt;
use std::process::ExitCode;

/// Errors reported by CLI commands. Details are printed where they occur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CliError {
    FileError,
    ParseError,
    BuildError,
    NotFound,
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::FileError => ExitCode::from(2),
            CliError::ParseError => ExitCode::from(3),
            CliError::BuildError => ExitCode::from(4),
            CliError::NotFound => ExitCode::from(5),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileError => write!(f, "Failed to read definition file"),
            CliError::ParseError => write!(f, "Failed to parse definition file"),
            CliError::BuildError => write!(f, "Failed to build filters"),
            CliError::NotFound => write!(f, "Filter not found"),
        }
    }
}

impl std::error::Error for CliError {}
