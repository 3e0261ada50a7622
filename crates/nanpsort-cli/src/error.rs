use anyhow::Error;
use nanpsort_config::ConfigError;
use nanpsort_core::CoreError;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error as ThisError;

/// Problems with the positional input path itself.
#[derive(Debug, ThisError)]
pub enum InputError {
    #[error("input file not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("input path is a directory: {}", .0.display())]
    Directory(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Failure = 1,
    MissingInput = 2,
    InvalidInput = 3,
}

impl Exit {
    /// Picks the status from the first cause in the chain that we recognize.
    pub fn classify(err: &Error) -> Self {
        for cause in err.chain() {
            if let Some(input_err) = cause.downcast_ref::<InputError>() {
                return match input_err {
                    InputError::Missing(_) => Exit::MissingInput,
                    InputError::Directory(_) => Exit::InvalidInput,
                };
            }
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return match config_err {
                    ConfigError::NotFound(_) | ConfigError::Invalid { .. } => Exit::InvalidInput,
                    ConfigError::Read { .. } => Exit::Failure,
                };
            }
            if cause.downcast_ref::<CoreError>().is_some() {
                return Exit::InvalidInput;
            }
        }
        Exit::Failure
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

/// Prints the error to stderr; `verbose` adds one line per underlying cause.
pub fn report(err: &Error, verbose: bool) {
    eprintln!("error: {err}");
    if verbose {
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
    }
}
