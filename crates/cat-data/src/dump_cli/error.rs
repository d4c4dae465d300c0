//! Error types for the dump CLI.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the CLI parsing and dump flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognized.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// The output path does not name a file.
    #[error("output path must name a file: '{path}'")]
    InvalidOutputPath {
        /// The rejected path.
        path: Utf8PathBuf,
    },
    /// The dataset could not be serialized.
    #[error("failed to serialize cat dataset: {message}")]
    Serialize {
        /// Serializer error message.
        message: String,
    },
    /// The output file could not be written.
    #[error("failed to write '{path}': {message}")]
    Write {
        /// Path that failed to write.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
    /// Standard output could not be written.
    #[error("failed to write to stdout: {message}")]
    Stdout {
        /// Description of the I/O error.
        message: String,
    },
}
