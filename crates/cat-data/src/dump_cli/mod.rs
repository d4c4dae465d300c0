//! CLI support for dumping a generated cat dataset.
//!
//! The `cat-data-dump` binary delegates to these functions so parsing and
//! output can be exercised in tests without spawning a subprocess.

mod error;

use std::fmt;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

pub use error::CliError;

use crate::atomic_io::write_atomic;
use crate::generator::{generate, generate_with_rng};
use crate::record::Dataset;

/// Parsed options for the dump CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    output: Option<Utf8PathBuf>,
    seed: Option<u64>,
    pretty: bool,
}

impl Options {
    /// Returns the file the dataset is written to, if any.
    ///
    /// `None` means the dataset goes to standard output.
    ///
    /// # Example
    ///
    /// ```
    /// use cat_data::dump_cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec!["--output".to_string(), "db.json".to_string()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.output().map(|path| path.as_str()), Some("db.json"));
    /// ```
    #[must_use]
    pub fn output(&self) -> Option<&Utf8Path> {
        self.output.as_deref()
    }

    /// Returns the RNG seed, if one was supplied.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether the JSON is pretty-printed.
    #[must_use]
    pub const fn pretty(&self) -> bool {
        self.pretty
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments into dump options.
///
/// # Errors
///
/// Returns [`CliError`] when a flag is unknown, a value is missing, or a
/// number cannot be parsed.
///
/// # Example
///
/// ```
/// use cat_data::dump_cli::{ParseOutcome, parse_args};
///
/// let args = vec!["--seed".to_string(), "2026".to_string(), "--pretty".to_string()];
///
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
/// assert_eq!(options.seed(), Some(2026));
/// assert!(options.pretty());
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--output" => {
                let value = next_value(&mut args, "--output")?;
                options.output = Some(Utf8PathBuf::from(value));
            }
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                options.seed = Some(parse_number(&value, "--seed")?);
            }
            "--pretty" => options.pretty = true,
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    Ok(ParseOutcome::Options(options))
}

/// Generates the dataset described by the options.
///
/// A supplied seed drives a `ChaCha8Rng`, so the same seed always yields the
/// same cats. Without a seed the thread-local generator is used.
#[must_use]
pub fn build_dataset(options: &Options) -> Dataset {
    options.seed.map_or_else(generate, |seed| {
        generate_with_rng(&mut ChaCha8Rng::seed_from_u64(seed))
    })
}

/// Serializes the dataset to JSON text.
///
/// # Errors
///
/// Returns [`CliError::Serialize`] if serialization fails.
pub fn render_dataset(dataset: &Dataset, pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(dataset)
    } else {
        serde_json::to_string(dataset)
    };
    rendered.map_err(|err| CliError::Serialize {
        message: err.to_string(),
    })
}

/// Writes JSON text atomically to `path`.
///
/// # Errors
///
/// Returns [`CliError::InvalidOutputPath`] if `path` has no file name, or
/// [`CliError::Write`] if the parent directory cannot be opened or the file
/// cannot be written.
pub fn write_output(path: &Utf8Path, contents: &str) -> Result<(), CliError> {
    let Some(file_name) = path.file_name() else {
        return Err(CliError::InvalidOutputPath {
            path: path.to_path_buf(),
        });
    };
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        CliError::Write {
            path: parent.to_path_buf(),
            message: err.to_string(),
        }
    })?;

    write_atomic(&dir, file_name, contents).map_err(|err| CliError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Generates, renders, and emits a dataset according to the options.
///
/// The JSON goes to the output file when one is configured and to `stdout`
/// otherwise. The generated dataset is returned for reporting.
///
/// # Errors
///
/// Returns [`CliError`] if serialization or any write fails.
pub fn execute<W: Write>(options: &Options, stdout: &mut W) -> Result<Dataset, CliError> {
    let dataset = build_dataset(options);
    let json = render_dataset(&dataset, options.pretty)?;

    let Some(path) = options.output() else {
        writeln!(stdout, "{json}").map_err(|err| CliError::Stdout {
            message: err.to_string(),
        })?;
        return Ok(dataset);
    };

    write_output(path, &json)?;
    info!(path = %path, count = dataset.cats.len(), "wrote cat dataset");
    Ok(dataset)
}

/// Formats the success message emitted after writing a file.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use cat_data::dump_cli::success_message;
///
/// let message = success_message(Utf8Path::new("db.json"), 100);
///
/// assert_eq!(message, "Wrote 100 cats to db.json");
/// ```
#[must_use]
pub fn success_message(path: &Utf8Path, count: usize) -> String {
    format!("Wrote {count} cats to {path}")
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}
