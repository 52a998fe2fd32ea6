use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "alphatrim")]
#[command(
    about = "Crops fully transparent borders from an image and saves the result as PNG",
    long_about = None
)]
pub struct Args {
    /// [required] path to source image
    #[arg(short = 'i', long = "input", value_name = "PATH", allow_hyphen_values = true)]
    pub input: Option<OsString>,

    /// [required] output path to new image
    #[arg(short = 'o', long = "output", value_name = "PATH", allow_hyphen_values = true)]
    pub output: Option<OsString>,

    /// Also print a one-line JSON summary of the trim
    #[arg(long)]
    pub json: bool,

    /// Flag parsing stops at the first positional argument; it and
    /// everything after it are ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("No required arguments: {0} <PATH> is missing")]
    MissingArgument(&'static str),
}

fn required(value: Option<&OsString>, flag: &'static str) -> Result<PathBuf, ArgsError> {
    match value {
        Some(v) if !v.is_empty() => Ok(PathBuf::from(v)),
        _ => Err(ArgsError::MissingArgument(flag)),
    }
}

impl Args {
    /// Source and destination paths. Absent and empty flags are both missing.
    pub fn paths(&self) -> Result<(PathBuf, PathBuf), ArgsError> {
        let input = required(self.input.as_ref(), "-i")?;
        let output = required(self.output.as_ref(), "-o")?;
        Ok((input, output))
    }
}
