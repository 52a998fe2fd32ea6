//! File-to-file trimming pipeline.
//!
//! [`trim_file`] runs the stages in order and stops at the first failure:
//!
//! 1. Open the source file
//! 2. Decode it into a [`DecodedImage`](crate::decode::DecodedImage)
//! 3. Find the bounds of the visible pixels
//! 4. Copy those bounds into a new image
//! 5. Create the destination file and encode the copy as PNG
//!
//! The destination is only created once the crop has succeeded. File handles
//! are owned values and are closed when dropped, on every return path.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::decode::{decode_image, DecodeError};
use crate::encode::{write_png, EncodeError};
use crate::transform::{trim_image, BoundingRect, CropError};

/// A failure in one stage of [`trim_file`].
///
/// Every message starts with the name of the stage that failed.
#[derive(Debug, Error)]
pub enum TrimError {
    #[error("Error open file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error decode image: {0}")]
    Decode(#[from] DecodeError),

    #[error("Error crop image: {0}")]
    Crop(#[from] CropError),

    #[error("Error create file {}: {source}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error save image: {0}")]
    Encode(#[from] EncodeError),
}

impl TrimError {
    /// Short name of the stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            TrimError::FileOpen { .. } => "open",
            TrimError::Decode(_) => "decode",
            TrimError::Crop(_) => "crop",
            TrimError::FileCreate { .. } => "create",
            TrimError::Encode(_) => "encode",
        }
    }
}

/// Summary of a successful trim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrimReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    /// Visible content bounds in source coordinates (inclusive).
    pub bounds: BoundingRect,
    pub output_width: u32,
    pub output_height: u32,
}

impl TrimReport {
    /// Returns false when the source had no transparent border to remove.
    pub fn was_trimmed(&self) -> bool {
        self.output_width != self.source_width || self.output_height != self.source_height
    }
}

/// Trim the transparent border of the image at `input` and write the result
/// to `output` as PNG.
///
/// # Errors
///
/// Returns the [`TrimError`] variant of the first stage that fails. When the
/// failure happens before the create stage, `output` is left untouched.
pub fn trim_file(input: &Path, output: &Path) -> Result<TrimReport, TrimError> {
    run(input, output).inspect_err(|e| {
        log::warn!("trim of {} failed at {} stage", input.display(), e.stage());
    })
}

fn run(input: &Path, output: &Path) -> Result<TrimReport, TrimError> {
    log::debug!("opening {}", input.display());
    let file = File::open(input).map_err(|source| TrimError::FileOpen {
        path: input.to_path_buf(),
        source,
    })?;

    let source = decode_image(BufReader::new(file))?;
    let (source_width, source_height) = (source.width, source.height);

    let (bounds, trimmed) = trim_image(&source)?;
    drop(source);
    log::debug!(
        "visible bounds {:?} in {}x{} source",
        bounds,
        source_width,
        source_height
    );

    log::debug!("creating {}", output.display());
    let out = File::create(output).map_err(|source| TrimError::FileCreate {
        path: output.to_path_buf(),
        source,
    })?;
    write_png(BufWriter::new(out), &trimmed)?;

    log::info!(
        "trimmed {} ({}x{}) to {} ({}x{})",
        input.display(),
        source_width,
        source_height,
        output.display(),
        trimmed.width,
        trimmed.height
    );

    Ok(TrimReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        source_width,
        source_height,
        bounds,
        output_width: trimmed.width,
        output_height: trimmed.height,
    })
}
