//! Image integrity check.
//!
//! The file's real format is sniffed from its content, the header is read for
//! dimensions, and only then is the full pixel data decoded. Truncated or
//! corrupted files usually parse their header fine and fail during the full
//! decode.

use std::path::Path;

use ::image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader};

use super::{CheckOutcome, IntegrityCheck, decode_failure};
use crate::discovery::lowercase_extension;
use crate::error::CoreResult;

/// Checks image files with the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageChecker;

impl ImageChecker {
    pub fn new() -> Self {
        Self
    }
}

impl IntegrityCheck for ImageChecker {
    fn check(&self, path: &Path) -> CheckOutcome {
        match inspect(path) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::debug!("Image decode failed for {}: {}", path.display(), err);
                decode_failure(&err, "image")
            }
        }
    }
}

fn inspect(path: &Path) -> CoreResult<CheckOutcome> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let detected = reader.format();
    let decoder = reader.into_decoder()?;

    let (width, height) = decoder.dimensions();
    if width == 0 || height == 0 {
        return Ok(CheckOutcome::failed(format!(
            "invalid image dimensions: {width}x{height}"
        )));
    }

    DynamicImage::from_decoder(decoder)?;

    if let Some(message) = detected.and_then(|format| format_mismatch(path, format)) {
        return Ok(CheckOutcome::failed(message));
    }

    Ok(CheckOutcome::ok("image OK"))
}

/// Upper-case name of a detected format, e.g. `JPEG` or `PNG`.
pub fn format_name(format: ImageFormat) -> String {
    format!("{format:?}").to_uppercase()
}

/// Describes a mismatch between the file's extension and its real format.
///
/// Only `.jpg`/`.jpeg` and `.png` are cross-checked; the other image
/// extensions accept whatever format decodes.
pub fn format_mismatch(path: &Path, detected: ImageFormat) -> Option<String> {
    let ext = lowercase_extension(path)?;
    let expected = match ext.as_str() {
        "jpg" | "jpeg" => ImageFormat::Jpeg,
        "png" => ImageFormat::Png,
        _ => return None,
    };
    (detected != expected).then(|| {
        format!(
            "format mismatch: extension is .{ext}, actual format is {}",
            format_name(detected)
        )
    })
}
