//! Output file naming and PNG saving.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};

use crate::error::Error;

/// Prefix shared by every rendered file name.
pub const FILE_PREFIX: &str = "matryoshka_prompt";

/// How many suffixed names to try before giving up on a timestamp.
const MAX_ATTEMPTS: u32 = 1000;

/// Current local time with second resolution, e.g. `20261019_143005`.
#[must_use]
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// File name for the given timestamp and attempt.
///
/// Attempt 0 is `matryoshka_prompt_{timestamp}.png`; later attempts append
/// `_{attempt}` so renders within the same second get distinct names.
#[must_use]
pub fn output_filename(timestamp: &str, attempt: u32) -> String {
    if attempt == 0 {
        format!("{FILE_PREFIX}_{timestamp}.png")
    } else {
        format!("{FILE_PREFIX}_{timestamp}_{attempt}.png")
    }
}

/// Create `dir` if needed and atomically claim an unused output file in it.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, a file cannot be
/// created, or every candidate name is already taken.
pub fn claim_output_file(dir: &Path, timestamp: &str) -> Result<(PathBuf, File), Error> {
    std::fs::create_dir_all(dir)?;
    for attempt in 0..MAX_ATTEMPTS {
        let path = dir.join(output_filename(timestamp, attempt));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => return Err(Error::Io(e)),
        }
    }
    Err(Error::Io(std::io::Error::new(
        ErrorKind::AlreadyExists,
        format!("No free output name for {timestamp} in {}", dir.display()),
    )))
}

/// Encode `canvas` as PNG into a freshly claimed file under `dir`.
///
/// # Errors
///
/// Returns an error if the file cannot be claimed or written, or if PNG
/// encoding fails. A partially written file is removed.
pub fn save_png(canvas: &RgbImage, dir: &Path) -> Result<PathBuf, Error> {
    let (path, file) = claim_output_file(dir, &timestamp())?;
    if let Err(e) = write_png(canvas, file) {
        let _ = std::fs::remove_file(&path);
        return Err(e);
    }
    Ok(path)
}

fn write_png(canvas: &RgbImage, file: File) -> Result<(), Error> {
    let mut writer = BufWriter::new(file);
    canvas.write_to(&mut writer, ImageFormat::Png).map_err(|e| match e {
        image::ImageError::IoError(io) => Error::Io(io),
        other => Error::Encode(other.to_string()),
    })?;
    writer.flush()?;
    Ok(())
}
