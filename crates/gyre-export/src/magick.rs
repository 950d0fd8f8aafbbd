//! ImageMagick CLI backend.
//!
//! Frames are staged as numbered PNGs in a temporary directory and
//! `convert` assembles the GIF. Clunky next to the in-process encoder,
//! but it is the only backend that keeps transparent backgrounds.
//!
//! The binary is resolved from the `IMAGEMAGICK_BINARY` environment
//! variable, defaulting to `convert`.

use std::path::Path;
use std::process::{Command, Stdio};

use gyre_core::Frame;

use crate::error::ExportError;
use crate::gif::GifOptions;
use crate::image_seq::write_image_sequence;

/// Locates and probes the ImageMagick binary.
pub struct MagickDriver;

impl MagickDriver {
    pub fn binary() -> String {
        std::env::var("IMAGEMAGICK_BINARY").unwrap_or_else(|_| "convert".to_owned())
    }

    /// Checks that the binary runs at all.
    pub fn ensure_available() -> Result<(), ExportError> {
        let binary = Self::binary();
        let output = Command::new(&binary)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match output {
            Ok(status) if status.success() => Ok(()),
            _ => Err(ExportError::MissingBackend { binary }),
        }
    }
}

pub(crate) fn write_gif(
    path: &Path,
    frames: &[Frame],
    fps: f64,
    options: &GifOptions,
) -> Result<(), ExportError> {
    MagickDriver::ensure_available()?;
    let binary = MagickDriver::binary();

    // Stage the frames; the directory cleans itself up on drop.
    let staging = tempfile::tempdir()?;
    let frame_paths = write_image_sequence(&staging.path().join("frame.png"), frames)?;

    // Centiseconds per frame.
    let delay = (100.0 / fps).round().max(1.0) as u32;

    let mut cmd = Command::new(&binary);
    cmd.arg("-delay")
        .arg(delay.to_string())
        .arg("-dispose")
        .arg("2")
        .arg("-loop")
        .arg("0");
    for frame_path in &frame_paths {
        cmd.arg(frame_path);
    }
    cmd.arg("-coalesce")
        .arg("-layers")
        .arg("OptimizeTransparency")
        .arg("-colors")
        .arg(options.palette_size.to_string())
        .arg("-fuzz")
        .arg(format!("{:02}%", options.fuzz))
        .arg(path);

    tracing::debug!(%binary, frames = frames.len(), "invoking imagemagick");

    let output = cmd.output().map_err(|_| ExportError::MissingBackend {
        binary: binary.clone(),
    })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(ExportError::BackendFailed {
            binary,
            detail: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        })
    }
}
