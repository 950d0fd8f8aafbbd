//! GIF export.
//!
//! Two backends, mirroring their different capabilities:
//!
//! - [`GifBackend::Native`] encodes in-process through the `image`
//!   crate. No external tools, but no transparent backgrounds and the
//!   palette size is the encoder's own.
//! - [`GifBackend::Magick`] stages frames as temporary PNGs and drives
//!   the ImageMagick CLI, which handles transparency and honors the
//!   palette settings.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, RgbaImage};

use gyre_core::{Animation, Frame};

use crate::error::ExportError;
use crate::magick;

/// Which encoder produces the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GifBackend {
    #[default]
    Native,
    Magick,
}

/// Encoding knobs.
#[derive(Debug, Clone)]
pub struct GifOptions {
    /// Target palette size. Honored by the Magick backend.
    pub palette_size: u16,
    /// Preserve transparent backgrounds. Only the Magick backend can.
    pub transparent: bool,
    /// Color-merge tolerance for the Magick optimizer, in percent.
    pub fuzz: u8,
    pub backend: GifBackend,
}

impl Default for GifOptions {
    fn default() -> Self {
        GifOptions {
            palette_size: 256,
            transparent: false,
            fuzz: 1,
            backend: GifBackend::Native,
        }
    }
}

/// Encodes `frames` at `fps` into a looping GIF at `path`.
pub fn write_gif(
    path: &Path,
    frames: &[Frame],
    fps: f64,
    options: &GifOptions,
) -> Result<(), ExportError> {
    validate(frames)?;

    tracing::info!(?path, frames = frames.len(), backend = ?options.backend, "writing gif");

    match options.backend {
        GifBackend::Native => {
            if options.transparent {
                return Err(ExportError::Unsupported {
                    backend: "native",
                    feature: "transparent backgrounds",
                });
            }
            write_native(path, frames, fps, options)
        }
        GifBackend::Magick => magick::write_gif(path, frames, fps, options),
    }
}

fn validate(frames: &[Frame]) -> Result<(), ExportError> {
    let first = frames.first().ok_or(ExportError::NoFrames)?;
    for (index, frame) in frames.iter().enumerate() {
        if frame.width != first.width || frame.height != first.height {
            return Err(ExportError::MismatchedFrame { index });
        }
    }
    Ok(())
}

fn write_native(
    path: &Path,
    frames: &[Frame],
    fps: f64,
    options: &GifOptions,
) -> Result<(), ExportError> {
    if options.palette_size != 256 {
        tracing::debug!(
            palette_size = options.palette_size,
            "native gif encoder uses its own palette; size setting ignored"
        );
    }

    let file = BufWriter::new(File::create(path)?);
    let mut encoder = GifEncoder::new(file);
    encoder.set_repeat(Repeat::Infinite)?;

    let delay = Delay::from_numer_denom_ms(1000, fps.round().max(1.0) as u32);

    for (index, frame) in frames.iter().enumerate() {
        let buffer = RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
            .ok_or(ExportError::MismatchedFrame { index })?;
        encoder.encode_frame(image::Frame::from_parts(buffer, 0, 0, delay))?;
    }

    Ok(())
}

/// A GIF animation bound to a filename: render, then encode.
#[derive(Debug, Clone)]
pub struct Gif {
    path: PathBuf,
    options: GifOptions,
}

impl Gif {
    pub fn new(path: impl Into<PathBuf>) -> Gif {
        Gif { path: path.into(), options: GifOptions::default() }
    }

    pub fn palette_size(mut self, size: u16) -> Gif {
        self.options.palette_size = size;
        self
    }

    /// Requires the Magick backend at save time.
    pub fn transparent(mut self, transparent: bool) -> Gif {
        self.options.transparent = transparent;
        self
    }

    pub fn fuzz(mut self, percent: u8) -> Gif {
        self.options.fuzz = percent;
        self
    }

    pub fn backend(mut self, backend: GifBackend) -> Gif {
        self.options.backend = backend;
        self
    }

    /// Renders every frame of `animation` and writes the file.
    pub fn save(&self, animation: &mut Animation) -> Result<PathBuf, ExportError> {
        let frames = animation.render_all();
        write_gif(&self.path, &frames, animation.fps(), &self.options)?;
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_frames(n: usize, w: u32, h: u32) -> Vec<Frame> {
        (0..n)
            .map(|i| {
                let shade = (i * 40) as u8;
                let data: Vec<u8> = (0..w * h)
                    .flat_map(|_| [shade, 0, 255 - shade, 255])
                    .collect();
                Frame::new(w, h, data)
            })
            .collect()
    }

    #[test]
    fn native_backend_writes_a_gif_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.gif");
        let frames = solid_frames(3, 8, 8);

        write_gif(&path, &frames, 30.0, &GifOptions::default()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..6], b"GIF89a");
    }

    #[test]
    fn empty_frame_list_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.gif");
        let err = write_gif(&path, &[], 30.0, &GifOptions::default()).unwrap_err();
        assert!(matches!(err, ExportError::NoFrames));
    }

    #[test]
    fn mixed_dimensions_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.gif");
        let mut frames = solid_frames(2, 8, 8);
        frames.push(Frame::new(4, 4, vec![0; 64]));
        let err = write_gif(&path, &frames, 30.0, &GifOptions::default()).unwrap_err();
        assert!(matches!(err, ExportError::MismatchedFrame { index: 2 }));
    }

    #[test]
    fn native_transparency_is_a_hard_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.gif");
        let frames = solid_frames(2, 8, 8);
        let options = GifOptions { transparent: true, ..GifOptions::default() };
        let err = write_gif(&path, &frames, 30.0, &options).unwrap_err();
        assert!(matches!(err, ExportError::Unsupported { .. }));
        assert!(!path.exists(), "no partial file on failure");
    }
}
