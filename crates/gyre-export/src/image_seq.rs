//! Numbered still-image export.

use std::path::{Path, PathBuf};

use gyre_core::{Animation, Frame};

use crate::error::ExportError;

/// Writes `frames` as numbered stills next to `path`.
///
/// `frames.png` becomes `frames0000.png`, `frames0001.png`, …; the
/// extension picks the format. Returns the written paths in frame order.
pub fn write_image_sequence(path: &Path, frames: &[Frame]) -> Result<Vec<PathBuf>, ExportError> {
    if frames.is_empty() {
        return Err(ExportError::NoFrames);
    }

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("frame");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("png");
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut written = Vec::with_capacity(frames.len());
    for (index, frame) in frames.iter().enumerate() {
        let frame_path = dir.join(format!("{stem}{index:04}.{ext}"));
        image::save_buffer(
            &frame_path,
            &frame.data,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )?;
        written.push(frame_path);
    }

    tracing::info!(count = written.len(), ?dir, "wrote image sequence");
    Ok(written)
}

/// An image-sequence export bound to a filename pattern.
#[derive(Debug, Clone)]
pub struct ImageSequence {
    path: PathBuf,
}

impl ImageSequence {
    pub fn new(path: impl Into<PathBuf>) -> ImageSequence {
        ImageSequence { path: path.into() }
    }

    /// Renders every frame of `animation` and writes the stills.
    pub fn save(&self, animation: &mut Animation) -> Result<Vec<PathBuf>, ExportError> {
        let frames = animation.render_all();
        write_image_sequence(&self.path, &frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_numbered_file_per_frame() {
        let dir = tempfile::tempdir().unwrap();
        let frames: Vec<Frame> = (0..3)
            .map(|_| Frame::new(4, 4, vec![255; 4 * 4 * 4]))
            .collect();

        let written = write_image_sequence(&dir.path().join("shot.png"), &frames).unwrap();

        assert_eq!(written.len(), 3);
        assert!(written[0].ends_with("shot0000.png"));
        assert!(written[2].ends_with("shot0002.png"));
        for path in &written {
            assert!(path.exists());
        }
    }

    #[test]
    fn empty_frames_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_image_sequence(&dir.path().join("shot.png"), &[]).unwrap_err();
        assert!(matches!(err, ExportError::NoFrames));
    }
}
