//! Decoding raster assets for image shapes.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;

use gyre_core::{ImageHandle, RasterImage};

use crate::error::ExportError;

/// Decodes a still image into an RGBA asset.
pub fn load_image(path: impl AsRef<Path>) -> Result<RasterImage, ExportError> {
    let rgba = image::open(path.as_ref())?.to_rgba8();
    Ok(RasterImage::new(rgba.width(), rgba.height(), rgba.into_raw()))
}

/// Decodes an asset into its frames.
///
/// Animated GIFs yield one handle per frame, ready to drop into an
/// image shape's frame list; everything else yields a single handle.
pub fn load_image_frames(path: impl AsRef<Path>) -> Result<Vec<ImageHandle>, ExportError> {
    let path = path.as_ref();

    let is_gif = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gif"));

    if is_gif {
        let decoder = GifDecoder::new(BufReader::new(File::open(path)?))?;
        let frames = decoder.into_frames().collect_frames()?;
        tracing::debug!(?path, count = frames.len(), "decoded gif frames");
        return Ok(frames
            .into_iter()
            .map(|frame| {
                let buffer = frame.into_buffer();
                Arc::new(RasterImage::new(buffer.width(), buffer.height(), buffer.into_raw()))
            })
            .collect());
    }

    Ok(vec![Arc::new(load_image(path)?)])
}
