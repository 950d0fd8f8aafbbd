//! # gyre-export
//!
//! Consumes the ordered RGBA frame buffers a [`gyre_core::Animation`]
//! produces and turns them into files: looping GIFs (in-process or via
//! the ImageMagick CLI) and numbered image sequences. Also decodes
//! raster assets for image shapes.

pub mod error;
pub mod gif;
pub mod image_seq;
pub mod loader;
pub mod magick;

pub use error::ExportError;
pub use gif::{write_gif, Gif, GifBackend, GifOptions};
pub use image_seq::{write_image_sequence, ImageSequence};
pub use loader::{load_image, load_image_frames};
pub use magick::MagickDriver;
