use thiserror::Error;

/// Failures surfaced by the export boundary.
///
/// Unlike per-property malformation, these are structural: a missing
/// encoder binary or an unsupported backend feature aborts the export
/// with a descriptive error instead of producing a partial file. Nothing
/// here is retried automatically.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("image codec failure: {0}")]
    Codec(#[from] image::ImageError),

    #[error("`{binary}` is unavailable; is ImageMagick installed and in PATH?")]
    MissingBackend { binary: String },

    #[error("`{binary}` exited unsuccessfully: {detail}")]
    BackendFailed { binary: String, detail: String },

    #[error("the {backend} backend does not support {feature}")]
    Unsupported {
        backend: &'static str,
        feature: &'static str,
    },

    #[error("no frames to encode")]
    NoFrames,

    #[error("frame {index} has mismatched dimensions")]
    MismatchedFrame { index: usize },
}
