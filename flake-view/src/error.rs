//! Rendering and top-level errors

use std::path::PathBuf;

use flake_core::error::ParamError;
use thiserror::Error;

use crate::exitcode;

/// Failures while rasterizing or writing the image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("nothing was drawn")]
    EmptyDrawing,

    #[error("cannot allocate a {width}x{height} image")]
    PixmapSize { width: u32, height: u32 },

    #[error("drawing produced no strokable path")]
    Path,

    #[error("failed to write {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Top-level error; these are what get displayed to the user.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Params(#[from] ParamError),

    #[error("{0}")]
    Render(#[from] RenderError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Params(_) => exitcode::USAGE,
            AppError::Render(RenderError::Image {
                source: image::ImageError::IoError(_),
                ..
            }) => exitcode::CANTCREAT,
            AppError::Render(_) => exitcode::SOFTWARE,
        }
    }
}
