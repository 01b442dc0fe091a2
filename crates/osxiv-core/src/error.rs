use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Please provide a filename (or '-' to read from stdin).")]
    MissingArgument,

    #[error("Filename doesn't exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Problem while loading the image: ({name})")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Pixel buffer does not match {width}x{height} RGBA")]
    InvalidBuffer { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, ViewerError>;
