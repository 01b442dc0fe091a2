use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::consts::{STDIN_ARG, STDIN_NAME, TITLE_PREFIX};
use crate::error::{Result, ViewerError};

/// Where the image bytes come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Stdin,
    File(PathBuf),
}

impl ImageSource {
    /// Parse the positional argument. `-` selects standard input; anything
    /// else must name an existing path.
    /// The path is taken as raw OS bytes, so names that are not valid UTF-8
    /// still open.
    pub fn from_arg(arg: Option<&Path>) -> Result<Self> {
        let path = arg.ok_or(ViewerError::MissingArgument)?;
        if path.as_os_str() == STDIN_ARG {
            return Ok(ImageSource::Stdin);
        }

        if !path.exists() {
            return Err(ViewerError::NotFound(path.to_path_buf()));
        }
        Ok(ImageSource::File(path.to_path_buf()))
    }

    /// Display name: the path as given, or `stdin`.
    pub fn name(&self) -> String {
        match self {
            ImageSource::Stdin => STDIN_NAME.to_string(),
            ImageSource::File(path) => path.display().to_string(),
        }
    }

    pub fn window_title(&self) -> String {
        format!("{TITLE_PREFIX}{}", self.name())
    }

    /// Read the whole input. The handle is closed before this returns.
    pub fn read_all(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        match self {
            ImageSource::Stdin => {
                io::stdin().lock().read_to_end(&mut bytes)?;
            }
            ImageSource::File(path) => {
                File::open(path)?.read_to_end(&mut bytes)?;
            }
        }
        Ok(bytes)
    }
}
