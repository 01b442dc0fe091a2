use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{ImageReader, RgbaImage};
use tracing::{debug, info};

use crate::error::{Result, ViewerError};
use crate::geometry::Size;
use crate::io::source::ImageSource;

/// A decoded image as straight (unpremultiplied) RGBA8 rows.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Downscale so neither side exceeds `max_side`, keeping the aspect
    /// ratio. Images that already fit are returned unchanged.
    pub fn fit_within(self, max_side: u32) -> Result<DecodedImage> {
        let max_side = max_side.max(1);
        let longest = self.width.max(self.height);
        if longest <= max_side {
            return Ok(self);
        }

        let scale = max_side as f64 / longest as f64;
        let width = ((self.width as f64 * scale).round() as u32).clamp(1, max_side);
        let height = ((self.height as f64 * scale).round() as u32).clamp(1, max_side);

        let (src_w, src_h) = (self.width, self.height);
        let buffer = RgbaImage::from_raw(src_w, src_h, self.rgba).ok_or(
            ViewerError::InvalidBuffer {
                width: src_w,
                height: src_h,
            },
        )?;
        let resized = imageops::resize(&buffer, width, height, FilterType::Triangle);
        debug!(src_w, src_h, width, height, max_side, "downscaled image to fit texture limit");

        Ok(DecodedImage {
            width,
            height,
            rgba: resized.into_raw(),
        })
    }
}

/// Decode an in-memory image, guessing the format from its content.
///
/// `name` only labels the error.
pub fn decode_bytes(bytes: &[u8], name: &str) -> Result<DecodedImage> {
    let decode_error = |source: image::ImageError| ViewerError::Decode {
        name: name.to_string(),
        source,
    };

    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    debug!(format = ?reader.format(), "guessed image format");

    let rgba = reader.decode().map_err(decode_error)?.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Read and decode the image behind `source`.
pub fn load_image(source: &ImageSource) -> Result<DecodedImage> {
    let name = source.name();
    let bytes = source.read_all()?;
    debug!(%name, len = bytes.len(), "read image bytes");

    let image = decode_bytes(&bytes, &name)?;
    info!(%name, width = image.width, height = image.height, "image decoded");
    Ok(image)
}
