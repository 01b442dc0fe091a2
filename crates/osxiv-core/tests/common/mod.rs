#![allow(dead_code)]

use std::io::{Cursor, Write};

use image::{ImageFormat, Rgba, RgbaImage};

/// Encode a `width`x`height` PNG whose pixel (x, y) is `[x, y, 0, 255]`.
pub fn build_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .expect("encode PNG");
    buf.into_inner()
}

/// Write bytes to a temporary file and return the handle.
///
/// The file stays alive as long as the returned `NamedTempFile` is not dropped.
pub fn write_temp(data: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("create temp file");
    f.write_all(data).expect("write data");
    f.flush().expect("flush");
    f
}
