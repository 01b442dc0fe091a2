use osxiv_core::io::decode::DecodedImage;

/// Convert a decoded RGBA8 image to an egui ColorImage.
pub fn to_color_image(image: &DecodedImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [image.width as usize, image.height as usize],
        &image.rgba,
    )
}
