use image::{GrayImage, RgbImage};

/// Convert an 8-bit RGB image to an egui ColorImage.
pub fn rgb_to_color_image(image: &RgbImage) -> egui::ColorImage {
    let (w, h) = image.dimensions();
    let pixels = image
        .pixels()
        .map(|p| egui::Color32::from_rgb(p.0[0], p.0[1], p.0[2]))
        .collect();

    egui::ColorImage {
        size: [w as usize, h as usize],
        pixels,
        source_size: Default::default(),
    }
}

/// Convert an 8-bit grayscale image to an egui ColorImage.
pub fn gray_to_color_image(image: &GrayImage) -> egui::ColorImage {
    let (w, h) = image.dimensions();
    let pixels = image
        .pixels()
        .map(|p| egui::Color32::from_gray(p.0[0]))
        .collect();

    egui::ColorImage {
        size: [w as usize, h as usize],
        pixels,
        source_size: Default::default(),
    }
}
