use std::path::Path;

use image::{GrayImage, ImageFormat, RgbImage, RgbaImage};
use tracing::info;

use crate::error::Result;
use crate::render::RenderOutput;

/// PNG unless the extension asks for TIFF.
fn format_for(path: &Path) -> ImageFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => ImageFormat::Tiff,
        _ => ImageFormat::Png,
    }
}

/// Save an 8-bit RGB image, choosing format from file extension.
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<()> {
    image.save_with_format(path, format_for(path))?;
    Ok(())
}

/// Save an 8-bit grayscale image, choosing format from file extension.
pub fn save_gray(image: &GrayImage, path: &Path) -> Result<()> {
    image.save_with_format(path, format_for(path))?;
    Ok(())
}

/// Save an 8-bit RGBA image, choosing format from file extension.
pub fn save_rgba(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save_with_format(path, format_for(path))?;
    Ok(())
}

/// Save a render result. Color output is saved with its legend when `with_legend` is set.
pub fn save_render(output: &RenderOutput, path: &Path, with_legend: bool) -> Result<()> {
    match output {
        RenderOutput::Color { composite, display } => {
            let image = if with_legend { display } else { composite };
            save_rgb(image, path)?;
        }
        RenderOutput::Ndvi(gray) => save_gray(gray, path)?,
    }
    let (w, h) = output.dimensions();
    info!(path = %path.display(), width = w, height = h, "Render saved");
    Ok(())
}
