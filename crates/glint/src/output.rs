//! Image file output.

use anyhow::{Context, Result};
use glint_tracer::ImageBuffer;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Save a rendered image, picking the encoder from the file extension.
///
/// `.ppm` is written as plain-text P3; every other extension goes through the
/// `image` crate.
pub fn save_image(image: &ImageBuffer, path: &Path) -> Result<()> {
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_ppm(image, &mut writer)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    } else {
        let buffer = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
            .context("Pixel buffer does not match image dimensions")?;
        buffer
            .save(path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
    }

    info!("Saved to {}", path.display());
    Ok(())
}

/// Write a plain-text P3 PPM, top row first.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for rgb in image.to_rgb8().chunks_exact(3) {
        writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_tracer::Color;

    #[test]
    fn test_write_ppm() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::ONE);
        image.set(1, 0, Color::new(0.25, 0.0, 1.0));

        let mut bytes = Vec::new();
        write_ppm(&image, &mut bytes).unwrap();

        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 255 255\n127 0 255\n");
    }
}
