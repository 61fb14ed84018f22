//! Image decoding into an RGB pixel grid.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageReader};
use log::debug;

use super::{DecodeError, PixelGrid};

/// Decode an image from bytes into an RGB grid.
///
/// The format is detected from the content. Alpha is dropped, grayscale is
/// expanded to three equal channels and 16-bit samples are reduced to 8 bits.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the format cannot be detected.
/// Returns `DecodeError::Corrupted` if the data is truncated or invalid.
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Corrupted(e.to_string()))?;

    debug!("Guessed in-memory image format: {:?}", reader.format());

    let img = reader.decode()?;
    Ok(to_grid(img))
}

/// Open and decode an image file.
///
/// # Errors
///
/// Returns `DecodeError::Io` if the file cannot be opened, otherwise the same
/// errors as [`decode_image`].
pub fn decode_file(path: &Path) -> Result<PixelGrid, DecodeError> {
    let io_err = |source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?;

    debug!("Guessed format for {}: {:?}", path.display(), reader.format());

    let img = reader.decode()?;
    Ok(to_grid(img))
}

fn to_grid(img: DynamicImage) -> PixelGrid {
    debug!(
        "Decoded {}x{} image with color type {:?}",
        img.width(),
        img.height(),
        img.color()
    );
    PixelGrid::from_rgb_image(img.into_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;

    fn encode_png(img: DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_rgb_png() {
        let mut img = image::RgbImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgb([10, 20, 30]));
        img.put_pixel(1, 0, image::Rgb([40, 50, 60]));
        let bytes = encode_png(DynamicImage::ImageRgb8(img));

        let grid = decode_image(&bytes).unwrap();
        assert_eq!(grid.dimensions(), (2, 1));
        assert_eq!(grid.pixel(0, 0), Some([10, 20, 30]));
        assert_eq!(grid.pixel(1, 0), Some([40, 50, 60]));
    }

    #[test]
    fn test_decode_rgba_drops_alpha() {
        let img = image::RgbaImage::from_pixel(1, 1, image::Rgba([200, 100, 50, 0]));
        let bytes = encode_png(DynamicImage::ImageRgba8(img));

        let grid = decode_image(&bytes).unwrap();
        assert_eq!(grid.pixel(0, 0), Some([200, 100, 50]));
    }

    #[test]
    fn test_decode_grayscale_expands() {
        let img = image::GrayImage::from_pixel(1, 1, image::Luma([77]));
        let bytes = encode_png(DynamicImage::ImageLuma8(img));

        let grid = decode_image(&bytes).unwrap();
        assert_eq!(grid.pixel(0, 0), Some([77, 77, 77]));
    }

    #[test]
    fn test_decode_16bit_reduces_to_8bit() {
        let img = image::ImageBuffer::<image::Rgb<u16>, _>::from_pixel(
            1,
            1,
            image::Rgb([0xFF00, 0x8080, 0x0101]),
        );
        let bytes = encode_png(DynamicImage::ImageRgb16(img));

        let grid = decode_image(&bytes).unwrap();
        // Scaled by 255/65535 and rounded, not truncated to the high byte
        assert_eq!(grid.pixel(0, 0), Some([254, 128, 1]));
    }

    #[test]
    fn test_decode_palette_png_expands() {
        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, 2, 1);
            encoder.set_color(png::ColorType::Indexed);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_palette(vec![10, 20, 30, 200, 150, 100]);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[1, 0]).unwrap();
        }

        let grid = decode_image(&bytes).unwrap();
        assert_eq!(grid.dimensions(), (2, 1));
        assert_eq!(grid.pixel(0, 0), Some([200, 150, 100]));
        assert_eq!(grid.pixel(1, 0), Some([10, 20, 30]));
    }

    #[test]
    fn test_decode_unknown_format() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        match result {
            Err(DecodeError::UnsupportedFormat(_)) => {}
            Err(e) => panic!("Expected UnsupportedFormat error, got: {:?}", e),
            Ok(_) => panic!("Expected error, got success"),
        }
    }

    #[test]
    fn test_decode_truncated_png() {
        let img = image::RgbImage::from_pixel(8, 8, image::Rgb([1, 2, 3]));
        let bytes = encode_png(DynamicImage::ImageRgb8(img));

        // Signature and part of IHDR only
        let result = decode_image(&bytes[..20]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_missing_file() {
        let path = std::env::temp_dir().join("framegen-does-not-exist.png");
        match decode_file(&path) {
            Err(DecodeError::Io { path: p, .. }) => assert_eq!(p, path),
            Err(e) => panic!("Expected Io error, got: {:?}", e),
            Ok(_) => panic!("Expected error, got success"),
        }
    }

    #[test]
    fn test_decode_file_sniffs_content() {
        // Extension says nothing useful; the content is a PNG
        let path = std::env::temp_dir().join(format!(
            "framegen-decode-{}.bin",
            std::process::id()
        ));
        let img = image::RgbImage::from_pixel(3, 2, image::Rgb([5, 6, 7]));
        std::fs::write(&path, encode_png(DynamicImage::ImageRgb8(img))).unwrap();

        let grid = decode_file(&path);
        std::fs::remove_file(&path).ok();

        let grid = grid.unwrap();
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.pixel(2, 1), Some([5, 6, 7]));
    }
}
