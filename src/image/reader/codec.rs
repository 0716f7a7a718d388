use std::path::Path;

use crate::error::Error;
use crate::image::{ImageReader, Raster};

/// Decodes the formats handled by the `image` crate (PNG, JPEG, BMP, TIFF, PAM).
///
/// Grayscale images load with one channel, everything else as RGB.
pub struct CodecImageReader<'a> {
    bytes: &'a [u8],
    name: String,
}

impl<'a> CodecImageReader<'a> {
    pub fn new(bytes: &'a [u8], path: &Path) -> Self {
        Self {
            bytes,
            name: path.display().to_string(),
        }
    }
}

impl ImageReader for CodecImageReader<'_> {
    fn read_image(&mut self) -> crate::Result<Raster> {
        let image = ::image::load_from_memory(self.bytes)
            .map_err(|e| Error::UnableToDecodeImage(self.name.clone(), e.to_string()))?;
        let color = image.color();
        if color.has_alpha() {
            log::warn!("Discarding alpha channel of '{}'", self.name);
        }
        if color.has_color() {
            let rgb = image.to_rgb8();
            let (width, height) = rgb.dimensions();
            Raster::from_samples(width as usize, height as usize, 3, rgb.into_raw())
        } else {
            let luma = image.to_luma8();
            let (width, height) = luma.dimensions();
            Raster::from_samples(width as usize, height as usize, 1, luma.into_raw())
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;
    use std::path::Path;

    use ::image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};

    use crate::error::Error;
    use crate::image::ImageReader;

    use super::CodecImageReader;

    fn encode_png(image: impl Into<::image::DynamicImage>) -> Vec<u8> {
        let image: ::image::DynamicImage = image.into();
        let mut bytes = Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, ImageFormat::Png)
            .expect("PNG encoding failed");
        bytes.into_inner()
    }

    #[test]
    fn grayscale_png() {
        let image = GrayImage::from_fn(3, 2, |x, y| Luma([(x + 10 * y) as u8]));
        let bytes = encode_png(image);
        let raster = CodecImageReader::new(&bytes, Path::new("gray.png"))
            .read_image()
            .unwrap();
        assert_eq!((raster.width(), raster.height(), raster.channels()), (3, 2, 1));
        assert_eq!(raster.sample(2, 1, 0), 12);
    }

    #[test]
    fn color_png() {
        let image = RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]));
        let bytes = encode_png(image);
        let raster = CodecImageReader::new(&bytes, Path::new("color.png"))
            .read_image()
            .unwrap();
        assert_eq!(raster.channels(), 3);
        assert_eq!(raster.row(1), &[1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn grayscale_pam() {
        let bytes = b"P7\nWIDTH 2\nHEIGHT 1\nDEPTH 1\nMAXVAL 255\nTUPLTYPE GRAYSCALE\nENDHDR\n\x05\x06";
        let raster = CodecImageReader::new(bytes, Path::new("gray.pam"))
            .read_image()
            .unwrap();
        assert_eq!((raster.width(), raster.height(), raster.channels()), (2, 1, 1));
        assert_eq!(raster.row(0), &[5, 6]);
    }

    #[test]
    fn garbage_is_reported_with_name() {
        let result = CodecImageReader::new(b"not an image", Path::new("garbage.bin")).read_image();
        match result {
            Err(Error::UnableToDecodeImage(name, _)) => assert_eq!(name, "garbage.bin"),
            other => panic!("Undecodable input not detected, got {:?}", other),
        }
    }
}
