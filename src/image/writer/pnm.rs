use std::io::Write;

use crate::error::Error;
use crate::image::{ImageWriter, Raster};

const MAX_VALUE: u8 = u8::MAX;

/// Writes a raster as binary graymap (P5) or, with three channels, as binary
/// pixmap (P6).
///
/// The magic number is always followed by a single newline, so comments can
/// be inserted after the first three bytes of the written file.
pub struct PNMImageWriter<'a, T: Write> {
    writer: T,
    raster: &'a Raster,
}

impl<'a, T: Write> PNMImageWriter<'a, T> {
    pub fn new(writer: T, raster: &'a Raster) -> Self {
        Self { writer, raster }
    }

    fn magic_number(&self) -> crate::Result<&'static str> {
        match self.raster.channels() {
            1 => Ok("P5"),
            3 => Ok("P6"),
            channels => Err(Error::UnsupportedChannelCount(channels)),
        }
    }

    fn write_header(&mut self, magic_number: &str) -> std::io::Result<()> {
        write!(
            self.writer,
            "{}\n{} {}\n{}\n",
            magic_number,
            self.raster.width(),
            self.raster.height(),
            MAX_VALUE
        )
    }

    fn write_rows(&mut self) -> std::io::Result<()> {
        for row in self.raster.rows() {
            self.writer.write_all(row)?;
        }
        Ok(())
    }
}

impl<T: Write> ImageWriter for PNMImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        let magic_number = self.magic_number()?;
        self.write_header(magic_number)
            .map_err(Error::FailedToWriteImageData)?;
        self.write_rows().map_err(Error::FailedToWriteImageData)?;
        self.writer.flush().map_err(Error::FailedToWriteImageData)?;
        Ok(())
    }
}
