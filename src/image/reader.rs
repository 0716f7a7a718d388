use std::fs;
use std::path::Path;

use super::{ImageReader, Raster};
use crate::error::Error;

mod codec;
mod pnm;

pub use codec::CodecImageReader;
pub use pnm::PNMImageReader;

/// Loads `path` with the netpbm reader or, for any other format, the codec reader.
pub fn read_image_file(path: &Path) -> crate::Result<Raster> {
    let bytes = fs::read(path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(path.display().to_string(), e))?;
    let raster = if is_pnm(&bytes) {
        PNMImageReader::new(bytes.as_slice()).read_image()?
    } else {
        CodecImageReader::new(&bytes, path).read_image()?
    };
    log::info!(
        "Loaded '{}': {}x{} with {} channel(s)",
        path.display(),
        raster.width(),
        raster.height(),
        raster.channels()
    );
    Ok(raster)
}

fn is_pnm(bytes: &[u8]) -> bool {
    matches!(bytes, [b'P', b'1'..=b'6', ..])
}
