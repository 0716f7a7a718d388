use std::{
    fs::{File, OpenOptions},
    io::BufWriter,
    path::{Path, PathBuf},
};

pub use cli::{CLIParser, Invocation};
pub use error::Error;
pub use filter::{GaussianParameters, NIST_RADIUS, NIST_SIGMA};
pub use crate::image::Raster;
use crate::image::{reader::read_image_file, writer::PNMImageWriter, ImageWriter};

pub mod annotation;
mod cli;
pub mod decimation;
mod error;
pub mod filter;
pub mod image;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

/// Provenance tag stamped into every output file (NIST downsampler 1.0.0).
pub const DOWNSAMPLER_ID: &str = "DsmID: NIST-000000000000100 Resvd: cf3357659812d6ba14d52225977cfdcf6e863d20e04567744c1bfd1e7c9acb27 ";

const OUTPUT_EXTENSION: &str = "pgm";

#[derive(Debug)]
pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
}

impl Arguments {
    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }
}

fn check_output_extension(file_path: &Path) -> Result<()> {
    let is_pgm = file_path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case(OUTPUT_EXTENSION));
    if !is_pgm {
        return Err(Error::OutputFileIsNotPGM(file_path.display().to_string()));
    }
    Ok(())
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e))
}

/// Blurs `raster` with the Gaussian described by `parameters` and keeps the
/// odd rows and columns of the result.
pub fn downsample(raster: &Raster, parameters: &GaussianParameters) -> Result<Raster> {
    let kernel = parameters.build_kernel()?;
    log::info!(
        "Built {0}x{0} Gaussian kernel with sigma {1}",
        kernel.side_length(),
        parameters.sigma
    );
    logger::log_kernel(&kernel);
    let filtered = filter::convolve(raster, &kernel);
    let downsampled = decimation::decimate(&filtered);
    log::info!(
        "Downsampled {}x{} to {}x{}",
        raster.width(),
        raster.height(),
        downsampled.width(),
        downsampled.height()
    );
    Ok(downsampled)
}

pub fn downsample_image(arguments: &Arguments) -> Result<()> {
    check_output_extension(&arguments.output_file)?;
    let output_file = open_output_file(&arguments.output_file)?;
    let raster = read_image_file(&arguments.input_file)?;
    let downsampled = downsample(&raster, &GaussianParameters::default())?;
    let mut writer = PNMImageWriter::new(BufWriter::new(&output_file), &downsampled);
    writer.write_image()?;
    drop(writer);
    drop(output_file);
    annotation::comment_pnm_file(&arguments.output_file, DOWNSAMPLER_ID)?;
    Ok(())
}
