use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InvalidArguments(String),
    OutputFileIsNotPGM(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    PNMFileDoesNotContainRequiredToken(&'static str),
    ParsingOfTokenFailed(&'static str),
    UnsupportedPNMFormat(String),
    UnsupportedMaxValue(u16),
    SampleExceedsMaxValue(u16, u16),
    MismatchOfSizeBetweenHeaderAndValues,
    UnableToDecodeImage(String, String),
    UnsupportedChannelCount(usize),
    InvalidStride(usize, usize),
    MismatchOfSizeBetweenGeometryAndSamples(usize, usize),
    InvalidFilterRadius(usize),
    InvalidFilterSigma(f64),
    FailedToWriteImageData(std::io::Error),
    UnableToReadFileForAnnotation(String, std::io::Error),
    UnableToRewriteFileForAnnotation(String, std::io::Error),
    FileTooShortForAnnotation(String, usize),
}

impl Error {
    /// Whether the usage text should accompany this error on the terminal.
    pub fn requires_usage(&self) -> bool {
        matches!(
            self,
            Self::InvalidArguments(_)
                | Self::OutputFileIsNotPGM(_)
                | Self::UnableToOpenInputFileForReading(_, _)
                | Self::UnableToOpenOutputFileForWriting(_, _)
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArguments(reason) => {
                write!(f, "Invalid arguments: {}", reason)
            }
            Self::OutputFileIsNotPGM(path) => {
                write!(f, "Output file '{}' must have the extension .pgm", path)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(f, "Cannot open input file '{}': {}", path, error)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(f, "Cannot open output file '{}': {}", path, error)
            }
            Self::PNMFileDoesNotContainRequiredToken(token_name) => {
                write!(f, "Expected token '{}' not found in PNM file", token_name)
            }
            Self::ParsingOfTokenFailed(token_name) => {
                write!(f, "Parsing of token '{}' failed", token_name)
            }
            Self::UnsupportedPNMFormat(magic) => {
                write!(f, "Unsupported PNM format '{}'", magic)
            }
            Self::UnsupportedMaxValue(max_value) => {
                write!(
                    f,
                    "Unsupported max value {}. Only 8 bit samples (1 to 255) are supported.",
                    max_value
                )
            }
            Self::SampleExceedsMaxValue(sample, max_value) => {
                write!(
                    f,
                    "Sample value {} exceeds the max value {} declared in header",
                    sample, max_value
                )
            }
            Self::MismatchOfSizeBetweenHeaderAndValues => {
                write!(
                    f,
                    "Number of samples does not match the size provided in header"
                )
            }
            Self::UnableToDecodeImage(path, reason) => {
                write!(f, "Unable to decode image '{}': {}", path, reason)
            }
            Self::UnsupportedChannelCount(channels) => {
                write!(f, "Unsupported number of channels: {}", channels)
            }
            Self::InvalidStride(stride, row_length) => {
                write!(
                    f,
                    "Stride {} is smaller than the row length {}",
                    stride, row_length
                )
            }
            Self::MismatchOfSizeBetweenGeometryAndSamples(expected, actual) => {
                write!(
                    f,
                    "Raster geometry requires at least {} samples, but got {}",
                    expected, actual
                )
            }
            Self::InvalidFilterRadius(radius) => {
                write!(f, "Filter radius must be positive, but was {}", radius)
            }
            Self::InvalidFilterSigma(sigma) => {
                write!(f, "Filter sigma must be positive, but was {}", sigma)
            }
            Self::FailedToWriteImageData(error) => {
                write!(f, "Failed to write image data: {}", error)
            }
            Self::UnableToReadFileForAnnotation(path, error) => {
                write!(f, "Unable to read '{}' for annotation: {}", path, error)
            }
            Self::UnableToRewriteFileForAnnotation(path, error) => {
                write!(f, "Unable to rewrite '{}' for annotation: {}", path, error)
            }
            Self::FileTooShortForAnnotation(path, length) => {
                write!(
                    f,
                    "File '{}' is too short to be annotated ({} bytes)",
                    path, length
                )
            }
        }
    }
}

impl std::error::Error for Error {}
