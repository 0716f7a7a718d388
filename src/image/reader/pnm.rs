use std::io::Read;

use crate::error::Error;
use crate::image::{ImageReader, Raster};

pub struct PNMImageReader<T: Read> {
    reader: T,
}

impl<T: Read> PNMImageReader<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }
}

impl<T: Read> ImageReader for PNMImageReader<T> {
    fn read_image(&mut self) -> crate::Result<Raster> {
        let mut tokenizer = PNMTokenizer::new(&mut self.reader);
        let header = PNMHeaderParser::new(&mut tokenizer).parse_header()?;
        let samples = match (header.format.is_bitmap(), header.format.encoding()) {
            (true, Encoding::Ascii) => parse_ascii_bits(&header, &mut tokenizer)?,
            (true, Encoding::Binary) => read_packed_bits(&header, tokenizer.into_inner())?,
            (false, Encoding::Ascii) => {
                scale_samples(parse_ascii_samples(&header, &mut tokenizer)?, header.max_value)
            }
            (false, Encoding::Binary) => scale_samples(
                read_binary_samples(&header, tokenizer.into_inner())?,
                header.max_value,
            ),
        };
        Raster::from_samples(
            header.width,
            header.height,
            header.format.channels(),
            samples,
        )
    }
}

struct PNMTokenizer<'a, R: Read> {
    reader: &'a mut R,
    buffer: Vec<u8>,
}

impl<'a, R: Read> PNMTokenizer<'a, R> {
    pub fn new(reader: &'a mut R) -> Self {
        PNMTokenizer {
            reader,
            buffer: Vec::new(),
        }
    }

    fn into_inner(self) -> &'a mut R {
        self.reader
    }
}

impl<R: Read> Iterator for PNMTokenizer<'_, R> {
    type Item = String;

    // Consumes exactly one whitespace byte after a token, which is where the
    // raster of binary formats starts.
    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        let mut byte = [0; 1];
        let mut in_comment = false;

        while self.reader.read(&mut byte).unwrap_or(0) > 0 {
            if in_comment {
                if byte[0] == b'\n' {
                    in_comment = false;
                }
                continue;
            }
            if byte[0] == b'#' {
                in_comment = true;
                continue;
            }
            if byte[0].is_ascii_whitespace() {
                if !self.buffer.is_empty() {
                    break;
                }
            } else {
                self.buffer.push(byte[0]);
            }
        }

        if self.buffer.is_empty() {
            return None;
        }

        Some(String::from_utf8_lossy(&self.buffer).into_owned())
    }
}

const MAGIC_NUMBER_TOKEN_NAME: &str = "Magic Number";
const WIDTH_HEADER_TOKEN_NAME: &str = "Width Header";
const HEIGHT_HEADER_TOKEN_NAME: &str = "Height Header";
const MAX_VALUE_HEADER_TOKEN_NAME: &str = "Max Value Header";
const SAMPLE_VALUE_TOKEN_NAME: &str = "Sample Value";

#[derive(Clone, Copy, Debug, PartialEq)]
enum Encoding {
    Ascii,
    Binary,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum PNMFormat {
    /// P1
    AsciiBitmap,
    /// P2
    AsciiGraymap,
    /// P3
    AsciiPixmap,
    /// P4
    BinaryBitmap,
    /// P5
    BinaryGraymap,
    /// P6
    BinaryPixmap,
}

impl PNMFormat {
    fn from_magic_number(magic_number: &str) -> crate::Result<Self> {
        match magic_number {
            "P1" => Ok(Self::AsciiBitmap),
            "P2" => Ok(Self::AsciiGraymap),
            "P3" => Ok(Self::AsciiPixmap),
            "P4" => Ok(Self::BinaryBitmap),
            "P5" => Ok(Self::BinaryGraymap),
            "P6" => Ok(Self::BinaryPixmap),
            _ => Err(Error::UnsupportedPNMFormat(magic_number.to_owned())),
        }
    }

    fn channels(&self) -> usize {
        match self {
            Self::AsciiBitmap | Self::BinaryBitmap | Self::AsciiGraymap | Self::BinaryGraymap => 1,
            Self::AsciiPixmap | Self::BinaryPixmap => 3,
        }
    }

    fn encoding(&self) -> Encoding {
        match self {
            Self::AsciiBitmap | Self::AsciiGraymap | Self::AsciiPixmap => Encoding::Ascii,
            Self::BinaryBitmap | Self::BinaryGraymap | Self::BinaryPixmap => Encoding::Binary,
        }
    }

    fn is_bitmap(&self) -> bool {
        matches!(self, Self::AsciiBitmap | Self::BinaryBitmap)
    }
}

#[derive(Debug)]
struct PNMHeader {
    format: PNMFormat,
    width: usize,
    height: usize,
    max_value: u16,
}

impl PNMHeader {
    fn sample_count(&self) -> crate::Result<usize> {
        self.width
            .checked_mul(self.height)
            .and_then(|pixels| pixels.checked_mul(self.format.channels()))
            .ok_or(Error::MismatchOfSizeBetweenHeaderAndValues)
    }
}

struct PNMHeaderParser<'a, T> {
    tokenizer: &'a mut T,
}

impl<'a, T> PNMHeaderParser<'a, T>
where
    T: Iterator<Item = String>,
{
    fn new(tokenizer: &'a mut T) -> Self {
        Self { tokenizer }
    }

    fn parse_header(&mut self) -> crate::Result<PNMHeader> {
        let format = self.parse_format()?;
        let width = self.parse_dimension(WIDTH_HEADER_TOKEN_NAME)?;
        let height = self.parse_dimension(HEIGHT_HEADER_TOKEN_NAME)?;
        // bitmaps carry no max value
        let max_value = if format.is_bitmap() {
            1
        } else {
            let max_value = self.parse_max_value()?;
            Self::check_max_value(max_value)?;
            max_value
        };
        Ok(PNMHeader {
            format,
            width,
            height,
            max_value,
        })
    }

    fn next_token(&mut self, token_name: &'static str) -> crate::Result<String> {
        self.tokenizer
            .next()
            .ok_or(Error::PNMFileDoesNotContainRequiredToken(token_name))
    }

    fn parse_format(&mut self) -> crate::Result<PNMFormat> {
        let magic_number = self.next_token(MAGIC_NUMBER_TOKEN_NAME)?;
        PNMFormat::from_magic_number(&magic_number)
    }

    fn parse_dimension(&mut self, token_name: &'static str) -> crate::Result<usize> {
        self.next_token(token_name)?
            .parse()
            .map_err(|_| Error::ParsingOfTokenFailed(token_name))
    }

    fn parse_max_value(&mut self) -> crate::Result<u16> {
        self.next_token(MAX_VALUE_HEADER_TOKEN_NAME)?
            .parse()
            .map_err(|_| Error::ParsingOfTokenFailed(MAX_VALUE_HEADER_TOKEN_NAME))
    }

    fn check_max_value(max_value: u16) -> crate::Result<()> {
        if max_value == 0 || max_value > u8::MAX as u16 {
            return Err(Error::UnsupportedMaxValue(max_value));
        }
        Ok(())
    }
}

fn check_sample(sample: u16, max_value: u16) -> crate::Result<()> {
    if sample > max_value {
        return Err(Error::SampleExceedsMaxValue(sample, max_value));
    }
    Ok(())
}

fn parse_ascii_samples<T>(header: &PNMHeader, tokenizer: &mut T) -> crate::Result<Vec<u8>>
where
    T: Iterator<Item = String>,
{
    let expected = header.sample_count()?;
    let mut samples = Vec::new();
    for token in tokenizer {
        let sample: u16 = token
            .parse()
            .map_err(|_| Error::ParsingOfTokenFailed(SAMPLE_VALUE_TOKEN_NAME))?;
        check_sample(sample, header.max_value)?;
        samples.push(sample as u8);
    }
    if samples.len() != expected {
        return Err(Error::MismatchOfSizeBetweenHeaderAndValues);
    }
    Ok(samples)
}

fn read_binary_samples<R: Read>(header: &PNMHeader, reader: &mut R) -> crate::Result<Vec<u8>> {
    let expected = header.sample_count()?;
    let mut samples = Vec::new();
    reader
        .take(expected as u64)
        .read_to_end(&mut samples)
        .map_err(|_| Error::MismatchOfSizeBetweenHeaderAndValues)?;
    if samples.len() != expected {
        return Err(Error::MismatchOfSizeBetweenHeaderAndValues);
    }
    for &sample in samples.iter() {
        check_sample(sample as u16, header.max_value)?;
    }
    Ok(samples)
}

// A set bit is black.
fn bit_to_sample(bit: bool) -> u8 {
    if bit {
        u8::MIN
    } else {
        u8::MAX
    }
}

/// Reads P1 pixels, which need not be separated by whitespace.
fn parse_ascii_bits<T>(header: &PNMHeader, tokenizer: &mut T) -> crate::Result<Vec<u8>>
where
    T: Iterator<Item = String>,
{
    let expected = header.sample_count()?;
    let mut samples = Vec::new();
    for token in tokenizer {
        for digit in token.bytes() {
            let bit = match digit {
                b'0' => false,
                b'1' => true,
                _ => return Err(Error::ParsingOfTokenFailed(SAMPLE_VALUE_TOKEN_NAME)),
            };
            samples.push(bit_to_sample(bit));
        }
    }
    if samples.len() != expected {
        return Err(Error::MismatchOfSizeBetweenHeaderAndValues);
    }
    Ok(samples)
}

/// Unpacks P4 rows, most significant bit first, each row padded to a full byte.
fn read_packed_bits<R: Read>(header: &PNMHeader, reader: &mut R) -> crate::Result<Vec<u8>> {
    let row_length = header.width.div_ceil(8);
    let expected = row_length
        .checked_mul(header.height)
        .ok_or(Error::MismatchOfSizeBetweenHeaderAndValues)?;
    let mut packed = Vec::new();
    reader
        .take(expected as u64)
        .read_to_end(&mut packed)
        .map_err(|_| Error::MismatchOfSizeBetweenHeaderAndValues)?;
    if packed.len() != expected {
        return Err(Error::MismatchOfSizeBetweenHeaderAndValues);
    }
    let mut samples = Vec::with_capacity(header.sample_count()?);
    for row in packed.chunks(row_length.max(1)) {
        for x in 0..header.width {
            let bit = row[x / 8] & (0x80 >> (x % 8)) != 0;
            samples.push(bit_to_sample(bit));
        }
    }
    Ok(samples)
}

/// Stretches samples of a smaller max value onto the full 8 bit range.
fn scale_samples(mut samples: Vec<u8>, max_value: u16) -> Vec<u8> {
    if max_value == u8::MAX as u16 {
        return samples;
    }
    let max_value = max_value as u32;
    for sample in samples.iter_mut() {
        *sample = ((*sample as u32 * 255 + max_value / 2) / max_value) as u8;
    }
    samples
}
