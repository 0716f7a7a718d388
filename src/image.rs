use crate::error::Error;

pub mod reader;
pub mod writer;

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<Raster>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}

/// An 8 bit raster with interleaved channels.
///
/// Rows may carry trailing padding, so every sample is addressed through
/// `stride` (counted in samples, not pixels) rather than `width`.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    channels: usize,
    stride: usize,
    samples: Vec<u8>,
}

impl Raster {
    /// A zero filled raster without row padding.
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        let stride = width * channels;
        Self {
            width,
            height,
            channels,
            stride,
            samples: vec![0; stride * height],
        }
    }

    pub fn from_samples(
        width: usize,
        height: usize,
        channels: usize,
        samples: Vec<u8>,
    ) -> crate::Result<Self> {
        Self::with_stride(width, height, channels, width * channels, samples)
    }

    pub fn with_stride(
        width: usize,
        height: usize,
        channels: usize,
        stride: usize,
        samples: Vec<u8>,
    ) -> crate::Result<Self> {
        if channels == 0 {
            return Err(Error::UnsupportedChannelCount(channels));
        }
        let row_length = width * channels;
        if stride < row_length {
            return Err(Error::InvalidStride(stride, row_length));
        }
        let required = Self::required_length(height, stride, row_length);
        if samples.len() < required {
            return Err(Error::MismatchOfSizeBetweenGeometryAndSamples(
                required,
                samples.len(),
            ));
        }
        Ok(Self {
            width,
            height,
            channels,
            stride,
            samples,
        })
    }

    // the last row does not need its padding
    fn required_length(height: usize, stride: usize, row_length: usize) -> usize {
        match height {
            0 => 0,
            _ => (height - 1) * stride + row_length,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn index(&self, x: usize, y: usize, channel: usize) -> Option<usize> {
        if x >= self.width || y >= self.height || channel >= self.channels {
            return None;
        }
        Some(y * self.stride + x * self.channels + channel)
    }

    pub fn get(&self, x: usize, y: usize, channel: usize) -> Option<u8> {
        self.index(x, y, channel).map(|index| self.samples[index])
    }

    /// Like `get`, but for signed coordinates which may lie outside the raster.
    pub fn tap(&self, x: isize, y: isize, channel: usize) -> Option<u8> {
        if x < 0 || y < 0 {
            return None;
        }
        self.get(x as usize, y as usize, channel)
    }

    /// # Panics
    ///
    /// If the coordinates or the channel lie outside the raster.
    pub fn sample(&self, x: usize, y: usize, channel: usize) -> u8 {
        self.get(x, y, channel).unwrap_or_else(|| {
            panic!(
                "sample ({}, {}, {}) outside of {}x{}x{} raster",
                x, y, channel, self.width, self.height, self.channels
            )
        })
    }

    /// # Panics
    ///
    /// If the coordinates or the channel lie outside the raster.
    pub fn set(&mut self, x: usize, y: usize, channel: usize, value: u8) {
        let index = self.index(x, y, channel).unwrap_or_else(|| {
            panic!(
                "sample ({}, {}, {}) outside of {}x{}x{} raster",
                x, y, channel, self.width, self.height, self.channels
            )
        });
        self.samples[index] = value;
    }

    /// The samples of row `y` without padding.
    pub fn row(&self, y: usize) -> &[u8] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.samples[start..start + self.width * self.channels]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;

    use super::Raster;

    #[rustfmt::skip]
    const PADDED_SAMPLES: &[u8] = &[
         1,  2,  3, 99, 99,
         4,  5,  6, 99, 99,
    ];

    #[test]
    fn stride_skips_padding() {
        let raster = Raster::with_stride(3, 2, 1, 5, PADDED_SAMPLES.to_vec()).unwrap();
        assert_eq!(raster.sample(0, 1, 0), 4);
        assert_eq!(raster.sample(2, 1, 0), 6);
        assert_eq!(raster.row(0), &[1, 2, 3]);
        assert_eq!(raster.rows().flatten().copied().collect::<Vec<u8>>(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn last_row_may_omit_padding() {
        let samples = PADDED_SAMPLES[..8].to_vec();
        let raster = Raster::with_stride(3, 2, 1, 5, samples).unwrap();
        assert_eq!(raster.sample(2, 1, 0), 6);
    }

    #[test]
    fn interleaved_channels() {
        let samples = vec![10, 11, 12, 20, 21, 22];
        let raster = Raster::from_samples(2, 1, 3, samples).unwrap();
        assert_eq!(raster.sample(1, 0, 0), 20);
        assert_eq!(raster.sample(1, 0, 2), 22);
        assert_eq!(raster.get(0, 0, 3), None);
    }

    #[test]
    fn out_of_bounds_access() {
        let raster = Raster::new(2, 2, 1);
        assert_eq!(raster.get(2, 0, 0), None);
        assert_eq!(raster.get(0, 2, 0), None);
        assert_eq!(raster.tap(-1, 0, 0), None);
        assert_eq!(raster.tap(0, -1, 0), None);
        assert_eq!(raster.tap(1, 1, 0), Some(0));
    }

    #[test]
    #[should_panic]
    fn set_outside_panics() {
        let mut raster = Raster::new(2, 2, 1);
        raster.set(2, 2, 0, 1);
    }

    #[test]
    fn stride_smaller_than_row() {
        let result = Raster::with_stride(4, 1, 1, 3, vec![0; 4]);
        assert!(matches!(result, Err(Error::InvalidStride(3, 4))));
    }

    #[test]
    fn too_few_samples() {
        let result = Raster::from_samples(3, 3, 1, vec![0; 8]);
        assert!(matches!(
            result,
            Err(Error::MismatchOfSizeBetweenGeometryAndSamples(9, 8))
        ));
    }

    #[test]
    fn zero_channels_rejected() {
        let result = Raster::from_samples(1, 1, 0, vec![]);
        assert!(matches!(result, Err(Error::UnsupportedChannelCount(0))));
    }

    #[test]
    fn empty_raster() {
        let raster = Raster::new(0, 5, 1);
        assert!(raster.is_empty());
        assert_eq!(raster.rows().count(), 5);
    }
}
