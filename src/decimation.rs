use crate::image::Raster;

/// Halves both dimensions by keeping the pixels on odd rows and odd columns.
///
/// Pixel `(x, y)` of the source lands on `(x / 2, y / 2)`. Sampling the even
/// indices instead would shift the output by one source pixel.
pub fn decimate(source: &Raster) -> Raster {
    let mut destination = Raster::new(source.width() / 2, source.height() / 2, source.channels());
    for y in (1..source.height()).step_by(2) {
        for x in (1..source.width()).step_by(2) {
            for channel in 0..source.channels() {
                destination.set(x / 2, y / 2, channel, source.sample(x, y, channel));
            }
        }
    }
    destination
}

#[cfg(test)]
mod test {
    use crate::image::Raster;

    use super::decimate;

    #[rustfmt::skip]
    const TEST_RASTER: &[u8] = &[
         0,  1,  2,  3,
         4,  5,  6,  7,
         8,  9, 10, 11,
        12, 13, 14, 15,
    ];

    #[test]
    fn keeps_odd_rows_and_columns() {
        let source = Raster::from_samples(4, 4, 1, TEST_RASTER.to_vec()).unwrap();
        let decimated = decimate(&source);
        assert_eq!(decimated.sample(0, 0, 0), 5);
        assert_eq!(decimated.sample(1, 0, 0), 7);
        assert_eq!(decimated.sample(0, 1, 0), 13);
        assert_eq!(decimated.sample(1, 1, 0), 15);
    }

    #[test]
    fn dimensions_are_floored_halves() {
        for (width, height) in [(10, 10), (9, 7), (1, 8), (8, 1), (2, 3), (0, 0)] {
            let decimated = decimate(&Raster::new(width, height, 1));
            assert_eq!(
                (decimated.width(), decimated.height()),
                (width / 2, height / 2),
                "for source {}x{}",
                width,
                height
            );
        }
    }

    #[test]
    fn odd_sized_source_drops_last_row_and_column() {
        let samples: Vec<u8> = (0..15).collect();
        let source = Raster::from_samples(5, 3, 1, samples).unwrap();
        let decimated = decimate(&source);
        assert_eq!(decimated.rows().flatten().copied().collect::<Vec<u8>>(), [6, 8]);
    }

    #[test]
    fn channels_are_kept_together() {
        let samples: Vec<u8> = (0..24).collect();
        let source = Raster::from_samples(4, 2, 3, samples).unwrap();
        let decimated = decimate(&source);
        assert_eq!(decimated.channels(), 3);
        assert_eq!(decimated.row(0), &[15, 16, 17, 21, 22, 23]);
    }

    #[test]
    fn padded_source() {
        #[rustfmt::skip]
        let samples = vec![
            1, 2, 0,
            3, 4, 0,
        ];
        let source = Raster::with_stride(2, 2, 1, 3, samples).unwrap();
        let decimated = decimate(&source);
        assert_eq!(decimated.sample(0, 0, 0), 4);
    }
}
