use super::kernel::Kernel;
use super::rounding::quantize;
use crate::image::Raster;

/// Convolves every channel of `source` with `kernel`.
///
/// Taps falling outside the raster take the value of the pixel the kernel is
/// centered on. This is not nearest neighbour clamping: a tap two columns left
/// of the border still reads the center pixel, not the border pixel.
pub fn convolve(source: &Raster, kernel: &Kernel) -> Raster {
    let mut destination = Raster::new(source.width(), source.height(), source.channels());
    if source.is_empty() {
        return destination;
    }
    for channel in 0..source.channels() {
        for y in 0..source.height() {
            for x in 0..source.width() {
                let response = weighted_sum(source, kernel, x, y, channel);
                destination.set(x, y, channel, quantize(response));
            }
        }
    }
    destination
}

fn weighted_sum(source: &Raster, kernel: &Kernel, x: usize, y: usize, channel: usize) -> f64 {
    let radius = kernel.radius() as isize;
    let center = source.sample(x, y, channel);
    let mut sum = 0.0;
    // column-major accumulation, responses must match NIST outputs bit for bit
    for kernel_x in 0..kernel.side_length() {
        let tap_x = x as isize - radius + kernel_x as isize;
        for kernel_y in 0..kernel.side_length() {
            let tap_y = y as isize - radius + kernel_y as isize;
            let value = source.tap(tap_x, tap_y, channel).unwrap_or(center);
            sum += value as f64 * kernel.weight(kernel_x, kernel_y) as f64;
        }
    }
    sum
}
