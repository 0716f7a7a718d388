/// Rounds to the nearest integer, resolving exact halves to the even neighbour.
pub fn round_half_even(value: f64) -> i64 {
    let floor = value.floor();
    let fraction = value - floor;
    let lower = floor as i64;
    if fraction < 0.5 {
        lower
    } else if fraction > 0.5 {
        lower + 1
    } else if lower % 2 == 0 {
        lower
    } else {
        lower + 1
    }
}

/// Quantizes a filter response to an 8 bit sample.
pub(super) fn quantize(value: f64) -> u8 {
    round_half_even(value).clamp(u8::MIN as i64, u8::MAX as i64) as u8
}
