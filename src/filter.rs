mod convolution;
mod kernel;
mod rounding;

pub use convolution::convolve;
pub use kernel::{build_kernel, Kernel, Point};
pub use rounding::round_half_even;

/// Kernel radius recommended by NIST IR 7839 / NIST SP 500-289 for 2:1
/// downsampling of biometric images.
pub const NIST_RADIUS: usize = 4;

/// Gaussian sigma recommended by NIST IR 7839 / NIST SP 500-289 for 2:1
/// downsampling of biometric images.
pub const NIST_SIGMA: f64 = 0.8475;

/// Shape of the Gaussian low-pass filter.
///
/// Outputs are only comparable with other NIST downsampler results when the
/// default parameters are used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianParameters {
    pub radius: usize,
    pub sigma: f64,
}

impl Default for GaussianParameters {
    fn default() -> Self {
        Self {
            radius: NIST_RADIUS,
            sigma: NIST_SIGMA,
        }
    }
}

impl GaussianParameters {
    pub fn build_kernel(&self) -> crate::Result<Kernel> {
        build_kernel(self.radius, self.sigma)
    }
}
