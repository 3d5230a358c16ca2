// Windowed-sinc FIR design, after the classic band-pass recipe:
// ideal sinc-difference response, tapered by a Hamming window, gain
// normalized at the centre of the pass-band.

use std::f64::consts::PI;

use ndarray::Array1;

use crate::error::GoldenError;

/// Normalized sinc, `sin(pi x) / (pi x)`.
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

fn hamming(n: usize) -> Array1<f64> {
    Array1::from_shape_fn(n, |i| {
        0.54 - 0.46 * (2.0 * PI * i as f64 / (n - 1) as f64).cos()
    })
}

/// Linear-phase FIR band-pass design by the window method.
///
/// `band` is given in the same units as `fs` and normalized internally
/// against Nyquist. The result is symmetric by construction, rejects DC and
/// everything above the upper edge, and has unity gain at the centre of the
/// pass-band. A band-pass below Nyquist places no pass-band at Nyquist, so
/// even tap counts are accepted.
pub fn bandpass(n_taps: usize, band: (f64, f64), fs: f64) -> Result<Array1<f64>, GoldenError> {
    if n_taps < 2 {
        return Err(GoldenError::Configuration(format!(
            "band-pass design needs at least 2 taps, got {n_taps}"
        )));
    }

    let nyquist = fs / 2.0;
    let lo = band.0 / nyquist;
    let hi = band.1 / nyquist;
    if !(0.0 < lo && lo < hi && hi < 1.0) {
        return Err(GoldenError::Configuration(format!(
            "band edges ({}, {}) must satisfy 0 < lo < hi < {} Hz",
            band.0, band.1, nyquist
        )));
    }

    let alpha = 0.5 * (n_taps - 1) as f64;

    let mut taps = Array1::from_shape_fn(n_taps, |n| {
        let m = n as f64 - alpha;
        hi * sinc(hi * m) - lo * sinc(lo * m)
    });
    taps *= &hamming(n_taps);

    // Unity gain at the centre of the pass-band.
    let centre = 0.5 * (lo + hi);
    let gain: f64 = taps
        .iter()
        .enumerate()
        .map(|(n, h)| h * (PI * (n as f64 - alpha) * centre).cos())
        .sum();
    taps.mapv_inplace(|h| h / gain);

    Ok(taps)
}
