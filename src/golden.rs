use std::fs;
use std::path::Path;

use ndarray::Array1;
use rand::Rng;

use crate::config::Config;
use crate::design;
use crate::error::GoldenError;
use crate::filter::FIRFilter;
use crate::power::BandPower;
use crate::quantize::Quantize;
use crate::synth;

/// One run's externally visible artifacts: Q15 filter taps, Q15 input
/// samples and the floating-point band-power reference.
pub struct GoldenVectorSet {
    pub coeffs: Array1<i16>,
    pub samples: Array1<i16>,
    pub power: f64,
}

impl GoldenVectorSet {
    /// Run the full pipeline for one window: design the filter, synthesize
    /// the signal, compute the floating-point reference, quantize.
    pub fn generate<R: Rng>(config: &Config, rng: &mut R) -> Result<Self, GoldenError> {
        config.validate()?;

        let taps = design::bandpass(config.n_taps, config.band, config.fs)?;
        let signal = synth::synthesize(config, rng);

        let filtered = FIRFilter::new(taps.clone()).process(&signal);
        let power = filtered.band_power();

        // Quantization failures surface here, before any artifact is written.
        let coeffs = taps.quantize(config.scale)?;
        let samples = signal.quantize(config.scale)?;

        Ok(Self {
            coeffs,
            samples,
            power,
        })
    }

    /// Write `coeffs.txt`, `samples.txt` and `golden.txt` into `dir`.
    pub fn write_to(&self, dir: &Path) -> Result<(), GoldenError> {
        fs::write(dir.join("coeffs.txt"), int_lines(&self.coeffs))?;
        fs::write(dir.join("samples.txt"), int_lines(&self.samples))?;
        fs::write(dir.join("golden.txt"), format!("{:.10}\n", self.power))?;
        Ok(())
    }
}

fn int_lines(values: &Array1<i16>) -> String {
    let mut out = String::new();
    for v in values {
        out.push_str(&format!("{v}\n"));
    }
    out
}
