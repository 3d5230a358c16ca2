use std::path::Path;
use std::str::FromStr;

use crate::error::GoldenError;

/// Process-wide parameters of one golden vector run.
///
/// Defaults reproduce the hardware verification scenario: a 1 s window at
/// 256 Hz, a 32-tap band-pass over the 8-30 Hz alpha+beta band, Q15 scaling,
/// a 10 Hz test tone with a small amount of additive noise.
#[derive(Debug, Clone)]
pub struct Config {
    /// Sampling frequency in Hz
    pub fs: f64,
    /// FIR filter length
    pub n_taps: usize,
    /// Pass-band edges in Hz, same units as `fs`
    pub band: (f64, f64),
    /// Samples per analysis window
    pub win_len: usize,
    /// Fixed-point scale factor, maps [-1, 1) onto i16
    pub scale: i32,
    /// Test tone frequency in Hz; must lie inside `band`
    pub tone_hz: f64,
    /// Test tone amplitude
    pub amplitude: f64,
    /// Standard deviation of the additive noise term
    pub noise_std: f64,
    /// Seed of the noise generator
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fs: 256.0,
            n_taps: 32,
            band: (8.0, 30.0),
            win_len: 256,
            scale: 1 << 15,
            tone_hz: 10.0,
            amplitude: 0.5,
            noise_std: 0.05,
            seed: 42,
        }
    }
}

impl Config {
    /// Check the band/sample-rate/tap-count relationships before running.
    pub fn validate(&self) -> Result<(), GoldenError> {
        let (lo, hi) = self.band;
        let nyquist = self.fs / 2.0;

        if !(self.fs > 0.0) {
            return Err(GoldenError::Configuration(format!(
                "sampling rate must be positive, got {}",
                self.fs
            )));
        }
        if self.n_taps < 2 {
            return Err(GoldenError::Configuration(format!(
                "filter length must be at least 2 taps, got {}",
                self.n_taps
            )));
        }
        if !(lo > 0.0 && lo < hi && hi < nyquist) {
            return Err(GoldenError::Configuration(format!(
                "band edges ({lo}, {hi}) must satisfy 0 < lo < hi < {nyquist}"
            )));
        }
        if self.win_len == 0 {
            return Err(GoldenError::Configuration(
                "window length must be at least 1 sample".into(),
            ));
        }
        if self.scale < 2 {
            return Err(GoldenError::Configuration(format!(
                "scale factor must be at least 2, got {}",
                self.scale
            )));
        }
        if !(self.noise_std >= 0.0 && self.noise_std.is_finite()) {
            return Err(GoldenError::Configuration(format!(
                "noise standard deviation must be finite and non-negative, got {}",
                self.noise_std
            )));
        }

        Ok(())
    }

    /// Load a configuration override from an INI file.
    ///
    /// Sections: `[Acquisition]` (SamplingRate, WindowLength), `[Filter]`
    /// (Taps, BandLow, BandHigh), `[Stimulus]` (ToneHz, Amplitude, NoiseStd,
    /// Seed), `[Quantization]` (Scale). Any key left out keeps its default.
    pub fn from_ini<P: AsRef<Path>>(path: P) -> Result<Self, GoldenError> {
        let file = ini::Ini::load_from_file(path.as_ref())
            .map_err(|e| GoldenError::Configuration(e.to_string()))?;

        let mut config = Config::default();

        if let Some(acquisition) = file.section(Some("Acquisition")) {
            if let Some(v) = acquisition.get("SamplingRate") {
                config.fs = parse(v, "SamplingRate")?;
            }
            if let Some(v) = acquisition.get("WindowLength") {
                config.win_len = parse(v, "WindowLength")?;
            }
        }
        if let Some(filter) = file.section(Some("Filter")) {
            if let Some(v) = filter.get("Taps") {
                config.n_taps = parse(v, "Taps")?;
            }
            if let Some(v) = filter.get("BandLow") {
                config.band.0 = parse(v, "BandLow")?;
            }
            if let Some(v) = filter.get("BandHigh") {
                config.band.1 = parse(v, "BandHigh")?;
            }
        }
        if let Some(stimulus) = file.section(Some("Stimulus")) {
            if let Some(v) = stimulus.get("ToneHz") {
                config.tone_hz = parse(v, "ToneHz")?;
            }
            if let Some(v) = stimulus.get("Amplitude") {
                config.amplitude = parse(v, "Amplitude")?;
            }
            if let Some(v) = stimulus.get("NoiseStd") {
                config.noise_std = parse(v, "NoiseStd")?;
            }
            if let Some(v) = stimulus.get("Seed") {
                config.seed = parse(v, "Seed")?;
            }
        }
        if let Some(quantization) = file.section(Some("Quantization")) {
            if let Some(v) = quantization.get("Scale") {
                config.scale = parse(v, "Scale")?;
            }
        }

        Ok(config)
    }
}

fn parse<T: FromStr>(value: &str, key: &str) -> Result<T, GoldenError> {
    value
        .trim()
        .parse()
        .map_err(|_| GoldenError::Configuration(format!("invalid value {value:?} for {key}")))
}
