use std::f64::consts::PI;

use ndarray::Array1;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::config::Config;

/// Sample instants of one analysis window: `t[i] = i / fs`.
pub fn time_base(config: &Config) -> Array1<f64> {
    Array1::from_shape_fn(config.win_len, |i| i as f64 / config.fs)
}

/// Synthetic EEG-like test signal: a tone inside the pass-band plus additive
/// white Gaussian noise drawn from the injected generator.
pub fn synthesize<R: Rng>(config: &Config, rng: &mut R) -> Array1<f64> {
    let t = time_base(config);

    let mut signal = t.mapv(|ti| config.amplitude * (2.0 * PI * config.tone_hz * ti).sin());

    // noise_std == 0 keeps the tone exact
    if config.noise_std > 0.0 {
        let noise = Normal::new(0.0, config.noise_std).unwrap();
        for x in signal.iter_mut() {
            *x += noise.sample(rng);
        }
    }

    signal
}
