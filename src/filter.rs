use ndarray::{Array1, ArrayBase, Data, Ix1};

/// Direct-form FIR filter with zero initial state.
pub struct FIRFilter {
    coefficients: Array1<f64>,
}

impl FIRFilter {
    pub fn new(coefficients: impl Into<Array1<f64>>) -> Self {
        Self {
            coefficients: coefficients.into(),
        }
    }

    /// Causal convolution of `signal` with the filter taps.
    ///
    /// `output[n] = sum(b[k] * x[n - k])`, with implicit zeros before the
    /// start of the signal; the output has the same length as the input.
    /// This is the convention the hardware test bench assumes for the first
    /// `n_taps - 1` samples.
    pub fn process<S>(&self, signal: &ArrayBase<S, Ix1>) -> Array1<f64>
    where
        S: Data<Elem = f64>,
    {
        let m = self.coefficients.len();
        let mut output = Array1::zeros(signal.len());

        for n in 0..signal.len() {
            let mut acc = 0.0;
            for k in 0..m.min(n + 1) {
                acc += self.coefficients[k] * signal[n - k];
            }
            output[n] = acc;
        }

        output
    }
}
