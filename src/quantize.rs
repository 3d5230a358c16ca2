use ndarray::{Array1, ArrayBase, Data, Ix1};

use crate::error::GoldenError;

/// Q15 quantization: scale, round half-to-even, check the signed 16-bit
/// range. An out-of-range value is an error; values are never clamped or
/// wrapped.
pub trait Quantize {
    fn quantize(&self, scale: i32) -> Result<Array1<i16>, GoldenError>;
}

/// Inverse of [`Quantize`], back to the unit range.
pub trait Dequantize {
    fn dequantize(&self, scale: i32) -> Array1<f64>;
}

impl<S> Quantize for ArrayBase<S, Ix1>
where
    S: Data<Elem = f64>,
{
    fn quantize(&self, scale: i32) -> Result<Array1<i16>, GoldenError> {
        let range = f64::from(i16::MIN)..=f64::from(i16::MAX);
        let mut quantized = Array1::zeros(self.len());

        for (index, &value) in self.iter().enumerate() {
            let scaled = (value * f64::from(scale)).round_ties_even();
            if !range.contains(&scaled) {
                return Err(GoldenError::QuantizationOverflow { index, value });
            }
            quantized[index] = scaled as i16;
        }

        Ok(quantized)
    }
}

impl<S> Dequantize for ArrayBase<S, Ix1>
where
    S: Data<Elem = i16>,
{
    fn dequantize(&self, scale: i32) -> Array1<f64> {
        self.mapv(|q| f64::from(q) / f64::from(scale))
    }
}
