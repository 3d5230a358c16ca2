use ndarray::{ArrayBase, Data, Ix1};
use num_traits::{Float, FromPrimitive};

/// Mean squared amplitude of a signal, the energy-in-band metric the
/// hardware core reports after band-pass filtering.
pub trait BandPower {
    type Output;

    fn band_power(&self) -> Self::Output;
}

impl<S, A> BandPower for ArrayBase<S, Ix1>
where
    S: Data<Elem = A>,
    A: Float + FromPrimitive,
{
    type Output = A;

    fn band_power(&self) -> A {
        if self.is_empty() {
            return A::zero();
        }

        let sum = self.fold(A::zero(), |acc, &x| acc + x * x);
        sum / A::from_usize(self.len()).unwrap()
    }
}
