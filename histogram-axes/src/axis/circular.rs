use num_traits::Float;

use super::Axis;
use crate::Error;

/// `bins` equal-width bins over the periodic range `[phase, phase + perimeter)`.
/// Values wrap around, so there are never under/overflow bins.
#[derive(Clone, Debug, PartialEq)]
pub struct Circular<T = f64> {
    bins: usize,
    phase: T,
    perimeter: T,
    label: String,
}

impl<T: Float> Circular<T> {
    pub fn try_new(bins: usize, phase: T, perimeter: T) -> Result<Self, Error> {
        if bins == 0 {
            return Err(Error::InvalidAxis("circular axis needs at least one bin".into()));
        }
        if !(perimeter > T::zero()) || !phase.is_finite() {
            return Err(Error::InvalidAxis(
                "circular axis needs a finite phase and a positive perimeter".into(),
            ));
        }
        Ok(Self {
            bins,
            phase,
            perimeter,
            label: String::new(),
        })
    }

    pub fn new(bins: usize, phase: T, perimeter: T) -> Self {
        Self::try_new(bins, phase, perimeter).unwrap()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn phase(&self) -> T {
        self.phase
    }

    pub fn perimeter(&self) -> T {
        self.perimeter
    }

    pub fn lower(&self, i: usize) -> T {
        if i > self.bins {
            return T::infinity();
        }
        let i = T::from(i).unwrap_or_else(T::nan);
        let n = T::from(self.bins).unwrap_or_else(T::nan);
        self.phase + i / n * self.perimeter
    }
}

impl Circular<f64> {
    /// A full turn, `[0, 2π)`.
    pub fn full(bins: usize) -> Self {
        Self::new(bins, 0.0, std::f64::consts::TAU)
    }
}

impl<T: Float + std::fmt::Debug + 'static> Axis for Circular<T> {
    const NAME: &'static str = "circular";

    #[inline(always)]
    fn shape(&self) -> usize {
        self.bins
    }

    fn label(&self) -> &str {
        &self.label
    }
}
