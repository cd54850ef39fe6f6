use num_traits::Float;

use super::{Axis, Uoflow};
use crate::Error;

/// `bins` equal-width bins over `[min, max)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Regular<T = f64> {
    bins: usize,
    min: T,
    delta: T,
    uoflow: Uoflow,
    label: String,
}

impl<T: Float> Regular<T> {
    pub fn try_new(bins: usize, min: T, max: T) -> Result<Self, Error> {
        if bins == 0 {
            return Err(Error::InvalidAxis("regular axis needs at least one bin".into()));
        }
        if !(min < max) {
            return Err(Error::InvalidAxis("regular axis needs min < max".into()));
        }
        Ok(Self {
            bins,
            min,
            delta: max - min,
            uoflow: Uoflow::default(),
            label: String::new(),
        })
    }

    /// See [Regular::try_new]. Panics on invalid arguments.
    pub fn new(bins: usize, min: T, max: T) -> Self {
        Self::try_new(bins, min, max).unwrap()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_uoflow(mut self, uoflow: Uoflow) -> Self {
        self.uoflow = uoflow;
        self
    }

    /// Number of bins, not counting under/overflow.
    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn uoflow(&self) -> Uoflow {
        self.uoflow
    }

    /// Lower edge of bin `i`. `lower(bins())` is the upper end of the range,
    /// anything past that is `+inf`.
    pub fn lower(&self, i: usize) -> T {
        if i > self.bins {
            return T::infinity();
        }
        let i = T::from(i).unwrap_or_else(T::nan);
        let n = T::from(self.bins).unwrap_or_else(T::nan);
        self.min + i / n * self.delta
    }
}

impl<T: Float + std::fmt::Debug + 'static> Axis for Regular<T> {
    const NAME: &'static str = "regular";

    #[inline(always)]
    fn shape(&self) -> usize {
        self.bins + self.uoflow.extra_bins()
    }

    fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let a = Regular::new(3, -1.0, 2.0);
        assert_eq!(a.bins(), 3);
        assert_eq!(a.shape(), 5);
        assert_eq!(a.with_uoflow(Uoflow::Off).shape(), 3);
    }

    #[test]
    fn test_edges() {
        let a: Regular<f32> = Regular::new(4, 0.0, 2.0);
        assert_eq!(a.lower(0), 0.0);
        assert_eq!(a.lower(1), 0.5);
        assert_eq!(a.lower(4), 2.0);
        assert_eq!(a.lower(5), f32::INFINITY);
    }

    #[test]
    fn test_invalid() {
        assert!(Regular::try_new(0, 0.0, 1.0).is_err());
        assert!(Regular::try_new(2, 1.0, 1.0).is_err());
        assert!(Regular::try_new(2, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_equality_looks_at_every_field() {
        let a = Regular::new(3, 0.0, 1.0);
        assert_eq!(a, Regular::new(3, 0.0, 1.0));
        assert_ne!(a, Regular::new(4, 0.0, 1.0));
        assert_ne!(a, Regular::new(3, 0.0, 2.0));
        assert_ne!(a, a.clone().with_label("x"));
        assert_ne!(a, a.clone().with_uoflow(Uoflow::Off));
    }
}
