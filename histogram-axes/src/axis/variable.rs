use num_traits::Float;

use super::{Axis, Uoflow};
use crate::Error;

/// Bins of varying width, given by their strictly increasing edges.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable<T = f64> {
    edges: Vec<T>,
    uoflow: Uoflow,
    label: String,
}

impl<T: Float> Variable<T> {
    pub fn try_new(edges: impl Into<Vec<T>>) -> Result<Self, Error> {
        let edges = edges.into();
        if edges.len() < 2 {
            return Err(Error::InvalidAxis(
                "variable axis needs at least two edges".into(),
            ));
        }
        if !edges.windows(2).all(|w| w[0] < w[1]) {
            return Err(Error::InvalidAxis(
                "variable axis edges must be strictly increasing".into(),
            ));
        }
        Ok(Self {
            edges,
            uoflow: Uoflow::default(),
            label: String::new(),
        })
    }

    pub fn new(edges: impl Into<Vec<T>>) -> Self {
        Self::try_new(edges).unwrap()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_uoflow(mut self, uoflow: Uoflow) -> Self {
        self.uoflow = uoflow;
        self
    }

    pub fn bins(&self) -> usize {
        self.edges.len() - 1
    }

    pub fn edges(&self) -> &[T] {
        &self.edges
    }

    pub fn uoflow(&self) -> Uoflow {
        self.uoflow
    }

    pub fn lower(&self, i: usize) -> T {
        self.edges.get(i).copied().unwrap_or_else(T::infinity)
    }
}

impl<T: Float + std::fmt::Debug + 'static> Axis for Variable<T> {
    const NAME: &'static str = "variable";

    #[inline(always)]
    fn shape(&self) -> usize {
        self.bins() + self.uoflow.extra_bins()
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
        let a = Variable::new([0.0, 1.0, 10.0, 100.0]);
        assert_eq!(a.bins(), 3);
        assert_eq!(a.shape(), 5);
        assert_eq!(a.lower(2), 10.0);
        assert_eq!(a.lower(4), f64::INFINITY);
    }

    #[test]
    fn test_invalid() {
        assert!(Variable::try_new([1.0]).is_err());
        assert!(Variable::try_new([0.0, 2.0, 1.0]).is_err());
        assert!(Variable::try_new([0.0, 0.0]).is_err());
    }
}
