//! Axis related traits and types like [Axis], [AxisVisitor], [AxisSet] and the
//! concrete axes [Regular], [Circular], [Variable], [Integer] and [Category].
//!
//! Every axis reports its [Axis::shape], the number of bins it addresses
//! including any under/overflow bins:
//! ```rust
//! # use histogram_axes::axis::*;
//! assert_eq!(Regular::new(4, 0.0, 1.0).shape(), 6);
//! assert_eq!(Regular::new(4, 0.0, 1.0).with_uoflow(Uoflow::Off).shape(), 4);
//! assert_eq!(Circular::full(8).shape(), 8);
//! assert_eq!(Category::new(["red", "green"]).shape(), 2);
//! ```

mod any;
mod category;
mod circular;
mod integer;
mod regular;
mod variable;

pub use any::{AnyAxis, AxisSet, Holds};
pub use category::Category;
pub use circular::Circular;
pub use integer::Integer;
pub use regular::Regular;
pub use variable::Variable;

/// A single dimension of a histogram.
pub trait Axis: 'static + Clone + std::fmt::Debug + PartialEq {
    /// Short name of the axis kind, used in error messages.
    const NAME: &'static str;

    /// Number of bins addressed by this axis, under/overflow included.
    fn shape(&self) -> usize;

    fn label(&self) -> &str;
}

/// Something that can be called once per axis of a collection, no matter
/// whether the axis sits in a tuple or behind a type-erased [AxisSet].
pub trait AxisVisitor {
    fn visit<A: Axis>(&mut self, axis: &A);
}

/// Whether an axis carries an extra underflow and overflow bin.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Uoflow {
    #[default]
    On,
    Off,
}

impl Uoflow {
    #[inline(always)]
    pub(crate) fn extra_bins(self) -> usize {
        match self {
            Uoflow::On => 2,
            Uoflow::Off => 0,
        }
    }
}
