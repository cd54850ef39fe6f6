//! # histogram-axes
//!
//! Axis collections for a histogramming engine, in two flavours:
//! 1. **Static** - a tuple of axis types known at compile time, e.g.
//!    `(Regular, Integer, Category)`.
//! 2. **Dynamic** - a `Vec` of type-erased axes, where every element holds one
//!    type out of a closed set (see [`axis::AnyAxis`] and [`axis_set!`]).
//!
//! You can freely compare and convert between the two:
//!
//! ```rust
//! # use histogram_axes::prelude::*;
//! let fixed = (Regular::new(10, 0.0, 1.0), Integer::new(-2, 2));
//!
//! let mut dynamic: DynamicAxes = Vec::new();
//! axes_assign(&mut dynamic, &fixed);
//! assert!(axes_equal(&dynamic, &fixed));
//! assert!(axes_equal(&fixed, &dynamic));
//!
//! assert_eq!(shapes(&dynamic), [12, 7]);
//! assert_eq!(field_count(&fixed), 84);
//! ```
//!
//! Equality never fails: a dynamic axis holding the wrong type simply makes
//! the collections unequal. Assignment into a static collection needs the
//! dynamic source to hold exactly the right types; use [`axes::try_axes_assign`]
//! to get an [`Error`] instead of a panic when that might not hold.

pub mod axes;
pub mod axis;
mod error;

pub use error::Error;

pub mod prelude {
    pub use crate::axes::{
        axes_assign, axes_equal, field_count, shapes, try_axes_assign, AssignAxes, AxesEq,
        DynamicAxes, FieldCounter, ForEachAxis, ShapeCollector, StaticAxes,
    };
    pub use crate::axis::{
        AnyAxis, Axis, AxisSet, AxisVisitor, Category, Circular, Holds, Integer, Regular, Uoflow,
        Variable,
    };
    pub use crate::Error;
}
