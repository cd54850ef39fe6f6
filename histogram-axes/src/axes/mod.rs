//! Collections of axes, and how they compare and convert.
//!
//! A collection comes in one of two representations:
//! - a **static** collection is a tuple of [Axis] types, like
//!   `(Regular, Integer)`. Its length and the type at every position are fixed
//!   at compile time. Tuples with up to 6 axes are supported.
//! - a **dynamic** collection is a [DynamicAxes], a `Vec` of some [AxisSet].
//!   Its length and the active type at every position are only known at runtime.
//!
//! [AxesEq] and [AssignAxes] are implemented for every pairing of the two, and
//! [ForEachAxis] runs an [AxisVisitor] over either one.
//!
//! | pairing | [axes_equal] | [axes_assign] |
//! | --- | --- | --- |
//! | static, static | `false` if the types differ, otherwise `==` | only for identical types |
//! | static, dynamic | length, then type and value at every position | panics on a type mismatch |
//! | dynamic, static | same as static, dynamic | resizes and adopts the static types |
//! | dynamic, dynamic | length, then `==` at every position | lengths must match |

mod tuples;
mod vecs;
mod visitors;

pub use visitors::{FieldCounter, ShapeCollector};

use crate::{
    axis::{AnyAxis, Axis, AxisSet, AxisVisitor},
    Error,
};

/// A runtime sized collection of type-erased axes.
pub type DynamicAxes<V = AnyAxis> = Vec<V>;

/// Marker for tuples of [Axis].
pub trait StaticAxes: 'static + Clone + std::fmt::Debug + PartialEq {
    /// The number of axes in the tuple.
    const NUM_AXES: usize;
}

/// Visits every axis of a collection in order, whatever its representation.
pub trait ForEachAxis {
    fn num_axes(&self) -> usize;

    fn for_each_axis<F: AxisVisitor>(&self, f: &mut F);
}

/// Structural equality between two axis collections.
pub trait AxesEq<Rhs: ?Sized> {
    fn axes_eq(&self, rhs: &Rhs) -> bool;
}

/// Overwrites the axes of `self` with the axes of `Src`.
///
/// Only values change: a tuple keeps its types, and a dynamic collection keeps
/// its closed set of types.
pub trait AssignAxes<Src: ?Sized> {
    /// Fallible version of [AssignAxes::assign_axes]. Nothing is written when
    /// an error is returned.
    fn try_assign_axes(&mut self, src: &Src) -> Result<(), Error>;

    fn assign_axes(&mut self, src: &Src) {
        self.try_assign_axes(src).unwrap()
    }
}

/// `true` if `a` and `b` hold the same axes in the same order.
///
/// ```rust
/// # use histogram_axes::prelude::*;
/// let a = (Integer::new(0, 2), Category::new(["x", "y"]));
/// let b: DynamicAxes = vec![Integer::new(0, 2).into(), Category::new(["x", "y"]).into()];
/// assert!(axes_equal(&a, &b));
///
/// // a tuple of different types is never equal, even with the same shapes
/// let c = (Integer::new(0, 2), Integer::new(0, 1).with_uoflow(Uoflow::Off));
/// assert!(!axes_equal(&a, &c));
/// ```
#[inline]
pub fn axes_equal<A: AxesEq<B> + ?Sized, B: ?Sized>(a: &A, b: &B) -> bool {
    a.axes_eq(b)
}

/// Overwrites `target` with the axes of `src`. See [AssignAxes].
///
/// # Panics
/// When `target` is a tuple and `src` is a dynamic collection that does not
/// hold the tuple's types, or when two dynamic collections differ in length.
#[inline]
pub fn axes_assign<T: AssignAxes<S> + ?Sized, S: ?Sized>(target: &mut T, src: &S) {
    target.assign_axes(src)
}

/// Like [axes_assign], but returns an [Error] and leaves `target` untouched
/// when `src` can't be assigned.
#[inline]
pub fn try_axes_assign<T: AssignAxes<S> + ?Sized, S: ?Sized>(
    target: &mut T,
    src: &S,
) -> Result<(), Error> {
    target.try_assign_axes(src)
}

/// The shape of every axis, in order.
pub fn shapes<A: ForEachAxis + ?Sized>(axes: &A) -> Vec<usize> {
    let mut out = vec![0; axes.num_axes()];
    axes.for_each_axis(&mut ShapeCollector::new(&mut out));
    out
}

/// Total number of bins addressed by the collection; the product of all shapes.
pub fn field_count<A: ForEachAxis + ?Sized>(axes: &A) -> usize {
    let mut counter = FieldCounter::default();
    axes.for_each_axis(&mut counter);
    counter.value()
}

/// Static collections are equal only when they have exactly the same types, so
/// `u` is compared as a `T` or not at all.
///
/// The `Any` downcast only compares the `TypeId`s of `T` and `U`, which are
/// constants of each instantiation; no runtime type information of the values
/// is consulted, and the branch folds away after monomorphisation.
#[inline(always)]
pub(crate) fn static_axes_eq<T: StaticAxes, U: StaticAxes>(t: &T, u: &U) -> bool {
    match (u as &dyn std::any::Any).downcast_ref::<T>() {
        Some(u) => t == u,
        None => false,
    }
}

/// Checks that the dynamic axis at `position` currently holds an `A`.
pub(crate) fn check_holds<V, A>(src: &[V], position: usize) -> Result<(), Error>
where
    V: crate::axis::Holds<A>,
    A: Axis,
{
    if src[position].holds() {
        Ok(())
    } else {
        let err = Error::AxisTypeMismatch {
            position,
            expected: A::NAME,
            found: src[position].kind(),
        };
        log::debug!("rejecting assignment into static axes: {err}");
        Err(err)
    }
}

pub(crate) fn check_len(expected: usize, found: usize) -> Result<(), Error> {
    if expected == found {
        Ok(())
    } else {
        let err = Error::LengthMismatch { expected, found };
        log::debug!("rejecting axes assignment: {err}");
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::*;

    #[test]
    fn test_static_types_decide_before_values() {
        let a = (Integer::new(0, 1),);
        assert!(static_axes_eq(&a, &(Integer::new(0, 1),)));
        assert!(!static_axes_eq(&a, &(Integer::new(0, 2),)));
        assert!(!static_axes_eq(&a, &(Category::new(["a", "b"]),)));
        assert!(!static_axes_eq(&a, &()));
    }

    #[test]
    fn test_check_holds() {
        let v: DynamicAxes = vec![Integer::new(0, 1).into(), Category::default().into()];
        assert_eq!(check_holds::<_, Integer>(&v, 0), Ok(()));
        assert_eq!(
            check_holds::<_, Integer>(&v, 1),
            Err(Error::AxisTypeMismatch {
                position: 1,
                expected: "integer",
                found: "category"
            })
        );
    }

    #[test]
    fn test_check_len() {
        assert_eq!(check_len(2, 2), Ok(()));
        assert_eq!(
            check_len(2, 3),
            Err(Error::LengthMismatch {
                expected: 2,
                found: 3
            })
        );
    }
}
