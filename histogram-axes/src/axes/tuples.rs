use super::*;
use crate::axis::Holds;

macro_rules! tuple_impls {
    ([$($A:ident),*] [$($idx:tt),*], $num:expr) => {
        impl<$($A: Axis, )*> StaticAxes for ($($A, )*) {
            const NUM_AXES: usize = $num;
        }

        impl<$($A: Axis, )*> ForEachAxis for ($($A, )*) {
            #[inline(always)]
            fn num_axes(&self) -> usize {
                $num
            }

            #[allow(unused_variables)]
            fn for_each_axis<F: AxisVisitor>(&self, f: &mut F) {
                $(f.visit(&self.$idx);)*
            }
        }

        impl<V: AxisSet $(+ Holds<$A>)*, $($A: Axis, )*> AxesEq<[V]> for ($($A, )*) {
            /// Stops at the first position that holds another type or another value.
            #[allow(unused_variables)]
            fn axes_eq(&self, rhs: &[V]) -> bool {
                rhs.len() == $num
                    $(&& <V as Holds<$A>>::get(&rhs[$idx]).map_or(false, |a| *a == self.$idx))*
            }
        }

        impl<V: AxisSet $(+ Holds<$A>)*, $($A: Axis, )*> AxesEq<Vec<V>> for ($($A, )*) {
            #[inline(always)]
            fn axes_eq(&self, rhs: &Vec<V>) -> bool {
                self.axes_eq(rhs.as_slice())
            }
        }

        impl<V: AxisSet $(+ Holds<$A>)*, $($A: Axis, )*> AxesEq<($($A, )*)> for [V] {
            #[inline(always)]
            fn axes_eq(&self, rhs: &($($A, )*)) -> bool {
                rhs.axes_eq(self)
            }
        }

        impl<V: AxisSet $(+ Holds<$A>)*, $($A: Axis, )*> AxesEq<($($A, )*)> for Vec<V> {
            #[inline(always)]
            fn axes_eq(&self, rhs: &($($A, )*)) -> bool {
                rhs.axes_eq(self.as_slice())
            }
        }

        impl<$($A: Axis, )*> AssignAxes<($($A, )*)> for ($($A, )*) {
            #[inline(always)]
            fn try_assign_axes(&mut self, src: &Self) -> Result<(), Error> {
                self.clone_from(src);
                Ok(())
            }
        }

        impl<V: AxisSet $(+ Holds<$A>)*, $($A: Axis, )*> AssignAxes<[V]> for ($($A, )*) {
            /// Every position is checked before the first one is written.
            #[allow(unused_variables)]
            fn try_assign_axes(&mut self, src: &[V]) -> Result<(), Error> {
                check_len($num, src.len())?;
                $(check_holds::<V, $A>(src, $idx)?;)*
                log::trace!("assigning {} dynamic axes into static axes", $num);
                $(
                    if let Some(a) = <V as Holds<$A>>::get(&src[$idx]) {
                        self.$idx.clone_from(a);
                    }
                )*
                Ok(())
            }
        }

        impl<V: AxisSet $(+ Holds<$A>)*, $($A: Axis, )*> AssignAxes<Vec<V>> for ($($A, )*) {
            #[inline(always)]
            fn try_assign_axes(&mut self, src: &Vec<V>) -> Result<(), Error> {
                self.try_assign_axes(src.as_slice())
            }
        }

        impl<V: AxisSet $(+ Holds<$A>)*, $($A: Axis, )*> AssignAxes<($($A, )*)> for Vec<V> {
            /// Replaces all previous elements; afterwards `self` has exactly
            /// one axis per tuple field, holding that field's type.
            #[allow(unused_variables)]
            fn try_assign_axes(&mut self, src: &($($A, )*)) -> Result<(), Error> {
                log::trace!(
                    "assigning {} static axes into dynamic axes of length {}",
                    $num,
                    self.len()
                );
                self.clear();
                self.reserve_exact($num);
                $(self.push(V::from(src.$idx.clone()));)*
                Ok(())
            }
        }
    };
}

tuple_impls!([] [], 0);
tuple_impls!([A0] [0], 1);
tuple_impls!([A0, A1] [0, 1], 2);
tuple_impls!([A0, A1, A2] [0, 1, 2], 3);
tuple_impls!([A0, A1, A2, A3] [0, 1, 2, 3], 4);
tuple_impls!([A0, A1, A2, A3, A4] [0, 1, 2, 3, 4], 5);
tuple_impls!([A0, A1, A2, A3, A4, A5] [0, 1, 2, 3, 4, 5], 6);

/// Static equality for every pairing of tuple arities. Tuples of different
/// types are never equal, see [static_axes_eq].
macro_rules! static_eq_impls {
    ([$($A:ident),*], [$($B:ident),*]) => {
        impl<$($A: Axis, )* $($B: Axis, )*> AxesEq<($($B, )*)> for ($($A, )*) {
            #[inline(always)]
            fn axes_eq(&self, rhs: &($($B, )*)) -> bool {
                static_axes_eq(self, rhs)
            }
        }
    };
}

macro_rules! static_eq_for {
    ([$($A:ident),*]) => {
        static_eq_impls!([$($A),*], []);
        static_eq_impls!([$($A),*], [B0]);
        static_eq_impls!([$($A),*], [B0, B1]);
        static_eq_impls!([$($A),*], [B0, B1, B2]);
        static_eq_impls!([$($A),*], [B0, B1, B2, B3]);
        static_eq_impls!([$($A),*], [B0, B1, B2, B3, B4]);
        static_eq_impls!([$($A),*], [B0, B1, B2, B3, B4, B5]);
    };
}

static_eq_for!([]);
static_eq_for!([A0]);
static_eq_for!([A0, A1]);
static_eq_for!([A0, A1, A2]);
static_eq_for!([A0, A1, A2, A3]);
static_eq_for!([A0, A1, A2, A3, A4]);
static_eq_for!([A0, A1, A2, A3, A4, A5]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::*;

    fn three() -> (Regular, Integer, Category) {
        (
            Regular::new(3, 0.0, 1.0).with_uoflow(Uoflow::Off),
            Integer::new(0, 1),
            Category::new(["a", "b", "c", "d", "e"]),
        )
    }

    #[test]
    fn test_num_axes() {
        assert_eq!(<() as StaticAxes>::NUM_AXES, 0);
        assert_eq!(<(Integer,) as StaticAxes>::NUM_AXES, 1);
        assert_eq!(three().num_axes(), 3);
    }

    #[test]
    fn test_static_static_eq() {
        assert!(().axes_eq(&()));
        assert!(three().axes_eq(&three()));

        let mut other = three();
        other.1 = Integer::new(0, 2);
        assert!(!three().axes_eq(&other));
        assert!(!other.axes_eq(&three()));
    }

    #[test]
    fn test_static_static_eq_different_types() {
        // same shapes at every position, different types
        let a = (Integer::new(0, 0).with_uoflow(Uoflow::Off),);
        let b = (Category::new(["x"]),);
        assert_eq!(a.0.shape(), b.0.shape());
        assert!(!a.axes_eq(&b));
        assert!(!b.axes_eq(&a));

        // different arity
        assert!(!three().axes_eq(&(three().0, three().1)));
        assert!(!().axes_eq(&three()));

        // same types, different order
        let c = (Integer::new(0, 1), Regular::new(3, 0.0, 1.0));
        let d = (Regular::new(3, 0.0, 1.0), Integer::new(0, 1));
        assert!(!c.axes_eq(&d));
    }

    #[test]
    fn test_static_dynamic_eq() {
        let v: DynamicAxes = vec![three().0.into(), three().1.into(), three().2.into()];
        assert!(three().axes_eq(&v));
        assert!(v.axes_eq(&three()));
        assert!(three().axes_eq(v.as_slice()));
        assert!(v.as_slice().axes_eq(&three()));

        assert!(!three().axes_eq(&v[..2]));
        assert!(!().axes_eq(&v));
        assert!(().axes_eq(&DynamicAxes::<AnyAxis>::new()));
    }

    #[test]
    fn test_static_dynamic_eq_type_mismatch() {
        let mut v: DynamicAxes = vec![three().0.into(), three().1.into(), three().2.into()];
        v[1] = Category::new(["0", "1", "2", "3"]).into();
        assert_eq!(AxisSet::shape(&v[1]), three().1.shape());
        assert!(!three().axes_eq(&v));
        assert!(!v.axes_eq(&three()));
    }

    #[test]
    fn test_assign_dynamic_into_static() {
        let src: DynamicAxes = vec![
            Regular::new(7, -1.0, 1.0).into(),
            Integer::new(5, 9).into(),
            Category::new(["x"]).into(),
        ];
        let mut dst = three();
        dst.assign_axes(&src);
        assert_eq!(dst.0, Regular::new(7, -1.0, 1.0));
        assert_eq!(dst.1, Integer::new(5, 9));
        assert_eq!(dst.2, Category::new(["x"]));
        assert!(dst.axes_eq(&src));
    }

    #[test]
    fn test_try_assign_leaves_static_untouched() {
        let src: DynamicAxes = vec![
            Regular::new(7, -1.0, 1.0).into(),
            Integer::new(5, 9).into(),
            Integer::new(0, 0).into(),
        ];
        let mut dst = three();
        assert_eq!(
            dst.try_assign_axes(&src),
            Err(Error::AxisTypeMismatch {
                position: 2,
                expected: "category",
                found: "integer",
            })
        );
        assert_eq!(dst, three());

        assert_eq!(
            dst.try_assign_axes(&src[..2]),
            Err(Error::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(dst, three());
    }

    #[test]
    #[should_panic]
    fn test_assign_type_mismatch_panics() {
        let src: DynamicAxes = vec![Category::default().into()];
        let mut dst = (Integer::new(0, 1),);
        dst.assign_axes(&src);
    }

    #[test]
    fn test_assign_static_into_dynamic() {
        let mut v: DynamicAxes = vec![
            Integer::new(0, 1).into(),
            Integer::new(0, 2).into(),
            Integer::new(0, 3).into(),
            Integer::new(0, 4).into(),
        ];
        v.assign_axes(&three());
        assert_eq!(v.len(), 3);
        assert_eq!(v[0].kind(), "regular");
        assert_eq!(v[1].kind(), "integer");
        assert_eq!(v[2].kind(), "category");
        assert!(v.axes_eq(&three()));

        v.assign_axes(&());
        assert!(v.is_empty());
    }

    #[test]
    fn test_assign_static_into_static() {
        let mut dst = three();
        let src = (
            Regular::new(1, 0.0, 1.0),
            Integer::new(-3, 3),
            Category::default(),
        );
        dst.assign_axes(&src);
        assert_eq!(dst, src);
        assert!(dst.axes_eq(&src));
    }

    #[test]
    fn test_for_each_axis_order() {
        struct Names(Vec<&'static str>);
        impl AxisVisitor for Names {
            fn visit<A: Axis>(&mut self, _: &A) {
                self.0.push(A::NAME);
            }
        }
        let mut names = Names(Vec::new());
        three().for_each_axis(&mut names);
        assert_eq!(names.0, ["regular", "integer", "category"]);
    }
}
