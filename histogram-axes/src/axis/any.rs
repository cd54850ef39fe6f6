use super::{Axis, AxisVisitor, Category, Circular, Integer, Regular, Variable};

/// A type-erased axis: holds exactly one axis type out of a closed set, and
/// remembers which one.
///
/// Two values are equal only when they hold the same type and the held axes
/// compare equal. Implement this with [axis_set!](crate::axis_set) rather than by hand.
pub trait AxisSet: 'static + Clone + std::fmt::Debug + PartialEq {
    /// [Axis::NAME] of the held axis.
    fn kind(&self) -> &'static str;

    fn shape(&self) -> usize;

    /// Calls `f` with the held axis as its concrete type.
    fn visit<F: AxisVisitor>(&self, f: &mut F);
}

/// Typed access into an [AxisSet] for one of its member types `A`.
///
/// [From<A>] replaces whatever was held before, making `A` the active type.
pub trait Holds<A: Axis>: AxisSet + From<A> {
    /// `None` if some other type is currently held.
    fn get(&self) -> Option<&A>;

    fn get_mut(&mut self) -> Option<&mut A>;

    #[inline(always)]
    fn holds(&self) -> bool {
        self.get().is_some()
    }
}

/// Declares a closed set of axis types as an enum implementing [AxisSet],
/// with [Holds] and [From] for every member.
///
/// ```rust
/// # use histogram_axes::{axis_set, axis::*};
/// axis_set! {
///     /// Only integer-like axes.
///     pub enum Discrete {
///         Integer(Integer),
///         Category(Category),
///     }
/// }
///
/// let mut a = Discrete::from(Integer::new(0, 3));
/// assert!(Holds::<Integer>::holds(&a));
/// assert_eq!(a.kind(), "integer");
///
/// a = Category::new(["x"]).into();
/// assert!(Holds::<Integer>::get(&a).is_none());
/// assert_eq!(AxisSet::shape(&a), 1);
/// ```
///
/// Each member type may only appear once.
#[macro_export]
macro_rules! axis_set {
    ($(#[$meta:meta])* $vis:vis enum $Name:ident { $($Variant:ident($Ty:ty)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $Name {
            $($Variant($Ty),)+
        }

        impl $crate::axis::AxisSet for $Name {
            fn kind(&self) -> &'static str {
                match self {
                    $(Self::$Variant(_) => <$Ty as $crate::axis::Axis>::NAME,)+
                }
            }

            fn shape(&self) -> usize {
                match self {
                    $(Self::$Variant(a) => $crate::axis::Axis::shape(a),)+
                }
            }

            fn visit<F: $crate::axis::AxisVisitor>(&self, f: &mut F) {
                match self {
                    $(Self::$Variant(a) => f.visit(a),)+
                }
            }
        }

        $(
        impl From<$Ty> for $Name {
            #[inline(always)]
            fn from(a: $Ty) -> Self {
                Self::$Variant(a)
            }
        }

        impl $crate::axis::Holds<$Ty> for $Name {
            #[inline(always)]
            fn get(&self) -> Option<&$Ty> {
                match self {
                    Self::$Variant(a) => Some(a),
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }

            #[inline(always)]
            fn get_mut(&mut self) -> Option<&mut $Ty> {
                match self {
                    Self::$Variant(a) => Some(a),
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }
        )+
    };
}

crate::axis_set! {
    /// The default closed set: every axis type of this crate, with `f64` edges.
    pub enum AnyAxis {
        Regular(Regular),
        Circular(Circular),
        Variable(Variable),
        Integer(Integer),
        Category(Category),
    }
}
