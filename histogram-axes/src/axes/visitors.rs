use crate::axis::{Axis, AxisVisitor};

/// Writes the shape of every visited axis into successive slots of a buffer.
///
/// ```rust
/// # use histogram_axes::prelude::*;
/// let axes = (Integer::new(0, 0), Category::new(["a", "b"]));
/// let mut buf = [0; 4];
/// let mut collector = ShapeCollector::new(&mut buf);
/// axes.for_each_axis(&mut collector);
/// assert_eq!(collector.written(), 2);
/// assert_eq!(buf, [3, 2, 0, 0]);
/// ```
#[derive(Debug)]
pub struct ShapeCollector<'a> {
    slots: std::slice::IterMut<'a, usize>,
    written: usize,
}

impl<'a> ShapeCollector<'a> {
    pub fn new(out: &'a mut [usize]) -> Self {
        Self {
            slots: out.iter_mut(),
            written: 0,
        }
    }

    /// How many slots have been written so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl AxisVisitor for ShapeCollector<'_> {
    /// # Panics
    /// When the buffer has no slot left.
    fn visit<A: Axis>(&mut self, axis: &A) {
        match self.slots.next() {
            Some(slot) => *slot = axis.shape(),
            None => panic!(
                "shape buffer is full after {} axes, can't collect {} axis",
                self.written,
                A::NAME
            ),
        }
        self.written += 1;
    }
}

/// Multiplies together the shapes of every visited axis, giving the number of
/// bins the whole collection addresses. Starts at 1, so an empty collection
/// counts one bin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldCounter {
    value: usize,
}

impl Default for FieldCounter {
    fn default() -> Self {
        Self { value: 1 }
    }
}

impl FieldCounter {
    pub fn value(&self) -> usize {
        self.value
    }
}

impl AxisVisitor for FieldCounter {
    /// # Panics
    /// When the product no longer fits in a `usize`, in every build profile.
    #[inline(always)]
    fn visit<A: Axis>(&mut self, axis: &A) {
        self.value = match self.value.checked_mul(axis.shape()) {
            Some(value) => value,
            None => panic!(
                "field count overflows usize: {} * {} from {} axis",
                self.value,
                axis.shape(),
                A::NAME
            ),
        };
    }
}
