use super::*;

impl<V: AxisSet> ForEachAxis for [V] {
    #[inline(always)]
    fn num_axes(&self) -> usize {
        self.len()
    }

    fn for_each_axis<F: AxisVisitor>(&self, f: &mut F) {
        for axis in self.iter() {
            axis.visit(f);
        }
    }
}

impl<V: AxisSet> ForEachAxis for Vec<V> {
    #[inline(always)]
    fn num_axes(&self) -> usize {
        self.len()
    }

    fn for_each_axis<F: AxisVisitor>(&self, f: &mut F) {
        self.as_slice().for_each_axis(f)
    }
}

impl<V: AxisSet> AxesEq<[V]> for [V] {
    /// A position holding a different type than its counterpart is unequal,
    /// not an error.
    fn axes_eq(&self, rhs: &[V]) -> bool {
        self.len() == rhs.len() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<V: AxisSet> AxesEq<Vec<V>> for Vec<V> {
    #[inline(always)]
    fn axes_eq(&self, rhs: &Vec<V>) -> bool {
        self.as_slice().axes_eq(rhs.as_slice())
    }
}

impl<V: AxisSet> AssignAxes<[V]> for [V] {
    /// Both sides must have the same length. Each element takes over the
    /// value and the active type of its counterpart.
    fn try_assign_axes(&mut self, src: &[V]) -> Result<(), Error> {
        check_len(self.len(), src.len())?;
        log::trace!("assigning {} dynamic axes into dynamic axes", src.len());
        for (dst, src) in self.iter_mut().zip(src.iter()) {
            dst.clone_from(src);
        }
        Ok(())
    }
}

impl<V: AxisSet> AssignAxes<Vec<V>> for Vec<V> {
    #[inline(always)]
    fn try_assign_axes(&mut self, src: &Vec<V>) -> Result<(), Error> {
        self.as_mut_slice().try_assign_axes(src.as_slice())
    }
}
