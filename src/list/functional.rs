/*!
 * Functional Helpers
 * In-place application, filtering, and range remapping
 */

use super::container::SeqList;
use crate::core::{ListError, ListResult, Value};
use log::trace;

impl SeqList {
    /// Replace each element with `f(&element)`, in index order, in place.
    ///
    /// Returns the receiver for chaining. Goes through the assignment path,
    /// so an immutable list fails with [`ListError::Immutable`].
    pub fn apply<F>(&mut self, mut f: F) -> ListResult<&mut Self>
    where
        F: FnMut(&Value) -> Value,
    {
        self.try_apply(|v| Ok(f(v)))
    }

    /// Fallible variant of [`apply`](Self::apply); the callback's error
    /// propagates to the caller unchanged.
    pub fn try_apply<F>(&mut self, mut f: F) -> ListResult<&mut Self>
    where
        F: FnMut(&Value) -> ListResult<Value>,
    {
        let len = self.items.len();
        for i in 0..len {
            let next = f(&self.items[i])?;
            self.assign(i, next)?;
        }
        Ok(self)
    }

    /// Replace each element with `f(list, index)`, giving the callback the
    /// whole container instead of just the value.
    ///
    /// Iterates by index against the length at entry, not a live iterator,
    /// so the callback may read or rewrite other indices mid-pass. If it
    /// shrinks the list below the entry length, the assignment at a removed
    /// index fails with [`ListError::OutOfBounds`].
    pub fn apply_indexed<F>(&mut self, mut f: F) -> ListResult<&mut Self>
    where
        F: FnMut(&mut SeqList, usize) -> Value,
    {
        let len = self.items.len();
        for i in 0..len {
            let next = f(self, i);
            self.assign(i, next)?;
        }
        Ok(self)
    }

    /// New list with every element the predicate accepts, in original order.
    /// The receiver is untouched; elements enter the result through the
    /// append path, so nested lists are copied.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> SeqList
    where
        P: FnMut(&Value) -> bool,
    {
        let mut filtered = SeqList::new();
        for item in &self.items {
            if predicate(item) {
                filtered.push(item.clone());
            }
        }
        filtered
    }

    /// Drop every null element, in place. Removal is not assignment, so the
    /// immutability flag does not apply.
    pub fn remove_nones(&mut self) -> &mut Self {
        let before = self.items.len();
        self.items.retain(|v| !v.is_null());
        trace!("seqlist: removed {} null elements", before - self.items.len());
        self
    }

    /// Linearly remap every element from `[old_min, old_max]` to
    /// `[new_min, new_max]`, in place.
    ///
    /// Fails with [`ListError::DegenerateRange`] when the source range is a
    /// single point, and with [`ListError::NonNumeric`] on elements that do
    /// not support arithmetic. Results are floats (complex elements stay
    /// complex).
    pub fn remap(
        &mut self,
        old_min: f64,
        old_max: f64,
        new_min: f64,
        new_max: f64,
    ) -> ListResult<&mut Self> {
        if old_max == old_min {
            return Err(ListError::DegenerateRange(old_min));
        }
        let scale = (new_max - new_min) / (old_max - old_min);
        self.try_apply(|v| {
            v.try_sub(&Value::Float(old_min))?
                .try_mul(&Value::Float(scale))?
                .try_add(&Value::Float(new_min))
        })
    }
}
