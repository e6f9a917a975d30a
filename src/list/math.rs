/*!
 * Numeric Aggregates
 * Elementwise arithmetic and reductions over numeric elements
 */

use super::container::SeqList;
use crate::core::{ListError, ListResult, Value};
use std::cmp::Ordering;

impl SeqList {
    /// Add `value` to every element, in place.
    ///
    /// `add_each` and [`mul_each`](Self::mul_each) are deliberately distinct
    /// operations; callers pick the combination they want explicitly.
    pub fn add_each(&mut self, value: &Value) -> ListResult<&mut Self> {
        self.try_apply(|v| v.try_add(value))
    }

    /// Subtract `value` from every element, in place
    pub fn sub_each(&mut self, value: &Value) -> ListResult<&mut Self> {
        self.try_apply(|v| v.try_sub(value))
    }

    /// Multiply every element by `value`, in place
    pub fn mul_each(&mut self, value: &Value) -> ListResult<&mut Self> {
        self.try_apply(|v| v.try_mul(value))
    }

    /// Divide every element by `value`, in place. A numeric zero divisor is
    /// rejected up front with [`ListError::DivideByZero`].
    pub fn div_each(&mut self, value: &Value) -> ListResult<&mut Self> {
        if value.is_zero() {
            return Err(ListError::DivideByZero);
        }
        self.try_apply(|v| v.try_div(value))
    }

    /// Minimum element under natural ordering
    pub fn min(&self) -> ListResult<Value> {
        self.extremum("minimum", Ordering::Less)
    }

    /// Maximum element under natural ordering
    pub fn max(&self) -> ListResult<Value> {
        self.extremum("maximum", Ordering::Greater)
    }

    fn extremum(&self, what: &str, keep: Ordering) -> ListResult<Value> {
        let mut iter = self.items.iter();
        let mut best = iter
            .next()
            .ok_or_else(|| ListError::Empty(what.to_string()))?;
        for item in iter {
            match item.partial_cmp_value(best) {
                Some(ord) if ord == keep => best = item,
                Some(_) => {}
                None => return Err(ListError::Incomparable),
            }
        }
        Ok(best.clone())
    }

    /// Average of the numeric elements (int, float, complex).
    ///
    /// Non-numeric elements are silently skipped; `None` when no numeric
    /// element exists. Integer sums divide as true division, so the result
    /// is a float (or complex when complex elements contributed).
    #[must_use]
    pub fn average(&self) -> Option<Value> {
        let mut sum = Value::Int(0);
        let mut count: i64 = 0;
        for item in self.items.iter().filter(|v| v.is_numeric()) {
            // Numeric + numeric cannot fail
            sum = sum.try_add(item).ok()?;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        sum.try_div(&Value::Int(count)).ok()
    }
}
