/*!
 * List Container
 * Construction, copy discipline, and the immutability gate
 */

use crate::core::{ListError, ListResult, Value};
use log::{debug, trace};
use std::ops::Index;

/// Enhanced ordered sequence container.
///
/// Wraps a plain vector rather than exposing one, so only the operations
/// specified here are available (no inherited slicing or concatenation
/// surprises). Two contracts run through every entry point:
///
/// - **Copy discipline**: any element that is itself a list is stored behind
///   a fresh handle at construction, push, insert, and copy time, so callers
///   and the container never observe each other's mutations one level deep.
/// - **Immutability gate**: when the flag is set, index assignment fails with
///   [`ListError::Immutable`]. Push, insert, extend, and element removal are
///   deliberately not gated; only assignment is. Helpers that rewrite
///   elements in place go through assignment and inherit the gate.
#[derive(Debug, Clone, Default)]
pub struct SeqList {
    pub(super) items: Vec<Value>,
    pub(super) immutable: bool,
}

/// Reseat any directly nested list behind a fresh handle.
///
/// Shared by every mutation entry point; exactly one level deep.
fn reseat_nested(items: &mut [Value]) {
    for slot in items.iter_mut() {
        if slot.is_list() {
            *slot = slot.fresh_copy();
        }
    }
}

fn defended(item: Value) -> Value {
    if item.is_list() {
        item.fresh_copy()
    } else {
        item
    }
}

impl SeqList {
    /// Create an empty mutable list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct from a sequence with the immutability flag already set.
    /// Same reseat pass as [`From<Vec<Value>>`](#impl-From<Vec<Value>>-for-SeqList).
    #[must_use]
    pub fn new_immutable(items: Vec<Value>) -> Self {
        let mut list = Self::from(items);
        list.immutable = true;
        list
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            immutable: false,
        }
    }

    /// Chunking builds sub-lists from already-stored values; aliasing with
    /// the source list is intentional there, so no reseat pass.
    pub(super) fn from_raw(items: Vec<Value>) -> Self {
        Self {
            items,
            immutable: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Append an element; a nested list is stored behind a fresh handle.
    /// Never checks the immutability flag.
    pub fn push(&mut self, item: Value) {
        self.items.push(defended(item));
    }

    /// Insert at `index`, clamping an out-of-range index to the end.
    /// Same copy discipline as `push`; never checks the immutability flag.
    pub fn insert(&mut self, index: usize, item: Value) {
        let index = index.min(self.items.len());
        self.items.insert(index, defended(item));
    }

    /// Replace the element at `index`.
    ///
    /// Fails with [`ListError::Immutable`] while the flag is set and with
    /// [`ListError::OutOfBounds`] past the end. The value is stored as given,
    /// without the defensive copy the append path applies.
    pub fn set(&mut self, index: usize, value: Value) -> ListResult<()> {
        self.assign(index, value)
    }

    pub(super) fn assign(&mut self, index: usize, value: Value) -> ListResult<()> {
        if self.immutable {
            return Err(ListError::Immutable);
        }
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ListError::OutOfBounds { index, len }),
        }
    }

    /// Toggle the immutability flag; takes effect for subsequent assignments
    pub fn set_immutable(&mut self, immutable: bool) {
        debug!("seqlist: immutable flag set to {}", immutable);
        self.immutable = immutable;
    }

    #[inline]
    #[must_use]
    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    /// Plain shallow copy of the elements with the one-level reseat pass
    /// applied, so nested lists in the result do not alias this container.
    #[must_use]
    pub fn to_values(&self) -> Vec<Value> {
        let mut items = self.items.clone();
        reseat_nested(&mut items);
        items
    }

    /// Index of the first element equal to `value`, or `None` when absent.
    /// Never fails.
    #[must_use]
    pub fn find(&self, value: &Value) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }
}

/// The "source is a sequence" construction path: shallow copy plus the
/// one-level reseat pass.
impl From<Vec<Value>> for SeqList {
    fn from(mut items: Vec<Value>) -> Self {
        reseat_nested(&mut items);
        trace!("seqlist: constructed from sequence of {} elements", items.len());
        Self {
            items,
            immutable: false,
        }
    }
}

/// Construction from a single value: a list takes the sequence path, a
/// string iterates into one-character elements, anything else is rejected.
impl TryFrom<Value> for SeqList {
    type Error = ListError;

    fn try_from(source: Value) -> ListResult<Self> {
        match source {
            Value::List(handle) => {
                let items = handle.read().clone();
                Ok(Self::from(items))
            }
            Value::Str(s) => Ok(s.chars().map(|c| Value::Str(c.to_string())).collect()),
            other => Err(ListError::InvalidArgument(other.type_name().to_string())),
        }
    }
}

/// The generic-iterable construction path: elements are collected as given,
/// without the reseat pass.
impl FromIterator<Value> for SeqList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            immutable: false,
        }
    }
}

/// Element-by-element append, so nested lists are copied. Not gated.
impl Extend<Value> for SeqList {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl Index<usize> for SeqList {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a SeqList {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Content equality; the immutability flag does not participate
impl PartialEq for SeqList {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}
