/*!
 * Random Sampling
 * Uniform element selection behind a pluggable draw source
 */

use super::container::SeqList;
use crate::core::{ListError, ListResult, Value};
use rand::Rng;

/// Uniform integer source over a closed range.
///
/// `draw(upper)` returns a value in `[0, upper]` inclusive. The seam exists
/// so tests can force specific draws.
pub trait SampleSource {
    fn draw(&mut self, upper: usize) -> usize;
}

/// Thread-local RNG source, the default for the sampling methods
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl SampleSource for ThreadRngSource {
    fn draw(&mut self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..=upper)
    }
}

impl SeqList {
    /// Uniformly sample one element. Fails only on an empty list.
    pub fn random_sample(&self) -> ListResult<Value> {
        self.random_sample_with(&mut ThreadRngSource)
    }

    /// [`random_sample`](Self::random_sample) with an explicit draw source
    pub fn random_sample_with(&self, source: &mut dyn SampleSource) -> ListResult<Value> {
        if self.items.is_empty() {
            return Err(ListError::OutOfBounds { index: 0, len: 0 });
        }
        let index = source.draw(self.items.len() - 1);
        self.fetch_sampled(index)
    }

    /// Historical sampling that draws in `[0, len]` inclusive.
    ///
    /// A draw equal to the length fails with [`ListError::OutOfBounds`]; the
    /// inclusive bound is kept for compatibility testing against consumers of
    /// the old behavior. Prefer [`random_sample`](Self::random_sample).
    pub fn random_sample_inclusive(&self) -> ListResult<Value> {
        self.random_sample_inclusive_with(&mut ThreadRngSource)
    }

    /// [`random_sample_inclusive`](Self::random_sample_inclusive) with an
    /// explicit draw source
    pub fn random_sample_inclusive_with(
        &self,
        source: &mut dyn SampleSource,
    ) -> ListResult<Value> {
        let index = source.draw(self.items.len());
        self.fetch_sampled(index)
    }

    fn fetch_sampled(&self, index: usize) -> ListResult<Value> {
        self.items.get(index).cloned().ok_or(ListError::OutOfBounds {
            index,
            len: self.items.len(),
        })
    }
}
