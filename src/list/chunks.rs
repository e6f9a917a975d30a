/*!
 * Chunking
 * Lazy splitting into fixed-size sub-lists
 */

use super::container::SeqList;
use crate::core::Value;

/// Lazy iterator over fixed-size chunks of a list.
///
/// Single forward pass, not restartable. Every chunk holds `size` elements
/// except possibly the last, which holds the remainder. Chunk elements are
/// value clones of the source's, so nested lists inside a chunk keep their
/// shared handles, like a shallow slice.
pub struct Chunks<'a> {
    items: &'a [Value],
    size: usize,
}

impl Iterator for Chunks<'_> {
    type Item = SeqList;

    fn next(&mut self) -> Option<SeqList> {
        if self.size == 0 || self.items.is_empty() {
            return None;
        }
        let take = self.size.min(self.items.len());
        let (head, rest) = self.items.split_at(take);
        self.items = rest;
        Some(SeqList::from_raw(head.to_vec()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.size == 0 {
            return (0, Some(0));
        }
        let chunks = (self.items.len() + self.size - 1) / self.size;
        (chunks, Some(chunks))
    }
}

impl ExactSizeIterator for Chunks<'_> {}

impl SeqList {
    /// Split into chunks of `size` elements.
    ///
    /// `size == 0` yields no chunks.
    #[must_use]
    pub fn split_to_chunks(&self, size: usize) -> Chunks<'_> {
        Chunks {
            items: &self.items,
            size,
        }
    }
}
