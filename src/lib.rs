/*!
 * SeqList Library
 * Enhanced ordered sequence container with defensive nested-copy semantics
 */

pub mod core;
pub mod list;

// Re-exports
pub use crate::core::{Complex, ListError, ListResult, Value};
pub use list::{Chunks, SampleSource, SeqList, ThreadRngSource};
