/*!
 * Enhanced List
 *
 * The container itself plus its operation families:
 * - Construction, copy discipline, and the immutability gate
 * - Functional helpers (apply, filter, remap)
 * - Numeric aggregates (elementwise arithmetic, min/max/average)
 * - Utilities (chunking, sampling, search)
 */

mod chunks;
mod container;
mod functional;
mod math;
mod sample;

pub use chunks::Chunks;
pub use container::SeqList;
pub use sample::{SampleSource, ThreadRngSource};
