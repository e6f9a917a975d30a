/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by list operations, with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ListError {
    #[error("cannot build a list from {0}")]
    #[diagnostic(
        code(list::invalid_argument),
        help("Construction accepts a sequence or an iterable value (a list or a string).")
    )]
    InvalidArgument(String),

    #[error("list is immutable")]
    #[diagnostic(
        code(list::immutable),
        help("Clear the flag with set_immutable(false) before assigning to an index.")
    )]
    Immutable,

    #[error("index {index} out of bounds for length {len}")]
    #[diagnostic(
        code(list::out_of_bounds),
        help("Valid indices are 0..len. The inclusive sampling variant can draw len itself.")
    )]
    OutOfBounds { index: usize, len: usize },

    #[error("division by zero")]
    #[diagnostic(
        code(list::divide_by_zero),
        help("Elementwise division requires a non-zero divisor.")
    )]
    DivideByZero,

    #[error("degenerate remap range: old_min == old_max == {0}")]
    #[diagnostic(
        code(list::degenerate_range),
        help("Remapping needs a source range wider than a single point.")
    )]
    DegenerateRange(f64),

    #[error("arithmetic on non-numeric value: {0}")]
    #[diagnostic(
        code(list::non_numeric),
        help("Elementwise arithmetic is defined for int, float, and complex elements.")
    )]
    NonNumeric(String),

    #[error("empty list has no {0}")]
    #[diagnostic(
        code(list::empty),
        help("Aggregate ordering requires at least one element.")
    )]
    Empty(String),

    #[error("elements are not mutually comparable")]
    #[diagnostic(
        code(list::incomparable),
        help("Ordering is defined among int/float elements, among bools, and among strings; complex values are excluded.")
    )]
    Incomparable,
}

/// Result type for list operations
///
/// # Must Use
/// List operations can fail and must be handled by the caller
pub type ListResult<T> = std::result::Result<T, ListError>;
