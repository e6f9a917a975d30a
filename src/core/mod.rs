/*!
 * Core Types
 * Element values and crate-wide error handling
 */

pub mod errors;
pub mod value;

pub use errors::{ListError, ListResult};
pub use value::{Complex, ListHandle, Value};
