#![no_std]

//! Precheck - Fail-Fast Precondition Checks
//!
//! This crate provides small, pure check functions that validate a caller's
//! assumptions and return a classified, formatted error when an assumption
//! does not hold.
//!
//! ## Architecture
//!
//! - **checks**: the check functions (boolean expressions, nullness,
//!   element/position index bounds) - no I/O, no shared state
//! - **error**: one error variant per failure kind plus the interpolated
//!   message, so callers match on the kind instead of parsing text
//! - **message**: positional `%s` template interpolation for failure
//!   messages
//! - **macros**: variadic wrappers giving the bare call style with optional
//!   templates
//!
//! ## Quick Start
//!
//! ```rust
//! use precheck::{check_element_index, PreconditionError};
//!
//! fn nth_frame(frames: &[u32], n: isize) -> Result<u32, PreconditionError> {
//!     let n = check_element_index(n, frames.len() as isize, "frame")?;
//!     Ok(frames[n as usize])
//! }
//!
//! assert_eq!(nth_frame(&[10, 20, 30], 1), Ok(20));
//! assert_eq!(
//!     nth_frame(&[10, 20, 30], 3).unwrap_err().to_string(),
//!     "frame (3) must be less than size (3)",
//! );
//! ```
//!
//! ## Features
//!
//! - **serde**: Serialize/Deserialize impls for the error types

extern crate alloc;

pub mod checks;
pub mod error;
pub mod message;

mod macros;

pub use checks::*;
pub use error::*;
pub use message::*;
