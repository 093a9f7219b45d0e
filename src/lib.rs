//! Combinators for two-variant outcome values.
//!
//! An [`Outcome`] is either a `Success` or a `Failure`, each carrying a payload
//! of zero or more values. The [`normalize`] module converts between outcomes
//! and their payloads, and the [`fold`] module provides the short-circuiting
//! folds (`sequence`, `traverse`, `flat_map`) over collections of outcomes.
//!
//! ```rust
//! use outcomes::{sequence, traverse, Outcome::{self, Failure, Success}};
//!
//! let all: Outcome<Vec<i32>, &str> = sequence(vec![Success(1), Success(2), Success(3)]);
//! assert_eq!(all, Success(vec![1, 2, 3]));
//!
//! let doubled: Outcome<Vec<i32>, &str> = traverse(vec![1, 2, 3], |v| Success(v * 2));
//! assert_eq!(doubled, Success(vec![2, 4, 6]));
//!
//! let halted: Outcome<Vec<i32>, &str> = sequence(vec![Success(1), Failure("x"), Success(3)]);
//! assert_eq!(halted, Failure("x"));
//! ```

extern crate self as outcomes;

mod accessors;
pub mod fold;
pub mod normalize;
pub mod outcome;
pub mod payload;
pub mod safe;

pub use fold::{flat_map, sequence, traverse, try_flat_map, try_sequence, try_traverse, FoldHalted};
pub use normalize::{classify, is_failure, is_success, make_failure, make_success, unwrap_payload};
pub use outcome::{Flow, Outcome, Tag};
pub use payload::{Payload, Values};
pub use safe::{safe, safe_value, Safe};

/// Derives [`Payload`]. A struct gets an arity equal to its field count,
/// together with conversions from and into the tuple of its field types; an
/// enum is a single value.
pub use macros::Payload;
