//! Dynamic value tree and the structural clone engine.
//!
//! # Key Concepts
//! - Value: a scalar, an ordered sequence, an insertion-ordered mapping or an
//!   opaque host handle
//! - Containers are shared handles: `Clone` on a `Value` shares the container,
//!   `deep_copy` rebuilds every reachable container
//! - Equality is structural; container identity is checked with
//!   `Value::same_container`

mod convert;
mod copy;
mod types;

pub use copy::{deep_copy, try_deep_copy};
pub use types::{Mapping, Sequence, Value};
