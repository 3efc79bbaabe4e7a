//! # Fieldkit
//!
//! Field-wise primitives for value objects: types whose identity is
//! defined entirely by their field values, not by reference identity.
//!
//! This crate contains no I/O, no storage, no shared state. It is pure
//! computation over a caller's own fields.
//!
//! ## Key Types
//!
//! - [`ComparisonChain`] - Short-circuiting multi-key comparison
//! - [`FieldHasher`] - Order-sensitive hash composition
//! - [`FieldFormatter`] - Labeled diagnostic rendering
//! - [`equal_fields`] - Null-safe equality over optional fields
//!
//! ## Absent Values
//!
//! Every operation accepts an absent field (`None`) as valid input, not
//! an error: absent equals absent, hashes as a fixed sentinel
//! contribution, and renders as an explicit marker.

pub mod chain;
pub mod equality;
pub mod hashing;
pub mod render;

pub use chain::ComparisonChain;
pub use equality::equal_fields;
pub use hashing::{FieldHash, FieldHasher};
pub use render::{FieldFormatter, ABSENT_FIELD};
