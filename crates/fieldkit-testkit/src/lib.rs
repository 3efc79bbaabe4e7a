//! # Fieldkit Testkit
//!
//! Testing utilities for the fieldkit value-object primitives.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with expected hash and rendering
//!   outputs for deterministic verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: A reference value object wired through every kernel
//!   operation
//!
//! ## Golden Vectors
//!
//! ```rust
//! use fieldkit_testkit::vectors::{all_vectors, measurement_from_vector};
//!
//! for vector in all_vectors() {
//!     let measurement = measurement_from_vector(&vector);
//!     println!("{}: {}", vector.name, measurement.combined_hash());
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use fieldkit_testkit::generators::measurement;
//!
//! proptest! {
//!     #[test]
//!     fn combined_hash_is_deterministic(m in measurement()) {
//!         prop_assert_eq!(m.combined_hash(), m.combined_hash());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use fieldkit_testkit::fixtures::Measurement;
//!
//! let m = Measurement::new(3, 4.5, "ms");
//! assert_eq!(m.to_string(), "Measurement{index=3, reading=4.5, unit=ms}");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{measurement_ladder, Measurement};
pub use generators::measurement;
pub use vectors::{
    all_vectors, measurement_from_vector, verify_all_vectors, verify_vector, GoldenVector,
    VectorMismatch,
};
