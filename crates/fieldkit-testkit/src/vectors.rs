//! Golden vectors for deterministic verification.
//!
//! Each vector fixes the fields of a [`Measurement`] and the outputs the
//! kernel must produce for them. Hashes that depend on the standard
//! library's string hasher are not pinned; those vectors are checked for
//! regeneration determinism instead.

use serde::Serialize;
use thiserror::Error;

use crate::fixtures::Measurement;

/// A golden test vector: fixed inputs with expected outputs.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Optional index field.
    pub index: Option<i64>,
    /// Optional reading field.
    pub reading: Option<f64>,
    /// Optional unit field.
    pub unit: Option<&'static str>,
    /// Expected combined hash, when it can be pinned.
    pub expected_hash: Option<u64>,
    /// Expected rendering.
    pub expected_render: &'static str,
}

/// Why a golden vector failed verification.
#[derive(Debug, Error)]
pub enum VectorMismatch {
    #[error("vector '{name}': expected hash {expected}, got {actual}")]
    Hash {
        name: &'static str,
        expected: u64,
        actual: u64,
    },

    #[error("vector '{name}': expected rendering {expected:?}, got {actual:?}")]
    Render {
        name: &'static str,
        expected: &'static str,
        actual: String,
    },

    #[error("vector '{name}': regeneration produced different hashes ({first} vs {second})")]
    UnstableHash {
        name: &'static str,
        first: u64,
        second: u64,
    },
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "index and reading present, unit absent",
            index: Some(3),
            reading: Some(4.5),
            unit: None,
            expected_hash: Some(13992121092287219090),
            expected_render: "Measurement{index=3, reading=4.5, unit=absent}",
        },
        GoldenVector {
            name: "every field absent",
            index: None,
            reading: None,
            unit: None,
            expected_hash: Some(506447),
            expected_render: "Measurement{index=absent, reading=absent, unit=absent}",
        },
        GoldenVector {
            name: "negative index only",
            index: Some(-7),
            reading: None,
            unit: None,
            expected_hash: Some(499720),
            expected_render: "Measurement{index=-7, reading=absent, unit=absent}",
        },
        GoldenVector {
            name: "every field present",
            index: Some(12),
            reading: Some(2.25),
            unit: Some("ms"),
            // String contributions depend on the standard library's
            // hasher; checked for determinism only.
            expected_hash: None,
            expected_render: "Measurement{index=12, reading=2.25, unit=ms}",
        },
    ]
}

/// Build the measurement a vector describes.
pub fn measurement_from_vector(vector: &GoldenVector) -> Measurement {
    Measurement {
        index: vector.index,
        reading: vector.reading,
        unit: vector.unit.map(str::to_owned),
    }
}

/// Verify a single vector against the kernel.
pub fn verify_vector(vector: &GoldenVector) -> Result<(), VectorMismatch> {
    let first = measurement_from_vector(vector).combined_hash();
    let second = measurement_from_vector(vector).combined_hash();
    if first != second {
        return Err(VectorMismatch::UnstableHash {
            name: vector.name,
            first,
            second,
        });
    }

    if let Some(expected) = vector.expected_hash {
        if first != expected {
            return Err(VectorMismatch::Hash {
                name: vector.name,
                expected,
                actual: first,
            });
        }
    }

    let rendered = measurement_from_vector(vector).to_string();
    if rendered != vector.expected_render {
        return Err(VectorMismatch::Render {
            name: vector.name,
            expected: vector.expected_render,
            actual: rendered,
        });
    }

    Ok(())
}

/// Verify every golden vector.
pub fn verify_all_vectors() -> Result<(), VectorMismatch> {
    for vector in all_vectors() {
        verify_vector(&vector)?;
    }
    Ok(())
}
