//! Test fixtures.
//!
//! A reference value object whose equality, hash, rendering, and
//! ordering all run through the kernel, mirroring how a caller's own
//! types are expected to use it.

use std::cmp::Ordering;
use std::fmt;

use fieldkit::{equal_fields, ComparisonChain, FieldFormatter, FieldHasher};

/// A small value object: identity is defined entirely by field values,
/// and any field may be absent.
#[derive(Debug, Clone)]
pub struct Measurement {
    pub index: Option<i64>,
    pub reading: Option<f64>,
    pub unit: Option<String>,
}

impl Measurement {
    /// Construct with every field present.
    pub fn new(index: i64, reading: f64, unit: &str) -> Self {
        Self {
            index: Some(index),
            reading: Some(reading),
            unit: Some(unit.to_owned()),
        }
    }

    /// Construct with every field absent.
    pub fn empty() -> Self {
        Self {
            index: None,
            reading: None,
            unit: None,
        }
    }

    /// Combined hash over (index, reading, unit), in that order.
    pub fn combined_hash(&self) -> u64 {
        FieldHasher::new()
            .field(&self.index)
            .field(&self.reading)
            .field(&self.unit)
            .finish()
    }

    /// Order by index, then reading, then unit. Ties fall through to
    /// the next field; absent sorts before present; readings use the
    /// IEEE-754 total order.
    pub fn compare(&self, other: &Self) -> Ordering {
        ComparisonChain::start()
            .compare(&self.index, &other.index)
            .compare_by(&self.reading, &other.reading, compare_readings)
            .compare(&self.unit, &other.unit)
            .result()
    }
}

impl PartialEq for Measurement {
    fn eq(&self, other: &Self) -> bool {
        equal_fields(self.index.as_ref(), other.index.as_ref())
            && equal_fields(self.reading.as_ref(), other.reading.as_ref())
            && equal_fields(self.unit.as_ref(), other.unit.as_ref())
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = FieldFormatter::new("Measurement")
            .field_opt("index", self.index.as_ref())
            .field_opt("reading", self.reading.as_ref())
            .field_opt("unit", self.unit.as_ref())
            .finish();
        f.write_str(&rendered)
    }
}

fn compare_readings(a: &Option<f64>, b: &Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.total_cmp(b),
    }
}

/// A strictly increasing sequence of measurements, for ordering tests.
pub fn measurement_ladder(count: usize) -> Vec<Measurement> {
    (0..count)
        .map(|i| Measurement::new(i as i64, i as f64 / 2.0, "ms"))
        .collect()
}
