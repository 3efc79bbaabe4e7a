//! Proptest generators for property-based testing.

use proptest::prelude::*;

use crate::fixtures::Measurement;

/// Generate an optional index field.
pub fn opt_index() -> impl Strategy<Value = Option<i64>> {
    any::<Option<i64>>()
}

/// Generate an optional finite reading.
pub fn opt_reading() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(-1.0e12f64..1.0e12)
}

/// Generate an optional short unit label.
pub fn opt_unit() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z]{0,8}")
}

/// Generate a measurement with any combination of present and absent
/// fields.
pub fn measurement() -> impl Strategy<Value = Measurement> {
    (opt_index(), opt_reading(), opt_unit()).prop_map(|(index, reading, unit)| Measurement {
        index,
        reading,
        unit,
    })
}
