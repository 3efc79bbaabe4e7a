//! Labeled string rendering for value-object diagnostics.
//!
//! Output is human-readable, not a wire format: the only guarantee is
//! stability, so equal inputs in the same order render byte-identically
//! and snapshot-style assertions hold.

use std::fmt;
use std::fmt::Write;

/// Marker rendered in place of an absent field value.
pub const ABSENT_FIELD: &str = "absent";

/// Builder for a labeled rendering of a value object.
///
/// Produces `TypeName{label=value, label=value}` with fields in call
/// order. Present values render through their `Display` impl; absent
/// values render as [`ABSENT_FIELD`].
#[derive(Debug, Clone)]
pub struct FieldFormatter {
    out: String,
    fields: usize,
}

impl FieldFormatter {
    /// Start rendering for the given type name.
    pub fn new(type_name: &str) -> Self {
        let mut out = String::with_capacity(type_name.len() + 16);
        out.push_str(type_name);
        out.push('{');
        Self { out, fields: 0 }
    }

    /// Append a present field.
    pub fn field<T: fmt::Display + ?Sized>(mut self, label: &str, value: &T) -> Self {
        self.separator();
        let _ = write!(self.out, "{}={}", label, value);
        self
    }

    /// Append an optional field, rendering `None` as the absent marker.
    pub fn field_opt<T: fmt::Display>(self, label: &str, value: Option<&T>) -> Self {
        match value {
            Some(value) => self.field(label, value),
            None => self.field(label, ABSENT_FIELD),
        }
    }

    /// Finish and return the rendered string.
    pub fn finish(mut self) -> String {
        self.out.push('}');
        self.out
    }

    fn separator(&mut self) {
        if self.fields > 0 {
            self.out.push_str(", ");
        }
        self.fields += 1;
    }
}
