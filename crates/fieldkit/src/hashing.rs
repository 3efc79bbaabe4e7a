//! Order-sensitive hash composition over field values.
//!
//! A value object's hash is a fold over its fields in a fixed order:
//! starting from a seed, each field's contribution is combined in with a
//! wrapping multiply-accumulate step. Equal field sequences in the same
//! order always produce equal results; reordering the fields changes the
//! accumulated state and therefore, in general, the result.
//!
//! This is cheap in-process composition, not a cryptographic or
//! collision-resistant digest.

/// Accumulator state before any field is folded in.
const SEED: u64 = 17;

/// Multiplier applied to the state before each contribution.
const MULTIPLIER: u64 = 31;

/// Contribution of an absent field.
const ABSENT: u64 = 0;

/// Hash contribution of a single field value.
///
/// Implemented for the primitive scalar types, strings, references, and
/// `Option` (absent contributes a fixed sentinel, so optional fields are
/// valid input rather than an error).
pub trait FieldHash {
    /// The value's contribution to a combined hash.
    fn field_hash(&self) -> u64;
}

macro_rules! impl_field_hash_for_int {
    ($($t:ty),*) => {
        $(
            impl FieldHash for $t {
                fn field_hash(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

impl_field_hash_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

// 128-bit integers fold their high half into the low half.
impl FieldHash for u128 {
    fn field_hash(&self) -> u64 {
        ((*self >> 64) as u64) ^ (*self as u64)
    }
}

impl FieldHash for i128 {
    fn field_hash(&self) -> u64 {
        (*self as u128).field_hash()
    }
}

impl FieldHash for bool {
    fn field_hash(&self) -> u64 {
        *self as u64
    }
}

impl FieldHash for char {
    fn field_hash(&self) -> u64 {
        *self as u64
    }
}

// Floats contribute their IEEE-754 bit pattern. 0.0 and -0.0 therefore
// contribute differently even though they compare equal.
impl FieldHash for f32 {
    fn field_hash(&self) -> u64 {
        self.to_bits() as u64
    }
}

impl FieldHash for f64 {
    fn field_hash(&self) -> u64 {
        self.to_bits()
    }
}

// String contributions go through the standard library's default hasher:
// deterministic within a process, which is the contract here, but not
// pinned across standard library releases.
impl FieldHash for str {
    fn field_hash(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl FieldHash for String {
    fn field_hash(&self) -> u64 {
        self.as_str().field_hash()
    }
}

impl<T: FieldHash> FieldHash for Option<T> {
    fn field_hash(&self) -> u64 {
        match self {
            Some(value) => value.field_hash(),
            None => ABSENT,
        }
    }
}

impl<T: FieldHash + ?Sized> FieldHash for &T {
    fn field_hash(&self) -> u64 {
        (**self).field_hash()
    }
}

/// Order-sensitive combiner for field hash contributions.
///
/// Fields are folded in call order, one per [`field`](Self::field) call,
/// and the combined hash is read out with [`finish`](Self::finish).
#[derive(Debug, Clone, Copy)]
pub struct FieldHasher {
    state: u64,
}

impl FieldHasher {
    /// Start a new hasher at the seed state.
    pub fn new() -> Self {
        Self { state: SEED }
    }

    /// Fold one field value into the hash.
    pub fn field<T: FieldHash + ?Sized>(mut self, value: &T) -> Self {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(value.field_hash());
        self
    }

    /// The combined hash of every field folded so far.
    ///
    /// A hasher with no fields returns the seed, so zero fields is a
    /// valid (if degenerate) input.
    pub fn finish(self) -> u64 {
        self.state
    }
}

impl Default for FieldHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fold(values: &[Option<i64>]) -> u64 {
        let mut hasher = FieldHasher::new();
        for value in values {
            hasher = hasher.field(value);
        }
        hasher.finish()
    }

    #[test]
    fn test_equal_sequences_hash_equal() {
        let a = FieldHasher::new().field(&3i64).field(&4.0f64).finish();
        let b = FieldHasher::new().field(&3i64).field(&4.0f64).finish();
        assert_eq!(a, b);
    }

    #[test]
    fn test_field_order_changes_hash() {
        // The documented example: [3, 4.0] and [4.0, 3] combine to
        // different results under the order-sensitive fold.
        let forward = FieldHasher::new().field(&3i64).field(&4.0f64).finish();
        let reversed = FieldHasher::new().field(&4.0f64).field(&3i64).finish();
        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_absent_contributes_sentinel_without_panicking() {
        let none: Option<i64> = None;
        let with_absent = FieldHasher::new().field(&none).field(&Some(5i64)).finish();
        let reordered = FieldHasher::new().field(&Some(5i64)).field(&none).finish();
        assert_ne!(with_absent, reordered);
    }

    #[test]
    fn test_absent_field_differs_from_no_field() {
        let none: Option<i64> = None;
        let empty = FieldHasher::new().finish();
        let one_absent = FieldHasher::new().field(&none).finish();
        assert_ne!(empty, one_absent);
    }

    #[test]
    fn test_empty_hasher_is_stable() {
        assert_eq!(FieldHasher::new().finish(), FieldHasher::new().finish());
    }

    #[test]
    fn test_string_contributions_are_deterministic() {
        let a = FieldHasher::new().field("ampere").field(&7u32).finish();
        let b = FieldHasher::new().field("ampere").field(&7u32).finish();
        assert_eq!(a, b);
        assert_ne!(a, FieldHasher::new().field("volt").field(&7u32).finish());
    }

    proptest! {
        #[test]
        fn test_fold_is_deterministic(values in prop::collection::vec(any::<Option<i64>>(), 0..8)) {
            prop_assert_eq!(fold(&values), fold(&values));
        }

        #[test]
        fn test_equal_values_same_order_hash_equal(values in prop::collection::vec(any::<Option<i64>>(), 0..8)) {
            let copy = values.clone();
            prop_assert_eq!(fold(&values), fold(&copy));
        }
    }
}
