//! Packing between per-leaf integer values and flat bit vectors.

use std::fmt;

use ahash::{AHashMap, AHashSet};

use crate::bits::bit_mask;

use super::spec::FieldSpec;
use super::walker::LeafCursor;

/// Per-leaf values keyed by fully qualified signal name.
pub type ValueMap = AHashMap<String, u64>;

pub type ValueResult<T> = Result<T, ValueError>;

/// How `pack` treats a value wider than its declared field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Reject the value and abort the pack.
    Strict,
    /// Mask the value down to the declared width.
    Truncate,
}

/// Concatenates per-leaf values into a single bit vector.
///
/// Leaves are packed in declaration order, depth first; within a leaf,
/// bits are emitted least significant first. Every leaf must have a
/// value and every supplied key must name a leaf; under
/// [WidthPolicy::Strict] a value wider than its field aborts the pack
/// with no partial result.
pub fn pack(
    spec: &FieldSpec,
    prefix: &str,
    values: &ValueMap,
    policy: WidthPolicy,
) -> ValueResult<Vec<bool>> {
    let mut bits = Vec::with_capacity(spec.total_bits() as usize);
    let mut consumed = 0usize;
    for leaf in LeafCursor::new(spec, prefix) {
        let value = *values
            .get(&leaf.name)
            .ok_or_else(|| ValueError::MissingField {
                name: leaf.name.clone(),
            })?;
        let mask = bit_mask(leaf.width);
        if policy == WidthPolicy::Strict && value & !mask != 0 {
            return Err(ValueError::ValueTooWide {
                name: leaf.name,
                width: leaf.width,
                value,
            });
        }
        let value = value & mask;
        for bit in 0..leaf.width {
            bits.push((value >> bit) & 1 == 1);
        }
        consumed += 1;
    }
    if consumed != values.len() {
        return Err(ValueError::UnknownField {
            name: first_unknown_key(spec, prefix, values),
        });
    }
    Ok(bits)
}

/// Splits a bit vector back into per-leaf values.
///
/// The vector must be exactly as long as the specification's total
/// width; a mismatch aborts with no partial map.
pub fn unpack(spec: &FieldSpec, prefix: &str, bits: &[bool]) -> ValueResult<ValueMap> {
    let expected = spec.total_bits();
    if bits.len() != expected as usize {
        return Err(ValueError::LengthMismatch {
            expected,
            actual: bits.len(),
        });
    }
    let mut values = ValueMap::default();
    for leaf in LeafCursor::new(spec, prefix) {
        let start = leaf.offset_bits as usize;
        let mut value = 0u64;
        for (bit, &set) in bits[start..start + leaf.width as usize].iter().enumerate() {
            if set {
                value |= 1 << bit;
            }
        }
        values.insert(leaf.name, value);
    }
    Ok(values)
}

// Reported key is the lexicographically first offender so the error is
// stable across map iteration orders.
fn first_unknown_key(spec: &FieldSpec, prefix: &str, values: &ValueMap) -> String {
    let known: AHashSet<String> = LeafCursor::new(spec, prefix).map(|leaf| leaf.name).collect();
    let mut unknown: Vec<&String> = values
        .keys()
        .filter(|key| !known.contains(*key))
        .collect();
    unknown.sort();
    unknown
        .first()
        .map(|key| (*key).clone())
        .unwrap_or_default()
}

#[derive(Debug, PartialEq, Eq)]
pub enum ValueError {
    MissingField { name: String },
    UnknownField { name: String },
    ValueTooWide { name: String, width: u16, value: u64 },
    LengthMismatch { expected: u32, actual: usize },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::MissingField { name } => {
                write!(f, "no value supplied for leaf '{name}'")
            }
            ValueError::UnknownField { name } => {
                write!(f, "value key '{name}' does not name a leaf")
            }
            ValueError::ValueTooWide { name, width, value } => {
                write!(f, "value {value:#x} does not fit the {width}-bit leaf '{name}'")
            }
            ValueError::LengthMismatch { expected, actual } => {
                write!(f, "bit vector holds {actual} bits, specification needs {expected}")
            }
        }
    }
}

impl std::error::Error for ValueError {}

#[cfg(test)]
mod tests {
    //! Round-trip and failure-mode coverage for the packing layer.
    use super::*;

    fn request_spec() -> FieldSpec {
        FieldSpec::builder()
            .bits("valid", 1)
            .bits("address", 16)
            .finish()
            .unwrap()
    }

    fn request_values() -> ValueMap {
        let mut values = ValueMap::default();
        values.insert("req__valid".to_owned(), 1);
        values.insert("req__address".to_owned(), 0x1234);
        values
    }

    #[test]
    fn pack_then_unpack_round_trips() {
        let spec = request_spec();
        let values = request_values();
        let bits = pack(&spec, "req", &values, WidthPolicy::Strict).expect("pack");
        assert_eq!(bits.len(), 17, "packed vector should span the full width");
        let recovered = unpack(&spec, "req", &bits).expect("unpack");
        assert_eq!(recovered, values, "round trip should be exact");
    }

    #[test]
    fn pack_emits_leaf_bits_lsb_first() {
        let spec = FieldSpec::builder().bits("nibble", 4).finish().unwrap();
        let mut values = ValueMap::default();
        values.insert("w__nibble".to_owned(), 0b1011);
        let bits = pack(&spec, "w", &values, WidthPolicy::Strict).expect("pack");
        assert_eq!(
            bits,
            vec![true, true, false, true],
            "leaf bits follow the bits_of_n convention"
        );
    }

    #[test]
    fn strict_pack_rejects_oversized_values() {
        let spec = request_spec();
        let mut values = request_values();
        values.insert("req__valid".to_owned(), 2);
        let result = pack(&spec, "req", &values, WidthPolicy::Strict);
        assert_eq!(
            result,
            Err(ValueError::ValueTooWide {
                name: "req__valid".to_owned(),
                width: 1,
                value: 2,
            }),
            "a 1-bit leaf cannot carry the value 2"
        );
    }

    #[test]
    fn truncating_pack_masks_oversized_values() {
        let spec = request_spec();
        let mut values = request_values();
        values.insert("req__valid".to_owned(), 2);
        let bits = pack(&spec, "req", &values, WidthPolicy::Truncate).expect("pack");
        assert!(!bits[0], "2 masked to one bit reads as zero");
    }

    #[test]
    fn pack_requires_every_leaf() {
        let spec = request_spec();
        let mut values = request_values();
        values.remove("req__address");
        let result = pack(&spec, "req", &values, WidthPolicy::Strict);
        assert_eq!(
            result,
            Err(ValueError::MissingField {
                name: "req__address".to_owned()
            })
        );
    }

    #[test]
    fn pack_rejects_keys_that_name_no_leaf() {
        // a typo in a leaf name would otherwise drive nothing
        let spec = request_spec();
        let mut values = request_values();
        values.insert("req__adress".to_owned(), 1);
        let result = pack(&spec, "req", &values, WidthPolicy::Strict);
        assert_eq!(
            result,
            Err(ValueError::UnknownField {
                name: "req__adress".to_owned()
            })
        );
    }

    #[test]
    fn unpack_rejects_wrong_lengths() {
        let spec = request_spec();
        let result = unpack(&spec, "req", &[true; 16]);
        assert_eq!(
            result,
            Err(ValueError::LengthMismatch {
                expected: 17,
                actual: 16
            }),
            "partial vectors must not produce partial maps"
        );
    }

    #[test]
    fn full_width_leaves_round_trip() {
        let spec = FieldSpec::builder().bits("data_0", 64).finish().unwrap();
        let mut values = ValueMap::default();
        values.insert("dp__data_0".to_owned(), u64::MAX);
        let bits = pack(&spec, "dp", &values, WidthPolicy::Strict).expect("pack");
        let recovered = unpack(&spec, "dp", &bits).expect("unpack");
        assert_eq!(recovered, values, "64-bit leaves must not overflow the mask");
    }
}
