//! Prefix-bound bundle instances layered over the free traversal functions.

use super::flatten::{flatten, name_list};
use super::registry;
use super::spec::FieldSpec;
use super::value::{pack, unpack, ValueMap, ValueResult, WidthPolicy};

/// A field specification bound to an instance prefix.
///
/// Bundles are pure name and width generators consumed by an external
/// signal-forcing mechanism; they own no simulation resources and carry
/// no state between calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bundle {
    prefix: String,
    spec: FieldSpec,
}

impl Bundle {
    pub fn new(prefix: impl Into<String>, spec: FieldSpec) -> Self {
        Self {
            prefix: prefix.into(),
            spec,
        }
    }

    /// Instantiates a catalog struct under the given prefix.
    pub fn standard(prefix: impl Into<String>, name: &str) -> Option<Self> {
        registry::lookup(name).map(|spec| Self::new(prefix, spec))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// Total packed width of the bundle in bits.
    pub fn width(&self) -> u32 {
        self.spec.total_bits()
    }

    pub fn flatten(&self) -> Vec<(String, u16)> {
        flatten(&self.spec, &self.prefix)
    }

    pub fn name_list(&self) -> Vec<String> {
        name_list(&self.spec, &self.prefix)
    }

    /// Packs per-leaf values with strict width checking.
    pub fn pack(&self, values: &ValueMap) -> ValueResult<Vec<bool>> {
        pack(&self.spec, &self.prefix, values, WidthPolicy::Strict)
    }

    pub fn pack_with(&self, values: &ValueMap, policy: WidthPolicy) -> ValueResult<Vec<bool>> {
        pack(&self.spec, &self.prefix, values, policy)
    }

    pub fn unpack(&self, bits: &[bool]) -> ValueResult<ValueMap> {
        unpack(&self.spec, &self.prefix, bits)
    }
}
