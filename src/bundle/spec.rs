//! Field specification tree: ordered named bit-fields with nested groups.

use std::fmt;

/// Widest single leaf a specification may declare.
pub const MAX_LEAF_BITS: u16 = 64;

/// A leaf bit-width or a nested group of sub-fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Bits(u16),
    Group(FieldSpec),
}

/// One named entry of a specification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    name: String,
    kind: FieldKind,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }
}

/// An ordered collection of named fields.
///
/// Declaration order is the canonical signal and packing order for every
/// downstream consumer; specifications are immutable once built and are
/// shared by reference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSpec {
    fields: Vec<Field>,
}

impl FieldSpec {
    pub fn builder() -> SpecBuilder {
        SpecBuilder::new()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total packed width in bits across every leaf, depth first.
    pub fn total_bits(&self) -> u32 {
        self.fields
            .iter()
            .map(|field| match &field.kind {
                FieldKind::Bits(width) => *width as u32,
                FieldKind::Group(group) => group.total_bits(),
            })
            .sum()
    }

    /// Number of leaf fields across every nesting level.
    pub fn leaf_count(&self) -> usize {
        self.fields
            .iter()
            .map(|field| match &field.kind {
                FieldKind::Bits(_) => 1,
                FieldKind::Group(group) => group.leaf_count(),
            })
            .sum()
    }
}

/// Builds a validated [FieldSpec].
///
/// Malformed declarations surface at definition time, not at first
/// traversal: the first offending field latches an error that `finish`
/// reports.
pub struct SpecBuilder {
    fields: Vec<Field>,
    error: Option<SpecError>,
}

impl SpecBuilder {
    fn new() -> Self {
        Self {
            fields: Vec::new(),
            error: None,
        }
    }

    /// Declares a leaf field of `width` bits.
    pub fn bits(mut self, name: &str, width: u16) -> Self {
        if self.error.is_some() {
            return self;
        }
        if let Err(error) = self.check_name(name) {
            self.error = Some(error);
            return self;
        }
        if width == 0 {
            self.error = Some(SpecError::ZeroWidth {
                field: name.to_owned(),
            });
            return self;
        }
        if width > MAX_LEAF_BITS {
            self.error = Some(SpecError::WidthTooWide {
                field: name.to_owned(),
                width,
            });
            return self;
        }
        self.fields.push(Field {
            name: name.to_owned(),
            kind: FieldKind::Bits(width),
        });
        self
    }

    /// Declares a nested group of sub-fields.
    pub fn group(mut self, name: &str, group: FieldSpec) -> Self {
        if self.error.is_some() {
            return self;
        }
        if let Err(error) = self.check_name(name) {
            self.error = Some(error);
            return self;
        }
        self.fields.push(Field {
            name: name.to_owned(),
            kind: FieldKind::Group(group),
        });
        self
    }

    fn check_name(&self, name: &str) -> Result<(), SpecError> {
        if name.is_empty() {
            return Err(SpecError::EmptyName);
        }
        if self.fields.iter().any(|field| field.name == name) {
            return Err(SpecError::DuplicateField {
                name: name.to_owned(),
            });
        }
        Ok(())
    }

    pub fn finish(self) -> Result<FieldSpec, SpecError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(FieldSpec {
                fields: self.fields,
            }),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SpecError {
    EmptyName,
    DuplicateField { name: String },
    ZeroWidth { field: String },
    WidthTooWide { field: String, width: u16 },
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::EmptyName => write!(f, "field name must not be empty"),
            SpecError::DuplicateField { name } => {
                write!(f, "field '{name}' is declared twice in one group")
            }
            SpecError::ZeroWidth { field } => {
                write!(f, "field '{field}' must be at least one bit wide")
            }
            SpecError::WidthTooWide { field, width } => {
                write!(f, "field '{field}' width {width} exceeds the 64-bit limit")
            }
        }
    }
}

impl std::error::Error for SpecError {}
