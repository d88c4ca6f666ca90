//! Declarative wire-bundle descriptors and their traversal and packing layers.

pub mod flatten;
pub mod instance;
pub mod registry;
pub mod spec;
pub mod value;
pub mod walker;

pub use flatten::{flatten, name_list, SEGMENT_SEPARATOR, WIRE_SEPARATOR};
pub use instance::Bundle;
pub use registry::PacketStatType;
pub use spec::{Field, FieldKind, FieldSpec, SpecBuilder, SpecError, MAX_LEAF_BITS};
pub use value::{pack, unpack, ValueError, ValueMap, ValueResult, WidthPolicy};
pub use walker::{LeafCursor, ResolvedLeaf};
