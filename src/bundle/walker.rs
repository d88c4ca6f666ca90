//! Depth-first traversal over specification leaves without manual recursion.

use smallvec::SmallVec;

use super::flatten::SEGMENT_SEPARATOR;
use super::spec::{Field, FieldKind, FieldSpec};

/// A single leaf surfaced by [LeafCursor]: the fully qualified signal
/// name, the declared width, and the cumulative bit offset of the leaf
/// within the packed vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedLeaf {
    pub name: String,
    pub width: u16,
    pub offset_bits: u32,
}

struct CursorFrame<'spec> {
    fields: &'spec [Field],
    index: usize,
    // the root frame carries no path segment of its own
    named: bool,
}

/// Iterator yielding every leaf of a specification in declaration order.
///
/// All name generation and packing goes through this cursor, so every
/// consumer observes the same traversal order.
pub struct LeafCursor<'spec> {
    prefix: &'spec str,
    stack: SmallVec<[CursorFrame<'spec>; 4]>,
    segments: SmallVec<[&'spec str; 4]>,
    offset_bits: u32,
}

impl<'spec> LeafCursor<'spec> {
    pub fn new(spec: &'spec FieldSpec, prefix: &'spec str) -> Self {
        let mut stack = SmallVec::new();
        stack.push(CursorFrame {
            fields: spec.fields(),
            index: 0,
            named: false,
        });
        Self {
            prefix,
            stack,
            segments: SmallVec::new(),
            offset_bits: 0,
        }
    }

    fn qualify(&self, leaf: &str) -> String {
        let mut name = String::with_capacity(
            self.prefix.len() + leaf.len() + (self.segments.len() + 1) * SEGMENT_SEPARATOR.len(),
        );
        name.push_str(self.prefix);
        for segment in &self.segments {
            name.push_str(SEGMENT_SEPARATOR);
            name.push_str(segment);
        }
        name.push_str(SEGMENT_SEPARATOR);
        name.push_str(leaf);
        name
    }
}

impl Iterator for LeafCursor<'_> {
    type Item = ResolvedLeaf;

    fn next(&mut self) -> Option<ResolvedLeaf> {
        loop {
            let frame = self.stack.last_mut()?;
            if frame.index >= frame.fields.len() {
                let named = frame.named;
                self.stack.pop();
                if named {
                    self.segments.pop();
                }
                continue;
            }
            let fields = frame.fields;
            let field = &fields[frame.index];
            frame.index += 1;
            match field.kind() {
                FieldKind::Bits(width) => {
                    let leaf = ResolvedLeaf {
                        name: self.qualify(field.name()),
                        width: *width,
                        offset_bits: self.offset_bits,
                    };
                    self.offset_bits += *width as u32;
                    return Some(leaf);
                }
                FieldKind::Group(group) => {
                    self.segments.push(field.name());
                    self.stack.push(CursorFrame {
                        fields: group.fields(),
                        index: 0,
                        named: true,
                    });
                }
            }
        }
    }
}
