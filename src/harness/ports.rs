//! Testbench port declarations rendered as configuration force maps.
//!
//! The external configuration loader receives a flat key/value map where
//! signal lists are whitespace-joined flattened names; this module owns
//! that wire format.

use bitflags::bitflags;

use crate::bundle::flatten::{annotate, name_list, WIRE_SEPARATOR};
use crate::bundle::spec::FieldSpec;

bitflags! {
    /// Direction of a testbench port as seen from the test harness.
    /// An inout wire carries both flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PortFlags: u8 {
        const INPUT  = 0b01;
        const OUTPUT = 0b10;
    }
}

/// Force key naming the harness clock.
pub const FORCE_CLOCK: &str = "th.clock";
/// Force key listing the flattened harness input signals.
pub const FORCE_INPUTS: &str = "th.inputs";
/// Force key listing the flattened harness output signals.
pub const FORCE_OUTPUTS: &str = "th.outputs";

enum PortShape {
    Wire { width: u16 },
    Bundle { spec: FieldSpec },
}

struct Port {
    name: String,
    shape: PortShape,
    flags: PortFlags,
}

/// Insertion-ordered set of testbench ports plus free-form force
/// overrides. Rendering is deterministic so the emitted map can key
/// recorded configurations.
pub struct PortSet {
    clock: String,
    ports: Vec<Port>,
    extra: Vec<(String, String)>,
}

impl PortSet {
    pub fn new(clock: impl Into<String>) -> Self {
        Self {
            clock: clock.into(),
            ports: Vec::new(),
            extra: Vec::new(),
        }
    }

    /// Declares a scalar wire; widths above one render a `[width]` suffix.
    pub fn add_wire(&mut self, name: impl Into<String>, width: u16, flags: PortFlags) -> &mut Self {
        self.ports.push(Port {
            name: name.into(),
            shape: PortShape::Wire { width },
            flags,
        });
        self
    }

    /// Declares every leaf of `spec` under `prefix` for the given direction.
    pub fn add_bundle(
        &mut self,
        prefix: impl Into<String>,
        spec: FieldSpec,
        flags: PortFlags,
    ) -> &mut Self {
        self.ports.push(Port {
            name: prefix.into(),
            shape: PortShape::Bundle { spec },
            flags,
        });
        self
    }

    /// Adds a free-form force entry appended after the port keys.
    pub fn set_force(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    pub fn clock(&self) -> &str {
        &self.clock
    }

    /// Whitespace-joined names of every input port, in declaration order.
    pub fn inputs(&self) -> String {
        self.joined(PortFlags::INPUT)
    }

    /// Whitespace-joined names of every output port, in declaration order.
    pub fn outputs(&self) -> String {
        self.joined(PortFlags::OUTPUT)
    }

    fn joined(&self, direction: PortFlags) -> String {
        let mut names: Vec<String> = Vec::new();
        for port in &self.ports {
            if !port.flags.contains(direction) {
                continue;
            }
            match &port.shape {
                PortShape::Wire { width } => names.push(annotate(port.name.clone(), *width)),
                PortShape::Bundle { spec } => names.extend(name_list(spec, &port.name)),
            }
        }
        names.join(WIRE_SEPARATOR)
    }

    /// Complete force map in a stable order: clock, inputs, outputs, then
    /// the extra keys in insertion order.
    pub fn forces(&self) -> Vec<(String, String)> {
        let mut forces = vec![
            (FORCE_CLOCK.to_owned(), self.clock.clone()),
            (FORCE_INPUTS.to_owned(), self.inputs()),
            (FORCE_OUTPUTS.to_owned(), self.outputs()),
        ];
        forces.extend(self.extra.iter().cloned());
        forces
    }
}
