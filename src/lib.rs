//! Declarative wire-bundle descriptors for cycle-accurate testbench
//! harnesses.
//!
//! A [bundle::FieldSpec] describes a group of named bit-fields, possibly
//! nested; flattening it under an instance prefix yields the fully
//! qualified signal names a simulation driver registers and a
//! configuration loader keys on. The packing layer converts between
//! per-leaf integer values and flat bit vectors using the same
//! deterministic depth-first order.
//!
//! ## Example
//!
//! ```
//! use wirebundle::bundle::{registry, name_list};
//!
//! let gmii_tx = registry::gmii_tx();
//! assert_eq!(
//!     name_list(&gmii_tx, "gmii_tx"),
//!     vec!["gmii_tx__tx_en", "gmii_tx__tx_er", "gmii_tx__txd[8]"],
//! );
//! ```

pub mod bits;
pub mod bundle;
pub mod harness;
