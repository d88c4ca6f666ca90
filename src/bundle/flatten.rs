//! Name generation for flattened specifications.

use super::spec::FieldSpec;
use super::walker::LeafCursor;

/// Joins nested field path segments inside one signal name.
pub const SEGMENT_SEPARATOR: &str = "__";

/// Separates signal names inside a joined wire list.
pub const WIRE_SEPARATOR: &str = " ";

/// Expands `spec` into `(fully_qualified_name, width)` pairs, depth
/// first, in declaration order. The output is identical across calls for
/// the same inputs.
pub fn flatten(spec: &FieldSpec, prefix: &str) -> Vec<(String, u16)> {
    LeafCursor::new(spec, prefix)
        .map(|leaf| (leaf.name, leaf.width))
        .collect()
}

/// Like [flatten], but renders names the way the testbench configuration
/// loader expects them: multi-bit leaves carry a `[width]` suffix,
/// single-bit leaves stay bare. The loader keys scalar-versus-vector off
/// the presence of the bracket.
pub fn name_list(spec: &FieldSpec, prefix: &str) -> Vec<String> {
    LeafCursor::new(spec, prefix)
        .map(|leaf| annotate(leaf.name, leaf.width))
        .collect()
}

pub(crate) fn annotate(name: String, width: u16) -> String {
    if width > 1 {
        format!("{name}[{width}]")
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_spec() -> FieldSpec {
        FieldSpec::builder()
            .bits("a", 1)
            .bits("b", 3)
            .bits("c", 8)
            .finish()
            .unwrap()
    }

    #[test]
    fn name_list_annotates_multi_bit_leaves_only() {
        assert_eq!(
            name_list(&leaf_spec(), "x"),
            vec!["x__a", "x__b[3]", "x__c[8]"],
            "single-bit leaves stay bare, vectors carry the width"
        );
    }

    #[test]
    fn flatten_reports_widths_in_order() {
        let group = FieldSpec::builder().bits("a", 1).bits("b", 2).finish().unwrap();
        let spec = FieldSpec::builder().group("g", group).finish().unwrap();
        assert_eq!(
            flatten(&spec, "y"),
            vec![("y__g__a".to_owned(), 1), ("y__g__b".to_owned(), 2)],
            "nested leaves keep the group segment in their path"
        );
    }

    #[test]
    fn flatten_is_deterministic() {
        let spec = leaf_spec();
        assert_eq!(
            flatten(&spec, "x"),
            flatten(&spec, "x"),
            "two traversals of the same spec must agree"
        );
    }
}
