// tests/select_tests.rs

mod common;

use serde_json::json;
use t4_geom_convert::ast::Expr;
use t4_geom_convert::select::{largest_pure_intersection_node, split_union};

use common::{siblings, tree};

fn select(positional: serde_json::Value) -> Option<usize> {
    largest_pure_intersection_node(&siblings(positional))
}

#[test]
fn empty_sequence_has_no_candidate() {
    assert_eq!(largest_pure_intersection_node::<Expr>(&[]), None);
}

#[test]
fn longer_intersection_wins() {
    assert_eq!(select(json!([[2, "*", 1, 2], [3, "*", 4, 5, 6]])), Some(1));
}

#[test]
fn first_bare_surface_takes_the_slot() {
    assert_eq!(select(json!([4, 5, 6])), Some(0));
}

#[test]
fn unions_are_not_candidates() {
    assert_eq!(
        select(json!([[2, "*", 1, 2], [3, "*", 4, 5, 6], [4, ":", 7, 8, 9, 10]])),
        Some(1)
    );
    assert_eq!(select(json!([[2, ":", 1, 2], [3, ":", 4, 5, 6]])), None);
}

#[test]
fn order_decides_between_candidates() {
    assert_eq!(
        select(json!([[3, "*", 4, 5, 6], [2, "*", 1, 2], [4, ":", 7, 8, 9, 10]])),
        Some(0)
    );
}

#[test]
fn cell_ref_operand_disqualifies() {
    assert_eq!(
        select(json!([[3, "*", {"cell": 4}, 5, 6], [2, "*", 1, 2]])),
        Some(1)
    );
}

#[test]
fn nested_operator_operand_disqualifies() {
    assert_eq!(
        select(json!([[3, "*", 4, [5, ":", 5, 6], 7], [2, "*", 1, 2]])),
        Some(1)
    );
}

#[test]
fn equal_sizes_keep_the_first() {
    assert_eq!(select(json!([[1, "*", 1, 2], [2, "*", 3, 4]])), Some(0));
    assert_eq!(select(json!([{"cell": 1}, [1, "*", 1, 2], [2, "*", 3, 4]])), Some(1));
}

// The size-1 slot is asymmetric: whoever takes it first keeps it against
// both bare surfaces and single-operand intersections.
#[test]
fn size_one_intersection_does_not_displace_bare_surface() {
    assert_eq!(select(json!([4, [2, "*", 5]])), Some(0));
}

#[test]
fn bare_surface_does_not_displace_size_one_intersection() {
    assert_eq!(select(json!([[2, "*", 5], 4])), Some(0));
}

#[test]
fn later_bare_surface_never_wins() {
    assert_eq!(select(json!([[2, ":", 1, 2], 4, 5])), Some(1));
    assert_eq!(select(json!([[2, "*", 1, 2], 4])), Some(0));
}

#[test]
fn larger_intersection_overrides_bare_surface() {
    assert_eq!(select(json!([4, [2, "*", 5, 6]])), Some(1));
}

#[test]
fn leaves_that_are_not_surfaces_are_skipped() {
    assert_eq!(select(json!([{"cell": 1}, {"cell": 2}])), None);
    assert_eq!(select(json!([{"cell": 1}, 3])), Some(1));
}

#[test]
fn described_surfaces_count_as_surfaces() {
    let nodes = siblings(json!([
        [1, "*", 1, 2],
        [2, "*", {"surface": {"id": 3, "sense": "-", "mnemonic": "PZ", "coefficients": [0.0]}}, 4, 5]
    ]));
    assert_eq!(largest_pure_intersection_node(&nodes), Some(1));
}

#[test]
fn split_union_on_a_decoded_cell() {
    let union = tree(json!([1, ":", [2, "*", -1, 2], [3, "*", -3, 4, -5], {"cell": 20}]));
    let split = split_union(&union).expect("root is a union");
    assert_eq!(split.node_id, 1);
    assert_eq!(split.primary, Some(1));
    assert_eq!(split.rest, vec![0, 2]);
    assert_eq!(union.operands()[1].to_string(), "-3 4 -5");
}
