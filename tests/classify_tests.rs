// tests/classify_tests.rs

mod common;

use serde_json::json;
use t4_geom_convert::ast::{Expr, Sense, SurfaceDescription};
use t4_geom_convert::classify::{
    classify, is_cell_ref, is_intersection, is_leaf, is_surface, is_union, NodeKind,
};

use common::tree;

fn all_kinds() -> Vec<Expr> {
    vec![
        Expr::surface(4),
        Expr::surface(-4),
        Expr::from(SurfaceDescription::new(4, Sense::Negative, "PX", vec![1.0])),
        Expr::cell_ref(4),
        tree(json!([2, "*", 1, 2])),
        tree(json!([3, ":", 1, [4, "*", 2, 3]])),
    ]
}

#[test]
fn surface_leaves() {
    for s in [
        Expr::surface(7),
        Expr::surface(-7),
        Expr::from(SurfaceDescription::new(7, Sense::Positive, "SO", vec![3.0])),
    ] {
        assert!(is_leaf(&s));
        assert!(is_surface(&s));
        assert!(!is_cell_ref(&s));
        assert!(!is_intersection(&s));
        assert!(!is_union(&s));
    }
}

#[test]
fn cell_refs_are_leaves_but_not_surfaces() {
    let c = Expr::cell_ref(7);
    assert!(is_leaf(&c));
    assert!(is_cell_ref(&c));
    assert!(!is_surface(&c));
    assert!(!is_intersection(&c));
    assert!(!is_union(&c));
}

#[test]
fn cell_ref_and_surface_with_same_number_differ() {
    assert_ne!(classify(&Expr::cell_ref(5)), classify(&Expr::surface(5)));
}

#[test]
fn intersection_operators() {
    let o = tree(json!([2, "*", 1, 2]));
    assert!(is_intersection(&o));
    assert!(!is_leaf(&o));
    assert!(!is_union(&o));
    assert!(!is_surface(&o));
    assert!(!is_cell_ref(&o));
}

#[test]
fn union_operators() {
    let o = tree(json!([2, ":", 1, 2]));
    assert!(is_union(&o));
    assert!(!is_leaf(&o));
    assert!(!is_intersection(&o));
    assert!(!is_surface(&o));
    assert!(!is_cell_ref(&o));
}

#[test]
fn operator_kind_ignores_operand_kinds() {
    // A union whose operands are all intersections is still a union.
    let o = tree(json!([1, ":", [2, "*", 1], [3, "*", 2]]));
    assert_eq!(classify(&o), NodeKind::Union);
}

#[test]
fn categories_partition_every_node() {
    for node in all_kinds() {
        let hits = [
            is_surface(&node),
            is_cell_ref(&node),
            is_intersection(&node),
            is_union(&node),
        ]
        .iter()
        .filter(|hit| **hit)
        .count();
        assert_eq!(hits, 1, "{} must fall in exactly one category", node);
        assert_eq!(is_leaf(&node), classify(&node).is_leaf());
    }
}

#[test]
fn predicates_are_repeatable() {
    for node in all_kinds() {
        let first = (classify(&node), is_leaf(&node), is_surface(&node));
        for _ in 0..3 {
            assert_eq!(first, (classify(&node), is_leaf(&node), is_surface(&node)));
        }
    }
}

#[test]
fn methods_agree_with_free_functions() {
    for node in all_kinds() {
        assert_eq!(node.kind(), classify(&node));
        assert_eq!(node.is_leaf(), is_leaf(&node));
        assert_eq!(node.is_surface(), is_surface(&node));
        assert_eq!(node.is_cell_ref(), is_cell_ref(&node));
        assert_eq!(node.is_intersection(), is_intersection(&node));
        assert_eq!(node.is_union(), is_union(&node));
    }
}
