//! Shared helpers for the integration tests.

#![allow(dead_code)]

use serde_json::Value;
use t4_geom_convert::ast::Expr;

/// Decodes a positional tree, panicking on malformed input.
pub fn tree(positional: Value) -> Expr {
    Expr::from_positional(&positional)
        .unwrap_or_else(|err| panic!("fixture tree {} is malformed: {}", positional, err))
}

/// Decodes a list of sibling trees.
pub fn siblings(positional: Value) -> Vec<Expr> {
    match positional {
        Value::Array(items) => items.into_iter().map(tree).collect(),
        other => panic!("expected an array of siblings, got {}", other),
    }
}
