//! Node classification.
//!
//! Every expression falls in exactly one [`NodeKind`]. The predicates below
//! are all derived from [`classify`], so no node can satisfy two of the
//! surface / cell-reference / intersection / union tests at once.

use serde::Serialize;
use std::fmt;

use crate::ast::{BoolOp, Expr};

/// Syntactic category of a geometry node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Surface,
    CellRef,
    Intersection,
    Union,
}

impl NodeKind {
    pub fn is_leaf(self) -> bool {
        matches!(self, NodeKind::Surface | NodeKind::CellRef)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Surface => "surface",
            NodeKind::CellRef => "cell-ref",
            NodeKind::Intersection => "intersection",
            NodeKind::Union => "union",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the category of `node`.
///
/// # Examples
///
/// ```rust
/// use t4_geom_convert::ast::Expr;
/// use t4_geom_convert::classify::{classify, NodeKind};
/// assert_eq!(classify(&Expr::surface(-4)), NodeKind::Surface);
/// assert_eq!(classify(&Expr::cell_ref(4)), NodeKind::CellRef);
/// ```
pub fn classify(node: &Expr) -> NodeKind {
    match node {
        Expr::Surface(_) => NodeKind::Surface,
        Expr::CellRef(_) => NodeKind::CellRef,
        Expr::Operator(op) => match op.op {
            BoolOp::Intersection => NodeKind::Intersection,
            BoolOp::Union => NodeKind::Union,
        },
    }
}

/// True for surfaces and cell references.
pub fn is_leaf(node: &Expr) -> bool {
    classify(node).is_leaf()
}

/// True for surface leaves, whether bare numbers or full descriptions.
pub fn is_surface(node: &Expr) -> bool {
    classify(node) == NodeKind::Surface
}

pub fn is_cell_ref(node: &Expr) -> bool {
    classify(node) == NodeKind::CellRef
}

pub fn is_intersection(node: &Expr) -> bool {
    classify(node) == NodeKind::Intersection
}

pub fn is_union(node: &Expr) -> bool {
    classify(node) == NodeKind::Union
}
