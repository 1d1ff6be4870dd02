//! Dominant-term selection.
//!
//! When a union is translated, one of its operands is singled out as the
//! primary branch: the longest intersection made only of plain surfaces.
//! [`largest_pure_intersection_node`] finds it; [`split_union`] packages the
//! result the way the conversion driver consumes it.
//!
//! Ordering rules:
//!
//! - a bare surface counts as a pure intersection of size 1, but only takes
//!   the slot while nothing of size 1 or more has been seen yet;
//! - an intersection replaces the current pick only when strictly larger, so
//!   the first operand of a given size keeps it.

use serde::Serialize;
use std::borrow::Borrow;
use tracing::{debug, trace};

use crate::ast::{BoolOp, Expr};
use crate::classify::is_surface;

/// Size of `node` as a pure surface intersection.
///
/// `Some(n)` when `node` is an intersection whose `n` direct operands are all
/// surfaces; `None` otherwise. A bare surface is not an operator and yields
/// `None` here.
pub fn pure_intersection_size(node: &Expr) -> Option<usize> {
    let Expr::Operator(op) = node else {
        return None;
    };
    if op.op != BoolOp::Intersection {
        return None;
    }
    op.operands
        .iter()
        .all(|operand| is_surface(operand))
        .then_some(op.operands.len())
}

/// Index of the largest pure surface intersection among `nodes`.
///
/// Accepts owned expressions, references or shared operands alike.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use t4_geom_convert::ast::Expr;
/// use t4_geom_convert::select::largest_pure_intersection_node;
///
/// let union = Expr::from_positional(&json!([1, ":", [2, "*", 1, 2], [3, "*", 4, 5, 6]])).unwrap();
/// assert_eq!(largest_pure_intersection_node(union.operands()), Some(1));
///
/// let leaves = [Expr::surface(4), Expr::surface(5), Expr::surface(6)];
/// assert_eq!(largest_pure_intersection_node(&leaves), Some(0));
///
/// assert_eq!(largest_pure_intersection_node::<Expr>(&[]), None);
/// ```
pub fn largest_pure_intersection_node<T>(nodes: &[T]) -> Option<usize>
where
    T: Borrow<Expr>,
{
    let mut best_index = None;
    let mut best_size = 0;

    for (index, node) in nodes.iter().enumerate() {
        let node = node.borrow();

        if is_surface(node) && best_size < 1 {
            trace!(index, "bare surface takes the size-1 slot");
            best_size = 1;
            best_index = Some(index);
            continue;
        }

        let Some(size) = pure_intersection_size(node) else {
            continue;
        };
        if size > best_size {
            trace!(index, size, previous = best_size, "larger pure intersection");
            best_size = size;
            best_index = Some(index);
        }
    }

    debug!(
        candidates = nodes.len(),
        selected = ?best_index,
        size = best_size,
        "dominant term selection"
    );
    best_index
}

/// A union's operands split into the primary branch and the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnionSplit {
    /// Id of the union node.
    pub node_id: i64,
    /// Operand index of the largest pure intersection, if any operand qualifies.
    pub primary: Option<usize>,
    /// Every other operand index, in original order.
    pub rest: Vec<usize>,
}

/// Selects the primary branch of a union node.
///
/// Returns `None` when `node` is not a union.
pub fn split_union(node: &Expr) -> Option<UnionSplit> {
    let op = node.as_operator().filter(|op| op.op == BoolOp::Union)?;
    let primary = largest_pure_intersection_node(&op.operands);
    let rest = (0..op.operands.len())
        .filter(|&index| Some(index) != primary)
        .collect();
    Some(UnionSplit {
        node_id: op.id,
        primary,
        rest,
    })
}
