//! Positional form of geometry trees.
//!
//! This is the shape trees cross the parser/emitter boundary in:
//!
//! - a surface is a signed integer, or `{"surface": {"id": 7, "sense": "-", ...}}`;
//! - a cell complement is `{"cell": 4}`;
//! - an operator is an array `[id, tag, operand, ...]` where `tag` is `"*"`
//!   (intersection) or `":"` (union).
//!
//! Decoding is where malformed operators are caught: anything that does not
//! have an id, a known tag and at least one operand is rejected with a
//! [`StructuralError`] naming its location.

use serde_json::{json, Map, Value};
use std::sync::Arc;

use super::{BoolOp, CellRef, Expr, OperatorNode, SurfaceDescription, SurfaceLeaf};
use crate::diagnostics::{NodePath, StructuralError};

impl Expr {
    /// Decodes a tree from its positional form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json::json;
    /// use t4_geom_convert::ast::Expr;
    /// let expr = Expr::from_positional(&json!([3, "*", {"cell": 4}, 5, -6])).unwrap();
    /// assert!(expr.is_intersection());
    /// assert_eq!(expr.to_string(), "#4 5 -6");
    ///
    /// let err = Expr::from_positional(&json!([3])).unwrap_err();
    /// assert_eq!(err.node_id(), Some(3));
    /// ```
    pub fn from_positional(value: &Value) -> Result<Self, StructuralError> {
        decode(value, &NodePath::root())
    }

    /// Encodes the tree back into its positional form.
    pub fn to_positional(&self) -> Value {
        match self {
            Expr::Surface(SurfaceLeaf::Id(id)) => json!(id),
            Expr::Surface(SurfaceLeaf::Described(desc)) => json!({ "surface": desc }),
            Expr::CellRef(CellRef(cell)) => json!({ "cell": cell }),
            Expr::Operator(node) => {
                let mut items = Vec::with_capacity(node.operands.len() + 2);
                items.push(json!(node.id));
                items.push(json!(node.op.marker()));
                items.extend(node.operands.iter().map(|operand| operand.to_positional()));
                Value::Array(items)
            }
        }
    }
}

impl TryFrom<Value> for Expr {
    type Error = StructuralError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Expr::from_positional(&value)
    }
}

impl From<Expr> for Value {
    fn from(expr: Expr) -> Self {
        expr.to_positional()
    }
}

// ============================================================================
// DECODING HELPERS (INTERNAL)
// ============================================================================

fn decode(value: &Value, path: &NodePath) -> Result<Expr, StructuralError> {
    match value {
        Value::Array(items) => decode_operator(items, path),
        Value::Number(_) => decode_surface_number(value, path),
        Value::Object(fields) => decode_tagged_leaf(fields, value, path),
        _ => Err(invalid_leaf(path, value)),
    }
}

fn decode_operator(items: &[Value], path: &NodePath) -> Result<Expr, StructuralError> {
    let first = items
        .first()
        .ok_or_else(|| StructuralError::MissingNodeId { path: path.clone() })?;
    let node_id = first.as_i64().ok_or_else(|| StructuralError::InvalidNodeId {
        path: path.clone(),
        found: first.to_string(),
    })?;

    let tag = items.get(1).ok_or_else(|| StructuralError::MissingTag {
        path: path.clone(),
        node_id,
    })?;
    let op = tag
        .as_str()
        .and_then(BoolOp::from_tag)
        .ok_or_else(|| StructuralError::UnknownOperator {
            path: path.clone(),
            node_id,
            tag: tag.as_str().map_or_else(|| tag.to_string(), str::to_string),
        })?;

    if items.len() == 2 {
        return Err(StructuralError::NoOperands {
            path: path.clone(),
            node_id,
        });
    }

    let operands = items
        .iter()
        .enumerate()
        .skip(2)
        .map(|(index, item)| decode(item, &path.child(index)).map(Arc::new))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Expr::Operator(OperatorNode {
        id: node_id,
        op,
        operands,
    }))
}

fn decode_surface_number(value: &Value, path: &NodePath) -> Result<Expr, StructuralError> {
    value
        .as_i64()
        .map(Expr::surface)
        .ok_or_else(|| invalid_leaf(path, value))
}

fn decode_tagged_leaf(
    fields: &Map<String, Value>,
    value: &Value,
    path: &NodePath,
) -> Result<Expr, StructuralError> {
    if fields.len() != 1 {
        return Err(invalid_leaf(path, value));
    }
    if let Some(cell) = fields.get("cell") {
        return cell
            .as_u64()
            .and_then(|cell| u32::try_from(cell).ok())
            .map(Expr::cell_ref)
            .ok_or_else(|| invalid_leaf(path, value));
    }
    if let Some(surface) = fields.get("surface") {
        return serde_json::from_value::<SurfaceDescription>(surface.clone())
            .map(Expr::from)
            .map_err(|_| invalid_leaf(path, value));
    }
    Err(invalid_leaf(path, value))
}

fn invalid_leaf(path: &NodePath, value: &Value) -> StructuralError {
    StructuralError::InvalidLeaf {
        path: path.clone(),
        found: value.to_string(),
    }
}
