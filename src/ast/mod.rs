//! Boolean geometry trees.
//!
//! A cell's geometry is an [`Expr`]: surfaces and cell complements at the
//! leaves, intersections and unions at the inner nodes. Trees are built once
//! (by the parser, or by decoding the positional form in [`positional`]) and
//! are only read afterwards.

// ============================================================================
// IMPORTS
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::classify::{self, NodeKind};

pub mod positional;
pub mod surface;

pub use surface::{Sense, SurfaceDescription, SurfaceLeaf};

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Operand handle. Named sub-expressions may be shared between parents.
pub type Operand = Arc<Expr>;

/// Boolean operator of an inner node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolOp {
    Intersection,
    Union,
}

/// Reference to another cell, read as "complement of cell N".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellRef(pub u32);

/// An inner node: identifier, operator and ordered operands.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorNode {
    /// Traceability id from the input; not required to be unique.
    pub id: i64,
    pub op: BoolOp,
    pub operands: Vec<Operand>,
}

/// The geometry expression tree.
///
/// # Examples
///
/// ```rust
/// use t4_geom_convert::ast::Expr;
/// let cyl = Expr::intersection(1, [Expr::surface(-1), Expr::surface(2), Expr::surface(-3)]);
/// assert!(cyl.is_intersection());
/// assert_eq!(cyl.to_string(), "-1 2 -3");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub enum Expr {
    Surface(SurfaceLeaf),
    CellRef(CellRef),
    Operator(OperatorNode),
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl BoolOp {
    /// MCNP marker used in the positional form.
    pub fn marker(self) -> &'static str {
        match self {
            BoolOp::Intersection => "*",
            BoolOp::Union => ":",
        }
    }

    /// Parses a positional tag: the MCNP marker or the operator's name.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "*" => Some(BoolOp::Intersection),
            ":" => Some(BoolOp::Union),
            t if t.eq_ignore_ascii_case("intersection") => Some(BoolOp::Intersection),
            t if t.eq_ignore_ascii_case("union") => Some(BoolOp::Union),
            _ => None,
        }
    }
}

impl OperatorNode {
    pub fn new<I, E>(id: i64, op: BoolOp, operands: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Operand>,
    {
        Self {
            id,
            op,
            operands: operands.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.operands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }
}

impl Expr {
    /// A bare surface number leaf.
    pub fn surface(signed_id: i64) -> Self {
        Expr::Surface(SurfaceLeaf::Id(signed_id))
    }

    /// A complement-of-cell leaf.
    pub fn cell_ref(cell: u32) -> Self {
        Expr::CellRef(CellRef(cell))
    }

    pub fn intersection<I, E>(id: i64, operands: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Operand>,
    {
        Expr::Operator(OperatorNode::new(id, BoolOp::Intersection, operands))
    }

    pub fn union<I, E>(id: i64, operands: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Operand>,
    {
        Expr::Operator(OperatorNode::new(id, BoolOp::Union, operands))
    }

    /// Syntactic category of this node.
    pub fn kind(&self) -> NodeKind {
        classify::classify(self)
    }

    pub fn is_leaf(&self) -> bool {
        classify::is_leaf(self)
    }

    pub fn is_surface(&self) -> bool {
        classify::is_surface(self)
    }

    pub fn is_cell_ref(&self) -> bool {
        classify::is_cell_ref(self)
    }

    pub fn is_intersection(&self) -> bool {
        classify::is_intersection(self)
    }

    pub fn is_union(&self) -> bool {
        classify::is_union(self)
    }

    pub fn as_operator(&self) -> Option<&OperatorNode> {
        match self {
            Expr::Operator(node) => Some(node),
            _ => None,
        }
    }

    /// Direct operands; empty for leaves.
    pub fn operands(&self) -> &[Operand] {
        match self {
            Expr::Operator(node) => &node.operands,
            Expr::Surface(_) | Expr::CellRef(_) => &[],
        }
    }

    /// Height of the tree; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.operands()
            .iter()
            .map(|operand| operand.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Visits every node in pre-order together with its depth.
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&Expr, usize),
    {
        self.walk_at(0, visit);
    }

    fn walk_at<F>(&self, depth: usize, visit: &mut F)
    where
        F: FnMut(&Expr, usize),
    {
        visit(self, depth);
        for operand in self.operands() {
            operand.walk_at(depth + 1, visit);
        }
    }

    /// Signed surface numbers of every surface leaf, left to right.
    pub fn surface_ids(&self) -> Vec<i64> {
        let mut ids = Vec::new();
        self.walk(&mut |node, _| {
            if let Expr::Surface(leaf) = node {
                ids.push(leaf.signed_id());
            }
        });
        ids
    }
}

// ============================================================================
// RENDERING
// ============================================================================

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for OperatorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = match self.op {
            BoolOp::Intersection => " ",
            BoolOp::Union => ":",
        };
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            match operand.as_ref() {
                Expr::Operator(inner) => write!(f, "({})", inner)?,
                leaf => write!(f, "{}", leaf)?,
            }
        }
        Ok(())
    }
}

/// Renders the tree in MCNP cell-geometry syntax.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Surface(leaf) => write!(f, "{}", leaf),
            Expr::CellRef(cell) => write!(f, "{}", cell),
            Expr::Operator(node) => write!(f, "{}", node),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<i64> for Expr {
    fn from(signed_id: i64) -> Self {
        Expr::surface(signed_id)
    }
}

impl From<SurfaceLeaf> for Expr {
    fn from(leaf: SurfaceLeaf) -> Self {
        Expr::Surface(leaf)
    }
}

impl From<SurfaceDescription> for Expr {
    fn from(desc: SurfaceDescription) -> Self {
        Expr::Surface(SurfaceLeaf::Described(desc))
    }
}

impl From<CellRef> for Expr {
    fn from(cell: CellRef) -> Self {
        Expr::CellRef(cell)
    }
}

impl From<OperatorNode> for Expr {
    fn from(node: OperatorNode) -> Self {
        Expr::Operator(node)
    }
}
