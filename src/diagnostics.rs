//! Error types for the geometry core.
//!
//! Two layers, both `thiserror` enums carrying `miette` diagnostic codes:
//!
//! - [`StructuralError`]: a positional tree that does not have the
//!   `[id, tag, operands...]` shape. Raised at the decode boundary so the
//!   classifier and selector only ever see well-formed trees.
//! - [`GeomError`]: everything the document loader and the CLI can hit
//!   (I/O, JSON syntax, structural errors tagged with their cell).

use miette::Diagnostic;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// NODE LOCATION
// ============================================================================

/// Location of a node inside a positional tree, as array indices from the root.
///
/// Displays as a JSON path: `$`, `$[2]`, `$[2][3]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of the element at `index` below this one.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for index in &self.0 {
            write!(f, "[{}]", index)?;
        }
        Ok(())
    }
}

// ============================================================================
// STRUCTURAL ERRORS
// ============================================================================

/// A malformed node in the positional form of a geometry tree.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum StructuralError {
    #[error("operator node at {path} is empty")]
    #[diagnostic(
        code(t4geom::structure::missing_id),
        help("operator nodes are written as [id, tag, operand, ...]")
    )]
    MissingNodeId { path: NodePath },

    #[error("operator node at {path} has a non-integer id `{found}`")]
    #[diagnostic(code(t4geom::structure::invalid_id))]
    InvalidNodeId { path: NodePath, found: String },

    #[error("operator node {node_id} at {path} has no operator tag")]
    #[diagnostic(
        code(t4geom::structure::missing_tag),
        help("the second element must be \"*\" (intersection) or \":\" (union)")
    )]
    MissingTag { path: NodePath, node_id: i64 },

    #[error("operator node {node_id} at {path} has unknown operator tag `{tag}`")]
    #[diagnostic(
        code(t4geom::structure::unknown_operator),
        help("expected one of \"*\", \":\", \"intersection\", \"union\"")
    )]
    UnknownOperator {
        path: NodePath,
        node_id: i64,
        tag: String,
    },

    #[error("operator node {node_id} at {path} has no operands")]
    #[diagnostic(code(t4geom::structure::no_operands))]
    NoOperands { path: NodePath, node_id: i64 },

    #[error("unsupported geometry term at {path}: {found}")]
    #[diagnostic(
        code(t4geom::structure::invalid_leaf),
        help("leaves are surface numbers, {{\"surface\": {{...}}}} or {{\"cell\": N}}")
    )]
    InvalidLeaf { path: NodePath, found: String },
}

impl StructuralError {
    /// Where in the positional tree the problem was found.
    pub fn path(&self) -> &NodePath {
        match self {
            StructuralError::MissingNodeId { path }
            | StructuralError::InvalidNodeId { path, .. }
            | StructuralError::MissingTag { path, .. }
            | StructuralError::UnknownOperator { path, .. }
            | StructuralError::NoOperands { path, .. }
            | StructuralError::InvalidLeaf { path, .. } => path,
        }
    }

    /// Id of the offending operator node, when it could be read.
    pub fn node_id(&self) -> Option<i64> {
        match self {
            StructuralError::MissingTag { node_id, .. }
            | StructuralError::UnknownOperator { node_id, .. }
            | StructuralError::NoOperands { node_id, .. } => Some(*node_id),
            StructuralError::MissingNodeId { .. }
            | StructuralError::InvalidNodeId { .. }
            | StructuralError::InvalidLeaf { .. } => None,
        }
    }
}

// ============================================================================
// TOP-LEVEL ERRORS
// ============================================================================

/// Errors surfaced by document loading and the command-line tool.
#[derive(Debug, Error, Diagnostic)]
pub enum GeomError {
    #[error("failed to read `{}`", .path.display())]
    #[diagnostic(code(t4geom::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin} is not a valid geometry document")]
    #[diagnostic(
        code(t4geom::json),
        help("expected {{\"cells\": [{{\"id\": N, \"geometry\": ...}}]}}")
    )]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cell {cell} has a malformed geometry")]
    #[diagnostic(code(t4geom::structure))]
    Structure {
        cell: u32,
        #[source]
        #[diagnostic_source]
        source: StructuralError,
    },

    #[error("failed to write output")]
    #[diagnostic(code(t4geom::output))]
    Output {
        #[source]
        source: std::io::Error,
    },
}

pub type GeomResult<T> = Result<T, GeomError>;
