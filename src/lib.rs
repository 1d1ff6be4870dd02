//! Boolean geometry trees for MCNP to TRIPOLI-4 cell conversion.
//!
//! - [`ast`]: the expression tree and its positional boundary form
//! - [`classify`]: surface / cell-ref / intersection / union predicates
//! - [`select`]: choice of the dominant pure intersection under a union
//! - [`document`]: per-cell geometry documents
//! - [`cli`]: the `t4geom` inspection tool

pub use crate::ast::{BoolOp, CellRef, Expr, OperatorNode, SurfaceLeaf};
pub use crate::classify::NodeKind;
pub use crate::diagnostics::{GeomError, StructuralError};

pub mod ast;
pub mod classify;
pub mod cli;
pub mod diagnostics;
pub mod document;
pub mod select;
