//! Geometry documents: the per-cell trees handed over by the parser.
//!
//! ```json
//! {"cells": [{"id": 10, "geometry": [1, ":", [2, "*", -1, 2], {"cell": 4}]}]}
//! ```

use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::ast::Expr;
use crate::diagnostics::{GeomError, GeomResult};

/// A cell and its geometry tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub id: u32,
    pub geometry: Expr,
}

/// All cells of one input, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct RawDocument {
    cells: Vec<RawCell>,
}

#[derive(Deserialize)]
struct RawCell {
    id: u32,
    geometry: Value,
}

impl Document {
    /// Parses a document; `origin` names the input in error messages.
    pub fn from_json_str(source: &str, origin: &str) -> GeomResult<Self> {
        let raw: RawDocument = serde_json::from_str(source).map_err(|source| GeomError::Json {
            origin: origin.to_string(),
            source,
        })?;

        // Geometry is decoded by hand, not through serde, so a structural
        // error keeps its node path and gets the cell id attached.
        let cells = raw
            .cells
            .into_iter()
            .map(|cell| {
                Expr::from_positional(&cell.geometry)
                    .map(|geometry| Cell {
                        id: cell.id,
                        geometry,
                    })
                    .map_err(|source| GeomError::Structure {
                        cell: cell.id,
                        source,
                    })
            })
            .collect::<GeomResult<Vec<_>>>()?;

        debug!(origin, cells = cells.len(), "loaded geometry document");
        Ok(Self { cells })
    }

    pub fn load(path: &Path) -> GeomResult<Self> {
        let source = fs::read_to_string(path).map_err(|source| GeomError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&source, &path.display().to_string())
    }

    pub fn cell(&self, id: u32) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::StructuralError;

    #[test]
    fn loads_cells_in_order() {
        let doc = Document::from_json_str(
            r#"{"cells": [
                {"id": 2, "geometry": [1, "*", -1, 2]},
                {"id": 1, "geometry": {"cell": 2}}
            ]}"#,
            "inline",
        )
        .unwrap();
        assert_eq!(doc.cells.len(), 2);
        assert_eq!(doc.cells[0].id, 2);
        assert_eq!(doc.cell(1).map(|c| &c.geometry), Some(&Expr::cell_ref(2)));
        assert!(doc.cell(3).is_none());
    }

    #[test]
    fn structural_error_names_the_cell() {
        let err = Document::from_json_str(
            r#"{"cells": [{"id": 5, "geometry": [1, "*", [2]]}]}"#,
            "inline",
        )
        .unwrap_err();
        match err {
            GeomError::Structure { cell, source } => {
                assert_eq!(cell, 5);
                assert!(matches!(source, StructuralError::MissingTag { node_id: 2, .. }));
            }
            other => panic!("expected a structure error, got {:?}", other),
        }
    }

    #[test]
    fn syntax_error_is_reported_as_json() {
        let err = Document::from_json_str("{\"cells\": [", "broken.json").unwrap_err();
        assert!(matches!(err, GeomError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
