//! Handles all user-facing output for the CLI.
//!
//! Commands build plain report values; this module turns them into colored
//! text or JSON. Writers are generic over [`WriteColor`] so the same code
//! serves the terminal and in-memory buffers.

use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::classify::NodeKind;
use crate::document::Cell;
use crate::select::{split_union, UnionSplit};

// ============================================================================
// REPORTS
// ============================================================================

/// One node of a cell, as listed by `classify`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeReport {
    pub depth: usize,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<i64>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifyReport {
    pub cell: u32,
    pub nodes: Vec<NodeReport>,
}

/// Primary-branch choice at one union node, as listed by `select`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnionReport {
    #[serde(flatten)]
    pub split: UnionSplit,
    pub primary_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectReport {
    pub cell: u32,
    pub unions: Vec<UnionReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderReport {
    pub cell: u32,
    pub geometry: String,
    pub depth: usize,
    pub surfaces: Vec<i64>,
}

impl ClassifyReport {
    pub fn for_cell(cell: &Cell) -> Self {
        let mut nodes = Vec::new();
        cell.geometry.walk(&mut |node, depth| {
            nodes.push(NodeReport {
                depth,
                kind: node.kind(),
                node_id: node.as_operator().map(|op| op.id),
                text: node.to_string(),
            });
        });
        Self {
            cell: cell.id,
            nodes,
        }
    }
}

impl SelectReport {
    pub fn for_cell(cell: &Cell) -> Self {
        let mut unions = Vec::new();
        cell.geometry.walk(&mut |node, _| {
            if let Some(split) = split_union(node) {
                let primary_text = split
                    .primary
                    .and_then(|index| node.operands().get(index))
                    .map(|operand| operand.to_string());
                unions.push(UnionReport {
                    split,
                    primary_text,
                });
            }
        });
        Self {
            cell: cell.id,
            unions,
        }
    }
}

impl RenderReport {
    pub fn for_cell(cell: &Cell) -> Self {
        Self {
            cell: cell.id,
            geometry: cell.geometry.to_string(),
            depth: cell.geometry.depth(),
            surfaces: cell.geometry.surface_ids(),
        }
    }
}

// ============================================================================
// WRITERS
// ============================================================================

/// Writes any report list as pretty JSON.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, reports: &[T]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)
}

pub fn write_classify<W: WriteColor>(out: &mut W, reports: &[ClassifyReport]) -> io::Result<()> {
    for report in reports {
        write_cell_header(out, report.cell)?;
        for node in &report.nodes {
            write!(out, "{:indent$}", "", indent = 2 * (node.depth + 1))?;
            out.set_color(ColorSpec::new().set_fg(Some(kind_color(node.kind))))?;
            write!(out, "{}", node.kind)?;
            out.reset()?;
            match node.node_id {
                Some(id) => writeln!(out, " [{}] {}", id, node.text)?,
                None => writeln!(out, " {}", node.text)?,
            }
        }
    }
    Ok(())
}

pub fn write_select<W: WriteColor>(out: &mut W, reports: &[SelectReport]) -> io::Result<()> {
    for report in reports {
        write_cell_header(out, report.cell)?;
        if report.unions.is_empty() {
            writeln!(out, "  no union nodes")?;
            continue;
        }
        for union in &report.unions {
            write!(out, "  union [{}]: ", union.split.node_id)?;
            match (union.split.primary, &union.primary_text) {
                (Some(index), Some(text)) => {
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
                    write!(out, "operand {}", index)?;
                    out.reset()?;
                    writeln!(out, " = {}", text)?;
                }
                _ => {
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                    writeln!(out, "no pure intersection")?;
                    out.reset()?;
                }
            }
        }
    }
    Ok(())
}

pub fn write_render<W: WriteColor>(out: &mut W, reports: &[RenderReport]) -> io::Result<()> {
    for report in reports {
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "{:>6}", report.cell)?;
        out.reset()?;
        writeln!(out, "  {}", report.geometry)?;
    }
    Ok(())
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn write_cell_header<W: WriteColor>(out: &mut W, cell: u32) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    writeln!(out, "cell {}", cell)?;
    out.reset()
}

fn kind_color(kind: NodeKind) -> Color {
    match kind {
        NodeKind::Surface => Color::White,
        NodeKind::CellRef => Color::Magenta,
        NodeKind::Intersection => Color::Green,
        NodeKind::Union => Color::Blue,
    }
}
