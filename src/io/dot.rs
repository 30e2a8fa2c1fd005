//! # Dot
//!
//! Draws a weighted graph in the [DOT language](https://graphviz.org/doc/info/lang.html) of
//! [GraphViz](https://graphviz.org/) with the edges of a spanning tree highlighted.
//!
//! ```
//! use wmst::{prelude::*, algo::*, io::*};
//!
//! let graph = Graph::new(1, ["A", "B", "C"], [("A", "B", 1), ("B", "C", 2), ("A", "C", 3)]).unwrap();
//! let mst = graph.kruskal_mst().unwrap();
//!
//! let mut buffer = Vec::new();
//! DotWriter::new().try_write_mst(&graph, &mst, &mut buffer).unwrap();
//!
//! let dot = String::from_utf8(buffer).unwrap();
//! assert!(dot.starts_with("graph g1 {"));
//! ```

use std::{fmt::Display, io::Write};

use crate::algo::MstResult;

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Color of selected edges
    tree_color: DotColor,
    /// Color of all other edges
    other_color: DotColor,
    /// Whether edges outside the tree are drawn at all
    draw_other: bool,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            tree_color: DotColor::Red,
            other_color: DotColor::Gray,
            draw_other: true,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Color of the spanning tree edges (red by default)
    pub fn tree_color(mut self, color: DotColor) -> Self {
        self.tree_color = color;
        self
    }

    /// Color of the remaining edges (gray by default)
    pub fn other_color(mut self, color: DotColor) -> Self {
        self.other_color = color;
        self
    }

    /// If *false*, only tree edges are drawn
    pub fn draw_other(mut self, draw_other: bool) -> Self {
        self.draw_other = draw_other;
        self
    }

    /// Writes `graph` with the edges of `mst` highlighted.
    ///
    /// Each input edge is drawn once; an edge counts as selected if `mst` holds an edge of the
    /// same weight between the same endpoints, in any orientation.
    pub fn try_write_mst<W>(&self, graph: &Graph, mst: &MstResult, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "graph g{} {{", graph.id())?;

        for label in graph.nodes() {
            writeln!(writer, "  {};", quoted(label))?;
        }

        let mut selected = mst.mst_edges().to_vec();
        for edge in graph.edges() {
            let in_tree = match selected
                .iter()
                .position(|e| e.weight == edge.weight && e.connects(&edge.from, &edge.to))
            {
                Some(i) => {
                    selected.swap_remove(i);
                    true
                }
                None => false,
            };

            if !in_tree && !self.draw_other {
                continue;
            }

            let (color, width) = if in_tree {
                (self.tree_color, 2)
            } else {
                (self.other_color, 1)
            };

            writeln!(
                writer,
                "  {} -- {} [label={}, color={color}, penwidth={width}];",
                quoted(&edge.from),
                quoted(&edge.to),
                edge.weight
            )?;
        }

        writeln!(writer, "}}")?;
        Ok(())
    }

    /// Writes the drawing to a file
    pub fn try_write_mst_file<P>(&self, graph: &Graph, mst: &MstResult, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| IoError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        self.try_write_mst(graph, mst, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Labels are arbitrary strings, so they are always written as quoted DOT ids
fn quoted(label: &Label) -> String {
    format!("\"{}\"", label.as_str().replace('\\', "\\\\").replace('"', "\\\""))
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Subset of the SVG colors of GraphViz
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    DarkGreen,
    Gray,
    Green,
    LightGray,
    Orange,
    Purple,
    Red,
}
