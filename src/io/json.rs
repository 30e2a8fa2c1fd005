//! # Json
//!
//! Reading graph definitions and writing comparison results as JSON documents.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::*;

/// A graph as it appears in the input document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord {
    pub id: GraphId,
    pub nodes: Vec<Label>,
    pub edges: Vec<Edge>,
}

impl TryFrom<GraphRecord> for Graph {
    type Error = GraphError;

    fn try_from(record: GraphRecord) -> std::result::Result<Self, Self::Error> {
        Graph::new(record.id, record.nodes, record.edges)
    }
}

impl From<&Graph> for GraphRecord {
    fn from(graph: &Graph) -> Self {
        Self {
            id: graph.id(),
            nodes: graph.nodes().to_vec(),
            edges: graph.edges().to_vec(),
        }
    }
}

/// Top-level input document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphsDocument {
    pub graphs: Vec<GraphRecord>,
}

/// Top-level output document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsDocument {
    pub results: Vec<Comparison>,
}

/// A GraphsReader for JSON input documents
#[derive(Debug, Clone, Default)]
pub struct JsonReader {
    /// Skip graphs that violate their invariants instead of failing
    skip_invalid: bool,
}

impl JsonReader {
    /// Creates a new (default) reader that fails on the first invalid graph
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, invalid graphs are logged and skipped
    pub fn skip_invalid(mut self, skip_invalid: bool) -> Self {
        self.skip_invalid = skip_invalid;
        self
    }
}

impl GraphsReader for JsonReader {
    fn try_read_graphs<R>(&self, reader: R) -> Result<Vec<Graph>>
    where
        R: Read,
    {
        let document: GraphsDocument = serde_json::from_reader(reader)?;

        let mut graphs = Vec::with_capacity(document.graphs.len());
        for record in document.graphs {
            match Graph::try_from(record) {
                Ok(graph) => graphs.push(graph),
                Err(err) if self.skip_invalid => warn!("skipping {err}"),
                Err(err) => return Err(err.into()),
            }
        }

        info!(graphs = graphs.len(), "loaded graphs");
        Ok(graphs)
    }
}

/// A writer for JSON documents
#[derive(Debug, Clone)]
pub struct JsonWriter {
    pretty: bool,
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonWriter {
    /// Creates a new writer producing indented output
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, the document is written on a single line
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Writes graphs as an input document
    pub fn try_write_graphs<'a, W, I>(&self, graphs: I, writer: W) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = &'a Graph>,
    {
        let document = GraphsDocument {
            graphs: graphs.into_iter().map(GraphRecord::from).collect(),
        };
        self.write_document(&document, writer)
    }

    fn write_document<T, W>(&self, document: &T, mut writer: W) -> Result<()>
    where
        T: Serialize,
        W: Write,
    {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, document)?;
        } else {
            serde_json::to_writer(&mut writer, document)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl ResultsWriter for JsonWriter {
    fn try_write_results<W>(&self, results: &[Comparison], writer: W) -> Result<()>
    where
        W: Write,
    {
        let document = ResultsDocument {
            results: results.to_vec(),
        };
        self.write_document(&document, writer)
    }
}
