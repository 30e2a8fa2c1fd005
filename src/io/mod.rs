/*!
# IO

Utilities for reading graphs from and writing comparison results to files.

## Input Format

A JSON document listing graphs by id, node sequence and weighted edges:
```text
{ "graphs": [ { "id": 1, "nodes": ["A", "B"], "edges": [ { "from": "A", "to": "B", "weight": 4 } ] } ] }
```
Every graph is validated via [`Graph::new`]; see [`JsonReader`].

## Output Formats

- **Json**: one record per graph with the input size and both engines' results, see [`JsonWriter`].
- **Dot**: the [DOT language](https://graphviz.org/doc/info/lang.html) of GraphViz, drawing a graph
  with the edges of a spanning tree highlighted, see [`DotWriter`].

## Traits

[`GraphsReader`] and [`ResultsWriter`] are implemented by readers and writers of a specific format
and provide convenience wrappers for files.
*/

pub mod dot;
pub mod json;

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;

use crate::{algo::Comparison, prelude::*};

pub use dot::*;
pub use json::*;

/// Errors raised while reading graphs or writing results
#[derive(Debug, Error)]
pub enum IoError {
    #[error("cannot access {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError),
}

/// Shorthand for results of this module
pub type Result<T> = std::result::Result<T, IoError>;

/// Trait for types that can read a sequence of graphs in a specific format.
pub trait GraphsReader {
    /// Reads all graphs from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation of graphs in the expected
    /// format or if a graph violates its invariants.
    fn try_read_graphs<R>(&self, reader: R) -> Result<Vec<Graph>>
    where
        R: Read;

    /// Reads all graphs from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    fn try_read_graphs_file<P>(&self, path: P) -> Result<Vec<Graph>>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IoError::File {
            path: path.to_path_buf(),
            source,
        })?;
        self.try_read_graphs(BufReader::new(file))
    }
}

/// Trait for types that can write comparison results in a specific format.
pub trait ResultsWriter {
    /// Writes the results to the provided writer according to the settings in `self`.
    fn try_write_results<W>(&self, results: &[Comparison], writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the results to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    fn try_write_results_file<P>(&self, results: &[Comparison], path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| IoError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        self.try_write_results(results, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Locations searched for an input file, in order
pub const INPUT_CANDIDATES: [&str; 4] = [
    "ass_3_input.json",
    "src/main/resources/ass_3_input.json",
    "resources/ass_3_input.json",
    "input/ass_3_input.json",
];

/// Location where the sample input is created if no input exists
pub const DEFAULT_INPUT: &str = "resources/ass_3_input.json";

/// Default location of the results file
pub const DEFAULT_OUTPUT: &str = "ass_3_output.json";

/// The two reference graphs
pub const SAMPLE_INPUT: &str = r#"{
  "graphs": [
    {
      "id": 1,
      "nodes": ["A", "B", "C", "D", "E"],
      "edges": [
        {"from": "A", "to": "B", "weight": 4},
        {"from": "A", "to": "C", "weight": 3},
        {"from": "B", "to": "C", "weight": 2},
        {"from": "B", "to": "D", "weight": 5},
        {"from": "C", "to": "D", "weight": 7},
        {"from": "C", "to": "E", "weight": 8},
        {"from": "D", "to": "E", "weight": 6}
      ]
    },
    {
      "id": 2,
      "nodes": ["A", "B", "C", "D"],
      "edges": [
        {"from": "A", "to": "B", "weight": 1},
        {"from": "A", "to": "C", "weight": 4},
        {"from": "B", "to": "C", "weight": 2},
        {"from": "C", "to": "D", "weight": 3},
        {"from": "B", "to": "D", "weight": 5}
      ]
    }
  ]
}
"#;

/// Returns the first existing path among `candidates`
pub fn find_input_file<I, P>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    candidates
        .into_iter()
        .map(|p| p.as_ref().to_path_buf())
        .find(|p| p.is_file())
}

/// Writes [`SAMPLE_INPUT`] to `path`, creating missing parent directories
pub fn write_sample_input<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let wrap = |source| IoError::File {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    std::fs::write(path, SAMPLE_INPUT).map_err(wrap)?;

    info!(path = %path.display(), "created sample input");
    Ok(())
}
