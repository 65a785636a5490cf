use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use arborescence::{Edge, Graph};
use csv::{ReaderBuilder, StringRecord, Trim};
use displaydoc::Display;

#[derive(Debug, Display)]
pub enum LoadError {
    /// cannot open {path}: {source}
    Open { path: String, source: std::io::Error },
    /// malformed graph file: {0}
    Csv(csv::Error),
    /// missing vertex count on the first line
    MissingVertexCount,
    /// invalid vertex count `{0}`
    InvalidVertexCount(String),
    /// line {line}: {source}
    InvalidEdge { line: u64, source: csv::Error },
    /// line {line}: {source}
    Graph {
        line: u64,
        source: arborescence::Error,
    },
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Csv(e) | Self::InvalidEdge { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

pub fn read_graph_file(path: &Path, directed: bool) -> Result<Graph<i64>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_graph(file, directed)
}

/// Read a graph in the edge-list format: the vertex count on the first line, then one
/// `origin,destination,weight` edge per line with vertices numbered from 1.
///
/// Runs of commas count as one separator and lines that do not hold exactly three values are
/// skipped. When `directed` is false every edge also gets a reverse adjacency entry.
pub fn read_graph<R: Read>(rdr: R, directed: bool) -> Result<Graph<i64>, LoadError> {
    let mut records = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(rdr)
        .into_records();

    let first = records.next().ok_or(LoadError::MissingVertexCount)??;
    let count = tokens(&first).iter().collect::<Vec<_>>().join(",");
    let size: usize = count
        .parse()
        .map_err(|_| LoadError::InvalidVertexCount(count.clone()))?;

    let mut graph = Graph::new(size).map_err(|e| {
        log::error!("{e}");
        LoadError::InvalidVertexCount(count.clone())
    })?;
    for record in records {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        let tokens = tokens(&record);
        if tokens.len() != 3 {
            log::debug!("line {line}: skipping {} values", tokens.len());
            continue;
        }

        let edge: Edge<i64> = tokens
            .deserialize(None)
            .map_err(|source| LoadError::InvalidEdge { line, source })?;
        graph
            .add_edge(edge)
            .map_err(|source| LoadError::Graph { line, source })?;
        if !directed {
            graph
                .link(edge.origin(), edge.destination())
                .map_err(|source| LoadError::Graph { line, source })?;
        }
    }

    log::info!(
        "loaded {} vertices and {} edges",
        graph.size(),
        graph.edges().len()
    );
    Ok(graph)
}

fn tokens(record: &StringRecord) -> StringRecord {
    record.iter().filter(|t| !t.is_empty()).collect()
}
