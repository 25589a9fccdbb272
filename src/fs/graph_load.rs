use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::{info, warn};

use crate::{
    fs::LoadError,
    graph::{VertexId, WeightedGraph},
};

/// Largest vertex count a description may declare.
pub const MAX_VERTICES: usize = 1 << 22;

impl WeightedGraph {
    /// Loads a graph description, failing on the first problem.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path.as_ref())?;
        Self::parse(BufReader::new(file))
    }

    /// Loads a graph description, never failing.
    ///
    /// Problems are logged and whatever was built up to that point is returned: an
    /// empty graph if the file cannot be opened, the vertices and the edges read so far
    /// if a line is malformed.
    pub fn read_through(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut graph = WeightedGraph::new();
        let result = File::open(path)
            .map_err(LoadError::from)
            .and_then(|file| Self::parse_into(BufReader::new(file), &mut graph));

        match result {
            Ok(()) => info!(
                path = %path.display(),
                vertices = graph.vertex_count(),
                edges = graph.edge_count(),
                "graph loaded"
            ),
            Err(error) => warn!(
                path = %path.display(),
                %error,
                vertices = graph.vertex_count(),
                edges = graph.edge_count(),
                "graph description only partially read"
            ),
        }
        graph
    }

    /// Parses a graph description from any buffered reader.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut graph = WeightedGraph::new();
        Self::parse_into(reader, &mut graph)?;
        Ok(graph)
    }

    /// Appends the described vertices and edges to `graph`, stopping at the first error.
    /// Vertex indices in the edge lines are relative to the first vertex created here.
    fn parse_into<R: BufRead>(reader: R, graph: &mut WeightedGraph) -> Result<(), LoadError> {
        let mut lines = reader.lines();

        let header = lines.next().ok_or(LoadError::MissingHeader)??;
        let count = parse_vertex_count(&header)?;
        let ids: Vec<VertexId> = (0..count).map(|_| graph.add_vertex()).collect();

        // column names, e.g. "start,end"
        let _ = lines.next().transpose()?;

        for (offset, line) in lines.enumerate() {
            let line = line?;
            let number = offset + 3;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let (start, end, weight) =
                parse_edge(trimmed).ok_or_else(|| LoadError::MalformedEdge {
                    line: number,
                    content: trimmed.to_string(),
                })?;
            let lookup = |index: usize| {
                ids.get(index)
                    .copied()
                    .ok_or(LoadError::VertexOutOfRange {
                        line: number,
                        index,
                        count,
                    })
            };
            let (u, v) = (lookup(start)?, lookup(end)?);
            graph
                .add_edge(u, v, weight)
                .map_err(|error| LoadError::Graph {
                    line: number,
                    error,
                })?;
        }
        Ok(())
    }
}

/// `Vertices: 12` or a bare `12`, at most [`MAX_VERTICES`].
fn parse_vertex_count(header: &str) -> Result<usize, LoadError> {
    let count = match header.split_once(": ") {
        Some((_, count)) => count,
        None => header,
    };
    let count = count
        .trim()
        .parse()
        .map_err(|_| LoadError::MalformedHeader(header.to_string()))?;
    if count > MAX_VERTICES {
        return Err(LoadError::TooManyVertices {
            count,
            max: MAX_VERTICES,
        });
    }
    Ok(count)
}

fn parse_edge(line: &str) -> Option<(usize, usize, f64)> {
    let mut fields = line.split(',').map(str::trim);
    let start = fields.next()?.parse().ok()?;
    let end = fields.next()?.parse().ok()?;
    let weight = match fields.next() {
        Some(w) => w.parse().ok()?,
        None => 1.0,
    };
    if fields.next().is_some() {
        return None;
    }
    Some((start, end, weight))
}
