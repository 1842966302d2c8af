//! TOML description of the graph to query.
//!
//! ```toml
//! vertices = 3
//! undirected = true
//!
//! [[edges]]
//! from = 1
//! to = 2
//! weight = 7
//! ```
//!
//! Vertices are numbered from 1, matching the rendered table.

use std::fs;
use std::path::Path;

use dense_dijkstra::AdjacencyMatrix;
use log::info;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid graph file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("graph must have at least one vertex")]
    NoVertices,

    #[error("edge {index} references vertex {vertex}, expected 1..={vertices}")]
    VertexOutOfRange {
        index: usize,
        vertex: usize,
        vertices: usize,
    },
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct EdgeConfig {
    pub from: usize,
    pub to: usize,
    pub weight: u64,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct GraphConfig {
    pub vertices: usize,
    #[serde(default = "default_undirected")]
    pub undirected: bool,
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
}

fn default_undirected() -> bool {
    true
}

impl GraphConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::parse(&content)?;
        info!(
            "loaded graph from {}: {} vertices, {} edges",
            path.display(),
            config.vertices,
            config.edges.len()
        );
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: GraphConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.vertices == 0 {
            return Err(ConfigError::NoVertices);
        }
        for (index, edge) in self.edges.iter().enumerate() {
            for vertex in [edge.from, edge.to] {
                if vertex == 0 || vertex > self.vertices {
                    return Err(ConfigError::VertexOutOfRange {
                        index,
                        vertex,
                        vertices: self.vertices,
                    });
                }
            }
        }
        Ok(())
    }

    /// Builds the 0-based matrix. Later edges overwrite earlier ones.
    pub fn to_matrix(&self) -> AdjacencyMatrix {
        let mut matrix = AdjacencyMatrix::new(self.vertices);
        for edge in &self.edges {
            let (from, to) = (edge.from - 1, edge.to - 1);
            if self.undirected {
                matrix.set_undirected_edge(from, to, edge.weight);
            } else {
                matrix.set_edge(from, to, edge.weight);
            }
        }
        matrix
    }
}
