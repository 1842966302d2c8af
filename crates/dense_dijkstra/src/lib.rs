mod dijkstra;
pub mod error;
pub mod generator;
pub mod matrix;
pub mod path;
#[cfg(test)]
mod reference;

pub use dijkstra::shortest_path;
pub use dijkstra::try_shortest_path;
pub use error::Error;
pub use matrix::AdjacencyMatrix;
pub use path::Cost;
pub use path::PathLabels;
pub use path::PathResult;

/// The six-vertex undirected graph `v1..v6` used by the route demo.
pub fn demo_graph() -> AdjacencyMatrix {
    AdjacencyMatrix::from_undirected_edges(
        6,
        &[
            (0, 1, 7),
            (0, 3, 2),
            (1, 2, 2),
            (1, 4, 3),
            (2, 5, 4),
            (3, 4, 1),
            (4, 5, 10),
        ],
    )
}
