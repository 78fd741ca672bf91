use thiserror::Error;

/// Reasons an edge list does not describe a solvable flow network, plus the
/// reducer-level failures of the course assignment layer.
///
/// Every variant is terminal for the current solve call: no partial results
/// are produced and nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("too few vertices: a flow network needs at least 2, got {0}")]
    TooFewVertices(usize),

    #[error("too few edges: the edge list is empty")]
    TooFewEdges,

    #[error("edge ({from}, {to}) has weight 0")]
    ZeroWeightEdge { from: usize, to: usize },

    #[error("edge ({from}, {to}) references a vertex outside 0..{num_vertices}")]
    BadEndpoint {
        from: usize,
        to: usize,
        num_vertices: usize,
    },

    #[error("self-loop on vertex {0}")]
    SelfLoop(usize),

    #[error("multiple edges from vertex {from} to vertex {to}")]
    MultiEdge { from: usize, to: usize },

    #[error("expected exactly one source vertex, found {0} candidates")]
    NoUniqueSource(usize),

    #[error("expected exactly one sink vertex, found {0} candidates")]
    NoUniqueSink(usize),

    #[error("instructor {instructor} prefers {course}, which is not an offered course")]
    UnknownCourse { instructor: String, course: String },
}
