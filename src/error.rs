use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("malformed header line {line:?}: expected a vertex count")]
    MalformedHeader { line: String },

    #[error("{num_nodes} vertices do not fit in a dense matrix")]
    TooManyVertices { num_nodes: usize },

    #[error("failed to read graph: {0}")]
    Io(#[from] std::io::Error),

    #[error("vertex {vertex} is out of range for a graph with {num_nodes} vertices")]
    VertexOutOfRange { vertex: usize, num_nodes: usize },

    #[error("degenerate request: source {source_vertex} and sink {sink} on {num_nodes} vertices")]
    DegenerateRequest { source_vertex: usize, sink: usize, num_nodes: usize },

    #[error("edge {from} -> {to} has a negative capacity")]
    NegativeCapacity { from: usize, to: usize },

    // relabel found no residual neighbour, or one whose label is below the vertex's own
    #[error("invalid labelling at vertex {vertex}: label {label}, minimum residual neighbour label {min_neighbor_label:?}")]
    InvariantViolation { vertex: usize, label: usize, min_neighbor_label: Option<usize> },
}

pub type Result<T> = std::result::Result<T, FlowError>;
