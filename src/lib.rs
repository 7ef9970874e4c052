pub mod error;
pub mod maximum_flow;

pub use error::{FlowError, Result};
pub use maximum_flow::edmonds_karp::EdmondsKarp;
pub use maximum_flow::graph::Graph;
pub use maximum_flow::matrix::Matrix;
pub use maximum_flow::push_relabel_fifo::{Preflow, PushRelabelFIFO};
pub use maximum_flow::solver::{DegeneratePolicy, FlowSolution, MaximumFlowSolver, OutputMode, SolveStats, SolverOptions};
