use crate::error::{FlowError, Result};
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::matrix::Matrix;
use num_traits::{NumAssign, Signed};

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputMode {
    #[default]
    Flow,
    // capacity - flow
    Residual,
}

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DegeneratePolicy {
    #[default]
    ZeroFlow,
    Reject,
}

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct SolverOptions {
    pub output: OutputMode,
    pub degenerate: DegeneratePolicy,
}

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct SolveStats {
    pub augmentations: usize,
    pub pushes: usize,
    pub relabels: usize,
}

#[derive(Clone, PartialEq, Debug)]
pub struct FlowSolution<Flow> {
    value: Flow,
    output: OutputMode,
    matrix: Matrix<Flow>,
    stats: SolveStats,
}

impl<Flow> FlowSolution<Flow>
where
    Flow: NumAssign + Signed + Ord + Copy,
{
    pub(crate) fn from_flow(graph: &Graph<Flow>, sink: usize, flow: Matrix<Flow>, output: OutputMode, stats: SolveStats) -> Self {
        let value = flow.column_sum(sink);
        let matrix = match output {
            OutputMode::Flow => flow,
            OutputMode::Residual => graph.capacities().difference(&flow),
        };
        Self { value, output, matrix, stats }
    }

    pub(crate) fn from_residual(graph: &Graph<Flow>, sink: usize, residual: Matrix<Flow>, output: OutputMode, stats: SolveStats) -> Self {
        let flow = graph.capacities().difference(&residual);
        let value = flow.column_sum(sink);
        let matrix = match output {
            OutputMode::Flow => flow,
            OutputMode::Residual => residual,
        };
        Self { value, output, matrix, stats }
    }

    fn zero(graph: &Graph<Flow>, output: OutputMode) -> Self {
        let matrix = match output {
            OutputMode::Flow => Matrix::zeros(graph.num_nodes()),
            OutputMode::Residual => graph.capacities().clone(),
        };
        Self { value: Flow::zero(), output, matrix, stats: SolveStats::default() }
    }

    #[inline]
    pub fn value(&self) -> Flow {
        self.value
    }

    #[inline]
    pub fn output(&self) -> OutputMode {
        self.output
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix<Flow> {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix<Flow> {
        self.matrix
    }

    #[inline]
    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    // graph must be the one that was solved
    pub fn flow_matrix(&self, graph: &Graph<Flow>) -> Matrix<Flow> {
        match self.output {
            OutputMode::Flow => self.matrix.clone(),
            OutputMode::Residual => graph.capacities().difference(&self.matrix),
        }
    }
}

pub trait MaximumFlowSolver<Flow> {
    fn name(&self) -> &'static str;

    fn solve(&mut self, source: usize, sink: usize, graph: &Graph<Flow>) -> Result<FlowSolution<Flow>>;
}

// Some(_) answers a degenerate request, None means the solver should run
pub(crate) fn check_request<Flow>(source: usize, sink: usize, graph: &Graph<Flow>, options: SolverOptions) -> Result<Option<FlowSolution<Flow>>>
where
    Flow: NumAssign + Signed + Ord + Copy,
{
    let num_nodes = graph.num_nodes();
    if num_nodes > 0 {
        graph.check_vertex(source)?;
        graph.check_vertex(sink)?;
    }

    if num_nodes == 0 || source == sink {
        return match options.degenerate {
            DegeneratePolicy::ZeroFlow => Ok(Some(FlowSolution::zero(graph, options.output))),
            DegeneratePolicy::Reject => Err(FlowError::DegenerateRequest { source_vertex: source, sink, num_nodes }),
        };
    }

    graph.check_capacities()?;
    Ok(None)
}
