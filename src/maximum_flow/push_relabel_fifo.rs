use crate::error::{FlowError, Result};
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::matrix::Matrix;
use crate::maximum_flow::solver::{check_request, FlowSolution, MaximumFlowSolver, SolveStats, SolverOptions};
use log::{debug, info, trace};
use num_traits::{Bounded, NumAssign, Signed};
use std::collections::VecDeque;

#[derive(Default)]
pub struct PushRelabelFIFO {
    options: SolverOptions,
}

impl PushRelabelFIFO {
    pub fn new(options: SolverOptions) -> Self {
        Self { options }
    }
}

impl<Flow> MaximumFlowSolver<Flow> for PushRelabelFIFO
where
    Flow: NumAssign + Signed + Ord + Copy + Bounded,
{
    fn name(&self) -> &'static str {
        "push-relabel"
    }

    fn solve(&mut self, source: usize, sink: usize, graph: &Graph<Flow>) -> Result<FlowSolution<Flow>> {
        if let Some(solution) = check_request(source, sink, graph, self.options)? {
            return Ok(solution);
        }

        let mut preflow = Preflow::new(graph, source, sink)?;
        preflow.saturate_source();
        preflow.run()?;

        let stats = preflow.stats();
        info!("push-relabel: {} vertices, {} pushes, {} relabels", graph.num_nodes(), stats.pushes, stats.relabels);
        Ok(FlowSolution::from_flow(graph, sink, preflow.into_flow(), self.options.output, stats))
    }
}

/// Working state of one push-relabel run.
///
/// Invariants between steps:
/// - `label(source) == num_nodes` and labels never decrease;
/// - every vertex other than the source and the sink with positive excess
///   is in the active queue exactly once;
/// - `flow(u, v) == -flow(v, u)` and `flow(u, v) <= capacity(u, v)`.
///
/// The source's excess starts at `Flow::max_value()` as unbounded supply.
pub struct Preflow<'a, Flow> {
    capacities: &'a Matrix<Flow>,
    flow: Matrix<Flow>,
    labels: Vec<usize>,
    excesses: Vec<Flow>,
    active_nodes: VecDeque<usize>,
    source: usize,
    sink: usize,
    stats: SolveStats,
}

impl<'a, Flow> Preflow<'a, Flow>
where
    Flow: NumAssign + Signed + Ord + Copy + Bounded,
{
    pub fn new(graph: &'a Graph<Flow>, source: usize, sink: usize) -> Result<Self> {
        graph.check_vertex(source)?;
        graph.check_vertex(sink)?;
        let n = graph.num_nodes();
        if source == sink {
            return Err(FlowError::DegenerateRequest { source_vertex: source, sink, num_nodes: n });
        }

        let mut labels = vec![0; n];
        labels[source] = n;
        let mut excesses = vec![Flow::zero(); n];
        excesses[source] = Flow::max_value();

        Ok(Self { capacities: graph.capacities(), flow: Matrix::zeros(n), labels, excesses, active_nodes: VecDeque::new(), source, sink, stats: SolveStats::default() })
    }

    pub fn saturate_source(&mut self) {
        for v in 0..self.num_nodes() {
            if v != self.source {
                self.move_excess(self.source, v);
            }
        }
        debug!("pre-flow created, {} active vertices", self.active_nodes.len());
    }

    pub fn run(&mut self) -> Result<()> {
        while self.step()? {}
        Ok(())
    }

    // discharges the front of the queue; false once the queue is empty
    pub fn step(&mut self) -> Result<bool> {
        match self.active_nodes.pop_front() {
            Some(u) => self.discharge(u).map(|()| true),
            None => Ok(false),
        }
    }

    pub fn discharge(&mut self, u: usize) -> Result<()> {
        for v in 0..self.num_nodes() {
            if v != u {
                self.push(u, v);
            }
        }

        self.relabel(u)?;

        if self.excesses[u] > Flow::zero() {
            self.active_nodes.push_back(u);
        }
        Ok(())
    }

    pub fn push(&mut self, u: usize, v: usize) -> bool {
        if self.excesses[u] <= Flow::zero() || !self.is_admissible(u, v) {
            return false;
        }
        self.move_excess(u, v)
    }

    // a residual neighbour below label(u), or none at all, is an error
    pub fn relabel(&mut self, u: usize) -> Result<bool> {
        if self.excesses[u] <= Flow::zero() {
            return Ok(false);
        }

        let min_neighbor_label = (0..self.num_nodes()).filter(|&v| v != u && self.residual(u, v) > Flow::zero()).map(|v| self.labels[v]).min();

        match min_neighbor_label {
            Some(min) if min >= self.labels[u] => {
                debug!("relabel {u}: {} -> {}", self.labels[u], min + 1);
                self.labels[u] = min + 1;
                self.stats.relabels += 1;
                Ok(true)
            }
            _ => Err(FlowError::InvariantViolation { vertex: u, label: self.labels[u], min_neighbor_label }),
        }
    }

    #[inline]
    pub fn residual(&self, u: usize, v: usize) -> Flow {
        self.capacities.at(u, v) - self.flow.at(u, v)
    }

    #[inline]
    pub fn is_admissible(&self, u: usize, v: usize) -> bool {
        self.residual(u, v) > Flow::zero() && self.labels[u] == self.labels[v] + 1
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn label(&self, u: usize) -> usize {
        self.labels[u]
    }

    #[inline]
    pub fn excess(&self, u: usize) -> Flow {
        self.excesses[u]
    }

    #[inline]
    pub fn flow(&self) -> &Matrix<Flow> {
        &self.flow
    }

    pub fn active_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.active_nodes.iter().copied()
    }

    #[inline]
    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    pub fn into_flow(self) -> Matrix<Flow> {
        self.flow
    }

    fn move_excess(&mut self, u: usize, v: usize) -> bool {
        let delta = self.excesses[u].min(self.residual(u, v));
        if delta <= Flow::zero() {
            return false;
        }

        let was_inactive = self.excesses[v] == Flow::zero();
        *self.flow.at_mut(u, v) += delta;
        *self.flow.at_mut(v, u) -= delta;
        self.excesses[u] -= delta;
        self.excesses[v] += delta;
        self.stats.pushes += 1;
        trace!("push {u} -> {v}");

        if was_inactive && v != self.source && v != self.sink {
            self.active_nodes.push_back(v);
        }
        true
    }
}
