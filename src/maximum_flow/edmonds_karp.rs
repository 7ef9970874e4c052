use crate::error::Result;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::matrix::Matrix;
use crate::maximum_flow::solver::{check_request, FlowSolution, MaximumFlowSolver, SolveStats, SolverOptions};
use log::{debug, info};
use num_traits::{Bounded, NumAssign, Signed};
use std::collections::VecDeque;

/// Shortest augmenting paths; BFS scans neighbours in ascending index order.
#[derive(Default)]
pub struct EdmondsKarp {
    options: SolverOptions,
}

impl EdmondsKarp {
    pub fn new(options: SolverOptions) -> Self {
        Self { options }
    }
}

impl<Flow> MaximumFlowSolver<Flow> for EdmondsKarp
where
    Flow: NumAssign + Signed + Ord + Copy + Bounded,
{
    fn name(&self) -> &'static str {
        "edmonds-karp"
    }

    fn solve(&mut self, source: usize, sink: usize, graph: &Graph<Flow>) -> Result<FlowSolution<Flow>> {
        if let Some(solution) = check_request(source, sink, graph, self.options)? {
            return Ok(solution);
        }

        let mut residual = graph.capacities().clone();
        let mut prev = vec![usize::MAX; graph.num_nodes()];
        let mut stats = SolveStats::default();

        while bfs(&residual, source, sink, &mut prev) {
            // calculate delta
            let mut delta = Flow::max_value();
            let mut v = sink;
            while v != source {
                let u = prev[v];
                delta = delta.min(residual.at(u, v));
                v = u;
            }

            // update residual
            let mut v = sink;
            while v != source {
                let u = prev[v];
                *residual.at_mut(u, v) -= delta;
                *residual.at_mut(v, u) += delta;
                v = u;
            }

            stats.augmentations += 1;
            debug!("augmentation {}: pushed along a path into {sink}", stats.augmentations);
        }

        let solution = FlowSolution::from_residual(graph, sink, residual, self.options.output, stats);
        info!("edmonds-karp: {} vertices, {} augmentations", graph.num_nodes(), stats.augmentations);
        Ok(solution)
    }
}

fn bfs<Flow>(residual: &Matrix<Flow>, source: usize, sink: usize, prev: &mut [usize]) -> bool
where
    Flow: NumAssign + Signed + Ord + Copy,
{
    let n = residual.num_nodes();
    let mut visited = vec![false; n];
    prev.fill(usize::MAX);

    let mut queue = VecDeque::from([source]);
    visited[source] = true;
    while let Some(u) = queue.pop_front() {
        if u == sink {
            return true;
        }
        for (v, &capacity) in residual.row(u).iter().enumerate() {
            if visited[v] || capacity <= Flow::zero() {
                continue;
            }
            visited[v] = true;
            prev[v] = u;
            queue.push_back(v);
        }
    }
    visited[sink]
}
