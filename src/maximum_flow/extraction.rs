use crate::maximum_flow::graph::{Edge, Graph};
use crate::maximum_flow::matrix::Matrix;
use num_traits::{NumAssign, Signed};
use std::collections::VecDeque;

pub fn total_flow<Flow>(flow: &Matrix<Flow>, sink: usize) -> Flow
where
    Flow: NumAssign + Signed + Copy,
{
    flow.column_sum(sink)
}

pub fn edge_utilization<Flow>(original: &Graph<Flow>, flow: &Matrix<Flow>) -> Vec<Edge<Flow>>
where
    Flow: NumAssign + Signed + Ord + Copy,
{
    original.edges().map(|edge| Edge { flow: flow.at(edge.from, edge.to), ..edge }).collect()
}

pub fn inflow<Flow>(flow: &Matrix<Flow>, v: usize) -> Flow
where
    Flow: NumAssign + Signed + Ord + Copy,
{
    (0..flow.num_nodes()).map(|u| flow.at(u, v)).filter(|&f| f > Flow::zero()).fold(Flow::zero(), |mut sum, f| {
        sum += f;
        sum
    })
}

pub fn outflow<Flow>(flow: &Matrix<Flow>, v: usize) -> Flow
where
    Flow: NumAssign + Signed + Ord + Copy,
{
    flow.row(v).iter().filter(|&&f| f > Flow::zero()).fold(Flow::zero(), |mut sum, &f| {
        sum += f;
        sum
    })
}

// negative cells are the reverse side of a skew-symmetric pair
pub fn net_outflow<Flow>(flow: &Matrix<Flow>, v: usize) -> Flow
where
    Flow: NumAssign + Signed + Ord + Copy,
{
    outflow(flow, v) - inflow(flow, v)
}

pub fn conservation_violations<Flow>(flow: &Matrix<Flow>, source: usize, sink: usize) -> Vec<usize>
where
    Flow: NumAssign + Signed + Ord + Copy,
{
    (0..flow.num_nodes()).filter(|&v| v != source && v != sink && net_outflow(flow, v) != Flow::zero()).collect()
}

pub fn capacity_violations<Flow>(original: &Graph<Flow>, flow: &Matrix<Flow>) -> Vec<(usize, usize)>
where
    Flow: NumAssign + Signed + Ord + Copy,
{
    let n = original.num_nodes();
    (0..n).flat_map(|u| (0..n).map(move |v| (u, v))).filter(|&(u, v)| flow.at(u, v) > original.at(u, v)).collect()
}

/// Source side of a minimum cut, in BFS order.
pub fn minimum_cut<Flow>(original: &Graph<Flow>, flow: &Matrix<Flow>, source: usize) -> Vec<usize>
where
    Flow: NumAssign + Signed + Ord + Copy,
{
    let n = original.num_nodes();
    if n == 0 {
        return Vec::new();
    }

    let mut cut = Vec::new();
    let mut visited = vec![false; n];
    let mut que = VecDeque::from([source]);
    visited[source] = true;

    while let Some(u) = que.pop_front() {
        cut.push(u);
        for v in 0..n {
            if !visited[v] && original.at(u, v) - flow.at(u, v) > Flow::zero() {
                visited[v] = true;
                que.push_back(v);
            }
        }
    }

    cut
}

pub fn cut_capacity<Flow>(original: &Graph<Flow>, side: &[usize]) -> Flow
where
    Flow: NumAssign + Signed + Ord + Copy,
{
    let mut inside = vec![false; original.num_nodes()];
    side.iter().for_each(|&u| inside[u] = true);
    original.edges().filter(|e| inside[e.from] && !inside[e.to]).fold(Flow::zero(), |mut sum, e| {
        sum += e.upper;
        sum
    })
}
