use crate::error::{FlowError, Result};
use crate::maximum_flow::matrix::Matrix;
use log::{debug, warn};
use num_traits::{NumAssign, Signed};
use std::io::BufRead;
use std::str::FromStr;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
}

/// Capacitated directed graph over vertices `0..num_nodes`, stored as a
/// dense capacity matrix. Cloning copies the whole matrix.
///
/// `Flow` must be signed: solvers keep reverse flow as negative cells.
///
/// ```compile_fail
/// let graph: dense_max_flow::Graph<u32> = dense_max_flow::Graph::new(2);
/// ```
#[derive(Default, Clone, PartialEq, Debug)]
pub struct Graph<Flow> {
    capacities: Matrix<Flow>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Signed + Ord + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        Self { capacities: Matrix::zeros(num_nodes) }
    }

    pub fn from_edges(num_nodes: usize, edges: &[(usize, usize, Flow)]) -> Self {
        let mut graph = Self::new(num_nodes);
        for &(from, to, upper) in edges {
            graph.capacities[(from, to)] = upper;
        }
        graph
    }

    /// Reads the line-oriented text format: a vertex count on the first
    /// line, then one `from to capacity` record per line.
    ///
    /// Ingestion stops quietly at end of input or at the first record that
    /// is not exactly three integers naming vertices in range; what was
    /// read up to that point is kept. Only an unreadable header is an
    /// error.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self>
    where
        Flow: FromStr,
    {
        let mut lines = reader.lines();
        let header = lines.next().transpose()?.unwrap_or_default();
        let num_nodes = match header.split_whitespace().next().map(str::parse::<usize>) {
            Some(Ok(n)) => n,
            _ => return Err(FlowError::MalformedHeader { line: header }),
        };

        let capacities = Matrix::try_zeros(num_nodes).ok_or(FlowError::TooManyVertices { num_nodes })?;
        let mut graph = Self { capacities };
        let mut records = 0;
        for line in lines {
            let line = line?;
            match parse_edge_record::<Flow>(&line, num_nodes) {
                Some((from, to, upper)) => {
                    graph.capacities[(from, to)] = upper;
                    records += 1;
                }
                None => {
                    if !line.trim().is_empty() {
                        warn!("stopped reading edges at {line:?} after {records} records");
                    }
                    break;
                }
            }
        }
        debug!("read graph with {num_nodes} vertices and {records} edge records");

        Ok(graph)
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.capacities.num_nodes()
    }

    pub fn num_edges(&self) -> usize {
        self.edges().count()
    }

    #[inline]
    pub fn capacities(&self) -> &Matrix<Flow> {
        &self.capacities
    }

    #[inline]
    pub fn at(&self, u: usize, v: usize) -> Flow {
        self.capacities.at(u, v)
    }

    #[inline]
    pub fn at_mut(&mut self, u: usize, v: usize) -> &mut Flow {
        self.capacities.at_mut(u, v)
    }

    // returns the previous capacity of the pair
    pub fn add_directed_edge(&mut self, from: usize, to: usize, upper: Flow) -> Option<Flow> {
        if from >= self.num_nodes() || to >= self.num_nodes() {
            return None;
        }
        Some(std::mem::replace(self.capacities.at_mut(from, to), upper))
    }

    pub fn get_edge(&self, from: usize, to: usize) -> Option<Edge<Flow>> {
        let upper = self.capacities.get(from, to)?;
        Some(Edge { from, to, flow: Flow::zero(), upper })
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge<Flow>> + '_ {
        let n = self.num_nodes();
        (0..n).flat_map(move |from| {
            self.capacities.row(from).iter().enumerate().filter(|(_, upper)| **upper > Flow::zero()).map(move |(to, &upper)| Edge { from, to, flow: Flow::zero(), upper })
        })
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex >= self.num_nodes() {
            return Err(FlowError::VertexOutOfRange { vertex, num_nodes: self.num_nodes() });
        }
        Ok(())
    }

    pub(crate) fn check_capacities(&self) -> Result<()> {
        let n = self.num_nodes();
        for from in 0..n {
            if let Some(to) = self.capacities.row(from).iter().position(|&c| c < Flow::zero()) {
                return Err(FlowError::NegativeCapacity { from, to });
            }
        }
        Ok(())
    }
}

impl<Flow> FromStr for Graph<Flow>
where
    Flow: NumAssign + Signed + Ord + Copy + FromStr,
{
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

fn parse_edge_record<Flow: FromStr>(line: &str, num_nodes: usize) -> Option<(usize, usize, Flow)> {
    let mut fields = line.split_whitespace();
    let from: usize = fields.next()?.parse().ok()?;
    let to: usize = fields.next()?.parse().ok()?;
    let upper: Flow = fields.next()?.parse().ok()?;
    if fields.next().is_some() || from >= num_nodes || to >= num_nodes {
        return None;
    }
    Some((from, to, upper))
}
