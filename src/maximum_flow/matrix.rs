use num_traits::{NumAssign, Signed};
use std::ops::{Index, IndexMut};

/// Row-major `n x n` buffer. Indexing outside `0..n` panics.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct Matrix<Flow> {
    num_nodes: usize,
    cells: Vec<Flow>,
}

impl<Flow> Matrix<Flow>
where
    Flow: NumAssign + Signed + Copy,
{
    pub fn zeros(num_nodes: usize) -> Self {
        let len = num_nodes.checked_mul(num_nodes).unwrap_or_else(|| panic!("{num_nodes}x{num_nodes} matrix overflows usize"));
        Self { num_nodes, cells: vec![Flow::zero(); len] }
    }

    // None if n * n overflows or the buffer cannot be reserved
    pub fn try_zeros(num_nodes: usize) -> Option<Self> {
        let len = num_nodes.checked_mul(num_nodes)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, Flow::zero());
        Some(Self { num_nodes, cells })
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn at(&self, u: usize, v: usize) -> Flow {
        self.cells[self.offset(u, v)]
    }

    #[inline]
    pub fn at_mut(&mut self, u: usize, v: usize) -> &mut Flow {
        let offset = self.offset(u, v);
        &mut self.cells[offset]
    }

    pub fn get(&self, u: usize, v: usize) -> Option<Flow> {
        if u >= self.num_nodes || v >= self.num_nodes {
            return None;
        }
        Some(self.at(u, v))
    }

    pub fn column_sum(&self, v: usize) -> Flow {
        (0..self.num_nodes).fold(Flow::zero(), |mut sum, u| {
            sum += self.at(u, v);
            sum
        })
    }

    pub fn row_sum(&self, u: usize) -> Flow {
        self.row(u).iter().fold(Flow::zero(), |mut sum, &c| {
            sum += c;
            sum
        })
    }

    #[inline]
    pub fn row(&self, u: usize) -> &[Flow] {
        &self.cells[u * self.num_nodes..(u + 1) * self.num_nodes]
    }

    pub fn difference(&self, other: &Matrix<Flow>) -> Matrix<Flow> {
        assert_eq!(self.num_nodes, other.num_nodes);
        Matrix { num_nodes: self.num_nodes, cells: self.cells.iter().zip(other.cells.iter()).map(|(&a, &b)| a - b).collect() }
    }

    #[inline]
    fn offset(&self, u: usize, v: usize) -> usize {
        assert!(u < self.num_nodes && v < self.num_nodes, "({u}, {v}) outside a {0}x{0} matrix", self.num_nodes);
        u * self.num_nodes + v
    }
}

impl<Flow> Index<(usize, usize)> for Matrix<Flow>
where
    Flow: NumAssign + Signed + Copy,
{
    type Output = Flow;

    fn index(&self, (u, v): (usize, usize)) -> &Flow {
        &self.cells[self.offset(u, v)]
    }
}

impl<Flow> IndexMut<(usize, usize)> for Matrix<Flow>
where
    Flow: NumAssign + Signed + Copy,
{
    fn index_mut(&mut self, (u, v): (usize, usize)) -> &mut Flow {
        self.at_mut(u, v)
    }
}
