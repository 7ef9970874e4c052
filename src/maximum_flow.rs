pub mod edmonds_karp;
pub mod extraction;
pub mod graph;
pub mod matrix;
pub mod push_relabel_fifo;
pub mod solver;
