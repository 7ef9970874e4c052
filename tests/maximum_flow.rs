use dense_max_flow::maximum_flow::extraction::{capacity_violations, conservation_violations, cut_capacity, edge_utilization, minimum_cut, total_flow};
use dense_max_flow::{EdmondsKarp, FlowError, FlowSolution, Graph, MaximumFlowSolver, OutputMode, PushRelabelFIFO, SolverOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

fn random_graph(rng: &mut StdRng, num_nodes: usize, density: f64, max_capacity: i64) -> Graph<i64> {
    let mut graph = Graph::new(num_nodes);
    for u in 0..num_nodes {
        for v in 0..num_nodes {
            if u != v && rng.gen_bool(density) {
                *graph.at_mut(u, v) = rng.gen_range(1..=max_capacity);
            }
        }
    }
    graph
}

fn solve_both(graph: &Graph<i64>, source: usize, sink: usize) -> (FlowSolution<i64>, FlowSolution<i64>) {
    let ek = EdmondsKarp::default().solve(source, sink, graph).unwrap();
    let pr = PushRelabelFIFO::default().solve(source, sink, graph).unwrap();
    (ek, pr)
}

fn assert_valid_flow(graph: &Graph<i64>, solution: &FlowSolution<i64>, source: usize, sink: usize) {
    let flow = solution.matrix();
    assert!(conservation_violations(flow, source, sink).is_empty());
    assert!(capacity_violations(graph, flow).is_empty());
    assert_eq!(total_flow(flow, sink), solution.value());

    let n = graph.num_nodes();
    for u in 0..n {
        for v in 0..n {
            assert_eq!(flow.at(u, v), -flow.at(v, u), "flow({u}, {v}) is not skew-symmetric");
        }
    }
    // what leaves the source arrives at the sink
    assert_eq!(flow.row_sum(source), solution.value());
}

#[rstest]
#[case::diamond(4, vec![(0, 1, 3), (0, 2, 2), (1, 2, 5), (1, 3, 2), (2, 3, 3)], 0, 3, 5)]
#[case::single_edge(2, vec![(0, 1, 7)], 0, 1, 7)]
#[case::unreachable_sink(3, vec![(0, 1, 4), (2, 1, 4)], 0, 2, 0)]
#[case::classic(6, vec![(0, 1, 16), (0, 2, 13), (1, 2, 10), (1, 3, 12), (2, 1, 4), (2, 4, 14), (3, 2, 9), (3, 5, 20), (4, 3, 7), (4, 5, 4)], 0, 5, 23)]
#[case::antiparallel(3, vec![(0, 1, 5), (1, 0, 5), (1, 2, 3), (2, 1, 2)], 0, 2, 3)]
#[case::inner_source(4, vec![(1, 0, 2), (1, 3, 4), (0, 3, 1), (2, 1, 9)], 1, 3, 5)]
fn known_networks(#[case] num_nodes: usize, #[case] edges: Vec<(usize, usize, i64)>, #[case] source: usize, #[case] sink: usize, #[case] expected: i64) {
    let graph = Graph::from_edges(num_nodes, &edges);
    let (ek, pr) = solve_both(&graph, source, sink);

    assert_eq!(ek.value(), expected);
    assert_eq!(pr.value(), expected);
    assert_valid_flow(&graph, &ek, source, sink);
    assert_valid_flow(&graph, &pr, source, sink);
}

#[rstest]
#[case(1, 6, 0.5, 10)]
#[case(2, 10, 0.3, 100)]
#[case(3, 15, 0.7, 1000)]
#[case(4, 25, 0.2, 50)]
#[case(5, 40, 1.0, 1000)]
fn engines_agree_on_random_graphs(#[case] seed: u64, #[case] num_nodes: usize, #[case] density: f64, #[case] max_capacity: i64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..10 {
        let graph = random_graph(&mut rng, num_nodes, density, max_capacity);
        let source = rng.gen_range(0..num_nodes);
        let sink = (source + rng.gen_range(1..num_nodes)) % num_nodes;

        let (ek, pr) = solve_both(&graph, source, sink);
        assert_eq!(ek.value(), pr.value());
        assert_valid_flow(&graph, &ek, source, sink);
        assert_valid_flow(&graph, &pr, source, sink);

        // max-flow min-cut
        let cut = minimum_cut(&graph, ek.matrix(), source);
        assert!(!cut.contains(&sink));
        assert_eq!(cut_capacity(&graph, &cut), ek.value());
        assert_eq!(cut_capacity(&graph, &minimum_cut(&graph, pr.matrix(), source)), pr.value());
    }
}

#[test]
fn edmonds_karp_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(42);
    let graph = random_graph(&mut rng, 30, 0.4, 100);

    let first = EdmondsKarp::default().solve(0, 29, &graph).unwrap();
    let second = EdmondsKarp::default().solve(0, 29, &graph).unwrap();
    assert_eq!(first.value(), second.value());
    assert_eq!(first.stats().augmentations, second.stats().augmentations);
    assert_eq!(first.matrix(), second.matrix());
}

#[rstest]
#[case(Graph::new(0), 0, 0)]
#[case(Graph::from_edges(3, &[(0, 1, 4), (1, 2, 4)]), 1, 1)]
fn degenerate_requests_give_zero(#[case] graph: Graph<i64>, #[case] source: usize, #[case] sink: usize) {
    let (ek, pr) = solve_both(&graph, source, sink);
    assert_eq!(ek.value(), 0);
    assert_eq!(pr.value(), 0);
}

#[test]
fn residual_output_matches_flow_output() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_graph(&mut rng, 12, 0.5, 20);
    let options = SolverOptions { output: OutputMode::Residual, ..Default::default() };

    let solvers: Vec<Box<dyn MaximumFlowSolver<i64>>> = vec![Box::new(EdmondsKarp::new(options)), Box::new(PushRelabelFIFO::new(options))];
    for mut solver in solvers {
        let residual = solver.solve(0, 11, &graph).unwrap();
        assert_eq!(residual.output(), OutputMode::Residual);
        let flow = residual.flow_matrix(&graph);
        assert_eq!(total_flow(&flow, 11), residual.value());
        for u in 0..12 {
            for v in 0..12 {
                assert_eq!(residual.matrix().at(u, v), graph.at(u, v) - flow.at(u, v));
            }
        }
    }
}

#[test]
fn input_graph_is_left_untouched() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = random_graph(&mut rng, 10, 0.5, 10);
    let before = graph.clone();
    solve_both(&graph, 0, 9);
    assert_eq!(graph, before);
}

#[test]
fn reads_text_and_solves() {
    let text = "4\n0 1 3\n0 2 2\n1 2 5\n1 3 2\n2 3 3\n";
    let graph: Graph<i64> = text.parse().unwrap();
    let (ek, pr) = solve_both(&graph, 0, graph.num_nodes() - 1);
    assert_eq!(ek.value(), 5);
    assert_eq!(pr.value(), 5);

    let utilization = edge_utilization(&graph, ek.matrix());
    assert_eq!(utilization.len(), 5);
    assert!(utilization.iter().all(|e| e.flow <= e.upper));
    assert_eq!(edge_utilization(&graph, pr.matrix()).len(), 5);
}

#[test]
fn truncated_input_is_still_solvable() {
    // ingestion stops at the malformed record, so 1 -> 2 is never read
    let graph: Graph<i64> = "3\n0 1 4\n1 x 2\n1 2 4\n".parse().unwrap();
    let (ek, pr) = solve_both(&graph, 0, 2);
    assert_eq!(ek.value(), 0);
    assert_eq!(pr.value(), 0);
}

#[test]
fn malformed_header_yields_no_graph() {
    let result = "abc\n0 1 3\n".parse::<Graph<i64>>();
    assert!(matches!(result, Err(FlowError::MalformedHeader { ref line }) if line == "abc"));
}

#[test]
fn invalid_requests_are_rejected() {
    let graph = Graph::from_edges(3, &[(0, 1, 4), (1, 2, -4)]);
    let mut ek = EdmondsKarp::default();
    let mut pr = PushRelabelFIFO::default();

    assert!(matches!(ek.solve(0, 2, &graph), Err(FlowError::NegativeCapacity { from: 1, to: 2 })));
    assert!(matches!(pr.solve(0, 2, &graph), Err(FlowError::NegativeCapacity { from: 1, to: 2 })));
    assert!(matches!(ek.solve(0, 3, &graph), Err(FlowError::VertexOutOfRange { vertex: 3, num_nodes: 3 })));
    assert!(matches!(pr.solve(5, 0, &graph), Err(FlowError::VertexOutOfRange { vertex: 5, num_nodes: 3 })));
}

#[test]
fn narrow_signed_flows_keep_reverse_cells_negative() {
    let edges = [(0, 1, 3), (0, 2, 2), (1, 2, 5), (1, 3, 2), (2, 3, 3)];

    let graph: Graph<i32> = Graph::from_edges(4, &edges);
    let ek = EdmondsKarp::default().solve(0, 3, &graph).unwrap();
    assert_eq!(ek.value(), 5);
    assert_eq!(ek.matrix().at(1, 0), -3);

    let graph: Graph<i16> = Graph::from_edges(4, &edges.map(|(u, v, c)| (u, v, c as i16)));
    let pr = PushRelabelFIFO::default().solve(0, 3, &graph).unwrap();
    assert_eq!(pr.value(), 5);
    assert_eq!(pr.matrix().at(3, 1), -2);
    assert_eq!(pr.matrix().at(3, 2), -3);
}

#[test]
#[cfg(target_pointer_width = "64")]
fn oversized_vertex_count_is_refused() {
    let result = "4000000000\n0 1 3\n".parse::<Graph<i64>>();
    assert!(matches!(result, Err(FlowError::TooManyVertices { num_nodes: 4_000_000_000 })));
}
