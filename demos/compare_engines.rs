use dense_max_flow::maximum_flow::extraction::edge_utilization;
use dense_max_flow::{EdmondsKarp, Graph, MaximumFlowSolver, PushRelabelFIFO};

fn main() -> dense_max_flow::Result<()> {
    env_logger::init();

    let graph: Graph<i64> = "4\n0 1 3\n0 2 2\n1 2 5\n1 3 2\n2 3 3\n".parse()?;

    let solvers: Vec<Box<dyn MaximumFlowSolver<i64>>> = vec![Box::new(EdmondsKarp::default()), Box::new(PushRelabelFIFO::default())];
    for mut solver in solvers {
        let solution = solver.solve(0, 3, &graph)?;
        println!("{}: maximum flow {} ({:?})", solver.name(), solution.value(), solution.stats());
        for edge in edge_utilization(&graph, solution.matrix()) {
            println!("{:?}", edge);
        }
    }

    Ok(())
}
