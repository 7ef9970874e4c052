use dense_max_flow::maximum_flow::extraction::{edge_utilization, minimum_cut};
use dense_max_flow::{EdmondsKarp, Graph, MaximumFlowSolver, PushRelabelFIFO, Result, SolverOptions};
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;
use std::time::Instant;

const USAGE: &str = "[-v|--verbose] [-a|--algorithm edmonds-karp|push-relabel|both] graph_file";

#[derive(Clone, Copy, PartialEq, Debug)]
enum Algorithm {
    EdmondsKarp,
    PushRelabel,
    Both,
}

#[derive(Debug)]
struct Args {
    path: String,
    verbose: bool,
    algorithm: Algorithm,
}

// Ok(None) when no graph file was given
fn parse_args(mut argv: impl Iterator<Item = String>) -> std::result::Result<Option<Args>, String> {
    let mut path = None;
    let mut verbose = false;
    let mut algorithm = Algorithm::Both;

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "-a" | "--algorithm" => {
                algorithm = match argv.next().as_deref() {
                    Some("edmonds-karp") | Some("ek") => Algorithm::EdmondsKarp,
                    Some("push-relabel") | Some("pr") => Algorithm::PushRelabel,
                    Some("both") => Algorithm::Both,
                    other => return Err(format!("unknown algorithm {other:?}")),
                }
            }
            _ if path.is_none() => path = Some(arg),
            _ => return Err(format!("unexpected argument {arg:?}")),
        }
    }

    Ok(path.map(|path| Args { path, verbose, algorithm }))
}

fn solvers(algorithm: Algorithm) -> Vec<Box<dyn MaximumFlowSolver<i64>>> {
    let options = SolverOptions::default();
    match algorithm {
        Algorithm::EdmondsKarp => vec![Box::new(EdmondsKarp::new(options))],
        Algorithm::PushRelabel => vec![Box::new(PushRelabelFIFO::new(options))],
        Algorithm::Both => vec![Box::new(EdmondsKarp::new(options)), Box::new(PushRelabelFIFO::new(options))],
    }
}

fn report(solver: &mut dyn MaximumFlowSolver<i64>, graph: &Graph<i64>, verbose: bool, labelled: bool) -> Result<()> {
    let source = 0;
    let sink = graph.num_nodes().saturating_sub(1);

    let start = Instant::now();
    let solution = solver.solve(source, sink, graph)?;
    let elapsed = start.elapsed().as_micros();
    debug!("{} stats: {:?}", solver.name(), solution.stats());

    let prefix = if labelled { format!("{}: ", solver.name()) } else { String::new() };
    if verbose {
        println!("{prefix}{} vertices, {} edges", graph.num_nodes(), graph.num_edges());
        for edge in edge_utilization(graph, solution.matrix()) {
            println!("u: {} v: {} {}/{}", edge.from, edge.to, edge.flow, edge.upper);
        }
        println!("Total flow: {}", solution.value());
        let cut: Vec<String> = minimum_cut(graph, solution.matrix(), source).iter().map(usize::to_string).collect();
        println!("Minimum cut source side: {}", cut.join(" "));
        println!("Elapsed: {elapsed} us");
    } else {
        println!("{prefix}{}, {elapsed}", solution.value());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let mut argv = std::env::args();
    let program = argv.next().unwrap_or_else(|| "maxflow".to_string());
    let args = match parse_args(argv) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("Usage: {program} {USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Usage: {program} {USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let file = match File::open(&args.path) {
        Ok(file) => file,
        Err(err) => {
            info!("cannot open {}: {err}", args.path);
            eprintln!("Failed to open graph file");
            return ExitCode::FAILURE;
        }
    };

    let graph: Graph<i64> = match Graph::from_reader(BufReader::new(file)) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let labelled = args.algorithm == Algorithm::Both;
    for mut solver in solvers(args.algorithm) {
        if let Err(err) = report(solver.as_mut(), &graph, args.verbose, labelled) {
            eprintln!("{}: {err}", solver.name());
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
