//! Command-line front end for the shortest-path engine.
//!
//! Run: cargo run --bin sssp -- dijkstra < graph.txt
//!
//! Set `RUST_LOG=debug` to see search statistics.

use std::error::Error;
use std::io::{self, Read};

use clap::{Parser, Subcommand};
use log::{debug, warn};
use sssp_core::{Coord, Graph, Grid};
use sssp_demos::InputError;
use sssp_demos::builtin;
use sssp_demos::input::{self, Dims};
use sssp_demos::maze::random_maze;
use sssp_demos::report::{self, AstarReport, GraphReport, LeeReport};
use sssp_paths::{astar, bellman_ford, dijkstra, euclidean, heuristic_table, lee_bfs};

#[derive(Parser)]
#[command(name = "sssp", version, about = "Single-source shortest paths", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dijkstra on a graph read from stdin (non-negative weights)
    Dijkstra,
    /// Bellman-Ford on a graph read from stdin, reporting negative cycles
    BellmanFord {
        /// Run the bundled five-vertex example instead of reading stdin
        #[arg(long)]
        builtin: bool,
    },
    /// A* on the bundled six-node coordinate graph
    Astar {
        #[arg(long, default_value_t = 0)]
        start: usize,

        #[arg(long, default_value_t = 3)]
        goal: usize,
    },
    /// Lee breadth-first search on a maze read from stdin
    Lee {
        /// Use the bundled 5x7 maze
        #[arg(long)]
        builtin: bool,

        /// Generate a random maze of this size instead, e.g. 20x40
        #[arg(long, value_parser = input::parse_dims, conflicts_with = "builtin")]
        random: Option<Dims>,

        /// Percentage of blocked cells in a random maze
        #[arg(long, default_value_t = 30)]
        density: u32,

        /// Seed for the random maze
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Start cell as ROW,COL
        #[arg(long, value_parser = input::parse_coord, default_value = "0,0")]
        start: Coord,

        /// Goal cell as ROW,COL; defaults to the bottom-right corner for
        /// bundled and random mazes
        #[arg(long, value_parser = input::parse_coord)]
        goal: Option<Coord>,

        /// Explore every reachable cell and print the distance map
        #[arg(long)]
        flood: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let json = cli.json;
    let out = match cli.command {
        Commands::Dijkstra => {
            let input = input::parse_graph::<i64>(&read_stdin()?)?;
            if input.edges.iter().any(|e| e.weight < 0) {
                warn!("negative edge weights; Dijkstra distances may be wrong");
            }
            let graph = Graph::from(input.edges);
            let state = dijkstra(&graph, input.source);
            report::render(
                &GraphReport::from_search(&state),
                json,
                report::dijkstra_text,
            )?
        }
        Commands::BellmanFord { builtin } => {
            let (edges, source) = if builtin {
                (builtin::bellman_ford_graph(), 0)
            } else {
                let input = input::parse_graph::<i64>(&read_stdin()?)?;
                (input.edges, input.source)
            };
            let res = bellman_ford(&edges, source);
            report::render(
                &GraphReport::from_bellman_ford(&res),
                json,
                report::bellman_ford_text,
            )?
        }
        Commands::Astar { start, goal } => {
            let n = builtin::COORDS.len();
            for vertex in [start, goal] {
                if vertex >= n {
                    return Err(InputError::VertexOutOfRange { vertex, n }.into());
                }
            }
            let graph = builtin::coordinate_graph();
            let h = heuristic_table(n, goal, |v, g| euclidean(builtin::COORDS[v], builtin::COORDS[g]));
            let res = astar(&graph, start, goal, &h);
            report::render(&AstarReport::new(start, goal, res), json, |r| r.to_string())?
        }
        Commands::Lee {
            builtin,
            random,
            density,
            seed,
            start,
            goal,
            flood,
        } => {
            let (grid, goal) = if builtin {
                let grid = builtin::maze();
                let goal = goal.or(Some(corner(&grid)));
                (grid, goal)
            } else if let Some(dims) = random {
                let goal = goal.unwrap_or(Coord::new(dims.rows - 1, dims.cols - 1));
                (random_maze(dims, density, seed, &[start, goal]), Some(goal))
            } else {
                let grid: Grid = read_stdin()?.parse().map_err(InputError::from)?;
                (grid, goal)
            };
            debug!("lee on {}x{} maze from {start}", grid.rows(), grid.cols());

            // Without a goal there is nothing to stop at.
            let flood = flood || goal.is_none();
            let res = lee_bfs(&grid, start, goal, !flood);
            let rep = LeeReport::new(&res, goal, flood);
            report::render(&rep, json, |r| report::lee_text(r, &grid))?
        }
    };
    print!("{out}");
    Ok(())
}

fn corner(grid: &Grid) -> Coord {
    Coord::new(grid.rows() - 1, grid.cols() - 1)
}

fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
