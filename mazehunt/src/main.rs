mod logging;
mod render;
mod stats;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use std::path::PathBuf;

use gridmaze::{
    algorithms::{self, Generator, GenerationError, SearchError},
    dims::Dims,
    report::{Algorithm, Renderer as _, RunRecord, StatsSink as _},
};

use render::AsciiRenderer;
use stats::CsvStats;

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "mazehunt")]
struct Args {
    #[clap(short = 'W', long, default_value_t = 15, help = "Maze width in cells")]
    width: i32,
    #[clap(short = 'H', long, default_value_t = 9, help = "Maze height in cells")]
    height: i32,
    #[clap(short, long, help = "Seed for a reproducible maze")]
    seed: Option<u64>,
    #[clap(short, long, value_enum, default_value = "both", help = "Which explorer to run")]
    algorithm: Algo,
    #[clap(long, help = "Append run stats to this CSV file")]
    stats: Option<PathBuf>,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, repeatable")]
    verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Algo {
    Dfs,
    Astar,
    Both,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    logging::init(args.verbose);

    let maze = Generator::new(Dims(args.width, args.height))
        .with_seed_opt(args.seed)
        .generate()?;

    let mut renderer = AsciiRenderer::stdout();
    let mut sink = args.stats.clone().map(CsvStats::new);

    if matches!(args.algorithm, Algo::Dfs | Algo::Both) {
        let result = algorithms::explore(&maze.graph, maze.start, maze.end)?;

        renderer.render(&maze.view(), &result.trace)?;
        println!(
            "dfs: {} expansions, {} steps walked, path of {} nodes",
            result.expansions,
            result.trace.len(),
            result.path.len()
        );

        if let Some(sink) = &mut sink {
            sink.record(&RunRecord::now(
                Algorithm::Dfs,
                result.expansions,
                result.path.len(),
            ))?;
        }
    }

    if matches!(args.algorithm, Algo::Astar | Algo::Both) {
        let result = algorithms::find_path(&maze.graph, maze.start, maze.end)?;

        match &result.path {
            Some(path) => {
                renderer.render(&maze.view(), path)?;
                println!(
                    "astar: {} expansions, path of {} nodes",
                    result.expansions,
                    path.len()
                );
            }
            None => {
                renderer.render(&maze.view(), &[])?;
                println!("astar: {} expansions, no path found", result.expansions);
            }
        }

        if let Some(sink) = &mut sink {
            sink.record(&RunRecord::now(
                Algorithm::AStar,
                result.expansions,
                result.path_len(),
            ))?;
        }
    }

    Ok(())
}
