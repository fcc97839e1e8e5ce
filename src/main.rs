use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use waymark::search::{
    grid::{Cell, Connectivity, Grid},
    heuristics::GridHeuristicName,
    search_engines::{
        BestFirstEngine, BidirectionalEngine, SearchEngine, SearchEngineName, SearchResult,
    },
    SearchError,
};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(version)]
/// Find a path through a grid map.
struct Cli {
    #[arg(help = "The grid map file: one row per line, `.` free, `#` blocked")]
    map: PathBuf,
    #[arg(help = "The start cell as ROW,COL", short, long)]
    start: Cell,
    #[arg(help = "The goal cell as ROW,COL", short, long)]
    goal: Cell,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::BreadthFirst
    )]
    engine: SearchEngineName,
    #[arg(
        value_enum,
        help = "The heuristic for the heuristic-guided engine",
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = GridHeuristicName::Manhattan
    )]
    heuristic: GridHeuristicName,
    #[arg(
        value_enum,
        help = "The grid connectivity mode",
        short = 'c',
        long = "connectivity",
        id = "CONNECTIVITY",
        default_value_t = Connectivity::Four
    )]
    connectivity: Connectivity,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(&cli) {
        Ok(SearchResult::Found { path, cost }) => {
            info!(cost, hops = path.len() - 1);
            for cell in &path {
                println!("{cell}");
            }
            ExitCode::SUCCESS
        }
        Ok(SearchResult::NotFound) => {
            eprintln!("no path from {} to {}", cli.start, cli.goal);
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<SearchResult<Cell>, SearchError> {
    let text = std::fs::read_to_string(&cli.map).expect("Failed to read map file");
    let grid = Grid::from_map_text(&text, cli.connectivity)?;
    info!(height = grid.height(), width = grid.width());

    let (result, _statistics) = match cli.engine {
        SearchEngineName::BreadthFirst => {
            BestFirstEngine::breadth_first().search(&grid, &cli.start, &cli.goal)?
        }
        SearchEngineName::UniformCost => {
            BestFirstEngine::uniform_cost().search(&grid, &cli.start, &cli.goal)?
        }
        SearchEngineName::Heuristic => BestFirstEngine::heuristic_guided(cli.heuristic.create())
            .search(&grid, &cli.start, &cli.goal)?,
        SearchEngineName::Bidirectional => {
            BidirectionalEngine::new().search(&grid, &cli.start, &cli.goal)?
        }
    };
    Ok(result)
}
