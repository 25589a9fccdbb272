use clap::Parser;
use pursuit::{
    config::{GameConfig, SweepConfig},
    graph::WeightedGraph,
    simulation::{FirstMover, GameOutcome, SweepCell, play_random_graphs},
    strategy::StrategyKind,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{
    error::Error,
    path::{Path, PathBuf},
    process::ExitCode,
};
use tqdm::tqdm;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Pursuit-evasion games on weighted graphs
#[derive(Parser, Debug)]
#[command(name = "pursuit")]
#[command(
    about = "Plays pursuit-evasion games on weighted graphs: one game on a graph file, or a sweep over random graphs",
    long_about = None
)]
struct Args {
    /// Play a single game on this graph description instead of sweeping random graphs
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// JSON sweep/game config; options given on the command line take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random graph sizes to sweep (comma-separated list, e.g., "10,15,20")
    #[arg(long, value_delimiter = ',')]
    sizes: Vec<usize>,

    /// Edge probabilities to sweep (comma-separated list, e.g., "0.2,0.3,0.5")
    #[arg(long, value_delimiter = ',')]
    probabilities: Vec<f64>,

    /// Games per (size, probability) pair
    #[arg(short, long)]
    runs: Option<usize>,

    #[arg(long, value_enum)]
    pursuer: Option<StrategyKind>,

    #[arg(long, value_enum)]
    evader: Option<StrategyKind>,

    /// Which player moves first once both have started
    #[arg(long, value_enum)]
    first_mover: Option<FirstMover>,

    /// Round ceiling of each game
    #[arg(long, conflicts_with = "unbounded")]
    max_rounds: Option<usize>,

    /// Play until capture, without a round ceiling
    #[arg(long)]
    unbounded: bool,

    #[arg(short, long)]
    seed: Option<u64>,

    /// Start the pursuer on this vertex (single game only, needs --evader-start)
    #[arg(long, requires = "evader_start", requires = "graph")]
    pursuer_start: Option<usize>,

    /// Start the evader on this vertex (single game only, needs --pursuer-start)
    #[arg(long, requires = "pursuer_start")]
    evader_start: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn sweep_config(&self) -> Result<SweepConfig, Box<dyn Error>> {
        let mut sweep = match &self.config {
            Some(path) => SweepConfig::from_path(path)?,
            None => SweepConfig::default(),
        };
        if !self.sizes.is_empty() {
            sweep.sizes = self.sizes.clone();
        }
        if !self.probabilities.is_empty() {
            sweep.probabilities = self.probabilities.clone();
        }
        if let Some(runs) = self.runs {
            sweep.runs = runs;
        }
        self.override_game(&mut sweep.game);
        sweep.validate()?;
        Ok(sweep)
    }

    fn override_game(&self, game: &mut GameConfig) {
        if let Some(pursuer) = self.pursuer {
            game.pursuer = pursuer;
        }
        if let Some(evader) = self.evader {
            game.evader = evader;
        }
        if let Some(first_mover) = self.first_mover {
            game.first_mover = first_mover;
        }
        if self.unbounded {
            game.max_rounds = None;
        } else if let Some(max_rounds) = self.max_rounds {
            game.max_rounds = Some(max_rounds);
        }
        if let Some(seed) = self.seed {
            game.seed = seed;
        }
    }
}

fn print_outcome(outcome: &GameOutcome, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }
    if outcome.captured {
        println!(
            "Pursuer ({}) caught the evader ({}) on {} after {} rounds ({} moves).",
            outcome.pursuer_strategy,
            outcome.evader_strategy,
            outcome.evader,
            outcome.rounds,
            outcome.moves
        );
    } else {
        println!(
            "Evader ({}) escaped the pursuer ({}) for {} rounds, ending on {} against {}.",
            outcome.evader_strategy,
            outcome.pursuer_strategy,
            outcome.rounds,
            outcome.evader,
            outcome.pursuer
        );
    }
    println!("Distance oracle runs: {}", outcome.distance_queries);
    Ok(())
}

fn run_single_game(args: &Args, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut game = match &args.config {
        Some(config) => GameConfig::from_path(config)?,
        None => GameConfig::default(),
    };
    args.override_game(&mut game);

    // unreadable or malformed descriptions give a partial graph, not a failure
    let graph = WeightedGraph::read_through(path);

    let mut rng = StdRng::seed_from_u64(game.seed);
    let mut simulation = game.simulation(&graph, &mut rng);
    if let (Some(p), Some(e)) = (args.pursuer_start, args.evader_start) {
        let vertex = |index: usize| {
            graph
                .vertex(index)
                .ok_or_else(|| format!("vertex {index} is not part of the graph"))
        };
        simulation.place(vertex(p)?, vertex(e)?)?;
    }
    let outcome = simulation.run()?;
    print_outcome(&outcome, args.json)
}

fn run_sweep(args: &Args) -> Result<(), Box<dyn Error>> {
    let sweep = args.sweep_config()?;
    let cells = sweep.cells();

    if !args.json {
        println!("Starting cartesian product sweep:");
        println!("  Sizes: {:?}", sweep.sizes);
        println!("  Probabilities: {:?}", sweep.probabilities);
        println!(
            "  Pursuer: {}, evader: {}, runs per configuration: {}",
            sweep.game.pursuer, sweep.game.evader, sweep.runs
        );
    }

    let mut seeds = StdRng::seed_from_u64(sweep.game.seed);
    let mut results: Vec<SweepCell> = Vec::with_capacity(cells.len());
    for (size, probability) in tqdm(cells.into_iter()).desc(Some("sweep")) {
        let seed = seeds.random();
        let cell = play_random_graphs(size, probability, sweep.runs, &sweep.game, seed)?;
        results.push(cell);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for cell in &results {
            println!("Size: {}, Probability: {}", cell.size, cell.probability);
            println!("  {}", cell.stats);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let result = match &args.graph {
        Some(path) => run_single_game(&args, path),
        None => run_sweep(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}
