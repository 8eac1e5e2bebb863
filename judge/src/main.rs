use std::path::PathBuf;

use clap::Parser;
use judge::{run_session, Config, MatchLedger, Recorder, Roster};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Name of the player who plays X in the first game
    player_x: String,

    /// Name of the player who plays O in the first game
    player_o: String,

    /// JSON file with the ratings of all players; created if missing
    #[arg(short = 'R', long)]
    roster: Option<PathBuf>,

    /// How many games to play at most
    #[arg(short = 'n', long = "games", default_value_t = 1)]
    num_games: usize,

    /// Randomly decide before every game who plays X
    #[arg(long, default_value_t = false)]
    swap_sides: bool,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Record every game's moves as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let mut config = Config {
        rng: StdRng::seed_from_u64(seed),
        recorder,
        num_games: args.num_games,
        swap_sides: args.swap_sides,
    };

    let mut roster = match &args.roster {
        Some(path) => Roster::load_or_default(path)?,
        None => Roster::new(),
    };
    let mut ledger = MatchLedger::new();

    let score = run_session(
        &mut config,
        [&args.player_x, &args.player_o],
        &mut roster,
        &mut ledger,
        &mut std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
    )?;

    println!(
        "\nEnd result after {} games:\n- {}: {} wins\n- {}: {} wins\n- {} draws",
        score.games, args.player_x, score.wins[0], args.player_o, score.wins[1], score.draws
    );

    println!("\nLeaderboard:");
    for (rank, profile) in roster.standings().into_iter().enumerate() {
        println!(
            "{:>3}. {:19} {:>5} (K={})",
            rank + 1,
            profile.name,
            profile.rating.round(),
            profile.k_factor
        );
    }

    if let Some(path) = &args.roster {
        roster.save(path)?;
        info!(path = %path.display(), "Roster saved");
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
