#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use minesweeper::{
    cli, init_logging, BoardConfig, GameConfig, GameSession, DEFAULT_BOMBS, DEFAULT_HEIGHT,
    DEFAULT_WIDTH,
};

#[derive(Parser)]
#[command(author, version, about = "Minesweeper in the terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Number of columns (clamped to 8..=26).
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    /// Number of rows (clamped to 8..=26).
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
    /// Bombs to place (clamped to 1..=width*height/3).
    #[arg(long, default_value_t = DEFAULT_BOMBS)]
    bombs: usize,
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Start a new game on the first click after winning or losing.
    #[arg(long)]
    restart_on_click: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::parse();

    let config = GameConfig {
        board: BoardConfig::new(args.width, args.height, args.bombs),
        restart_on_click: args.restart_on_click,
    };
    let mut session = match args.seed {
        Some(s) => {
            println!("Using fixed seed: {} (boards will be reproducible)", s);
            GameSession::with_seed(config, s)
        }
        None => GameSession::from_entropy(config),
    };
    log::info!("starting with {:?}", session.config());

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    cli::run(&mut session, stdin.lock(), &mut stdout)
}
