#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use coordinates_battleship::{
    cli::render_coordinate_table,
    prelude::*,
    GRID_SIZE, ISLANDS, SHIPS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a game in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Print the latitude and longitude of every row and column.
    Coords,
    /// Print one random ship placement as JSON.
    Layout {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            log::info!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            let mut rng = make_rng(seed);
            let mut session = GameSession::new();
            let stdin = std::io::stdin();
            run(&mut session, &mut rng, stdin.lock(), std::io::stdout())?;
        }
        Commands::Coords => {
            print!("{}", render_coordinate_table(GRID_SIZE));
        }
        Commands::Layout { seed } => {
            let mut rng = make_rng(seed);
            let ships = generate(&mut rng, &ISLANDS, &SHIPS, GRID_SIZE)
                .map_err(|e| anyhow::anyhow!(e))?;
            let layout = serde_json::json!({
                "grid_size": GRID_SIZE,
                "islands": ISLANDS,
                "ships": ships,
            });
            println!("{}", serde_json::to_string(&layout)?);
        }
    }
    Ok(())
}
