//! CLI frontend for the Dicemill incremental dice game.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dicemill",
    about = "Dicemill — roll dice, chain effects, stack currency",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll every die once and show the board and payout
    Roll {
        /// RNG seed for a reproducible roll
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Number of dice on the board (1-5)
        #[arg(short, long, default_value = "1")]
        dice: usize,

        /// Mount this effect on the first slot of every die
        /// (mirror, cascade, combo, even, odd)
        #[arg(short, long)]
        effect: Option<String>,

        /// Emit events and payout as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roll repeatedly and report payout statistics
    Simulate {
        /// Number of rolls
        #[arg(short, long, default_value = "100")]
        rolls: u64,

        /// RNG seed for a reproducible run
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Number of dice on the board (1-5)
        #[arg(short, long, default_value = "1")]
        dice: usize,

        /// Mount this effect on the first slot of every die
        #[arg(short, long)]
        effect: Option<String>,

        /// Emit statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the shop stock for a given balance
    Shop {
        /// RNG seed for a reproducible stock
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Balance the stock scales against
        #[arg(short, long, default_value = "0.0")]
        balance: f64,
    },

    /// List the special-effect kinds
    Effects,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            seed,
            dice,
            effect,
            json,
        } => commands::roll::run(seed, dice, effect.as_deref(), json),
        Commands::Simulate {
            rolls,
            seed,
            dice,
            effect,
            json,
        } => commands::simulate::run(rolls, seed, dice, effect.as_deref(), json),
        Commands::Shop { seed, balance } => commands::shop::run(seed, balance),
        Commands::Effects => commands::effects::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
