mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{build, init, sync, BuildArgs, InitArgs, SyncArgs};

/// Tokenbridge CLI - design tokens in, style variables out, and back again
#[derive(Parser, Debug)]
#[command(name = "tokenbridge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new tokenbridge project
    Init(InitArgs),

    /// Flatten the token source into emitted style variables
    Build(BuildArgs),

    /// Generate component styles from the remote design document
    Sync(SyncArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Build(args) => build(args, &cwd),
        Command::Sync(args) => sync(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
