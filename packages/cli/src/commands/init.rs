use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing tokenbridge project...".bright_blue().bold());

    let config = Config::default();
    let json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, json + "\n")?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("Next steps:");
    println!("  1. Export your token tree to {}", config.source.bright_white());
    println!("  2. Run {} to emit style variables", "tokenbridge build".bright_white());
    println!(
        "  3. Set {} and {} and run {}",
        "FIGMA_TOKEN".bright_white(),
        "FIGMA_FILE_ID".bright_white(),
        "tokenbridge sync".bright_white()
    );

    Ok(())
}
