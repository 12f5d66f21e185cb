use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tokenbridge_common::RealFileSystem;

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Config file to use instead of tokenbridge.config.json
    #[arg(long)]
    pub config: Option<String>,

    /// Emit one file per category (overrides config)
    #[arg(long)]
    pub split: bool,
}

pub fn build(args: BuildArgs, cwd: &str) -> Result<()> {
    let mut config = Config::load_from(cwd, args.config.as_deref())?;
    if args.split {
        config.split_by_category = true;
    }

    let source = config.source_path(cwd);
    let build_dir = config.build_dir_path(cwd);

    println!("{}", "🔨 Building design tokens...".bright_blue().bold());
    println!("   Source: {}", source.display());

    let written = tokenbridge_tokens::build(
        &RealFileSystem,
        &source,
        &build_dir,
        &config.build_options(),
    )?;

    for path in &written {
        let relative = path.strip_prefix(cwd).unwrap_or(path);
        println!("  {} {}", "✓".green(), relative.display());
    }

    println!();
    println!(
        "{} Emitted {} file{}",
        "✅".green(),
        written.len(),
        if written.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
