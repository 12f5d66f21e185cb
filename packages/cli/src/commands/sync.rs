use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::io::Write;
use tokenbridge_common::RealFileSystem;
use tokenbridge_sync::{find_components, write_component_scss, ComponentRef, FigmaClient, LookupMaps};

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Pick the component whose name contains this text instead of prompting
    #[arg(short, long)]
    pub component: Option<String>,
}

pub fn sync(args: SyncArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(args, cwd, &config))
}

async fn run(args: SyncArgs, cwd: &str, config: &Config) -> Result<()> {
    let client = FigmaClient::from_env()?;

    println!("{}", "🔍 Discovering components...".bright_blue().bold());
    let components = client.components().await?;

    if components.is_empty() {
        println!("{}", "No components found in the document.".yellow());
        println!("Hint: only main components are listed, not plain frames.");
        return Ok(());
    }

    println!("{} Found {} components", "✅".green(), components.len());
    for (index, component) in components.iter().enumerate() {
        println!("{}. [{}] | ID: {}", index + 1, component.name, component.node_id);
    }

    let chosen = choose(&components, args.component.as_deref())?;
    println!();
    println!("🚀 Syncing \"{}\"...", chosen.name.bright_white());

    let node = client.node(&chosen.node_id).await?;

    let fs = RealFileSystem;
    let maps = LookupMaps::load(&fs, &config.build_dir_path(cwd), config.split_by_category);
    let components_dir = config.components_dir_path(cwd);

    // The fetched subtree may nest further components; generate for each,
    // the picked node first
    let targets = find_components(&node);
    let targets = if targets.is_empty() { vec![&node] } else { targets };

    for target in targets {
        let path = write_component_scss(&fs, &components_dir, target, &maps)?;
        let relative = path.strip_prefix(cwd).unwrap_or(&path);
        println!("  {} {}", "✓".green(), relative.display());
    }

    println!();
    println!("{} Component styles generated", "🎉".green());
    Ok(())
}

fn choose<'a>(components: &'a [ComponentRef], filter: Option<&str>) -> Result<&'a ComponentRef> {
    if let Some(filter) = filter {
        let needle = filter.to_lowercase();
        return components
            .iter()
            .find(|c| c.name.to_lowercase().contains(&needle))
            .ok_or_else(|| anyhow!("No component matching {:?}", filter));
    }

    if components.len() == 1 {
        return Ok(&components[0]);
    }

    prompt_select(components)
}

/// Numbered single-select prompt on stdin
fn prompt_select(components: &[ComponentRef]) -> Result<&ComponentRef> {
    loop {
        print!("Select a component [1-{}]: ", components.len());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            return Err(anyhow!("stdin closed before a component was selected"));
        }

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=components.len()).contains(&n) => return Ok(&components[n - 1]),
            _ => println!("{}", "Enter one of the listed numbers.".yellow()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(names: &[&str]) -> Vec<ComponentRef> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| ComponentRef {
                node_id: format!("1:{}", i),
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_choose_by_filter() {
        let components = refs(&["Card", "Primary Button", "Badge"]);
        let chosen = choose(&components, Some("button")).unwrap();
        assert_eq!(chosen.name, "Primary Button");
    }

    #[test]
    fn test_choose_filter_miss() {
        let components = refs(&["Card"]);
        assert!(choose(&components, Some("button")).is_err());
    }

    #[test]
    fn test_choose_single_without_prompt() {
        let components = refs(&["Card"]);
        let chosen = choose(&components, None).unwrap();
        assert_eq!(chosen.name, "Card");
    }
}
