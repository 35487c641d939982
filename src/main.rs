use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use mahout_search::build::{run_build, RankingOverrides};
use mahout_search::{search, shown_count, IndexFile};

mod cli;
use cli::{display, Cli, Commands};

/// JSON output row for `search --json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultOutput<'a> {
    rank: usize,
    title: &'a str,
    href: &'a str,
    category: &'a str,
    weight: f64,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "mahout_search=debug" } else { "mahout_search=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("{} {:#}", display::themed_err(display::RED, &[display::BOLD], "error:"), e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Index {
            input,
            output,
            featured,
            boost,
        } => {
            let overrides = RankingOverrides {
                featured_category: featured,
                boost,
            };
            let summary = run_build(Path::new(&input), Path::new(&output), &overrides)
                .with_context(|| format!("building index from {}", input))?;
            display::print_build_summary(&summary);
        }

        Commands::Search {
            file,
            query,
            limit,
            json,
        } => {
            let index = IndexFile::load(Path::new(&file))
                .with_context(|| format!("loading {}", file))?;
            let results = search(&query, &index.items);
            let total = results.len();
            let results = &results[..shown_count(total, limit)];

            if json {
                let output: Vec<SearchResultOutput<'_>> = results
                    .iter()
                    .enumerate()
                    .map(|(i, item)| SearchResultOutput {
                        rank: i + 1,
                        title: item.title(),
                        href: item.href(),
                        category: item.category(),
                        weight: item.weight,
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                display::print_results(&query, results, total, &index.featured_category);
            }
        }

        Commands::Inspect { file } => {
            let index = IndexFile::load(Path::new(&file))
                .with_context(|| format!("loading {}", file))?;
            let stats = index.stats()?;
            display::print_stats(
                &file,
                &index.featured_category,
                index.boost,
                index.checksum,
                &stats,
            );
        }
    }
    Ok(())
}
