//! Recipe Hunt - Search recipes without your allergens
//!
//! Runs each query through a single cached hunter and prints the recipes
//! whose ingredients contain none of the given allergens.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use recipehunt::cli::{Cli, HuntConfig};
use recipehunt::{Recipe, RecipeClient, RecipeHunter};

/// One query's filtered results, as printed with `--json`
#[derive(Debug, Serialize)]
struct QueryResult<'a> {
    query: &'a str,
    recipes: Vec<Recipe>,
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "recipehunt=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Prints one query's recipes as a header followed by `title <href>` lines
fn print_text(out: &mut impl Write, query: &str, recipes: &[Recipe]) -> io::Result<()> {
    writeln!(out, "{} ({} recipes)", query, recipes.len())?;
    for recipe in recipes {
        writeln!(out, "  {} <{}>", recipe.title.trim(), recipe.href)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match HuntConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    let client = match &config.base_url {
        Some(url) => RecipeClient::with_base_url(url.as_str()),
        None => RecipeClient::new(),
    };
    let hunter = RecipeHunter::new(client);

    let mut results = Vec::with_capacity(config.queries.len());
    for query in &config.queries {
        match hunter.fetch_filtered_recipes(query, &config.allergens).await {
            Ok(recipes) => results.push(QueryResult { query, recipes }),
            Err(e) => {
                eprintln!("Error: failed to fetch recipes for '{}': {}", query, e);
                process::exit(1);
            }
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.json {
        serde_json::to_writer_pretty(&mut out, &results)?;
        writeln!(out)?;
    } else {
        for result in &results {
            print_text(&mut out, result.query, &result.recipes)?;
        }
    }

    Ok(())
}
