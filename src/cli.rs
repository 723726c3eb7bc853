//! Command-line interface parsing for Recipe Hunt
//!
//! This module handles parsing of CLI arguments using clap and turning them
//! into a validated [`HuntConfig`] for the search run.

use clap::Parser;
use thiserror::Error;

/// Environment variable that overrides the recipe API endpoint
pub const BASE_URL_ENV: &str = "RECIPEHUNT_BASE_URL";

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// An allergen that can never equal a single ingredient token
    #[error("Invalid allergen: '{0}'. Allergens must be single words, e.g. peanut,egg,milk")]
    InvalidAllergen(String),
}

/// Recipe Hunt - Search recipes and skip the ones with your allergens
#[derive(Parser, Debug)]
#[command(name = "recipehunt")]
#[command(about = "Search recipes and filter out allergens")]
#[command(version)]
pub struct Cli {
    /// One or more search queries, run in order
    #[arg(value_name = "QUERY", required = true)]
    pub queries: Vec<String>,

    /// Allergens to exclude, comma-separated or repeated
    ///
    /// Examples:
    ///   recipehunt candy -a peanut
    ///   recipehunt cookies -a peanut,egg -a milk
    #[arg(short, long, value_name = "ALLERGEN", value_delimiter = ',')]
    pub allergens: Vec<String>,

    /// Recipe search endpoint; the query is sent as the `q` parameter
    #[arg(long, value_name = "URL", env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Print results as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated settings for a search run
#[derive(Debug, Clone, Default)]
pub struct HuntConfig {
    /// Queries in the order given
    pub queries: Vec<String>,
    /// Lowercased allergen tokens
    pub allergens: Vec<String>,
    /// Endpoint override, if any
    pub base_url: Option<String>,
    /// Whether to emit JSON
    pub json: bool,
}

/// Normalizes an allergen argument to a lowercase single token.
///
/// # Returns
/// * `Ok(String)` with surrounding whitespace trimmed and lowercased
/// * `Err(CliError::InvalidAllergen)` if the value is empty or contains
///   whitespace
pub fn parse_allergen_arg(s: &str) -> Result<String, CliError> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return Err(CliError::InvalidAllergen(s.to_string()));
    }
    Ok(trimmed.to_lowercase())
}

impl HuntConfig {
    /// Creates a HuntConfig from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let allergens = cli
            .allergens
            .iter()
            .map(|a| parse_allergen_arg(a))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(HuntConfig {
            queries: cli.queries.clone(),
            allergens,
            base_url: cli.base_url.clone(),
            json: cli.json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allergen_arg_lowercases_and_trims() {
        assert_eq!(parse_allergen_arg("peanut").unwrap(), "peanut");
        assert_eq!(parse_allergen_arg(" Peanut ").unwrap(), "peanut");
        assert_eq!(parse_allergen_arg("EGG").unwrap(), "egg");
    }

    #[test]
    fn test_parse_allergen_arg_empty() {
        assert!(parse_allergen_arg("").is_err());
        assert!(parse_allergen_arg("   ").is_err());
    }

    #[test]
    fn test_parse_allergen_arg_multiple_words() {
        let result = parse_allergen_arg("egg whites");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid allergen"));
        assert!(err.to_string().contains("egg whites"));
    }

    #[test]
    fn test_cli_parse_single_query() {
        let cli = Cli::parse_from(["recipehunt", "candy"]);
        assert_eq!(cli.queries, vec!["candy"]);
        assert!(cli.allergens.is_empty());
        assert!(!cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_requires_a_query() {
        assert!(Cli::try_parse_from(["recipehunt"]).is_err());
    }

    #[test]
    fn test_cli_parse_comma_separated_allergens() {
        let cli = Cli::parse_from(["recipehunt", "candy", "-a", "peanut,egg"]);
        assert_eq!(cli.allergens, vec!["peanut", "egg"]);
    }

    #[test]
    fn test_cli_parse_repeated_allergens() {
        let cli = Cli::parse_from([
            "recipehunt",
            "candy",
            "--allergens",
            "peanut",
            "-a",
            "milk",
        ]);
        assert_eq!(cli.allergens, vec!["peanut", "milk"]);
    }

    #[test]
    fn test_cli_parse_multiple_queries_and_flags() {
        let cli = Cli::parse_from([
            "recipehunt",
            "candy",
            "fudge",
            "--json",
            "-v",
            "--base-url",
            "http://localhost:1234/api/",
        ]);
        assert_eq!(cli.queries, vec!["candy", "fudge"]);
        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:1234/api/"));
    }

    #[test]
    fn test_hunt_config_default() {
        let config = HuntConfig::default();
        assert!(config.queries.is_empty());
        assert!(config.allergens.is_empty());
        assert!(!config.json);
    }

    #[test]
    fn test_hunt_config_from_cli_normalizes_allergens() {
        let cli = Cli::parse_from(["recipehunt", "candy", "-a", "Peanut, EGG"]);
        let config = HuntConfig::from_cli(&cli).unwrap();
        assert_eq!(config.queries, vec!["candy"]);
        assert_eq!(config.allergens, vec!["peanut", "egg"]);
    }

    #[test]
    fn test_hunt_config_from_cli_invalid_allergen() {
        let cli = Cli::parse_from(["recipehunt", "candy", "-a", "egg whites"]);
        let result = HuntConfig::from_cli(&cli);
        assert!(result.is_err());
    }
}
