//! CLI argument definitions using clap
//!
//! Commands:
//! - nestquery search --config <path> [filter flags]
//! - nestquery count --config <path> [filter flags]
//! - nestquery check-dataset --dataset <path>
//!
//! Filter flags arrive as raw strings and go through the same parameter
//! parsing an HTTP edge would use, so the CLI exercises the full
//! validation path.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// nestquery - a strict, deterministic search core for real-estate listings
#[derive(Parser, Debug)]
#[command(name = "nestquery")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one search and print the result page as JSON
    Search {
        /// Path to configuration file
        #[arg(long, default_value = "./nestquery.json")]
        config: PathBuf,

        /// Fetch the full candidate set and compose in memory instead of
        /// pushing the query down to the store
        #[arg(long)]
        in_memory: bool,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Count matches without fetching a page
    Count {
        /// Path to configuration file
        #[arg(long, default_value = "./nestquery.json")]
        config: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Decode a dataset file and report tolerated fields
    CheckDataset {
        /// Path to a JSON dataset file
        #[arg(long)]
        dataset: PathBuf,
    },
}

/// Raw search parameters, forwarded untyped to the parameter parser
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Listing kind: all, rent, or sale
    #[arg(long)]
    pub listing_type: Option<String>,

    /// Property kind, e.g. apartment or house
    #[arg(long)]
    pub property_type: Option<String>,

    /// Exact bedroom count
    #[arg(long)]
    pub bedrooms: Option<String>,

    /// Exact bathroom count
    #[arg(long)]
    pub bathrooms: Option<String>,

    /// Comma-separated area substrings; any may match
    #[arg(long)]
    pub areas: Option<String>,

    /// Case-insensitive title/city search term
    #[arg(long)]
    pub search: Option<String>,

    /// Inclusive minimum price
    #[arg(long)]
    pub price_min: Option<String>,

    /// Inclusive maximum price
    #[arg(long)]
    pub price_max: Option<String>,

    /// Only listings available on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub available_by: Option<String>,

    /// Sort order: featured, price-low, price-high, or newest
    #[arg(long)]
    pub sort: Option<String>,

    /// 1-indexed page number
    #[arg(long)]
    pub page: Option<String>,

    /// Page size
    #[arg(long)]
    pub limit: Option<String>,

    /// Exclude listings owned by this user id
    #[arg(long)]
    pub exclude_owner: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

impl FilterArgs {
    /// Flattens the provided flags into the raw parameter map the core
    /// parses.
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        let mut put = |key: &str, value: &Option<String>| {
            if let Some(value) = value {
                params.insert(key.to_string(), value.clone());
            }
        };
        put("listing_type", &self.listing_type);
        put("property_type", &self.property_type);
        put("bedrooms", &self.bedrooms);
        put("bathrooms", &self.bathrooms);
        put("location_areas", &self.areas);
        put("search", &self.search);
        put("price_min", &self.price_min);
        put("price_max", &self.price_max);
        put("available_by", &self.available_by);
        put("sort", &self.sort);
        put("page", &self.page);
        put("limit", &self.limit);
        put("exclude_owner", &self.exclude_owner);
        params
    }
}
