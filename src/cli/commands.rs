//! CLI command implementations.
//!
//! Commands load configuration, build the configured store, run the core,
//! and print one JSON document to stdout. Lifecycle events and counters go
//! through the observability subsystem; the process result is the command's
//! `Result`, mapped to the exit code by `main`.

use std::path::Path;
use std::time::Instant;

use serde_json::json;
use uuid::Uuid;

use crate::executor::{SearchExecutor, SearchResult};
use crate::listing::Listing;
use crate::observability::{log_event, Event, MetricsRegistry};
use crate::query::{parse_params, SearchSpec};
use crate::store::{CandidateSource, MemoryStore, MySqlStore, QueryStore};

use super::args::{Cli, Command, FilterArgs};
use super::config::{Config, SourceConfig};
use super::errors::CliResult;

/// Dispatches the parsed command line.
pub async fn run(cli: Cli) -> CliResult<()> {
    let metrics = MetricsRegistry::new();
    match cli.command {
        Command::Search {
            config,
            in_memory,
            filters,
        } => search(&config, in_memory, &filters, &metrics).await,
        Command::Count { config, filters } => count(&config, &filters, &metrics).await,
        Command::CheckDataset { dataset } => check_dataset(&dataset),
    }
}

async fn search(
    config_path: &Path,
    in_memory: bool,
    filters: &FilterArgs,
    metrics: &MetricsRegistry,
) -> CliResult<()> {
    let config = load_config(config_path)?;
    let spec = parse_spec(filters, &config, metrics)?;

    let query_id = Uuid::new_v4().to_string();
    log_event(
        Event::SearchStart,
        &[
            ("query_id", &query_id),
            ("page", &spec.page.to_string()),
            ("limit", &spec.limit.to_string()),
            ("sort", spec.sort.as_str()),
        ],
    );

    let started = Instant::now();
    metrics.record_store_fetch();
    let outcome = if in_memory {
        let source = build_candidate_source(&config).await?;
        SearchExecutor::search_in_memory(&*source, &spec).await
    } else {
        let store = build_query_store(&config).await?;
        SearchExecutor::search(&*store, &spec).await
    };

    match outcome {
        Ok(result) => {
            metrics.record_search(result.len() as u64);
            log_event(
                Event::SearchComplete,
                &[
                    ("query_id", &query_id),
                    ("total", &result.page.total.to_string()),
                    ("returned", &result.len().to_string()),
                    ("elapsed_ms", &started.elapsed().as_millis().to_string()),
                ],
            );
            print_result(&result)
        }
        Err(err) => {
            if err.is_rejection() {
                metrics.record_rejection();
                log_event(
                    Event::SearchRejected,
                    &[("query_id", &query_id), ("reason", &err.to_string())],
                );
            } else {
                metrics.record_store_failure();
                log_event(
                    Event::StoreFailure,
                    &[("query_id", &query_id), ("reason", &err.to_string())],
                );
            }
            Err(err.into())
        }
    }
}

async fn count(
    config_path: &Path,
    filters: &FilterArgs,
    metrics: &MetricsRegistry,
) -> CliResult<()> {
    let config = load_config(config_path)?;
    let spec = parse_spec(filters, &config, metrics)?;
    let predicates = spec.predicates();

    metrics.record_store_fetch();
    let store = build_query_store(&config).await?;
    let total = store.count(&predicates).await.inspect_err(|err| {
        metrics.record_store_failure();
        log_event(Event::StoreFailure, &[("reason", &err.to_string())]);
    })?;

    println!("{}", json!({ "total": total }));
    Ok(())
}

fn check_dataset(dataset: &Path) -> CliResult<()> {
    let store = MemoryStore::from_json_file(dataset)?;
    log_event(
        Event::DatasetLoaded,
        &[
            ("path", &dataset.display().to_string()),
            ("records", &store.len().to_string()),
        ],
    );

    let listings = store.listings();
    let report = json!({
        "records": listings.len(),
        "missing_price": count_where(listings, |l| l.price.is_none()),
        "missing_posted_at": count_where(listings, |l| l.posted_at.is_none()),
        "unrecognized_listing_type": count_where(listings, |l| l.kind.is_other()),
        "unrecognized_property_type": count_where(listings, |l| l.property_kind.is_other()),
        "missing_area": count_where(listings, |l| l.area.is_none()),
    });
    println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
    Ok(())
}

fn load_config(path: &Path) -> CliResult<Config> {
    let config = Config::load(path)?;
    log_event(
        Event::ConfigLoaded,
        &[("path", &path.display().to_string())],
    );
    Ok(config)
}

fn parse_spec(
    filters: &FilterArgs,
    config: &Config,
    metrics: &MetricsRegistry,
) -> CliResult<SearchSpec> {
    parse_params(&filters.to_params(), &config.param_limits()).map_err(|err| {
        metrics.record_rejection();
        log_event(Event::SearchRejected, &[("reason", &err.to_string())]);
        err.into()
    })
}

async fn build_query_store(config: &Config) -> CliResult<Box<dyn QueryStore>> {
    match &config.source {
        SourceConfig::Dataset { path } => Ok(Box::new(load_dataset(Path::new(path))?)),
        SourceConfig::Mysql { url, table } => {
            Ok(Box::new(MySqlStore::connect(url, table).await?))
        }
    }
}

async fn build_candidate_source(config: &Config) -> CliResult<Box<dyn CandidateSource>> {
    match &config.source {
        SourceConfig::Dataset { path } => Ok(Box::new(load_dataset(Path::new(path))?)),
        SourceConfig::Mysql { url, table } => {
            Ok(Box::new(MySqlStore::connect(url, table).await?))
        }
    }
}

fn load_dataset(path: &Path) -> CliResult<MemoryStore> {
    let store = MemoryStore::from_json_file(path)?;
    log_event(
        Event::DatasetLoaded,
        &[
            ("path", &path.display().to_string()),
            ("records", &store.len().to_string()),
        ],
    );
    Ok(store)
}

fn print_result(result: &SearchResult) -> CliResult<()> {
    match serde_json::to_string_pretty(result) {
        Ok(rendered) => {
            println!("{}", rendered);
            Ok(())
        }
        Err(_) => {
            // A listing that decoded cannot fail to re-serialize; print the
            // page skeleton rather than nothing.
            println!("{}", json!({ "page": result.page, "listings": [] }));
            Ok(())
        }
    }
}

fn count_where(listings: &[Listing], pred: impl Fn(&Listing) -> bool) -> usize {
    listings.iter().filter(|l| pred(l)).count()
}
