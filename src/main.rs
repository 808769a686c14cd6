// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use activation_order::config::consts::DEFAULT_LOG_FILTER;
use activation_order::config::{load_and_validate_config, load_and_validate_index, CandidateId};
use activation_order::ordering::Sorter;

fn print_usage(program: &str) {
    eprintln!("Usage: {} <run.yaml>", program);
    eprintln!("       {} --index <index.(yaml|json|toml)> <candidate> [candidate ...]", program);
    eprintln!("Example: {} configs/web-run.yaml", program);
    eprintln!("Example: {} --index configs/web-index.yaml app.web.ServerConfig app.data.DataSourceConfig", program);
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Order the candidates of a run file against its merged indexes
fn order_run_file(path: &str) -> Result<Vec<CandidateId>> {
    let config = load_and_validate_config(path)
        .with_context(|| format!("failed to load run file '{}'", path))?;
    let base_dir = Path::new(path).parent().unwrap_or_else(|| Path::new("."));
    let index = config
        .load_indexes(base_dir)
        .with_context(|| format!("failed to load indexes for '{}'", path))?;

    let ordered = Sorter::new(index).order(&config.candidates)?;
    Ok(ordered)
}

/// Order candidates named on the command line against one index
fn order_with_index(index_path: &str, candidates: &[String]) -> Result<Vec<CandidateId>> {
    if candidates.is_empty() {
        bail!("no candidates given to order");
    }
    let index = load_and_validate_index(index_path)
        .with_context(|| format!("failed to load index '{}'", index_path))?;
    let ids: Vec<CandidateId> = candidates.iter().map(|id| CandidateId::from(id.as_str())).collect();

    let ordered = Sorter::new(index).order(&ids)?;
    Ok(ordered)
}

fn main() {
    setup_tracing();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("activation-order");

    let result = match args.get(1).map(String::as_str) {
        Some("--index") if args.len() >= 3 => order_with_index(&args[2], &args[3..]),
        Some("--index") => {
            print_usage(program);
            std::process::exit(1);
        }
        Some("--help") | Some("-h") | None => {
            print_usage(program);
            std::process::exit(if args.len() < 2 { 1 } else { 0 });
        }
        Some(path) if args.len() == 2 => order_run_file(path),
        Some(_) => {
            print_usage(program);
            std::process::exit(1);
        }
    };

    match result {
        Ok(ordered) => {
            for id in ordered {
                println!("{}", id);
            }
        }
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}
