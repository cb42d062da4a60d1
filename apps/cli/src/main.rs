#![deny(warnings)]

//! Headless CLI for the property-development profit planner.
//!
//! Input validation (a positive integer budget) lives here; the planner
//! crates assume it has already happened.

use anyhow::{Context, Result};
use plot_core::{validate_catalog, Catalog, ConstructionPlan};
use plot_econ::greedy_estimate;
use plot_plan::compute_max_profit;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

struct Args {
    budget: Option<String>,
    estimate: bool,
    json: bool,
}

fn parse_args() -> Args {
    let mut budget: Option<String> = None;
    let mut estimate = false;
    let mut json = false;
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--budget" => budget = it.next(),
            "--estimate" => estimate = true,
            "--json" => json = true,
            _ => {}
        }
    }
    Args {
        budget,
        estimate,
        json,
    }
}

fn format_plan(plan: &ConstructionPlan, catalog: &Catalog) -> String {
    plan.counts
        .iter()
        .zip(&catalog.buildings)
        .map(|(n, b)| format!("{}: {}", b.id.0, n))
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .init();

    let args = parse_args();
    let budget: u32 = args
        .budget
        .as_deref()
        .and_then(|s| s.parse().ok())
        .filter(|&b| b >= 1)
        .context("--budget must be a positive integer")?;

    let catalog = Catalog::standard();
    validate_catalog(&catalog)?;
    info!(budget, estimate = args.estimate, "starting planner");
    for b in &catalog.buildings {
        info!(id = %b.id.0, name = %b.name, duration = b.duration, rate = %b.rate, "catalog entry");
    }

    if args.estimate {
        let est = greedy_estimate(&catalog, budget)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&est)?);
        } else {
            println!(
                "Budget: {} | estimated earnings: ${} (greedy lower bound)",
                est.budget, est.earnings
            );
            println!("Greedy plan: {}", format_plan(&est.plan, &catalog));
        }
        return Ok(());
    }

    let result = compute_max_profit(&catalog, budget)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "Budget: {} | maximum earnings: ${} | optimal plans: {}",
            result.budget,
            result.max_earnings,
            result.plans.len()
        );
        for (i, plan) in result.plans.iter().enumerate() {
            println!("  {}) {}", i + 1, format_plan(plan, &catalog));
        }
    }
    Ok(())
}
