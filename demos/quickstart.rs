//! Quickstart example demonstrating basic usage of seasonal-bootstrap.
//!
//! Run with: cargo run --example quickstart

use chrono::{Datelike, NaiveDate};
use seasonal_bootstrap::prelude::*;

fn main() {
    println!("=== seasonal-bootstrap Quickstart ===\n");

    // 1. Build the historical date set (all days of 2015-2017)
    let history: Vec<NaiveDate> = NaiveDate::from_ymd_opt(2015, 1, 1)
        .unwrap()
        .iter_days()
        .take_while(|d| d.year() <= 2017)
        .collect();

    let dates = DateSet::new(history).unwrap();
    println!(
        "Historical set: {} dates, years {:?}",
        dates.len(),
        dates.years()
    );

    // 2. Define the target window (January 2018)
    let window = TargetWindow::new(
        NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2018, 1, 31).unwrap(),
    )
    .unwrap();
    println!(
        "Target window: {} .. {} ({} days)",
        window.start(),
        window.end(),
        window.num_days()
    );

    // 3. Run the bootstrap
    let config = BlockBootstrapConfig::new(5)
        .with_avg_block_len(7)
        .with_delta_loc(3)
        .with_delta_len(2)
        .with_seed(42);

    let sims = block_bootstrap(&dates, &window, &config).unwrap();
    println!("\nGenerated {} simulations", sims.len());

    // 4. Show the first simulation
    let first = &sims[0];
    println!("\n--- Simulation {} ---", first.id());
    println!("{:>12} {:>14}", "target", "sampled");
    println!("{:-<27}", "");
    for (target, sampled) in first.pairs() {
        println!("{:>12} {:>14}", target.to_string(), sampled.to_string());
    }

    // 5. Summarize sampled years across all simulations
    println!("\n--- Sampled-year frequencies ---");
    for &year in dates.years() {
        let count: usize = sims
            .iter()
            .map(|s| s.sampled_dates().filter(|d| d.year() == year).count())
            .sum();
        println!("  {}: {}", year, count);
    }
}
