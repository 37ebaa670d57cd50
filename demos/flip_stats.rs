//! Flip-mask statistics for random lookup functions.
//!
//! This example reduces a random pattern set under every input inversion mask
//! and reports the resulting control-count distribution.
//!
//! Run with:
//! ```bash
//! cargo run --release --example flip_stats -- [width]
//! ```

use std::time::Instant;

use clap::Parser;
use qrom_rs::cost::control_count;
use qrom_rs::search::{flip_patterns, optimize_flips};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Parser)]
#[command(author, version, about = "Flip-mask statistics for QROM synthesis")]
struct Cli {
    /// Input bit width
    #[arg(default_value = "4")]
    n: u32,

    /// Probability that each pattern is a 1 of the function
    #[arg(long, default_value = "0.5")]
    density: f64,

    /// Seed for the pattern generator
    #[arg(long, default_value = "42")]
    seed: u64,
}

fn main() {
    let cli = Cli::parse();

    println!("=== QROM Flip-Mask Statistics ===\n");

    let mut rng = ChaCha8Rng::seed_from_u64(cli.seed);
    let patterns: Vec<u64> = (0..(1u64 << cli.n)).filter(|_| rng.gen_bool(cli.density)).collect();

    println!(
        "Workload: {} patterns over {} bits (density {}, seed {})\n",
        patterns.len(),
        cli.n,
        cli.density,
        cli.seed
    );

    let start = Instant::now();
    let costs: Vec<u64> = (0..=qrom_rs::bits::width_mask(cli.n))
        .map(|mask| control_count(flip_patterns(&patterns, mask), cli.n))
        .collect();
    let elapsed = start.elapsed();

    // Per-mask table for small widths; the distribution below covers the rest
    if cli.n <= 5 {
        println!("{:>10} {:>10}", "Flip Mask", "Controls");
        println!("{}", "-".repeat(21));
        for (mask, &cost) in costs.iter().enumerate() {
            println!("{:>10} {:>10}", format!("{:0w$b}", mask, w = cli.n as usize), cost);
        }
    }

    println!("\nCost distribution over {} masks:", costs.len());
    let max_cost = costs.iter().copied().max().unwrap_or(0);
    for cost in 0..=max_cost {
        let count = costs.iter().filter(|&&c| c == cost).count();
        if count > 0 {
            println!("  {:>4} controls: {:>5} masks ({:.1}%)", cost, count, 100.0 * count as f64 / costs.len() as f64);
        }
    }

    let best = optimize_flips(&patterns, cli.n);
    assert_eq!(best.cost, costs[best.mask as usize], "Search result should match the scan");

    println!("\n{}", "=".repeat(40));
    println!("  Unflipped cost: {}", costs[0]);
    println!("  Best mask:      {:#b}", best.mask);
    println!("  Best cost:      {}", best.cost);
    println!("  Saved controls: {}", costs[0] - best.cost);
    println!("  Time:           {:.2} ms", elapsed.as_secs_f64() * 1000.0);

    #[cfg(feature = "parallel")]
    {
        let par = qrom_rs::search::optimize_flips_par(&patterns, cli.n);
        assert_eq!(par, best, "Parallel search should agree with the sequential scan");
        println!("  Parallel search agrees.");
    }
}
