use anyhow::{Context, Result};
use clap::Parser;

use uninformed_search::config::Config;
use uninformed_search::logging::init_logging;
use uninformed_search::simulation::Simulation;

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.verbose, config.quiet)?;
    config.validate().context("invalid configuration")?;

    let simulation = Simulation::new(config.clone()).context("failed to build the environment")?;
    let grid = simulation.environment().grid();

    if !config.quiet {
        println!("Starting uninformed search...");
        println!("Grid size: {}x{}", grid.rows(), grid.cols());
        println!("Start: {}, Target: {}", grid.start(), grid.target());
        println!(
            "Walls: {}, Obstacle probability per step: {}",
            grid.walls().len(),
            config.obstacle_probability
        );
        println!("Seed: {}", simulation.environment().seed());
        println!();
    }

    let results = simulation.run_all().context("search run failed")?;

    if let [result] = results.as_slice() {
        println!("\n=== {} ===", result.algorithm.description());
        println!(
            "{}",
            if result.success {
                "SUCCESS: target reached"
            } else {
                "FAILED: no path found"
            }
        );
        println!("{}", result.statistics);
    } else {
        simulation.print_comparison_results(&results);
    }

    if !config.no_visualization {
        for result in &results {
            println!("\n--- {} ---", result.algorithm.description());
            result.grid.print_grid(&result.path);
        }
    }

    Ok(())
}
