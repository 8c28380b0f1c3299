//! Main CLI application for the stochastic ant simulator

use ant_automaton::{
    automaton::{load_snapshot, load_snapshots_from_directory},
    config::{CliOverrides, OutputFormat, Settings},
    sim::{snapshot_stats, GridStats, Simulation},
    utils::{ColorOutput, GridFormatter},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ant_automaton")]
#[command(about = "Stochastic Langton's Ant simulator on a toroidal grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of frames to simulate (overrides config)
        #[arg(short, long)]
        frames: Option<usize>,

        /// RNG seed for a reproducible run (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of ants (overrides config)
        #[arg(short, long)]
        ants: Option<usize>,

        /// Grid side length (overrides config)
        #[arg(short, long)]
        grid_size: Option<usize>,

        /// Run without terminal animation
        #[arg(long)]
        headless: bool,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Inspect recorded grid snapshots
    Inspect {
        /// Snapshot file, or directory of snapshots from a recorded run
        #[arg(short, long)]
        path: PathBuf,

        /// Print each grid, not just its statistics
        #[arg(long)]
        show_grids: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config, frames, seed, ants, grid_size, headless, output, verbose,
        } => {
            run_command(config, frames, seed, ants, grid_size, headless, output, verbose)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
        Commands::Inspect { path, show_grids } => {
            inspect_command(path, show_grids)
        }
    }
}

fn run_command(
    config_path: PathBuf,
    frames: Option<usize>,
    seed: Option<u64>,
    ants: Option<usize>,
    grid_size: Option<usize>,
    headless: bool,
    output_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Config file {} not found, using defaults", config_path.display()
        )));
        Settings::default()
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        frames,
        seed,
        ant_count: ants,
        grid_size,
        headless,
        output_dir: output_dir.clone(),
    };
    settings.merge_with_cli(&cli_overrides);

    if verbose {
        println!("Configuration:");
        println!("  Grid size: {}", settings.simulation.grid_size);
        println!("  Ants: {}", settings.simulation.ant_count);
        println!("  Deviation probability: {}", settings.simulation.deviation_probability);
        println!("  Frames: {}", settings.simulation.frames);
        match settings.simulation.seed {
            Some(seed) => println!("  Seed: {}", seed),
            None => println!("  Seed: (from entropy)"),
        }
        println!();
    }

    // Validate settings
    settings.validate()
        .context("Configuration validation failed")?;

    let output_format = settings.output.format;
    let report_dir = settings.output.output_directory.clone();

    let mut simulation = Simulation::new(settings)
        .context("Failed to create simulation")?;

    let report = simulation.run()
        .context("Simulation failed")?;

    match output_format {
        OutputFormat::Text => {
            println!("\n{}", report);
        }
        OutputFormat::Json => {
            let json = report.to_json()?;
            println!("{}", json);

            let report_path = report_dir.join("report.json");
            if let Some(parent) = report_path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            std::fs::write(&report_path, json)
                .with_context(|| format!("Failed to write report to {}", report_path.display()))?;
            println!("{}", ColorOutput::info(&format!(
                "Report saved to {}", report_path.display()
            )));
        }
    }

    println!("{}", ColorOutput::success(&format!(
        "Simulated {} frames in {:.3}s",
        report.frames, report.elapsed_seconds
    )));

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    // Create directories
    let config_dir = directory.join("config");
    let output_dir = directory.join("output/runs");

    for dir in [&config_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings.to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Create example configuration variants
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    // Quick run on a small grid
    let mut quick_config = Settings::default();
    quick_config.simulation.grid_size = 16;
    quick_config.simulation.ant_count = 2;
    quick_config.simulation.frames = 500;
    quick_config.to_file(&examples_dir.join("quick.yaml"))?;

    // Crowded grid with frequent random turns
    let mut dense_config = Settings::default();
    dense_config.simulation.ant_count = 8;
    dense_config.simulation.deviation_probability = 0.25;
    dense_config.output.save_interval = Some(1_000);
    dense_config.to_file(&examples_dir.join("dense.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

fn inspect_command(path: PathBuf, show_grids: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Inspecting snapshots..."));

    let snapshots = if path.is_dir() {
        load_snapshots_from_directory(&path)
            .with_context(|| format!("Failed to load snapshots from {}", path.display()))?
    } else {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("snapshot")
            .to_string();
        let grid = load_snapshot(&path)
            .with_context(|| format!("Failed to load snapshot from {}", path.display()))?;
        vec![(name, grid)]
    };

    if snapshots.is_empty() {
        println!("{}", ColorOutput::warning("No snapshots found"));
        return Ok(());
    }

    let stats = snapshot_stats(&snapshots);

    println!("Snapshot          | Black cells | Density");
    println!("------------------|-------------|--------");
    for (name, GridStats { black_cells, density }) in &stats {
        println!("{:17} | {:11} | {:6.1}%", name, black_cells, density * 100.0);
    }

    if show_grids {
        let single = snapshots.len() == 1;
        for (name, grid) in &snapshots {
            println!("\n{} ({}x{}):", name, grid.size, grid.size);
            if single {
                println!("{}", GridFormatter::format_with_coords(grid));
            } else {
                println!("{}", GridFormatter::format_compact(grid));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "ant_automaton",
            "run",
            "--config", "test.yaml",
            "--frames", "500",
            "--headless",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("config/examples/quick.yaml").exists());
        assert!(temp_dir.path().join("output/runs").exists());
    }
}
