//! Configuration settings for the ant automaton simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub render: RenderConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Side length of the square toroidal grid
    pub grid_size: usize,
    /// Number of ants sharing the grid
    pub ant_count: usize,
    /// Probability that an ant takes a random turn instead of the standard rule
    pub deviation_probability: f64,
    /// RNG seed; omit for a fresh seed on every run
    pub seed: Option<u64>,
    /// Number of frames to simulate
    pub frames: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub mode: RenderMode,
    pub frame_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    Terminal,
    Headless,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Save a grid snapshot every this many frames (disabled when omitted)
    pub save_interval: Option<usize>,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                grid_size: 64,
                ant_count: 4,
                deviation_probability: 0.1,
                seed: None,
                frames: 10_000,
            },
            render: RenderConfig {
                mode: RenderMode::Terminal,
                frame_delay_ms: 33,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save_interval: None,
                output_directory: PathBuf::from("output/runs"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.grid_size < 2 {
            anyhow::bail!("Grid size must be at least 2");
        }

        if self.simulation.ant_count == 0 {
            anyhow::bail!("At least one ant is required");
        }

        if !(0.0..=1.0).contains(&self.simulation.deviation_probability) {
            anyhow::bail!(
                "Deviation probability must be within [0, 1], got {}",
                self.simulation.deviation_probability
            );
        }

        if self.simulation.frames == 0 {
            anyhow::bail!("Number of frames must be positive");
        }

        if let Some(interval) = self.output.save_interval {
            if interval == 0 {
                anyhow::bail!("Snapshot interval must be positive when set");
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(frames) = cli_overrides.frames {
            self.simulation.frames = frames;
        }
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(ant_count) = cli_overrides.ant_count {
            self.simulation.ant_count = ant_count;
        }
        if let Some(grid_size) = cli_overrides.grid_size {
            self.simulation.grid_size = grid_size;
        }
        if cli_overrides.headless {
            self.render.mode = RenderMode::Headless;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub frames: Option<usize>,
    pub seed: Option<u64>,
    pub ant_count: Option<usize>,
    pub grid_size: Option<usize>,
    pub headless: bool,
    pub output_dir: Option<PathBuf>,
}
