//! Configuration management for the ant automaton simulator

pub mod settings;

pub use settings::{
    Settings, SimulationConfig, RenderConfig, OutputConfig,
    RenderMode, OutputFormat, CliOverrides,
};
