//! Frame-driven simulation runner

use super::RunReport;
use crate::automaton::{save_snapshot, AutomatonEngine};
use crate::config::{RenderMode, Settings};
use crate::render::{HeadlessBridge, RenderBridge, TerminalRenderer};
use anyhow::{Context, Result};
use std::time::Instant;

/// Owns an engine and a render bridge and plays the per-frame driver:
/// every frame is one sweep over all ants, then the emitted repaints are
/// pushed through the bridge and the frame is presented.
pub struct Simulation {
    settings: Settings,
    engine: AutomatonEngine,
    bridge: Box<dyn RenderBridge>,
    frames_run: usize,
    events_emitted: usize,
}

impl Simulation {
    /// Build a simulation from settings, choosing the bridge from the
    /// configured render mode.
    pub fn new(settings: Settings) -> Result<Self> {
        let bridge: Box<dyn RenderBridge> = match settings.render.mode {
            RenderMode::Terminal => Box::new(TerminalRenderer::new(
                settings.simulation.grid_size,
                settings.render.frame_delay_ms,
            )),
            RenderMode::Headless => Box::new(HeadlessBridge::new()),
        };
        Self::with_bridge(settings, bridge)
    }

    /// Build a simulation with a caller-supplied bridge
    pub fn with_bridge(settings: Settings, bridge: Box<dyn RenderBridge>) -> Result<Self> {
        settings.validate().context("Invalid simulation settings")?;

        let engine = AutomatonEngine::new(
            settings.simulation.grid_size,
            settings.simulation.ant_count,
            settings.simulation.deviation_probability,
            settings.simulation.seed,
        );

        Ok(Self {
            settings,
            engine,
            bridge,
            frames_run: 0,
            events_emitted: 0,
        })
    }

    pub fn engine(&self) -> &AutomatonEngine {
        &self.engine
    }

    pub fn frames_run(&self) -> usize {
        self.frames_run
    }

    pub fn events_emitted(&self) -> usize {
        self.events_emitted
    }

    /// Advance the simulation by one frame
    pub fn step_frame(&mut self) {
        let changes = self.engine.sweep();
        for change in &changes {
            self.bridge.apply(change);
        }
        self.bridge.present(self.engine.grid(), self.frames_run);

        self.events_emitted += changes.len();
        self.frames_run += 1;
    }

    /// Run the configured number of frames and report on the result
    pub fn run(&mut self) -> Result<RunReport> {
        let start = Instant::now();
        let frames = self.settings.simulation.frames;

        for _ in 0..frames {
            self.step_frame();
            self.maybe_save_snapshot()?;
        }

        Ok(RunReport::new(
            self.engine.grid(),
            self.engine.ants(),
            self.frames_run,
            self.events_emitted,
            start.elapsed().as_secs_f64(),
        ))
    }

    fn maybe_save_snapshot(&self) -> Result<()> {
        if let Some(interval) = self.settings.output.save_interval {
            if self.frames_run % interval == 0 {
                let path = self
                    .settings
                    .output
                    .output_directory
                    .join(format!("frame_{:06}.txt", self.frames_run));
                save_snapshot(self.engine.grid(), &path).with_context(|| {
                    format!("Failed to save snapshot after frame {}", self.frames_run)
                })?;
            }
        }
        Ok(())
    }
}
