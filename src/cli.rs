//! Command-line argument parsing.

use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;

use crate::params::{AppConfig, FrequencyRefresh, ViewMode};
use crate::transition::Easing;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "sinescope")]
#[command(about = "Sine waveform viewer with a time/frequency domain toggle", long_about = None)]
pub struct Args {
    /// Initial sine amplitude (0.5 - 100)
    #[arg(long, default_value = "2")]
    pub amplitude: f32,

    /// Initial angular frequency in radians per unit (0.5 - 100)
    #[arg(long, default_value = "1")]
    pub frequency: f32,

    /// View shown at startup
    #[arg(long, value_enum, default_value_t = ViewMode::Time)]
    pub view: ViewMode,

    /// Number of displayed points (1 - 1048576)
    #[arg(long, default_value = "500")]
    pub points: usize,

    /// Duration of the transition into the frequency view
    #[arg(long, value_name = "MS", default_value = "1000")]
    pub transition_ms: u64,

    /// Easing curve for the transition
    #[arg(long, value_enum, default_value_t = Easing::QuadOut)]
    pub easing: Easing,

    /// What parameter changes do while the frequency view is shown
    #[arg(long, value_enum, default_value_t = FrequencyRefresh::Immediate)]
    pub refresh: FrequencyRefresh,

    /// Window width in pixels
    #[arg(long, default_value = "1280")]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value = "720")]
    pub height: u32,
}

impl Args {
    /// Build and validate the startup configuration
    pub fn into_config(self) -> Result<AppConfig> {
        let mut config = AppConfig::default();

        config.waveform.amplitude = self.amplitude;
        config.waveform.frequency = self.frequency;
        config.layout.points = self.points;
        config.view.initial_mode = self.view;
        config.view.transition.duration = Duration::from_millis(self.transition_ms);
        config.view.transition.easing = self.easing;
        config.view.refresh = self.refresh;
        config.render.window_width = self.width;
        config.render.window_height = self.height;

        config.validate().map_err(|e| anyhow!(e))?;
        Ok(config)
    }
}
