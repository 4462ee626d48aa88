//! Parameter definitions with units and documented semantics.
//!
//! All startup constants live here with:
//! - Units (world units, degrees, seconds)
//! - Documented ranges and meanings
//! - Validation where a bad value would break an invariant

mod render;
mod view;
mod waveform;

// Re-export all types
pub use render::RenderConfig;
pub use view::{FrequencyRefresh, TransitionConfig, ViewConfig, ViewMode};
pub use waveform::{
    ParamRange, SampleLayout, WaveformParams, AMPLITUDE_RANGE, FREQUENCY_RANGE, MAX_POINTS,
};

/// Everything the application needs at startup
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub waveform: WaveformParams,
    pub layout: SampleLayout,
    pub view: ViewConfig,
    pub render: RenderConfig,
}

impl AppConfig {
    /// Validate every section, prefixing errors with the section name
    pub fn validate(&self) -> Result<(), String> {
        self.waveform
            .validate()
            .map_err(|e| format!("Invalid waveform: {}", e))?;
        self.layout
            .validate()
            .map_err(|e| format!("Invalid layout: {}", e))?;
        self.render
            .validate()
            .map_err(|e| format!("Invalid render config: {}", e))?;
        Ok(())
    }
}
