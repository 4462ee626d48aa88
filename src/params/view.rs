//! View mode, transition timing and spectrum refresh policy.

use std::fmt;
use std::time::Duration;

use clap::ValueEnum;

use crate::transition::Easing;

/// Which representation of the signal is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewMode {
    /// Amplitude against position
    #[default]
    Time,

    /// Magnitude against frequency bin
    Frequency,
}

impl ViewMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Time => ViewMode::Frequency,
            ViewMode::Frequency => ViewMode::Time,
        }
    }

    /// Label shown in the control panel
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Time => "Time Domain",
            ViewMode::Frequency => "Frequency Domain",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a parameter change does while the frequency view is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FrequencyRefresh {
    /// Re-run the transform and retarget the transition right away
    #[default]
    Immediate,

    /// Only update the time-domain samples; the spectrum refreshes
    /// the next time frequency mode is entered
    OnModeEntry,
}

/// Animated transition into the frequency view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    /// Time from start values to target values
    pub duration: Duration,

    /// Easing curve applied to normalized progress
    pub easing: Easing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(1),
            easing: Easing::QuadOut,
        }
    }
}

/// View controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewConfig {
    /// Mode shown at startup
    pub initial_mode: ViewMode,

    pub transition: TransitionConfig,

    pub refresh: FrequencyRefresh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ViewMode::Time.toggled(), ViewMode::Frequency);
        assert_eq!(ViewMode::Time.toggled().toggled(), ViewMode::Time);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ViewMode::Time.to_string(), "Time Domain");
        assert_eq!(ViewMode::Frequency.to_string(), "Frequency Domain");
    }
}
