//! Keyboard control panel: amplitude and frequency sliders plus the view selector.

use winit::keyboard::KeyCode;

use crate::params::{ParamRange, ViewMode, WaveformParams, AMPLITUDE_RANGE, FREQUENCY_RANGE};

/// Change notification from the control panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    Amplitude(f32),
    Frequency(f32),
    Mode(ViewMode),
    ToggleMode,
}

/// Steps taken per key press with Shift held
const COARSE_STEPS: i32 = 10;

/// Maps key presses to control events
///
/// | Key          | Effect                     |
/// |--------------|----------------------------|
/// | Up / Down    | amplitude ± step           |
/// | Right / Left | frequency ± step           |
/// | Shift + …    | ten steps at once          |
/// | T / F        | time / frequency view      |
/// | Space / Tab  | toggle view                |
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlPanel;

impl ControlPanel {
    pub fn handle_key(
        &self,
        key: KeyCode,
        shift: bool,
        params: &WaveformParams,
    ) -> Option<ControlEvent> {
        let steps = if shift { COARSE_STEPS } else { 1 };
        let nudge = |range: &ParamRange, value: f32, direction: i32| {
            range.step_by(value, direction * steps)
        };

        match key {
            KeyCode::ArrowUp => Some(ControlEvent::Amplitude(nudge(
                &AMPLITUDE_RANGE,
                params.amplitude,
                1,
            ))),
            KeyCode::ArrowDown => Some(ControlEvent::Amplitude(nudge(
                &AMPLITUDE_RANGE,
                params.amplitude,
                -1,
            ))),
            KeyCode::ArrowRight => Some(ControlEvent::Frequency(nudge(
                &FREQUENCY_RANGE,
                params.frequency,
                1,
            ))),
            KeyCode::ArrowLeft => Some(ControlEvent::Frequency(nudge(
                &FREQUENCY_RANGE,
                params.frequency,
                -1,
            ))),
            KeyCode::KeyT => Some(ControlEvent::Mode(ViewMode::Time)),
            KeyCode::KeyF => Some(ControlEvent::Mode(ViewMode::Frequency)),
            KeyCode::Space | KeyCode::Tab => Some(ControlEvent::ToggleMode),
            _ => None,
        }
    }

    /// One-line panel readout, shown in the window title
    pub fn status_line(&self, params: &WaveformParams, mode: ViewMode) -> String {
        format!(
            "sinescope | amplitude {:.1} | frequency {:.1} | {}",
            params.amplitude, params.frequency, mode
        )
    }
}
