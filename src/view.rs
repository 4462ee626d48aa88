//! View controller: application state and the time/frequency state machine.
//!
//! The controller owns the waveform parameters, the time-domain samples
//! (always regenerated from the parameters) and the heights currently on
//! screen. Every change to the on-screen heights comes back to the caller
//! as a [`GeometryCommit`], which the renderer uploads as-is.

use std::time::Duration;

use crate::controls::ControlEvent;
use crate::params::{
    FrequencyRefresh, SampleLayout, ViewConfig, ViewMode, WaveformParams, AMPLITUDE_RANGE,
    FREQUENCY_RANGE,
};
use crate::spectrum::SpectralTransform;
use crate::transition::Transition;
use crate::waveform;

/// Snapshot of the displayed heights, one per layout point
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCommit {
    heights: Vec<f32>,
}

impl GeometryCommit {
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }
}

/// Time/frequency view state machine
pub struct ViewController {
    params: WaveformParams,
    layout: SampleLayout,
    mode: ViewMode,
    config: ViewConfig,

    /// Ground truth for the time view, kept current in both modes
    time_domain: Vec<f32>,

    /// Heights as last committed to the renderer
    displayed: Vec<f32>,

    /// At most one animation; a new one replaces it
    transition: Option<Transition>,

    transform: SpectralTransform,
}

impl ViewController {
    /// Create a controller showing `config.initial_mode`
    ///
    /// Starting in frequency mode begins with the spectrum transition already
    /// running from the time-domain waveform.
    ///
    /// # Panics
    /// If `layout.points` is zero (rejected earlier by `SampleLayout::validate`).
    pub fn new(params: WaveformParams, layout: SampleLayout, config: ViewConfig) -> Self {
        let time_domain = waveform::generate(&params, &layout);
        let displayed = time_domain.clone();

        let mut controller = Self {
            params,
            layout,
            mode: ViewMode::Time,
            config,
            time_domain,
            displayed,
            transition: None,
            transform: SpectralTransform::new(layout.points),
        };

        if config.initial_mode == ViewMode::Frequency {
            controller.set_mode(ViewMode::Frequency);
        }
        controller
    }

    pub fn params(&self) -> WaveformParams {
        self.params
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn time_domain(&self) -> &[f32] {
        &self.time_domain
    }

    pub fn displayed(&self) -> &[f32] {
        &self.displayed
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Current heights as a commit (used for the first upload)
    pub fn snapshot(&self) -> GeometryCommit {
        GeometryCommit {
            heights: self.displayed.clone(),
        }
    }

    /// Route a control-panel event
    pub fn apply(&mut self, event: ControlEvent) -> Option<GeometryCommit> {
        match event {
            ControlEvent::Amplitude(amplitude) => self.set_amplitude(amplitude),
            ControlEvent::Frequency(frequency) => self.set_frequency(frequency),
            ControlEvent::Mode(mode) => self.set_mode(mode),
            ControlEvent::ToggleMode => self.set_mode(self.mode.toggled()),
        }
    }

    /// Set amplitude (clamped to its control range)
    pub fn set_amplitude(&mut self, amplitude: f32) -> Option<GeometryCommit> {
        let amplitude = AMPLITUDE_RANGE.clamp(amplitude);
        if amplitude == self.params.amplitude || amplitude.is_nan() {
            return None;
        }
        self.params.amplitude = amplitude;
        self.on_params_changed()
    }

    /// Set frequency (clamped to its control range)
    pub fn set_frequency(&mut self, frequency: f32) -> Option<GeometryCommit> {
        let frequency = FREQUENCY_RANGE.clamp(frequency);
        if frequency == self.params.frequency || frequency.is_nan() {
            return None;
        }
        self.params.frequency = frequency;
        self.on_params_changed()
    }

    /// Switch view mode; selecting the active mode does nothing
    ///
    /// Entering time mode writes the waveform immediately and cancels any
    /// running transition. Entering frequency mode starts a transition and
    /// returns `None`; its frames arrive through [`tick`](Self::tick).
    pub fn set_mode(&mut self, mode: ViewMode) -> Option<GeometryCommit> {
        if mode == self.mode {
            return None;
        }
        log::debug!("View mode: {} -> {}", self.mode, mode);
        self.mode = mode;

        match mode {
            ViewMode::Time => Some(self.show_time_domain()),
            ViewMode::Frequency => {
                self.start_spectrum_transition();
                None
            }
        }
    }

    /// Advance the running transition by `dt`
    ///
    /// Returns a commit for every tick while a transition runs, including
    /// the one that lands on the target, and `None` once idle.
    pub fn tick(&mut self, dt: Duration) -> Option<GeometryCommit> {
        let transition = self.transition.as_mut()?;
        self.displayed.copy_from_slice(transition.advance(dt));

        if transition.is_finished() {
            log::trace!("Spectrum transition finished");
            self.transition = None;
        }
        Some(self.snapshot())
    }

    fn on_params_changed(&mut self) -> Option<GeometryCommit> {
        self.time_domain = waveform::generate(&self.params, &self.layout);
        log::debug!(
            "Waveform: amplitude={:.1} frequency={:.1}",
            self.params.amplitude,
            self.params.frequency
        );

        match (self.mode, self.config.refresh) {
            (ViewMode::Time, _) => Some(self.show_time_domain()),
            (ViewMode::Frequency, FrequencyRefresh::Immediate) => {
                self.start_spectrum_transition();
                None
            }
            (ViewMode::Frequency, FrequencyRefresh::OnModeEntry) => None,
        }
    }

    fn show_time_domain(&mut self) -> GeometryCommit {
        self.transition = None;
        self.displayed.copy_from_slice(&self.time_domain);
        self.snapshot()
    }

    /// Replace any running transition with one from the current heights
    /// to the spectrum of the current time-domain samples.
    ///
    /// The spectrum covers the first `padded / 2` points; points past it
    /// keep their current heights.
    fn start_spectrum_transition(&mut self) {
        let magnitudes = self.transform.magnitudes(&self.time_domain);

        let mut target = self.displayed.clone();
        target[..magnitudes.len()].copy_from_slice(&magnitudes);

        if self.transition.is_some() {
            log::trace!("Superseding in-flight transition");
        }
        self.transition = Some(Transition::new(
            self.displayed.clone(),
            target,
            self.config.transition.duration,
            self.config.transition.easing,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TransitionConfig;
    use crate::spectrum::compute_spectrum;
    use crate::transition::Easing;

    const FRAME: Duration = Duration::from_millis(16);

    fn controller(refresh: FrequencyRefresh) -> ViewController {
        let config = ViewConfig {
            refresh,
            ..ViewConfig::default()
        };
        ViewController::new(WaveformParams::default(), SampleLayout::default(), config)
    }

    /// Tick until idle, returning the number of commits produced
    fn run_to_completion(view: &mut ViewController) -> usize {
        let mut commits = 0;
        while view.tick(FRAME).is_some() {
            commits += 1;
            assert!(commits < 1000, "transition never finished");
        }
        commits
    }

    #[test]
    fn test_initial_state() {
        let view = controller(FrequencyRefresh::Immediate);

        assert_eq!(view.mode(), ViewMode::Time);
        assert!(!view.is_animating());
        assert_eq!(view.displayed().len(), 500);
        assert_eq!(view.displayed(), view.time_domain());
        assert!((view.displayed()[0] - 1.0880).abs() < 1e-3);
        assert!(view.displayed()[250].abs() < 1e-5);
    }

    #[test]
    fn test_toggle_twice_restores_waveform() {
        let mut view = controller(FrequencyRefresh::Immediate);
        let original = view.displayed().to_vec();

        assert!(view.apply(ControlEvent::ToggleMode).is_none());
        run_to_completion(&mut view);
        let commit = view.apply(ControlEvent::ToggleMode).unwrap();

        assert_eq!(view.mode(), ViewMode::Time);
        assert_eq!(commit.heights(), original.as_slice());
        assert_eq!(view.displayed(), original.as_slice());
    }

    #[test]
    fn test_frequency_transition_lands_on_spectrum() {
        let mut view = controller(FrequencyRefresh::Immediate);
        let before = view.displayed().to_vec();

        view.set_mode(ViewMode::Frequency);
        assert!(view.is_animating());

        let commits = run_to_completion(&mut view);
        // 1 s at 16 ms per frame
        assert_eq!(commits, 63);

        let spectrum = compute_spectrum(view.time_domain());
        assert_eq!(spectrum.len(), 256);
        assert_eq!(&view.displayed()[..256], spectrum.as_slice());
        // Points beyond the spectrum keep their heights
        assert_eq!(&view.displayed()[256..], &before[256..]);
    }

    #[test]
    fn test_ticks_commit_intermediate_frames() {
        let mut view = controller(FrequencyRefresh::Immediate);
        let start = view.displayed().to_vec();
        view.set_mode(ViewMode::Frequency);

        let commit = view.tick(Duration::from_millis(500)).unwrap();
        let target = compute_spectrum(view.time_domain());

        assert_ne!(commit.heights(), start.as_slice());
        assert_ne!(&commit.heights()[..256], target.as_slice());
        assert_eq!(commit.heights(), view.displayed());
    }

    #[test]
    fn test_idle_tick_commits_nothing() {
        let mut view = controller(FrequencyRefresh::Immediate);
        assert!(view.tick(FRAME).is_none());
    }

    #[test]
    fn test_param_change_in_time_mode_commits_immediately() {
        let mut view = controller(FrequencyRefresh::Immediate);

        let commit = view.set_amplitude(5.0).unwrap();
        let expected = waveform::generate(
            &WaveformParams {
                amplitude: 5.0,
                frequency: 1.0,
            },
            &SampleLayout::default(),
        );

        assert_eq!(commit.heights(), expected.as_slice());
        assert!(!view.is_animating());
    }

    #[test]
    fn test_unchanged_or_clamped_values() {
        let mut view = controller(FrequencyRefresh::Immediate);

        assert!(view.set_amplitude(2.0).is_none());
        assert!(view.set_frequency(f32::NAN).is_none());

        view.set_amplitude(1000.0);
        assert_eq!(view.params().amplitude, AMPLITUDE_RANGE.max);
        view.set_frequency(0.0);
        assert_eq!(view.params().frequency, FREQUENCY_RANGE.min);
    }

    #[test]
    fn test_selecting_active_mode_is_noop() {
        let mut view = controller(FrequencyRefresh::Immediate);
        assert!(view.set_mode(ViewMode::Time).is_none());
        assert!(!view.is_animating());
    }

    #[test]
    fn test_immediate_refresh_retargets() {
        let mut view = controller(FrequencyRefresh::Immediate);
        view.set_mode(ViewMode::Frequency);
        view.tick(Duration::from_millis(300));
        let mid_flight = view.displayed().to_vec();

        assert!(view.set_frequency(10.0).is_none());
        assert!(view.is_animating());

        // New transition starts from where the old one was
        let first = view.tick(Duration::ZERO).unwrap();
        assert_eq!(first.heights(), mid_flight.as_slice());

        run_to_completion(&mut view);
        let spectrum = compute_spectrum(view.time_domain());
        assert_eq!(&view.displayed()[..256], spectrum.as_slice());
    }

    #[test]
    fn test_on_mode_entry_defers_spectrum() {
        let mut view = controller(FrequencyRefresh::OnModeEntry);
        view.set_mode(ViewMode::Frequency);
        run_to_completion(&mut view);
        let old_spectrum = view.displayed().to_vec();

        assert!(view.set_frequency(10.0).is_none());
        assert!(!view.is_animating());
        assert_eq!(view.displayed(), old_spectrum.as_slice());

        // Ground truth already follows the new parameters
        let params = view.params();
        assert_eq!(
            view.time_domain(),
            waveform::generate(&params, &SampleLayout::default()).as_slice()
        );

        let commit = view.set_mode(ViewMode::Time).unwrap();
        assert_eq!(commit.heights(), view.time_domain());
    }

    #[test]
    fn test_rapid_toggle_latest_wins() {
        let mut view = controller(FrequencyRefresh::Immediate);
        let waveform = view.time_domain().to_vec();

        view.set_mode(ViewMode::Frequency);
        view.tick(Duration::from_millis(200));

        // Back to time mid-flight: exact waveform, animation cancelled
        let commit = view.set_mode(ViewMode::Time).unwrap();
        assert_eq!(commit.heights(), waveform.as_slice());
        assert!(!view.is_animating());
        assert!(view.tick(FRAME).is_none());

        view.set_mode(ViewMode::Frequency);
        run_to_completion(&mut view);
        assert_eq!(
            &view.displayed()[..256],
            compute_spectrum(&waveform).as_slice()
        );
    }

    #[test]
    fn test_no_drift_after_many_transitions() {
        let mut view = controller(FrequencyRefresh::Immediate);

        for step in 0..5 {
            view.set_mode(ViewMode::Frequency);
            view.tick(Duration::from_millis(100 * step));
            view.set_amplitude(2.0 + step as f32);
            view.set_frequency(1.0 + step as f32 * 0.7);
            run_to_completion(&mut view);
            view.set_mode(ViewMode::Time);
        }

        let expected = waveform::generate(&view.params(), &SampleLayout::default());
        assert_eq!(view.displayed(), expected.as_slice());
    }

    #[test]
    fn test_starts_in_frequency_mode() {
        let config = ViewConfig {
            initial_mode: ViewMode::Frequency,
            transition: TransitionConfig {
                duration: Duration::ZERO,
                easing: Easing::Linear,
            },
            ..ViewConfig::default()
        };
        let mut view =
            ViewController::new(WaveformParams::default(), SampleLayout::default(), config);

        assert_eq!(view.mode(), ViewMode::Frequency);
        let commit = view.tick(Duration::ZERO).unwrap();
        assert_eq!(
            &commit.heights()[..256],
            compute_spectrum(view.time_domain()).as_slice()
        );
        assert!(!view.is_animating());
    }
}
