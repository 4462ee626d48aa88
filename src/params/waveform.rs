//! Waveform parameters, control ranges and the fixed sample layout.

/// Inclusive numeric range with a control step (one slider's worth of input)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParamRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Clamp a value into the range
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Move `value` by `steps` increments, snapped to the step grid and clamped.
    ///
    /// Snapping keeps repeated key presses from accumulating float error
    /// (2.0 + 0.1 * 10 lands on 3.0, not 2.9999998).
    pub fn step_by(&self, value: f32, steps: i32) -> f32 {
        let offset = ((value - self.min) / self.step).round() as i64 + steps as i64;
        self.clamp(self.min + offset as f32 * self.step)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Amplitude control: 0.5 ..= 100, step 0.1
pub const AMPLITUDE_RANGE: ParamRange = ParamRange::new(0.5, 100.0, 0.1);

/// Frequency control: 0.5 ..= 100, step 0.1 (radians per domain unit)
pub const FREQUENCY_RANGE: ParamRange = ParamRange::new(0.5, 100.0, 0.1);

/// User-adjustable sine parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformParams {
    /// Peak height of the sine in world units
    pub amplitude: f32,

    /// Angular frequency (radians per world unit along X)
    pub frequency: f32,
}

impl Default for WaveformParams {
    fn default() -> Self {
        Self {
            amplitude: 2.0,
            frequency: 1.0,
        }
    }
}

impl WaveformParams {
    /// Both values must lie inside their control ranges (which are strictly positive)
    pub fn validate(&self) -> Result<(), String> {
        if !AMPLITUDE_RANGE.contains(self.amplitude) {
            return Err(format!(
                "Amplitude must be in {}..={}, got {}",
                AMPLITUDE_RANGE.min, AMPLITUDE_RANGE.max, self.amplitude
            ));
        }
        if !FREQUENCY_RANGE.contains(self.frequency) {
            return Err(format!(
                "Frequency must be in {}..={}, got {}",
                FREQUENCY_RANGE.min, FREQUENCY_RANGE.max, self.frequency
            ));
        }
        Ok(())
    }
}

/// Largest accepted point count; keeps the vertex buffer (12 bytes per point)
/// well under wgpu's default buffer size limit and the draw range within `u32`
pub const MAX_POINTS: usize = 1 << 20;

/// Fixed horizontal placement of the displayed points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleLayout {
    /// Number of displayed points (constant for the session)
    pub points: usize,

    /// Left edge of the visible domain (world units)
    pub domain_start: f32,

    /// Width of the visible domain (world units); the right edge is exclusive
    pub domain_span: f32,
}

impl Default for SampleLayout {
    fn default() -> Self {
        Self {
            points: 500,
            domain_start: -10.0,
            domain_span: 20.0,
        }
    }
}

impl SampleLayout {
    /// Domain position of point `index`: evenly spaced over `[start, start + span)`
    pub fn x(&self, index: usize) -> f32 {
        (index as f32 / self.points as f32) * self.domain_span + self.domain_start
    }

    /// Distance between neighbouring points (world units)
    pub fn spacing(&self) -> f32 {
        self.domain_span / self.points as f32
    }

    /// Fractional spectrum bin where a sine of angular `frequency` peaks
    /// once the layout has been zero-padded for the transform.
    pub fn bin_for_frequency(&self, frequency: f32) -> f32 {
        let cycles_per_sample = frequency * self.spacing() / std::f32::consts::TAU;
        cycles_per_sample * crate::spectrum::padded_length(self.points) as f32
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.points == 0 {
            return Err("Point count must be > 0".to_string());
        }
        if self.points > MAX_POINTS {
            return Err(format!(
                "Point count must be <= {}, got {}",
                MAX_POINTS, self.points
            ));
        }
        if !(self.domain_span > 0.0) || !self.domain_span.is_finite() {
            return Err(format!(
                "Domain span must be a positive finite width, got {}",
                self.domain_span
            ));
        }
        if !self.domain_start.is_finite() {
            return Err(format!("Domain start must be finite, got {}", self.domain_start));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_positions() {
        let layout = SampleLayout::default();

        assert_eq!(layout.x(0), -10.0);
        assert!(layout.x(250).abs() < 1e-6);
        // Right edge is exclusive
        assert!(layout.x(layout.points - 1) < 10.0);
        assert!((layout.spacing() - 0.04).abs() < 1e-6);
    }

    #[test]
    fn test_step_snaps_to_grid() {
        let mut value = 2.0;
        for _ in 0..10 {
            value = AMPLITUDE_RANGE.step_by(value, 1);
        }
        assert!((value - 3.0).abs() < 1e-4);

        // Clamped at both ends
        assert_eq!(AMPLITUDE_RANGE.step_by(100.0, 5), 100.0);
        assert_eq!(FREQUENCY_RANGE.step_by(0.5, -3), 0.5);
    }

    #[test]
    fn test_params_validation() {
        assert!(WaveformParams::default().validate().is_ok());

        let zero_amp = WaveformParams {
            amplitude: 0.0,
            frequency: 1.0,
        };
        assert!(zero_amp.validate().is_err());

        let nan_freq = WaveformParams {
            amplitude: 1.0,
            frequency: f32::NAN,
        };
        assert!(nan_freq.validate().is_err());
    }

    #[test]
    fn test_layout_validation() {
        assert!(SampleLayout::default().validate().is_ok());

        let empty = SampleLayout {
            points: 0,
            ..SampleLayout::default()
        };
        assert!(empty.validate().is_err());

        let at_cap = SampleLayout {
            points: MAX_POINTS,
            ..SampleLayout::default()
        };
        assert!(at_cap.validate().is_ok());

        let oversized = SampleLayout {
            points: MAX_POINTS + 1,
            ..SampleLayout::default()
        };
        assert!(oversized.validate().is_err());

        let flat = SampleLayout {
            domain_span: 0.0,
            ..SampleLayout::default()
        };
        assert!(flat.validate().is_err());
    }

    #[test]
    fn test_bin_for_frequency() {
        let layout = SampleLayout::default();

        // 500 points pad to 512; f = 1 rad/unit at 0.04 units/sample
        // = 0.04 / 2π cycles per sample ≈ 3.26 bins
        let bin = layout.bin_for_frequency(1.0);
        assert!((bin - 3.2595).abs() < 1e-3);
    }
}
