//! Time-domain sine generation over the fixed sample layout.

use crate::params::{SampleLayout, WaveformParams};

/// Height of point `index`: `amplitude * sin(frequency * x(index))`
pub fn sample(params: &WaveformParams, layout: &SampleLayout, index: usize) -> f32 {
    params.amplitude * (params.frequency * layout.x(index)).sin()
}

/// Full time-domain sequence, one value per layout point
///
/// Always computed from scratch, so the result depends only on the
/// current parameters.
pub fn generate(params: &WaveformParams, layout: &SampleLayout) -> Vec<f32> {
    (0..layout.points)
        .map(|i| sample(params, layout, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario() {
        let params = WaveformParams {
            amplitude: 2.0,
            frequency: 1.0,
        };
        let samples = generate(&params, &SampleLayout::default());

        assert_eq!(samples.len(), 500);
        // sin(-10) ≈ 0.5440
        assert!((samples[0] - 1.0880).abs() < 1e-3);
        assert!(samples[250].abs() < 1e-5);
    }

    #[test]
    fn test_amplitude_bounds_samples() {
        let params = WaveformParams {
            amplitude: 3.5,
            frequency: 7.3,
        };
        let samples = generate(&params, &SampleLayout::default());
        assert!(samples.iter().all(|s| s.abs() <= 3.5 + 1e-5));
    }

    #[test]
    fn test_regeneration_is_exact() {
        let params = WaveformParams {
            amplitude: 4.2,
            frequency: 2.5,
        };
        let layout = SampleLayout::default();
        assert_eq!(generate(&params, &layout), generate(&params, &layout));
    }
}
