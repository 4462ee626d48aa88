//! Eased interpolation of a whole sample vector.
//!
//! One transition owns both endpoints and advances every sample together,
//! so superseding an animation is just replacing the value.

use std::time::Duration;

use clap::ValueEnum;

/// Easing curve over normalized progress `t` in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Easing {
    Linear,

    /// `1 - (1 - t)^2`: fast start, gentle landing
    #[default]
    QuadOut,

    /// Quadratic ease-in for the first half, ease-out for the second
    QuadInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// In-flight interpolation from one sample vector to another
#[derive(Debug, Clone)]
pub struct Transition {
    from: Vec<f32>,
    to: Vec<f32>,
    current: Vec<f32>,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Transition {
    /// # Panics
    /// If `from` and `to` have different lengths.
    pub fn new(from: Vec<f32>, to: Vec<f32>, duration: Duration, easing: Easing) -> Self {
        assert_eq!(
            from.len(),
            to.len(),
            "transition endpoints must have the same length"
        );
        let current = from.clone();
        Self {
            from,
            to,
            current,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Normalized time in `[0, 1]`; a zero duration counts as complete
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Move the clock forward by `dt` and return the interpolated values
    ///
    /// The final tick lands exactly on the target, with no rounding residue.
    pub fn advance(&mut self, dt: Duration) -> &[f32] {
        self.elapsed = (self.elapsed + dt).min(self.duration);

        if self.is_finished() {
            self.current.copy_from_slice(&self.to);
        } else {
            let eased = self.easing.apply(self.progress());
            for ((value, &start), &end) in self.current.iter_mut().zip(&self.from).zip(&self.to) {
                *value = start + (end - start) * eased;
            }
        }

        &self.current
    }

    /// Values as of the last `advance`
    pub fn values(&self) -> &[f32] {
        &self.current
    }
}
