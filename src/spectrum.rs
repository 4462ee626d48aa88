//! Magnitude spectrum of a real sample sequence.
//!
//! Input is zero-padded to the next power of two, run through a forward FFT,
//! and only the first half of the bins is kept (the second half of a real
//! signal's spectrum mirrors the first).

use std::sync::Arc;

use rustfft::{num_complex::Complex, Fft, FftPlanner};

/// Smallest power of two >= `len`
///
/// `padded_length(0)` is 1; callers never transform an empty sequence.
pub fn padded_length(len: usize) -> usize {
    len.next_power_of_two()
}

/// Forward transform planned once for a fixed input length
pub struct SpectralTransform {
    fft: Arc<dyn Fft<f32>>,
    input_len: usize,
    buffer: Vec<Complex<f32>>,
    scratch: Vec<Complex<f32>>,
}

impl SpectralTransform {
    /// Plan a transform for sequences of exactly `input_len` samples
    ///
    /// # Panics
    /// If `input_len` is zero.
    pub fn new(input_len: usize) -> Self {
        assert!(input_len > 0, "cannot plan a spectrum for an empty sequence");

        let padded_len = padded_length(input_len);
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(padded_len);
        let scratch = vec![Complex::new(0.0, 0.0); fft.get_inplace_scratch_len()];

        Self {
            fft,
            input_len,
            buffer: vec![Complex::new(0.0, 0.0); padded_len],
            scratch,
        }
    }

    /// Transform size after padding
    pub fn padded_len(&self) -> usize {
        self.buffer.len()
    }

    /// Number of magnitudes returned per call (`padded_len / 2`)
    pub fn bin_count(&self) -> usize {
        self.padded_len() / 2
    }

    /// Magnitude spectrum of `samples`
    ///
    /// # Panics
    /// If `samples.len()` differs from the planned input length.
    pub fn magnitudes(&mut self, samples: &[f32]) -> Vec<f32> {
        assert_eq!(
            samples.len(),
            self.input_len,
            "transform planned for {} samples",
            self.input_len
        );

        // Real part from the samples, everything past the prefix back to zero
        for (slot, &sample) in self.buffer.iter_mut().zip(samples) {
            *slot = Complex::new(sample, 0.0);
        }
        for slot in &mut self.buffer[samples.len()..] {
            *slot = Complex::new(0.0, 0.0);
        }

        self.fft.process_with_scratch(&mut self.buffer, &mut self.scratch);

        let bins = self.bin_count();
        self.buffer[..bins]
            .iter()
            .map(|c| (c.re * c.re + c.im * c.im).sqrt())
            .collect()
    }
}

/// One-shot magnitude spectrum; output length is `padded_length(len) / 2`
///
/// # Panics
/// If `samples` is empty.
pub fn compute_spectrum(samples: &[f32]) -> Vec<f32> {
    assert!(
        !samples.is_empty(),
        "cannot compute the spectrum of an empty sequence"
    );
    SpectralTransform::new(samples.len()).magnitudes(samples)
}
