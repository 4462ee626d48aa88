//! Sinescope library - sine waveform with time/frequency domain views

pub mod camera;
pub mod cli;
pub mod controls;
pub mod params;
pub mod rendering;
pub mod spectrum;
pub mod transition;
pub mod view;
pub mod waveform;
