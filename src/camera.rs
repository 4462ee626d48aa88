//! Fixed perspective camera looking down -Z at the waveform line.

use glam::{Mat4, Vec3};

use crate::params::RenderConfig;

/// Stationary camera on the +Z axis
pub struct CameraSystem {
    eye: Vec3,
    target: Vec3,
}

impl CameraSystem {
    /// Place the camera `camera_distance` units in front of the origin
    pub fn new(render_config: &RenderConfig) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, render_config.camera_distance),
            target: Vec3::ZERO,
        }
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Build the view-projection matrix for the current window aspect ratio
    pub fn create_view_proj_matrix(&self, render_config: &RenderConfig) -> Mat4 {
        // Always keep Y as up vector (camera never rolls)
        let view = Mat4::look_at_rh(self.eye, self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane,
            render_config.far_plane,
        );

        proj * view
    }
}
