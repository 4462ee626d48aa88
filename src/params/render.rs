//! Window, camera and line-style configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,

    /// Camera distance from the origin along +Z (world units)
    /// 15 fits the default [-10, 10) domain at 75° with some margin
    pub camera_distance: f32,

    /// Line color (linear RGBA)
    pub line_color: [f32; 4],

    /// Background clear color
    pub clear_color: [f64; 4],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            camera_distance: 15.0,
            line_color: [1.0, 0.0, 0.0, 1.0],
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(format!(
                "Window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            ));
        }
        if !(self.near_plane > 0.0) || self.far_plane <= self.near_plane {
            return Err(format!(
                "Clip planes must satisfy 0 < near < far, got near={} far={}",
                self.near_plane, self.far_plane
            ));
        }
        Ok(())
    }
}
