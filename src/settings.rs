use egui::Color32;

/// Visual parameters of the scene.
#[derive(Debug, Clone)]
pub struct SettingsStyle {
    /// Radius of a node sphere in scene units.
    pub node_radius: f32,
    pub node_color: Color32,
    pub node_metalness: f32,
    pub node_roughness: f32,
    pub node_emissive_intensity: f32,

    /// Halo radius relative to the node radius.
    pub halo_scale: f32,
    pub halo_color: Color32,
    pub halo_opacity: f32,

    pub line_color: Color32,
    pub line_opacity: f32,
    pub line_width: f32,

    /// Gap between the top of a sphere and its label, in scene units.
    pub label_offset: f32,
    pub label_color: Color32,
    pub label_size: f32,

    pub background: Color32,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            node_radius: 0.5,
            node_color: Color32::WHITE,
            node_metalness: 0.8,
            node_roughness: 0.2,
            node_emissive_intensity: 0.2,

            halo_scale: 1.2,
            halo_color: ACCENT,
            halo_opacity: 0.2,

            line_color: ACCENT,
            line_opacity: 0.4,
            line_width: 1.,

            label_offset: 0.5,
            label_color: ACCENT,
            label_size: 12.,

            background: Color32::from_rgb(0x12, 0x12, 0x12),
        }
    }
}

impl SettingsStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node_radius(mut self, radius: f32) -> Self {
        self.node_radius = radius;
        self
    }

    pub fn with_line_color(mut self, color: Color32) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_line_opacity(mut self, opacity: f32) -> Self {
        self.line_opacity = opacity;
        self
    }

    pub fn with_halo_opacity(mut self, opacity: f32) -> Self {
        self.halo_opacity = opacity;
        self
    }
}

/// Light blue used for lines, halos and labels.
pub const ACCENT: Color32 = Color32::from_rgb(0x90, 0xca, 0xf9);

/// Orbit controls.
#[derive(Debug, Clone)]
pub struct SettingsNavigation {
    pub rotate_enabled: bool,
    pub zoom_enabled: bool,
    pub pan_enabled: bool,

    /// Radians per dragged point.
    pub rotate_speed: f32,
    /// Fraction of distance per scrolled point.
    pub zoom_speed: f32,

    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for SettingsNavigation {
    fn default() -> Self {
        Self {
            rotate_enabled: true,
            zoom_enabled: true,
            pan_enabled: true,
            rotate_speed: 0.008,
            zoom_speed: 0.002,
            min_distance: 1.,
            max_distance: 100.,
        }
    }
}

impl SettingsNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rotate_enabled(mut self, enabled: bool) -> Self {
        self.rotate_enabled = enabled;
        self
    }

    pub fn with_zoom_enabled(mut self, enabled: bool) -> Self {
        self.zoom_enabled = enabled;
        self
    }

    pub fn with_pan_enabled(mut self, enabled: bool) -> Self {
        self.pan_enabled = enabled;
        self
    }

    pub fn with_zoom_speed(mut self, speed: f32) -> Self {
        self.zoom_speed = speed;
        self
    }
}
