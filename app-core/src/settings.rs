use egui::Color32;
use ip_proximity::ACCENT;

// Orbit control toggles shown in the panel
pub struct SettingsNavigation {
    pub rotate_enabled: bool,
    pub zoom_enabled: bool,
    pub pan_enabled: bool,
    pub zoom_speed: f32,
}

impl Default for SettingsNavigation {
    fn default() -> Self {
        Self {
            rotate_enabled: true,
            zoom_enabled: true,
            pan_enabled: true,
            zoom_speed: 0.002,
        }
    }
}

impl SettingsNavigation {
    pub fn build(&self) -> ip_proximity::SettingsNavigation {
        ip_proximity::SettingsNavigation::new()
            .with_rotate_enabled(self.rotate_enabled)
            .with_zoom_enabled(self.zoom_enabled)
            .with_pan_enabled(self.pan_enabled)
            .with_zoom_speed(self.zoom_speed)
    }
}

// Scene look adjustable from the panel
pub struct SettingsStyle {
    pub node_radius: f32,
    pub line_color: Color32,
    pub line_opacity: f32,
    pub halo_opacity: f32,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            node_radius: 0.5,
            line_color: ACCENT,
            line_opacity: 0.4,
            halo_opacity: 0.2,
        }
    }
}

impl SettingsStyle {
    pub fn build(&self) -> ip_proximity::SettingsStyle {
        ip_proximity::SettingsStyle::new()
            .with_node_radius(self.node_radius)
            .with_line_color(self.line_color)
            .with_line_opacity(self.line_opacity)
            .with_halo_opacity(self.halo_opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_library() {
        let style = SettingsStyle::default().build();
        let lib = ip_proximity::SettingsStyle::default();
        assert_eq!(style.node_radius, lib.node_radius);
        assert_eq!(style.line_color, lib.line_color);
        assert_eq!(style.line_opacity, lib.line_opacity);
        assert_eq!(style.halo_opacity, lib.halo_opacity);

        let nav = SettingsNavigation::default().build();
        let lib = ip_proximity::SettingsNavigation::default();
        assert_eq!(nav.zoom_speed, lib.zoom_speed);
        assert!(nav.rotate_enabled && nav.zoom_enabled && nav.pan_enabled);
    }

    #[test]
    fn test_toggles_reach_library_settings() {
        let nav = SettingsNavigation {
            rotate_enabled: false,
            pan_enabled: false,
            ..Default::default()
        }
        .build();
        assert!(!nav.rotate_enabled);
        assert!(nav.zoom_enabled);
        assert!(!nav.pan_enabled);

        let style = SettingsStyle {
            node_radius: 1.5,
            ..Default::default()
        }
        .build();
        assert_eq!(style.node_radius, 1.5);
    }
}
