use std::f32::consts::FRAC_PI_2;

use egui::{Id, Pos2, Rect, Vec2};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::settings::SettingsNavigation;

const KEY: &str = "ip_proximity_camera";

/// Points closer to the eye plane than this are not drawn.
const NEAR: f32 = 0.1;
/// Keeps the eye off the poles where the up vector degenerates.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// A point projected onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub pos: Pos2,
    /// Distance along the view direction, larger is farther.
    pub depth: f32,
    /// Screen pixels per scene unit at this depth.
    pub scale: f32,
}

/// Perspective camera orbiting a target point.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrbitCamera {
    pub target: Vec3,
    /// Rotation around the vertical axis, radians.
    pub yaw: f32,
    /// Elevation above the horizontal plane, radians.
    pub pitch: f32,
    pub distance: f32,
    /// Vertical field of view, radians.
    pub fov_y: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // eye at (0, 0, 10) looking at the origin
        Self {
            target: Vec3::ZERO,
            yaw: 0.,
            pitch: 0.,
            distance: 10.,
            fov_y: 75_f32.to_radians(),
        }
    }
}

impl OrbitCamera {
    /// Loads the camera stored for `id`, or the default one.
    pub fn load(ui: &egui::Ui, id: Id) -> Self {
        ui.data_mut(|data| {
            data.get_persisted::<OrbitCamera>(id.with(KEY))
                .unwrap_or_default()
        })
    }

    pub fn store(self, ui: &egui::Ui, id: Id) {
        ui.data_mut(|data| {
            data.insert_persisted(id.with(KEY), self);
        });
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(cp * sy, sp, cp * cy) * self.distance
    }

    fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    fn projection(&self, canvas: Rect) -> Mat4 {
        Mat4::perspective_infinite_rh(self.fov_y, canvas.aspect_ratio(), NEAR)
    }

    fn focal_length(&self, canvas: Rect) -> f32 {
        canvas.height() / 2. / (self.fov_y / 2.).tan()
    }

    /// Projects a scene point onto `canvas`. `None` if it is behind the eye.
    pub fn project(&self, p: Vec3, canvas: Rect) -> Option<Projected> {
        if !canvas.is_positive() {
            return None;
        }
        let clip = self.projection(canvas) * self.view() * p.extend(1.);
        // w holds the distance along the view direction
        let depth = clip.w;
        if depth < NEAR {
            return None;
        }

        let ndc = clip.truncate() / depth;
        let half = canvas.size() / 2.;
        Some(Projected {
            pos: canvas.center() + Vec2::new(ndc.x * half.x, -ndc.y * half.y),
            depth,
            scale: self.focal_length(canvas) / depth,
        })
    }

    pub fn rotate(&mut self, drag: Vec2, nav: &SettingsNavigation) {
        self.yaw -= drag.x * nav.rotate_speed;
        self.pitch = (self.pitch + drag.y * nav.rotate_speed).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Moves the target so the scene follows the pointer.
    pub fn pan(&mut self, drag: Vec2, canvas: Rect) {
        let forward = (self.target - self.eye()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        let units_per_px = self.distance / self.focal_length(canvas);
        self.target += (right * -drag.x + up * drag.y) * units_per_px;
    }

    /// Multiplies the orbit distance by `factor`, within the configured range.
    pub fn zoom(&mut self, factor: f32, nav: &SettingsNavigation) {
        self.distance = (self.distance * factor).clamp(nav.min_distance, nav.max_distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(800., 600.))
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_default_eye() {
        let eye = OrbitCamera::default().eye();
        assert!(approx(eye.x, 0.) && approx(eye.y, 0.) && approx(eye.z, 10.));
    }

    #[test]
    fn test_target_projects_to_center() {
        let cam = OrbitCamera::default();
        let p = cam.project(Vec3::ZERO, canvas()).unwrap();
        assert!(approx(p.pos.x, 400.) && approx(p.pos.y, 300.));
        assert!(approx(p.depth, 10.));
    }

    #[test]
    fn test_axes_orientation() {
        let cam = OrbitCamera::default();
        let right = cam.project(Vec3::new(1., 0., 0.), canvas()).unwrap();
        let up = cam.project(Vec3::new(0., 1., 0.), canvas()).unwrap();
        assert!(right.pos.x > 400.);
        assert!(up.pos.y < 300.);
    }

    #[test]
    fn test_nearer_points_are_larger() {
        let cam = OrbitCamera::default();
        let near = cam.project(Vec3::new(0., 0., 5.), canvas()).unwrap();
        let far = cam.project(Vec3::new(0., 0., -5.), canvas()).unwrap();
        assert!(near.depth < far.depth);
        assert!(near.scale > far.scale);
    }

    #[test]
    fn test_empty_canvas_projects_nothing() {
        let cam = OrbitCamera::default();
        assert!(cam.project(Vec3::ZERO, Rect::NOTHING).is_none());
    }

    #[test]
    fn test_behind_eye_is_hidden() {
        let cam = OrbitCamera::default();
        assert!(cam.project(Vec3::new(0., 0., 20.), canvas()).is_none());
    }

    #[test]
    fn test_pitch_is_clamped() {
        let nav = SettingsNavigation::default();
        let mut cam = OrbitCamera::default();
        cam.rotate(Vec2::new(0., 1.0e6), &nav);
        assert!(cam.pitch <= PITCH_LIMIT);
        assert!(cam.project(Vec3::ZERO, canvas()).is_some());
    }

    #[test]
    fn test_zoom_is_clamped() {
        let nav = SettingsNavigation::default();
        let mut cam = OrbitCamera::default();
        cam.zoom(1.0e-6, &nav);
        assert_eq!(cam.distance, nav.min_distance);
        cam.zoom(1.0e6, &nav);
        assert_eq!(cam.distance, nav.max_distance);
    }
}
