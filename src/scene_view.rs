use egui::{Id, PointerButton, Rect, Response, Sense, Ui, Widget};

use crate::{
    camera::OrbitCamera,
    draw::{paint_scene, DrawContext},
    node::Node,
    scene::build_scene,
    settings::{SettingsNavigation, SettingsStyle},
};

/// Widget rendering a node list as a 3D scene with orbit controls.
///
/// The camera is kept in egui memory under the view id, so the widget can be
/// rebuilt every frame.
pub struct SceneView<'a> {
    nodes: &'a [Node],
    id: Id,
    settings_style: SettingsStyle,
    settings_navigation: SettingsNavigation,
}

impl Widget for &mut SceneView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let canvas = response.rect;

        let mut camera = OrbitCamera::load(ui, self.id);
        self.handle_navigation(ui, &response, canvas, &mut camera);

        painter.rect_filled(canvas, 0., self.settings_style.background);
        let scene = build_scene(self.nodes, &self.settings_style);
        paint_scene(
            &scene,
            &DrawContext {
                painter: &painter,
                camera: &camera,
                canvas,
            },
        );

        camera.store(ui, self.id);
        response
    }
}

impl<'a> SceneView<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        Self {
            nodes,
            id: Id::new("ip_proximity_scene_view"),
            settings_style: SettingsStyle::default(),
            settings_navigation: SettingsNavigation::default(),
        }
    }

    /// Distinguishes the camera state of several views.
    pub fn with_id(mut self, id: impl std::hash::Hash) -> Self {
        self.id = Id::new(id);
        self
    }

    pub fn with_styles(mut self, settings_style: &SettingsStyle) -> Self {
        self.settings_style = settings_style.clone();
        self
    }

    pub fn with_navigations(mut self, settings_navigation: &SettingsNavigation) -> Self {
        self.settings_navigation = settings_navigation.clone();
        self
    }

    /// Resets the camera of the view with `id` to its initial position.
    pub fn reset_camera(ui: &Ui, id: impl std::hash::Hash) {
        OrbitCamera::default().store(ui, Id::new(id));
    }

    fn handle_navigation(
        &self,
        ui: &Ui,
        response: &Response,
        canvas: Rect,
        camera: &mut OrbitCamera,
    ) {
        let nav = &self.settings_navigation;

        if nav.rotate_enabled && response.dragged_by(PointerButton::Primary) {
            camera.rotate(response.drag_delta(), nav);
        }
        if nav.pan_enabled
            && (response.dragged_by(PointerButton::Secondary)
                || response.dragged_by(PointerButton::Middle))
        {
            camera.pan(response.drag_delta(), canvas);
        }

        if !nav.zoom_enabled || !response.hovered() {
            return;
        }
        let (zoom_delta, scroll) = ui.input(|i| (i.zoom_delta(), i.smooth_scroll_delta.y));
        if zoom_delta != 1. {
            camera.zoom(1. / zoom_delta, nav);
        }
        if scroll != 0. {
            camera.zoom((-scroll * nav.zoom_speed).exp(), nav);
        }
    }
}
