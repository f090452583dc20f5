use eframe::{App, CreationContext};
use egui::{self, Align2, CentralPanel, CollapsingHeader, Frame, RichText, Slider, Ui};
use ip_proximity::{Backend, Config, CreationForm, SceneView, Shell, ShellView};
use log::{error, info};
use web_time::Instant;

mod settings;
mod views;

use settings::{SettingsNavigation, SettingsStyle};
use views::{
    form::draw_creation_form,
    overlay::{draw_info_overlay, panel_frame, Info},
    style::{self, FONT_HEADING, PANEL_WIDTH, UI_MARGIN},
};

pub const APP_NAME: &str = "IP Proximity Network Visualizer";

const SCENE_ID: &str = "ip_proximity_scene";

/// Reads the API location from the environment, falling back to the
/// default endpoint when the configured value does not parse.
pub fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}, using the default API url");
            Config::default()
        }
    }
}

pub struct ProximityApp {
    shell: Shell,
    form: CreationForm,

    settings_style: SettingsStyle,
    settings_navigation: SettingsNavigation,

    show_info_overlay: bool,
    fps: f32,
    last_update_time: Instant,
    frames_last_time_span: usize,
}

impl ProximityApp {
    /// Builds the app and fires the startup fetches through `backend`.
    pub fn new(cc: &CreationContext<'_>, backend: impl Backend + 'static) -> Self {
        style::apply(&cc.egui_ctx);

        let mut shell = Shell::new(backend);
        shell.start();
        info!("startup fetches dispatched");

        Self {
            shell,
            form: CreationForm::default(),
            settings_style: SettingsStyle::default(),
            settings_navigation: SettingsNavigation::default(),
            show_info_overlay: false,
            fps: 0.,
            last_update_time: Instant::now(),
            frames_last_time_span: 0,
        }
    }

    fn update_fps(&mut self) {
        self.frames_last_time_span += 1;
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update_time);
        if elapsed.as_secs() >= 1 {
            self.last_update_time = now;
            self.fps = self.frames_last_time_span as f32 / elapsed.as_secs_f32();
            self.frames_last_time_span = 0;
        }
    }

    fn draw_scene(&self, ui: &mut Ui) {
        let nodes = self.shell.nodes();
        let mut view = SceneView::new(nodes)
            .with_id(SCENE_ID)
            .with_styles(&self.settings_style.build())
            .with_navigations(&self.settings_navigation.build());
        ui.add(&mut view);

        if self.show_info_overlay {
            let n = nodes.len();
            draw_info_overlay(
                ui,
                &Info {
                    fps: self.fps,
                    nodes: n,
                    lines: n * n.saturating_sub(1) / 2,
                },
            );
        }
    }

    fn draw_controls(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("ip_proximity_controls"))
            .order(egui::Order::Foreground)
            .anchor(Align2::LEFT_TOP, [0., 0.])
            .show(ctx, |ui| {
                panel_frame().show(ui, |ui| {
                    ui.set_width(PANEL_WIDTH);
                    ui.label(
                        RichText::new(APP_NAME)
                            .font(FONT_HEADING)
                            .color(ui.visuals().hyperlink_color),
                    );
                    ui.add_space(UI_MARGIN / 2.);

                    draw_creation_form(ui, &mut self.form, &mut self.shell);

                    ui.add_space(UI_MARGIN / 2.);
                    ui.horizontal(|ui| {
                        ui.checkbox(&mut self.show_info_overlay, "stats");
                        if ui.small_button("reset view").clicked() {
                            SceneView::reset_camera(ui, SCENE_ID);
                        }
                    });

                    self.ui_navigation(ui);
                    self.ui_style(ui);
                });
            });
    }

    fn ui_navigation(&mut self, ui: &mut Ui) {
        CollapsingHeader::new("Navigation").show(ui, |ui| {
            let nav = &mut self.settings_navigation;
            ui.horizontal(|ui| {
                ui.checkbox(&mut nav.rotate_enabled, "rotate");
                ui.checkbox(&mut nav.zoom_enabled, "zoom");
                ui.checkbox(&mut nav.pan_enabled, "pan");
            });
            ui.add_enabled_ui(nav.zoom_enabled, |ui| {
                ui.add(Slider::new(&mut nav.zoom_speed, 0.0005..=0.01).text("zoom_speed"));
            });
        });
    }

    fn ui_style(&mut self, ui: &mut Ui) {
        CollapsingHeader::new("Style").show(ui, |ui| {
            let style = &mut self.settings_style;
            ui.add(Slider::new(&mut style.node_radius, 0.1..=2.).text("node_radius"));
            ui.add(Slider::new(&mut style.halo_opacity, 0.0..=1.).text("halo_opacity"));
            ui.add(Slider::new(&mut style.line_opacity, 0.0..=1.).text("line_opacity"));
            ui.horizontal(|ui| {
                ui.color_edit_button_srgba(&mut style.line_color);
                ui.label("line_color");
            });
        });
    }
}

impl App for ProximityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for outcome in self.shell.poll() {
            self.form.resolve(&outcome);
        }

        match self.shell.view() {
            ShellView::Loading => {
                CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.horizontal_centered(|ui| {
                            ui.spinner();
                            ui.label("Loading...");
                        });
                    });
                });
            }
            ShellView::Failed(err) => {
                let text = format!("Error: {err}");
                CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label(RichText::new(text).color(ui.visuals().error_fg_color));
                    });
                });
            }
            ShellView::Ready(_) => {
                CentralPanel::default()
                    .frame(Frame::NONE)
                    .show(ctx, |ui| self.draw_scene(ui));
                self.draw_controls(ctx);
            }
        }

        self.update_fps();
    }
}
