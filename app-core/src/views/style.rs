use egui::{Color32, Context, FontFamily, FontId, Stroke, Visuals};
use ip_proximity::ACCENT;

pub const COLOR_BACKGROUND: Color32 = Color32::from_rgb(0x12, 0x12, 0x12);
pub const COLOR_PANEL: Color32 = Color32::from_rgba_premultiplied(24, 24, 24, 204);
pub const COLOR_ERROR: Color32 = Color32::from_rgb(0xf4, 0x43, 0x36);

pub const FONT_HEADING: FontId = FontId::new(22., FontFamily::Proportional);

pub const UI_MARGIN: f32 = 16.;
pub const PANEL_WIDTH: f32 = 380.;
pub const INFO_TEXT_SIZE: f32 = 14.;

/// Dark theme with the light blue accent.
pub fn apply(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = COLOR_BACKGROUND;
    visuals.window_fill = COLOR_PANEL;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1., ACCENT);
    visuals.error_fg_color = COLOR_ERROR;
    ctx.set_visuals(visuals);
}
