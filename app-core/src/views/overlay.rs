use egui::{Area, Frame, Id, Margin, Order, RichText, Ui};

use super::style::{COLOR_PANEL, INFO_TEXT_SIZE, UI_MARGIN};

/// Counters shown in the top-right corner of the scene.
pub struct Info {
    pub fps: f32,
    pub nodes: usize,
    pub lines: usize,
}

pub fn draw_info_overlay(ui: &Ui, info: &Info) {
    let text = format!(
        "FPS: {:.1}\nN: {}\nE: {}",
        info.fps, info.nodes, info.lines
    );

    let font_id = egui::FontId::monospace(INFO_TEXT_SIZE);
    let text_color = ui.style().visuals.strong_text_color();
    let text_size = ui.fonts(|f| f.layout_no_wrap(text.clone(), font_id, text_color).size());

    let panel_rect = ui.max_rect();
    let pos = egui::pos2(
        panel_rect.max.x - UI_MARGIN - text_size.x,
        panel_rect.min.y + UI_MARGIN,
    );

    Area::new(Id::new("ip_proximity_info_overlay"))
        .order(Order::Middle)
        .fixed_pos(pos)
        .movable(false)
        .interactable(false)
        .show(ui.ctx(), |ui_area| {
            ui_area.set_clip_rect(panel_rect);
            ui_area.label(
                RichText::new(text)
                    .monospace()
                    .color(text_color)
                    .size(INFO_TEXT_SIZE),
            );
        });
}

/// Translucent frame for the controls floating over the scene.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(COLOR_PANEL)
        .inner_margin(Margin::same(UI_MARGIN as i8))
        .corner_radius(6.)
}
