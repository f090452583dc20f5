use egui::{Button, Key, RichText, TextEdit, Ui};
use ip_proximity::{CreationForm, Shell};

use super::style::COLOR_ERROR;

const HINT: &str = "Enter node name";
const SUBMIT: &str = "Create Node";

/// Name input with the submit button and the last error below it.
pub fn draw_creation_form(ui: &mut Ui, form: &mut CreationForm, shell: &mut Shell) {
    ui.horizontal(|ui| {
        let button_width = 110.;
        let input = TextEdit::singleline(form.name_mut())
            .hint_text(HINT)
            .desired_width(ui.available_width() - button_width);
        let input_response = ui.add(input);
        if input_response.changed() {
            form.input_changed();
        }

        let enter = input_response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        let clicked = ui
            .add_enabled(form.can_submit(), Button::new(SUBMIT))
            .clicked();

        if (clicked || enter) && form.submit(shell) {
            input_response.request_focus();
        }

        if form.submitting() {
            ui.spinner();
        }
    });

    match shell.ip() {
        Some(ip) => ui.label(RichText::new(format!("your IP: {ip}")).weak().small()),
        None => ui.label(RichText::new("resolving your IP...").weak().small()),
    };

    if let Some(err) = form.error() {
        ui.add_space(4.);
        ui.label(RichText::new(err).small().color(COLOR_ERROR));
    }
}
