use egui::{Color32, RichText};

use crate::HtpApp;
use crate::geometry::fit_aspect;
use crate::input::canvas_actions;
use crate::phase::{LAST_PHASE, Phase, continue_label};
use crate::util::time;

use super::tools_bar;

/// Height kept free under the canvas for the continue button
const FOOTER_HEIGHT: f32 = 48.0;

pub fn central_panel(app: &mut HtpApp, ctx: &egui::Context) {
    let enabled = !app.is_completion_open();
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_enabled_ui(enabled, |ui| {
            let index = app.session().phase_index();
            let phase = app.session().current_phase();

            phase_header(ui, index, phase);
            ui.add_space(8.0);
            tools_bar(app, ui);
            ui.add_space(8.0);
            canvas(app, ui, ctx, enabled);
            ui.add_space(8.0);
            continue_button(app, ui, index, phase);
        });
    });
}

fn phase_header(ui: &mut egui::Ui, index: usize, phase: &Phase) {
    egui::Frame::none()
        .fill(phase.color.0)
        .stroke(egui::Stroke::new(2.0, phase.color.1))
        .rounding(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(phase.icon).size(24.0).color(Color32::WHITE));
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!("Phase {}: {}", index + 1, phase.title))
                            .size(18.0)
                            .strong()
                            .color(Color32::WHITE),
                    );
                    let description = RichText::new(phase.description);
                    ui.label(description.color(Color32::from_white_alpha(210)));
                });
            });
        });
}

/// Paint the surface and feed this frame's pointer input to the session
fn canvas(app: &mut HtpApp, ui: &mut egui::Ui, ctx: &egui::Context, accept_input: bool) {
    let Some(canvas_size) = app.surface().map(|surface| surface.canvas_size()) else {
        return;
    };

    let mut available = ui.available_rect_before_wrap();
    available.max.y -= FOOTER_HEIGHT;
    let rect = fit_aspect(available, canvas_size);
    ui.allocate_rect(rect, egui::Sense::drag())
        .on_hover_cursor(egui::CursorIcon::Crosshair);

    if let Some(surface) = app.surface_mut() {
        surface.paint(ctx, ui.painter(), rect);
    }
    app.input_mut().set_canvas_rect(rect);

    if !accept_input {
        return;
    }

    let events = app.input_mut().process_input(ctx);
    if events.is_empty() {
        return;
    }
    let now = time::current_time_secs();
    let actions = match app.surface() {
        Some(surface) => canvas_actions(&events, |p| surface.to_canvas_pos(rect, p), now),
        None => Vec::new(),
    };
    for action in actions {
        app.dispatch(action);
    }
}

fn continue_button(app: &mut HtpApp, ui: &mut egui::Ui, index: usize, phase: &Phase) {
    let finished = app.session().is_complete();
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let text = if index < LAST_PHASE {
            format!("{} ›", continue_label(index))
        } else {
            continue_label(index)
        };
        let label = RichText::new(text).strong().color(Color32::WHITE);
        let button = egui::Button::new(label)
            .fill(phase.color.0)
            .min_size(egui::vec2(180.0, 32.0));
        if ui.add_enabled(!finished, button).clicked() {
            app.advance();
        }
    });
}
