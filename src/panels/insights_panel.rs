use egui::{Color32, RichText};

use crate::HtpApp;
use crate::phase::{PHASES, PhaseStatus};

/// Right-hand column: live counters and the list of phases
pub fn insights_panel(app: &mut HtpApp, ctx: &egui::Context) {
    let enabled = !app.is_completion_open();
    egui::SidePanel::right("insights_panel")
        .resizable(false)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                ui.add_space(8.0);
                ui.heading("👁 Live Insights");
                ui.separator();

                let insights = *app.session().insights();
                egui::Grid::new("insights_grid")
                    .num_columns(2)
                    .spacing([40.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("🕑 Drawing Time:");
                        let time = format!("{}s", insights.drawing_time_secs);
                        ui.label(RichText::new(time).strong());
                        ui.end_row();

                        ui.label("🖌 Strokes Made:");
                        ui.label(RichText::new(insights.strokes_made.to_string()).strong());
                        ui.end_row();

                        ui.label("🎨 Colors Used:");
                        ui.label(RichText::new(insights.colors_used.to_string()).strong());
                        ui.end_row();

                        ui.label("👁 Canvas Coverage:");
                        let coverage = format!("{}%", insights.canvas_coverage_percent);
                        ui.label(RichText::new(coverage).strong());
                        ui.end_row();
                    });

                ui.add_space(16.0);
                ui.heading("Test Phases");
                ui.separator();
                phase_list(app, ui);
            });
        });
}

fn phase_list(app: &mut HtpApp, ui: &mut egui::Ui) {
    let current = app.session().phase_index();
    let complete = app.session().is_complete();

    for (index, phase) in PHASES.iter().enumerate() {
        let status = if complete {
            PhaseStatus::Completed
        } else {
            PhaseStatus::of(index, current)
        };
        let (fill, accent) = match status {
            PhaseStatus::Current => (
                Color32::from_rgb(250, 245, 255),
                Color32::from_rgb(168, 85, 247),
            ),
            PhaseStatus::Completed => (
                Color32::from_rgb(240, 253, 244),
                Color32::from_rgb(34, 197, 94),
            ),
            PhaseStatus::Upcoming => (
                Color32::from_rgb(248, 250, 252),
                Color32::from_rgb(203, 213, 225),
            ),
        };

        egui::Frame::none()
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, accent))
            .rounding(8.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(phase.icon).size(18.0).color(accent));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(phase.title).strong());
                        ui.label(RichText::new(status.label()).small().weak());
                    });

                    if status == PhaseStatus::Completed {
                        let ctx = ui.ctx().clone();
                        if let Some(texture) = app.thumbnail_for(&ctx, index) {
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                ui.add(egui::Image::new((texture, egui::vec2(72.0, 48.0))));
                            });
                        }
                    }
                });
            });
        ui.add_space(6.0);
    }
}
