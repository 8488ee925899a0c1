use egui::{Color32, RichText};

use crate::HtpApp;
use crate::content::{Topic, VALIDITY_BADGES};
use crate::phase::{PHASES, PhaseId, progress_fraction};

const ACCENT: Color32 = Color32::from_rgb(0x93, 0x33, 0xEA);

/// Title bar, the optional background panel, and the progress bar
pub fn header_panel(app: &mut HtpApp, ctx: &egui::Context) {
    let enabled = !app.is_completion_open();
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.add_enabled_ui(enabled, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("🏠").size(28.0));
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new("House Tree Person Test")
                            .size(22.0)
                            .strong()
                            .color(ACCENT),
                    );
                    ui.label(
                        RichText::new(
                            "Discover your psychological landscape through intuitive drawing",
                        )
                        .small()
                        .weak(),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("ℹ Scientific Background").clicked() {
                        app.info_panel_mut().toggle();
                        log::debug!("Background panel visible: {}", app.info_panel().is_visible());
                    }
                });
            });

            if app.info_panel().is_visible() {
                ui.separator();
                background_info(ui);
            }

            ui.separator();
            let index = app.session().phase_index();
            ui.horizontal(|ui| {
                ui.label(RichText::new("Progress").strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} of {}", index + 1, PHASES.len()));
                });
            });
            ui.add(egui::ProgressBar::new(progress_fraction(index)).desired_height(8.0));
            ui.add_space(6.0);
        });
    });
}

fn background_info(ui: &mut egui::Ui) {
    ui.heading("⭐ Scientific Background & Validity");
    for topic in Topic::SECTIONS {
        ui.add_space(4.0);
        ui.label(RichText::new(topic.heading()).strong());
        match topic {
            Topic::Validity => {
                ui.horizontal(|ui| {
                    for badge in VALIDITY_BADGES {
                        ui.label(
                            RichText::new(badge)
                                .small()
                                .background_color(Color32::from_gray(230)),
                        );
                    }
                });
                ui.label(topic.text());
            }
            Topic::Interpretation(_) => {
                ui.columns(PHASES.len(), |columns| {
                    for (column, phase) in columns.iter_mut().zip(PHASES.iter()) {
                        let heading = format!("{} {}", phase.icon, phase_name(phase.id));
                        column.label(RichText::new(heading).strong());
                        column.label(RichText::new(Topic::Interpretation(phase.id).text()).small());
                    }
                });
            }
            _ => {
                ui.label(topic.text());
            }
        }
        ui.separator();
    }
}

fn phase_name(id: PhaseId) -> &'static str {
    match id {
        PhaseId::House => "House",
        PhaseId::Tree => "Tree",
        PhaseId::Person => "Person",
    }
}
