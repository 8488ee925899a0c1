use eframe::egui;

use crate::tool::color_hex;

/// Round palette button
pub struct ColorSwatch {
    pub color: egui::Color32,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: egui::Color32, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(24.0, 24.0);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = rect.width() / 2.0;
            ui.painter().circle_filled(center, radius - 1.0, self.color);

            let border = if self.selected {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(148, 163, 184))
            } else if response.hovered() {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(203, 213, 225))
            } else {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(226, 232, 240))
            };
            ui.painter().circle_stroke(center, radius - 1.0, border);
        }

        response.on_hover_text(color_hex(self.color))
    }
}
