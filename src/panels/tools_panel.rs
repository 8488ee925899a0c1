use egui::RichText;

use crate::HtpApp;
use crate::components::ColorSwatch;
use crate::state::Action;
use crate::tool::color_hex;

/// Palette, brush size and the clear button, shown above the canvas
pub fn tools_bar(app: &mut HtpApp, ui: &mut egui::Ui) {
    let tools = *app.session().tools();
    let palette = app.config().palette.clone();
    let sizes = tools.brush_sizes();

    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new("🎨 Color:").strong());
        for color in palette {
            if ColorSwatch::new(color, tools.color() == color).show(ui).clicked() {
                log::debug!("Color selected: {}", color_hex(color));
                app.dispatch(Action::SelectColor(color));
            }
        }

        ui.add_space(16.0);
        ui.label(RichText::new("🖌 Size:").strong());
        let mut size = tools.brush_size();
        if ui.add(egui::Slider::new(&mut size, sizes).suffix("px")).changed() {
            app.dispatch(Action::SetBrushSize(size));
        }

        ui.add_space(16.0);
        if ui.button("🗑 Clear").clicked() {
            app.dispatch(Action::Clear);
        }
    });
}
