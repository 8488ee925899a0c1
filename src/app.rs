use crate::config::AppConfig;
use crate::content::InfoPanel;
use crate::event::SessionEvent;
use crate::input::InputHandler;
use crate::panels;
use crate::state::{Action, SessionState};
use crate::summary::SessionSummary;
use crate::surface::{self, DrawingSurface, RenderableSurface};
use crate::thumbnails::ThumbnailCache;
use crate::tool::ToolState;
use crate::util::time;

pub const COMPLETION_MESSAGE: &str =
    "Analysis complete! In a real implementation, this would provide detailed psychological insights.";

/// The whole exercise: session state plus the UI pieces that render it
pub struct HtpApp {
    config: AppConfig,
    session: SessionState,
    // `None` until a surface could be created; every canvas operation is a no-op without it
    surface: Option<DrawingSurface>,
    input: InputHandler,
    info_panel: InfoPanel,
    thumbnails: ThumbnailCache,
    show_completion: bool,
}

impl Default for HtpApp {
    fn default() -> Self {
        Self::build(AppConfig::default(), None)
    }
}

impl HtpApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let surface = match DrawingSurface::new(&config) {
            Ok(surface) => Some(surface),
            Err(err) => {
                log::error!("Drawing surface unavailable: {}", err);
                None
            }
        };
        Self::build(config, surface)
    }

    fn build(config: AppConfig, surface: Option<DrawingSurface>) -> Self {
        Self {
            session: SessionState::new(ToolState::from_config(&config)),
            config,
            surface,
            input: InputHandler::default(),
            info_panel: InfoPanel::default(),
            thumbnails: ThumbnailCache::new(),
            show_completion: false,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn surface(&self) -> Option<&DrawingSurface> {
        self.surface.as_ref()
    }

    pub(crate) fn surface_mut(&mut self) -> Option<&mut DrawingSurface> {
        self.surface.as_mut()
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn info_panel(&self) -> &InfoPanel {
        &self.info_panel
    }

    pub(crate) fn info_panel_mut(&mut self) -> &mut InfoPanel {
        &mut self.info_panel
    }

    /// Thumbnail texture of a finished phase's drawing
    pub(crate) fn thumbnail_for(
        &mut self,
        ctx: &egui::Context,
        phase_index: usize,
    ) -> Option<egui::TextureId> {
        let record = self.session.drawing_for(phase_index)?;
        self.thumbnails.get_or_load(ctx, record)
    }

    pub fn is_completion_open(&self) -> bool {
        self.show_completion
    }

    pub(crate) fn close_completion(&mut self) {
        self.show_completion = false;
    }

    /// Run an action through the session and carry out its effects
    pub fn dispatch(&mut self, action: Action) {
        let events = self.session.dispatch(action);
        for event in &events {
            if event.touches_surface() {
                match self.surface.as_mut() {
                    Some(surface) => surface.apply(event),
                    None => log::debug!("No surface for {:?}", event),
                }
            }
            if let SessionEvent::Completed = event {
                self.on_completed();
            }
        }
    }

    /// Snapshot the canvas and move to the next phase
    pub fn advance(&mut self) {
        let snapshot = surface::capture(self.surface.as_ref().map(|s| s as &dyn RenderableSurface));
        self.dispatch(Action::Advance { snapshot });
    }

    fn on_completed(&mut self) {
        match SessionSummary::from_state(&self.session).to_json() {
            Ok(json) => log::info!("Session summary: {}", json),
            Err(err) => log::warn!("Could not serialize session summary: {}", err),
        }
        self.show_completion = true;
    }

    fn completion_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_completion {
            return;
        }
        egui::Window::new("Analysis complete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(COMPLETION_MESSAGE);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        self.close_completion();
                    }
                });
            });
    }
}

impl eframe::App for HtpApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = time::current_time_secs();
        self.dispatch(Action::Tick { now });
        if let Some(delay) = self.session.clock().until_next_tick(now) {
            ctx.request_repaint_after(delay);
        }

        panels::header_panel(self, ctx);
        panels::insights_panel(self, ctx);
        panels::central_panel(self, ctx);
        self.completion_dialog(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::debug!("Shutting down, cancelling drawing timer");
        self.dispatch(Action::Shutdown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_default_app_has_no_surface() {
        let mut app = HtpApp::default();
        app.dispatch(Action::PointerDown { pos: pos2(1.0, 1.0), now: 0.0 });
        app.dispatch(Action::PointerMove { pos: pos2(5.0, 5.0) });
        assert_eq!(app.session().insights().strokes_made, 1);

        // Clearing without a canvas still resets the counters and nothing else
        app.dispatch(Action::Clear);
        assert!(app.surface().is_none());
        assert_eq!(app.session().insights().strokes_made, 0);
        assert_eq!(app.session().phase_index(), 0);

        // Without a canvas the transition is skipped entirely
        app.advance();
        assert_eq!(app.session().phase_index(), 0);
        assert!(app.session().drawings().is_empty());
    }

    #[test]
    fn test_drawing_reaches_surface() {
        let mut app = HtpApp::with_config(AppConfig::default());
        app.dispatch(Action::PointerDown { pos: pos2(10.0, 10.0), now: 0.0 });
        app.dispatch(Action::PointerMove { pos: pos2(60.0, 10.0) });
        let surface = app.surface().unwrap();
        assert_eq!(surface.raster().pixel(30, 10), Some(egui::Color32::BLACK));
    }

    #[test]
    fn test_advance_clears_surface() {
        let mut app = HtpApp::with_config(AppConfig::default());
        app.dispatch(Action::PointerDown { pos: pos2(10.0, 10.0), now: 0.0 });
        app.dispatch(Action::PointerMove { pos: pos2(60.0, 10.0) });
        app.advance();

        assert_eq!(app.session().phase_index(), 1);
        assert!(app.surface().unwrap().raster().is_blank());
        assert!(!app.session().drawings()[0].image().png().is_empty());
    }

    #[test]
    fn test_completion_opens_dialog_once() {
        let mut app = HtpApp::with_config(AppConfig::default());
        app.advance();
        app.advance();
        assert!(!app.is_completion_open());

        app.advance();
        assert!(app.is_completion_open());
        assert_eq!(app.session().drawings().len(), 3);

        app.close_completion();
        app.advance();
        assert!(!app.is_completion_open());
        assert_eq!(app.session().drawings().len(), 3);
    }
}
