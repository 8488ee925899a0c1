mod raster;
mod snapshot;

pub use raster::RasterCanvas;
pub use snapshot::DrawingImage;

use egui::{
    Color32, Context, Painter, Pos2, Rect, Stroke, TextureHandle, TextureOptions, pos2, vec2,
};

use crate::config::AppConfig;
use crate::error::{SurfaceError, SurfaceResult};
use crate::event::SessionEvent;

/// Anything that can hand out an image of what it currently shows.
///
/// Phase sequencing only depends on this, never on the concrete surface.
pub trait RenderableSurface {
    fn snapshot(&self) -> SurfaceResult<DrawingImage>;
}

/// Snapshot `surface`, failing with [`SurfaceError::Unavailable`] when there is none
pub fn try_capture(surface: Option<&dyn RenderableSurface>) -> SurfaceResult<DrawingImage> {
    surface.ok_or(SurfaceError::Unavailable)?.snapshot()
}

/// Take a snapshot if a surface exists. Failures are logged and yield `None`.
pub fn capture(surface: Option<&dyn RenderableSurface>) -> Option<DrawingImage> {
    match try_capture(surface) {
        Ok(image) => Some(image),
        Err(err) => {
            log::warn!("Snapshot failed: {}", err);
            None
        }
    }
}

/// The canvas the user draws on: a raster buffer, the open path, and the
/// GPU texture that mirrors the raster on screen.
pub struct DrawingSurface {
    raster: RasterCanvas,
    /// End of the current path, if a path was started
    pen: Option<Pos2>,
    texture: Option<TextureHandle>,
    texture_dirty: bool,
}

impl std::fmt::Debug for DrawingSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingSurface")
            .field("raster", &self.raster)
            .field("pen", &self.pen)
            .field("has_texture", &self.texture.is_some())
            .field("texture_dirty", &self.texture_dirty)
            .finish()
    }
}

impl DrawingSurface {
    pub fn new(config: &AppConfig) -> SurfaceResult<Self> {
        Ok(Self {
            raster: RasterCanvas::new(config.canvas_size, config.canvas_background)?,
            pen: None,
            texture: None,
            texture_dirty: true,
        })
    }

    pub fn raster(&self) -> &RasterCanvas {
        &self.raster
    }

    pub fn pen(&self) -> Option<Pos2> {
        self.pen
    }

    /// Size of the raster in pixels, as a float vector for layout
    pub fn canvas_size(&self) -> egui::Vec2 {
        vec2(self.raster.width() as f32, self.raster.height() as f32)
    }

    pub fn begin_path(&mut self, at: Pos2) {
        self.pen = Some(at);
    }

    /// Extend the open path to `to`. Without an open path this only moves the pen.
    pub fn line_to(&mut self, to: Pos2, color: Color32, width: f32) {
        if let Some(from) = self.pen {
            let written = self.raster.stroke_segment(from, to, width, color);
            if written > 0 {
                self.texture_dirty = true;
            }
        }
        self.pen = Some(to);
    }

    pub fn clear(&mut self) {
        log::debug!("Clearing drawing surface");
        self.raster.clear();
        self.pen = None;
        self.texture_dirty = true;
    }

    /// Carry out the canvas side of a session event
    pub fn apply(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::PathStarted { at } => self.begin_path(*at),
            SessionEvent::SegmentDrawn { to, color, width } => self.line_to(*to, *color, *width),
            SessionEvent::CanvasCleared => self.clear(),
            _ => {}
        }
    }

    /// Map a screen position inside `display_rect` to raster coordinates
    pub fn to_canvas_pos(&self, display_rect: Rect, screen: Pos2) -> Pos2 {
        if display_rect.width() <= 0.0 || display_rect.height() <= 0.0 {
            return pos2(0.0, 0.0);
        }
        let rel = screen - display_rect.min;
        pos2(
            rel.x * self.raster.width() as f32 / display_rect.width(),
            rel.y * self.raster.height() as f32 / display_rect.height(),
        )
    }

    /// Upload the raster if it changed since the last frame, then draw it into `rect`
    pub fn paint(&mut self, ctx: &Context, painter: &Painter, rect: Rect) {
        if self.texture_dirty || self.texture.is_none() {
            let image = self.raster.image().clone();
            let options = TextureOptions::LINEAR;
            match &mut self.texture {
                Some(texture) => texture.set(image, options),
                None => self.texture = Some(ctx.load_texture("drawing_surface", image, options)),
            }
            self.texture_dirty = false;
        }

        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        painter.rect_stroke(rect, 6.0, Stroke::new(2.0, Color32::from_gray(226)));
    }
}

impl RenderableSurface for DrawingSurface {
    fn snapshot(&self) -> SurfaceResult<DrawingImage> {
        let png = self.raster.encode_png()?;
        log::debug!("Captured {} byte snapshot", png.len());
        Ok(DrawingImage::new(self.raster.size(), png))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenSurface;

    impl RenderableSurface for BrokenSurface {
        fn snapshot(&self) -> SurfaceResult<DrawingImage> {
            Err(SurfaceError::InvalidDimensions { width: 0, height: 0 })
        }
    }

    fn surface() -> DrawingSurface {
        DrawingSurface::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn test_line_to_without_path_only_moves_pen() {
        let mut surface = surface();
        surface.line_to(pos2(20.0, 20.0), Color32::BLACK, 3.0);
        assert!(surface.raster().is_blank());
        assert_eq!(surface.pen(), Some(pos2(20.0, 20.0)));
    }

    #[test]
    fn test_apply_events() {
        let mut surface = surface();
        surface.apply(&SessionEvent::PathStarted { at: pos2(10.0, 10.0) });
        surface.apply(&SessionEvent::SegmentDrawn {
            to: pos2(40.0, 10.0),
            color: Color32::BLACK,
            width: 3.0,
        });
        assert_eq!(surface.raster().pixel(25, 10), Some(Color32::BLACK));

        surface.apply(&SessionEvent::PhaseAdvanced { from: 0, to: 1 });
        assert!(!surface.raster().is_blank());

        surface.apply(&SessionEvent::CanvasCleared);
        assert!(surface.raster().is_blank());
        assert_eq!(surface.pen(), None);
    }

    #[test]
    fn test_to_canvas_pos_scales() {
        let surface = surface();
        let rect = Rect::from_min_size(pos2(100.0, 50.0), vec2(300.0, 200.0));
        let p = surface.to_canvas_pos(rect, pos2(250.0, 150.0));
        assert!((p.x - 300.0).abs() < 1e-3);
        assert!((p.y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_missing_surface_is_unavailable() {
        assert!(matches!(try_capture(None), Err(SurfaceError::Unavailable)));
        assert!(matches!(
            try_capture(Some(&BrokenSurface)),
            Err(SurfaceError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_capture() {
        assert!(capture(None).is_none());
        assert!(capture(Some(&BrokenSurface)).is_none());

        let surface = surface();
        let image = capture(Some(&surface)).unwrap();
        assert_eq!(image.size(), [600, 400]);
    }

    #[test]
    fn test_paint_uploads_texture() {
        let mut surface = surface();
        let ctx = Context::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(600.0, 400.0));
        let painter = Painter::new(ctx.clone(), egui::LayerId::background(), rect);

        surface.paint(&ctx, &painter, rect);
        assert!(surface.texture.is_some());
        assert!(!surface.texture_dirty);
    }
}
