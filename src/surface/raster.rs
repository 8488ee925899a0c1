use egui::{Color32, ColorImage, Pos2, pos2};

use crate::error::{SurfaceError, SurfaceResult};
use crate::geometry::{segment_bounds, segment_distance_sq};

/// Fixed-size RGBA pixel buffer that strokes are rendered into.
///
/// Rendering is immediate: a painted segment becomes pixels and is never
/// kept as geometry, so there is nothing to undo.
#[derive(Clone)]
pub struct RasterCanvas {
    image: ColorImage,
    background: Color32,
}

impl std::fmt::Debug for RasterCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterCanvas")
            .field("size", &self.image.size)
            .field("background", &self.background)
            .finish()
    }
}

impl RasterCanvas {
    pub fn new(size: [usize; 2], background: Color32) -> SurfaceResult<Self> {
        let [width, height] = size;
        let fits_u32 = u32::try_from(width).is_ok() && u32::try_from(height).is_ok();
        if width == 0 || height == 0 || !fits_u32 {
            return Err(SurfaceError::InvalidDimensions { width, height });
        }
        Ok(Self {
            image: ColorImage::new(size, background),
            background,
        })
    }

    pub fn size(&self) -> [usize; 2] {
        self.image.size
    }

    pub fn width(&self) -> usize {
        self.image.size[0]
    }

    pub fn height(&self) -> usize {
        self.image.size[1]
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn image(&self) -> &ColorImage {
        &self.image
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.image.pixels.get(y * self.width() + x).copied()
    }

    /// Repaint every pixel with the background color
    pub fn clear(&mut self) {
        self.image.pixels.fill(self.background);
    }

    /// True when no pixel differs from the background
    pub fn is_blank(&self) -> bool {
        self.image.pixels.iter().all(|p| *p == self.background)
    }

    /// Render a segment with round caps. Pixels outside the buffer are clipped.
    ///
    /// Returns the number of pixels written.
    pub fn stroke_segment(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) -> usize {
        let radius = (width / 2.0).max(0.5);
        let bounds = segment_bounds(from, to, radius);

        let max_x = self.width() as f32 - 1.0;
        let max_y = self.height() as f32 - 1.0;
        if bounds.max.x < 0.0
            || bounds.max.y < 0.0
            || bounds.min.x > max_x
            || bounds.min.y > max_y
        {
            return 0;
        }

        let x0 = bounds.min.x.floor().clamp(0.0, max_x) as usize;
        let x1 = bounds.max.x.ceil().clamp(0.0, max_x) as usize;
        let y0 = bounds.min.y.floor().clamp(0.0, max_y) as usize;
        let y1 = bounds.max.y.ceil().clamp(0.0, max_y) as usize;

        let radius_sq = radius * radius;
        let stride = self.width();
        let mut written = 0;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = pos2(x as f32 + 0.5, y as f32 + 0.5);
                if segment_distance_sq(center, from, to) <= radius_sq {
                    self.image.pixels[y * stride + x] = color;
                    written += 1;
                }
            }
        }
        written
    }

    /// Encode the current pixels as PNG
    pub fn encode_png(&self) -> SurfaceResult<Vec<u8>> {
        let [width, height] = self.size();
        let mut rgba = Vec::with_capacity(width * height * 4);
        for pixel in &self.image.pixels {
            rgba.extend_from_slice(&pixel.to_srgba_unmultiplied());
        }

        let buffer = image::RgbaImage::from_raw(width as u32, height as u32, rgba)
            .ok_or(SurfaceError::InvalidDimensions { width, height })?;

        let mut bytes = Vec::new();
        buffer.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> RasterCanvas {
        RasterCanvas::new([600, 400], Color32::WHITE).unwrap()
    }

    #[test]
    fn test_new_canvas_is_blank() {
        let canvas = canvas();
        assert_eq!(canvas.size(), [600, 400]);
        assert!(canvas.is_blank());
        assert_eq!(canvas.pixel(599, 399), Some(Color32::WHITE));
        assert_eq!(canvas.pixel(600, 0), None);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            RasterCanvas::new([0, 400], Color32::WHITE),
            Err(SurfaceError::InvalidDimensions { width: 0, height: 400 })
        ));
    }

    #[test]
    fn test_stroke_segment_paints_along_path() {
        let mut canvas = canvas();
        let red = Color32::from_rgb(0xFF, 0x6B, 0x6B);
        let written = canvas.stroke_segment(pos2(10.0, 10.0), pos2(50.0, 10.0), 3.0, red);

        assert!(written > 0);
        assert_eq!(canvas.pixel(30, 10), Some(red));
        assert_eq!(canvas.pixel(10, 10), Some(red));
        assert_eq!(canvas.pixel(30, 30), Some(Color32::WHITE));
        assert!(!canvas.is_blank());
    }

    #[test]
    fn test_round_cap_covers_single_point() {
        let mut canvas = canvas();
        canvas.stroke_segment(pos2(100.5, 100.5), pos2(100.5, 100.5), 5.0, Color32::BLACK);
        assert_eq!(canvas.pixel(100, 100), Some(Color32::BLACK));
        assert_eq!(canvas.pixel(102, 100), Some(Color32::BLACK));
        assert_eq!(canvas.pixel(104, 100), Some(Color32::WHITE));
    }

    #[test]
    fn test_segment_outside_is_clipped() {
        let mut canvas = canvas();
        let written =
            canvas.stroke_segment(pos2(-50.0, -50.0), pos2(-10.0, -20.0), 4.0, Color32::BLACK);
        assert_eq!(written, 0);
        assert!(canvas.is_blank());

        // Partially visible segment only touches in-bounds pixels
        let written = canvas.stroke_segment(pos2(-20.0, 5.0), pos2(5.0, 5.0), 2.0, Color32::BLACK);
        assert!(written > 0);
        assert_eq!(canvas.pixel(0, 5), Some(Color32::BLACK));
    }

    #[test]
    fn test_clear_restores_background() {
        let mut canvas = canvas();
        canvas.stroke_segment(pos2(0.0, 0.0), pos2(599.0, 399.0), 10.0, Color32::BLACK);
        canvas.clear();
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_encode_png_header() {
        let canvas = canvas();
        let png = canvas.encode_png().unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
