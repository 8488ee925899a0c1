use egui::Color32;
use std::ops::RangeInclusive;

/// Colors offered by the palette, in display order
pub const PALETTE: [Color32; 8] = [
    Color32::from_rgb(0x00, 0x00, 0x00),
    Color32::from_rgb(0xFF, 0x6B, 0x6B),
    Color32::from_rgb(0x4E, 0xCD, 0xC4),
    Color32::from_rgb(0x45, 0xB7, 0xD1),
    Color32::from_rgb(0x96, 0xCE, 0xB4),
    Color32::from_rgb(0xFF, 0xEA, 0xA7),
    Color32::from_rgb(0xDD, 0xA0, 0xDD),
    Color32::from_rgb(0x98, 0xD8, 0xC8),
];

/// Application-wide settings. Everything here is a compile-time default;
/// there is no config file and no CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Raster size in pixels (width, height)
    pub canvas_size: [usize; 2],
    pub canvas_background: Color32,
    pub palette: Vec<Color32>,
    pub brush_sizes: RangeInclusive<u32>,
    pub default_brush_size: u32,
    /// Initial native window size in points
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_size: [600, 400],
            canvas_background: Color32::WHITE,
            palette: PALETTE.to_vec(),
            brush_sizes: 1..=10,
            default_brush_size: 3,
            window_size: [1200.0, 820.0],
            min_window_size: [800.0, 600.0],
        }
    }
}

impl AppConfig {
    pub fn default_color(&self) -> Color32 {
        self.palette.first().copied().unwrap_or(Color32::BLACK)
    }
}
