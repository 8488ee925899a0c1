use std::ops::RangeInclusive;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

/// Drawing preferences shared by every phase. Never reset by a phase transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolState {
    color: Color32,
    brush_size: u32,
    // Allowed brush sizes, inclusive
    min_brush_size: u32,
    max_brush_size: u32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl ToolState {
    /// `brush_size` is clamped into `brush_sizes`
    pub fn new(color: Color32, brush_size: u32, brush_sizes: RangeInclusive<u32>) -> Self {
        let (min, max) = brush_sizes.into_inner();
        let min = min.max(1);
        let mut tools = Self {
            color,
            brush_size: min,
            min_brush_size: min,
            max_brush_size: max.max(min),
        };
        tools.set_brush_size(brush_size);
        tools
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.default_color(),
            config.default_brush_size,
            config.brush_sizes.clone(),
        )
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Brush width in canvas pixels
    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn brush_sizes(&self) -> RangeInclusive<u32> {
        self.min_brush_size..=self.max_brush_size
    }

    /// Sizes outside [`Self::brush_sizes`] are clamped to the nearest end
    pub fn set_brush_size(&mut self, size: u32) {
        self.brush_size = size.clamp(self.min_brush_size, self.max_brush_size);
    }
}

/// `#RRGGBB` form of a color, as shown in tooltips and logged summaries
pub fn color_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}
