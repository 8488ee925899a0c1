use serde::{Deserialize, Serialize};

/// Live counters shown next to the canvas. Owned by the current phase and
/// reset on every phase transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightState {
    /// Whole seconds since the first pointer-down of the phase
    pub drawing_time_secs: u64,
    /// Number of rendered segments. Not pen-down/pen-up strokes, despite the name.
    pub strokes_made: u32,
    /// Placeholder, never derived from the canvas
    pub colors_used: u32,
    /// Placeholder, never derived from the canvas
    pub canvas_coverage_percent: u32,
}

impl Default for InsightState {
    fn default() -> Self {
        Self {
            drawing_time_secs: 0,
            strokes_made: 0,
            colors_used: 1,
            canvas_coverage_percent: 0,
        }
    }
}

impl InsightState {
    pub fn record_segment(&mut self) {
        self.strokes_made = self.strokes_made.saturating_add(1);
    }

    /// Counters affected by clearing the canvas. The timer keeps running.
    pub fn reset_canvas_counters(&mut self) {
        self.strokes_made = 0;
        self.canvas_coverage_percent = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_keeps_time() {
        let mut insights = InsightState::default();
        insights.drawing_time_secs = 12;
        insights.record_segment();
        insights.record_segment();
        assert_eq!(insights.strokes_made, 2);

        insights.reset_canvas_counters();
        assert_eq!(insights.strokes_made, 0);
        assert_eq!(insights.drawing_time_secs, 12);
        assert_eq!(insights.colors_used, 1);
    }
}
