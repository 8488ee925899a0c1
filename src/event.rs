use egui::{Color32, Pos2};

/// Side effects produced by a session transition. The reducer never touches
/// the canvas itself; the app forwards these to the drawing surface and UI.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A new path begins at `at` (canvas coordinates)
    PathStarted { at: Pos2 },
    /// The current path was extended to `to`
    SegmentDrawn { to: Pos2, color: Color32, width: f32 },
    CanvasCleared,
    /// The drawing clock started for the current phase
    TimerStarted,
    PhaseAdvanced { from: usize, to: usize },
    /// The final drawing was recorded; the exercise is over
    Completed,
}

impl SessionEvent {
    /// Whether the drawing surface has to act on this event
    pub fn touches_surface(&self) -> bool {
        matches!(
            self,
            Self::PathStarted { .. } | Self::SegmentDrawn { .. } | Self::CanvasCleared
        )
    }
}
