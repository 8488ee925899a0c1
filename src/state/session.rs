//! The drawing session state machine.
//!
//! All mutable UI state lives in one [`SessionState`]. It is changed only by
//! [`reduce`], which takes the current state and an [`Action`] and returns the
//! next state plus the [`SessionEvent`]s the UI has to carry out (painting on
//! the canvas, opening the completion dialog).
//!
//! # Phase transitions
//!
//! ```text
//! ┌─────────┐ advance ┌─────────┐ advance ┌──────────┐ advance ┌──────────┐
//! │ House 0 ├────────►│ Tree 1  ├────────►│ Person 2 ├────────►│ Complete │
//! └─────────┘         └─────────┘         └──────────┘         └──────────┘
//! ```
//!
//! Transitions only go forward. `Complete` is terminal: further advances do
//! nothing.
use egui::{Color32, Pos2};

use super::clock::SessionClock;
use super::record::DrawingRecord;
use crate::event::SessionEvent;
use crate::insights::InsightState;
use crate::phase::{LAST_PHASE, PHASES, Phase};
use crate::surface::DrawingImage;
use crate::tool::ToolState;

/// Everything the user can do to a session
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Primary button pressed on the canvas. `now` is in seconds.
    PointerDown { pos: Pos2, now: f64 },
    PointerMove { pos: Pos2 },
    PointerUp,
    /// The pointer left the canvas
    PointerLeave,
    Clear,
    SelectColor(Color32),
    SetBrushSize(u32),
    /// Periodic refresh of the drawing timer
    Tick { now: f64 },
    /// Finish the current phase. `snapshot` is `None` when the canvas could not be captured.
    Advance { snapshot: Option<DrawingImage> },
    /// The app is being torn down
    Shutdown,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    phase_index: usize,
    drawings: Vec<DrawingRecord>,
    insights: InsightState,
    tools: ToolState,
    drawing_active: bool,
    completed: bool,
    clock: SessionClock,
}

impl SessionState {
    pub fn new(tools: ToolState) -> Self {
        Self {
            tools,
            ..Self::default()
        }
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    pub fn current_phase(&self) -> &'static Phase {
        &PHASES[self.phase_index.min(LAST_PHASE)]
    }

    pub fn drawings(&self) -> &[DrawingRecord] {
        &self.drawings
    }

    /// Recorded drawing for a phase, if that phase is finished
    pub fn drawing_for(&self, phase_index: usize) -> Option<&DrawingRecord> {
        self.drawings.iter().find(|d| d.phase_index() == phase_index)
    }

    pub fn insights(&self) -> &InsightState {
        &self.insights
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing_active
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn clock(&self) -> &SessionClock {
        &self.clock
    }

    /// Apply `action` in place and return the resulting events
    pub fn dispatch(&mut self, action: Action) -> Vec<SessionEvent> {
        let (next, events) = reduce(std::mem::take(self), action);
        *self = next;
        events
    }
}

/// Compute the state that follows `action`
pub fn reduce(mut state: SessionState, action: Action) -> (SessionState, Vec<SessionEvent>) {
    let mut events = Vec::new();

    match action {
        Action::PointerDown { pos, now } => {
            if state.completed {
                return (state, events);
            }
            state.drawing_active = true;
            events.push(SessionEvent::PathStarted { at: pos });
            if state.clock.start(now) {
                log::debug!("Drawing timer started for phase {}", state.phase_index);
                events.push(SessionEvent::TimerStarted);
            }
        }
        Action::PointerMove { pos } => {
            if !state.drawing_active {
                return (state, events);
            }
            state.insights.record_segment();
            events.push(SessionEvent::SegmentDrawn {
                to: pos,
                color: state.tools.color(),
                width: state.tools.brush_size() as f32,
            });
        }
        Action::PointerUp | Action::PointerLeave => {
            state.drawing_active = false;
        }
        Action::Clear => {
            if state.completed {
                return (state, events);
            }
            state.insights.reset_canvas_counters();
            events.push(SessionEvent::CanvasCleared);
        }
        Action::SelectColor(color) => state.tools.set_color(color),
        Action::SetBrushSize(size) => state.tools.set_brush_size(size),
        Action::Tick { now } => {
            if state.clock.is_running() {
                state.insights.drawing_time_secs = state.clock.elapsed_secs(now);
            }
        }
        Action::Advance { snapshot } => {
            if state.completed {
                return (state, events);
            }
            let Some(image) = snapshot else {
                log::warn!("Canvas unavailable, phase {} not advanced", state.phase_index);
                return (state, events);
            };

            let from = state.phase_index;
            state.drawings.push(DrawingRecord::new(from, image));
            state.drawing_active = false;
            state.clock.cancel();

            if from < LAST_PHASE {
                state.phase_index = from + 1;
                state.insights = InsightState::default();
                log::info!(
                    "Phase {} finished, moving to {}",
                    PHASES[from].title,
                    PHASES[from + 1].title
                );
                events.push(SessionEvent::PhaseAdvanced { from, to: from + 1 });
                events.push(SessionEvent::CanvasCleared);
            } else {
                state.completed = true;
                log::info!("All {} phases finished", PHASES.len());
                events.push(SessionEvent::Completed);
            }
        }
        Action::Shutdown => {
            state.drawing_active = false;
            state.clock.cancel();
        }
    }

    (state, events)
}
