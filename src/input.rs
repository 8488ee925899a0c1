use egui::{Context, Pos2, Rect};

use crate::state::Action;

/// Where a pointer event happened
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Pointer events relevant to the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { location: InputLocation },
    /// Primary button was released
    PointerUp { location: InputLocation },
    /// Pointer moved
    PointerMove { location: InputLocation },
    /// Pointer left the canvas, or the window while over the canvas
    PointerLeave { last_known_location: InputLocation },
}

/// One frame's worth of raw pointer state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    pub hover_pos: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_released: bool,
}

impl PointerFrame {
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            hover_pos: input.pointer.hover_pos(),
            primary_pressed: input.pointer.primary_pressed(),
            primary_released: input.pointer.primary_released(),
        })
    }
}

/// Turns raw egui pointer state into canvas-relative [`InputEvent`]s
#[derive(Debug, Clone)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    was_in_canvas: bool,
    canvas_rect: Rect,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            was_in_canvas: false,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Read the pointer from egui and produce this frame's events
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        self.process_frame(PointerFrame::from_egui(ctx))
    }

    /// Produce events for one frame of pointer state.
    ///
    /// Order within a frame: move, leave, press, release. A press therefore
    /// starts a path at the final position and a release still draws the
    /// last segment.
    pub fn process_frame(&mut self, frame: PointerFrame) -> Vec<InputEvent> {
        let mut events = Vec::new();

        match frame.hover_pos {
            Some(pos) => {
                let location = self.make_location(pos);
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove { location });
                }
                if self.was_in_canvas && !location.is_in_canvas {
                    events.push(InputEvent::PointerLeave {
                        last_known_location: location,
                    });
                }
                self.was_in_canvas = location.is_in_canvas;
                self.last_pointer_pos = Some(pos);

                if frame.primary_pressed {
                    events.push(InputEvent::PointerDown { location });
                }
                if frame.primary_released {
                    events.push(InputEvent::PointerUp { location });
                }
            }
            None => {
                if let Some(last) = self.last_pointer_pos.take() {
                    if self.was_in_canvas {
                        events.push(InputEvent::PointerLeave {
                            last_known_location: self.make_location(last),
                        });
                    }
                }
                self.was_in_canvas = false;
            }
        }

        events
    }
}

/// Translate input events into session actions.
///
/// `to_canvas` maps screen positions to canvas pixels; `now` is the
/// current time in seconds.
pub fn canvas_actions(
    events: &[InputEvent],
    to_canvas: impl Fn(Pos2) -> Pos2,
    now: f64,
) -> Vec<Action> {
    events
        .iter()
        .filter_map(|event| match event {
            InputEvent::PointerDown { location } if location.is_in_canvas => {
                Some(Action::PointerDown {
                    pos: to_canvas(location.position),
                    now,
                })
            }
            InputEvent::PointerMove { location } if location.is_in_canvas => {
                Some(Action::PointerMove {
                    pos: to_canvas(location.position),
                })
            }
            InputEvent::PointerUp { .. } => Some(Action::PointerUp),
            InputEvent::PointerLeave { .. } => Some(Action::PointerLeave),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(pos2(100.0, 100.0), vec2(600.0, 400.0)))
    }

    fn hover(x: f32, y: f32) -> PointerFrame {
        PointerFrame {
            hover_pos: Some(pos2(x, y)),
            ..Default::default()
        }
    }

    #[test]
    fn test_press_inside_canvas() {
        let mut input = handler();
        let events = input.process_frame(PointerFrame {
            primary_pressed: true,
            ..hover(150.0, 150.0)
        });
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], InputEvent::PointerMove { .. }));
        assert!(matches!(events[1], InputEvent::PointerDown { location } if location.is_in_canvas));
    }

    #[test]
    fn test_unchanged_position_is_not_a_move() {
        let mut input = handler();
        input.process_frame(hover(150.0, 150.0));
        assert!(input.process_frame(hover(150.0, 150.0)).is_empty());
    }

    #[test]
    fn test_leaving_canvas_emits_leave() {
        let mut input = handler();
        input.process_frame(hover(150.0, 150.0));
        let events = input.process_frame(hover(20.0, 20.0));
        assert!(events.iter().any(|e| matches!(e, InputEvent::PointerLeave { .. })));

        // Moving around outside does not repeat it
        let events = input.process_frame(hover(30.0, 30.0));
        assert!(!events.iter().any(|e| matches!(e, InputEvent::PointerLeave { .. })));
    }

    #[test]
    fn test_leaving_window_from_canvas_emits_leave() {
        let mut input = handler();
        input.process_frame(hover(150.0, 150.0));
        let events = input.process_frame(PointerFrame::default());
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], InputEvent::PointerLeave { .. }));
    }

    #[test]
    fn test_canvas_actions() {
        let mut input = handler();
        let mut events = input.process_frame(PointerFrame {
            primary_pressed: true,
            ..hover(150.0, 160.0)
        });
        events.extend(input.process_frame(hover(10.0, 10.0)));

        let actions = canvas_actions(&events, |p| p - vec2(100.0, 100.0), 3.0);
        assert_eq!(
            actions,
            vec![
                Action::PointerMove { pos: pos2(50.0, 60.0) },
                Action::PointerDown { pos: pos2(50.0, 60.0), now: 3.0 },
                Action::PointerLeave,
            ]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut input = handler();
        let events = input.process_frame(PointerFrame {
            primary_pressed: true,
            ..hover(10.0, 10.0)
        });
        assert!(canvas_actions(&events, |p| p, 0.0).is_empty());
    }
}
