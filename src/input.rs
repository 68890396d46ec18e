use egui::{Context, Event, Key, KeyboardShortcut, Modifiers, PointerButton, Pos2, Rect, TouchId, TouchPhase};

use crate::command::Command;

/// Raw pointer data as delivered by the windowing layer
#[derive(Debug, Clone, PartialEq)]
pub enum PointerSource {
    /// Mouse events already carry a position relative to the canvas
    Mouse { offset: Pos2 },
    /// Touch events carry the active touch points in screen coordinates
    Touch { touches: Vec<Pos2>, canvas_origin: Pos2 },
}

/// Maps a pointer source to canvas-local coordinates.
///
/// Touch input uses the first active touch. A touch source without any
/// touch points has no position and yields `None`.
pub fn normalize(source: &PointerSource) -> Option<Pos2> {
    match source {
        PointerSource::Mouse { offset } => Some(*offset),
        PointerSource::Touch {
            touches,
            canvas_origin,
        } => touches
            .first()
            .map(|touch| Pos2::new(touch.x - canvas_origin.x, touch.y - canvas_origin.y)),
    }
}

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position relative to the canvas origin
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Canvas input after mouse and touch have been unified
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { location: InputLocation },
    PointerMove { location: InputLocation },
    PointerUp,
}

/// Handles converting raw egui input into canvas InputEvents
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    /// Active touches in the order they started
    touches: Vec<(TouchId, Pos2)>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            touches: Vec::new(),
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    fn make_location(&self, source: &PointerSource) -> Option<InputLocation> {
        let position = normalize(source)?;
        let size = self.canvas_rect.size();
        Some(InputLocation {
            position,
            is_in_canvas: position.x >= 0.0
                && position.y >= 0.0
                && position.x < size.x
                && position.y < size.y,
        })
    }

    fn mouse_source(&self, pos: Pos2) -> PointerSource {
        PointerSource::Mouse {
            offset: Pos2::new(pos.x - self.canvas_rect.min.x, pos.y - self.canvas_rect.min.y),
        }
    }

    fn touch_source(&self) -> PointerSource {
        PointerSource::Touch {
            touches: self.touches.iter().map(|(_, pos)| *pos).collect(),
            canvas_origin: self.canvas_rect.min,
        }
    }

    /// Process raw egui input and generate canvas InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let raw_events = ctx.input(|input| input.raw.events.clone());
        self.process_events(&raw_events)
    }

    /// Converts a frame's worth of raw events.
    ///
    /// Backends emulate pointer events for touches, always in the same frame
    /// as the touch events themselves; those are dropped so each contact is
    /// handled once. Pointer events in a frame without touch events come from
    /// a real mouse, so any touch still tracked then lost its `End` and is
    /// forgotten.
    pub fn process_events(&mut self, raw_events: &[Event]) -> Vec<InputEvent> {
        let touch_frame = raw_events.iter().any(|e| matches!(e, Event::Touch { .. }));
        let mouse_frame = raw_events
            .iter()
            .any(|e| matches!(e, Event::PointerButton { .. } | Event::PointerMoved(_)));
        if !touch_frame && mouse_frame && !self.touches.is_empty() {
            log::debug!("Forgetting {} touches that never ended", self.touches.len());
            self.touches.clear();
        }
        let mut events = Vec::new();

        for event in raw_events {
            match event {
                Event::Touch { id, phase, pos, .. } => self.handle_touch(*id, *phase, *pos, &mut events),
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } if !touch_frame => {
                    if *pressed {
                        if let Some(location) = self.make_location(&self.mouse_source(*pos)) {
                            events.push(InputEvent::PointerDown { location });
                        }
                    } else {
                        events.push(InputEvent::PointerUp);
                    }
                }
                Event::PointerMoved(pos) if !touch_frame => {
                    if let Some(location) = self.make_location(&self.mouse_source(*pos)) {
                        events.push(InputEvent::PointerMove { location });
                    }
                }
                _ => {}
            }
        }

        events
    }

    fn handle_touch(&mut self, id: TouchId, phase: TouchPhase, pos: Pos2, events: &mut Vec<InputEvent>) {
        match phase {
            TouchPhase::Start => {
                match self.touches.iter_mut().find(|(touch, _)| *touch == id) {
                    Some(entry) => entry.1 = pos,
                    None => self.touches.push((id, pos)),
                }
                if let Some(location) = self.make_location(&self.touch_source()) {
                    events.push(InputEvent::PointerDown { location });
                }
            }
            TouchPhase::Move => {
                if let Some(entry) = self.touches.iter_mut().find(|(touch, _)| *touch == id) {
                    entry.1 = pos;
                }
                match self.make_location(&self.touch_source()) {
                    Some(location) => events.push(InputEvent::PointerMove { location }),
                    None => log::debug!("Ignoring touch move without active touches"),
                }
            }
            TouchPhase::End | TouchPhase::Cancel => {
                self.touches.retain(|(touch, _)| *touch != id);
                events.push(InputEvent::PointerUp);
            }
        }
    }
}

/// Undo/redo keyboard shortcuts. Redo is checked first since the undo
/// shortcut also matches when shift is held.
pub fn shortcut_commands(ctx: &Context) -> Vec<Command> {
    let redo_shift = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z);
    let redo_y = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
    let undo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

    ctx.input_mut(|input| {
        let mut commands = Vec::new();
        if input.consume_shortcut(&redo_shift) || input.consume_shortcut(&redo_y) {
            commands.push(Command::Redo);
        } else if input.consume_shortcut(&undo) {
            commands.push(Command::Undo);
        }
        commands
    })
}
