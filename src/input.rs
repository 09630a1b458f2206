use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

use crate::canvas::Viewport;
use crate::error::GameResult;
use crate::motion::Point;

/// What the game cares about from the terminal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Close the game, whatever state it is in
    Quit,
    /// Left button pressed at this world point
    MouseDown(Point),
    /// A character key, lowercased
    KeyDown(char),
}

/// Translate one crossterm event. Returns None for anything the game ignores.
pub fn translate(event: Event, viewport: &Viewport) -> Option<InputEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, viewport),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => Some(InputEvent::Quit),
        (modifiers, KeyCode::Char('c') | KeyCode::Char('C'))
            if modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(InputEvent::Quit)
        }
        (_, KeyCode::Char(c)) => Some(InputEvent::KeyDown(c.to_ascii_lowercase())),
        _ => None,
    }
}

fn translate_mouse(mouse: MouseEvent, viewport: &Viewport) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::MouseDown(
            viewport.cell_to_world(mouse.column, mouse.row),
        )),
        _ => None,
    }
}

/// Polls the terminal and hands back game events
#[derive(Default)]
pub struct InputManager {
    events: Vec<InputEvent>,
}

impl InputManager {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Drain every pending event without blocking. Call once per frame.
    pub fn poll_events(&mut self, viewport: &Viewport) -> GameResult<&[InputEvent]> {
        self.events.clear();
        while event::poll(Duration::ZERO)? {
            if let Some(input) = translate(event::read()?, viewport) {
                self.events.push(input);
            }
        }
        Ok(&self.events)
    }

    /// Wait up to `timeout` for one event the game understands. Returns
    /// None on timeout or when the event is ignored, so callers can redraw.
    pub fn next_event(
        &self,
        viewport: &Viewport,
        timeout: Duration,
    ) -> GameResult<Option<InputEvent>> {
        if event::poll(timeout)? {
            return Ok(translate(event::read()?, viewport));
        }
        Ok(None)
    }
}
