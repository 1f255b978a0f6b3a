use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

use crate::controllers::interactive::events::host_event::{HostEvent, KeyCode, ScrollDirection};

#[must_use]
pub fn translate_key(key: PhysicalKey) -> KeyCode {
    let PhysicalKey::Code(code) = key else {
        return KeyCode::Other;
    };

    match code {
        WinitKeyCode::Digit0 | WinitKeyCode::Numpad0 => KeyCode::Digit(0),
        WinitKeyCode::Digit1 | WinitKeyCode::Numpad1 => KeyCode::Digit(1),
        WinitKeyCode::Digit2 | WinitKeyCode::Numpad2 => KeyCode::Digit(2),
        WinitKeyCode::Digit3 | WinitKeyCode::Numpad3 => KeyCode::Digit(3),
        WinitKeyCode::Digit4 | WinitKeyCode::Numpad4 => KeyCode::Digit(4),
        WinitKeyCode::Digit5 | WinitKeyCode::Numpad5 => KeyCode::Digit(5),
        WinitKeyCode::Digit6 | WinitKeyCode::Numpad6 => KeyCode::Digit(6),
        WinitKeyCode::Digit7 | WinitKeyCode::Numpad7 => KeyCode::Digit(7),
        WinitKeyCode::Digit8 | WinitKeyCode::Numpad8 => KeyCode::Digit(8),
        WinitKeyCode::Digit9 | WinitKeyCode::Numpad9 => KeyCode::Digit(9),
        WinitKeyCode::KeyR => KeyCode::R,
        WinitKeyCode::Escape => KeyCode::Escape,
        _ => KeyCode::Other,
    }
}

#[must_use]
pub fn translate_scroll(delta: MouseScrollDelta) -> Option<ScrollDirection> {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if y > 0.0 {
        Some(ScrollDirection::Up)
    } else if y < 0.0 {
        Some(ScrollDirection::Down)
    } else {
        None
    }
}

/// Turns winit window events into [`HostEvent`]s, tracking the cursor for clicks.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HostEventTranslator {
    cursor: Option<(f64, f64)>,
}

impl HostEventTranslator {
    /// `to_surface` maps window coordinates to surface pixels, returning `None`
    /// when the cursor is outside the surface.
    pub fn translate<F>(&mut self, event: &WindowEvent, to_surface: F) -> Option<HostEvent>
    where
        F: Fn(f64, f64) -> Option<(f64, f64)>,
    {
        match event {
            WindowEvent::CloseRequested => Some(HostEvent::Quit),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = to_surface(position.x, position.y);
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                None
            }
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::MouseWheel { delta, .. } => translate_scroll(*delta).map(HostEvent::Scroll),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    Some(HostEvent::KeyPress(translate_key(event.physical_key)))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn set_cursor(&mut self, cursor: Option<(f64, f64)>) {
        self.cursor = cursor;
    }

    #[must_use]
    pub fn mouse_input(&self, state: ElementState, button: MouseButton) -> Option<HostEvent> {
        match (state, button, self.cursor) {
            (ElementState::Pressed, MouseButton::Left, Some((x, y))) => Some(HostEvent::PointerClick { x, y }),
            _ => None,
        }
    }
}
