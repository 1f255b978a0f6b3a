#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Digit(u8),
    R,
    Escape,
    Other,
}

/// Discrete input delivered by a host, in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Quit,
    PointerClick { x: f64, y: f64 },
    Scroll(ScrollDirection),
    KeyPress(KeyCode),
}
