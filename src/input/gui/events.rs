/// User events for the winit loop, sent from render threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// A tile was presented. The handler decides whether a redraw is needed.
    Wake,
}
