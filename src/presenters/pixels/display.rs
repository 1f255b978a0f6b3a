use parking_lot::Mutex;
use std::sync::Arc;
use winit::event_loop::EventLoopProxy;

use crate::core::actions::render_pass::ports::display_surface::DisplaySurface;
use crate::core::data::pixel_surface::TileView;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::staging::StagingFrame;

/// Render-thread side of the window: stages tiles and wakes the event loop on present.
pub struct PixelsDisplay {
    staging: Arc<Mutex<StagingFrame>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl PixelsDisplay {
    pub fn new(staging: Arc<Mutex<StagingFrame>>, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            staging,
            event_loop_proxy,
        }
    }
}

impl DisplaySurface for PixelsDisplay {
    fn blit(&mut self, tile: TileView<'_>) {
        self.staging.lock().write_tile(tile);
    }

    fn present(&mut self) {
        self.staging.lock().mark_dirty();
        // Fails only once the event loop has exited
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}
