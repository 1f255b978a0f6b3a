use std::time::Duration;

use crate::controllers::interactive::data::pass_request::PassRequest;
use crate::core::data::pixel_surface::PixelSurface;

#[derive(Debug, Clone)]
pub struct CompletedFrame {
    pub generation: u64,
    pub request: PassRequest,
    pub surface: PixelSurface,
    pub duration: Duration,
}
