pub mod colour;
pub mod complex;
pub mod pixel_rect;
pub mod pixel_surface;
pub mod view_state;
