use crate::core::data::pixel_surface::TileView;

/// The host's presentable surface.
///
/// Calls always arrive under the engine's publish lock, one tile at a time.
pub trait DisplaySurface: Send {
    fn blit(&mut self, tile: TileView<'_>);
    fn present(&mut self);
}
