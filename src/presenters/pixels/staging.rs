use crate::core::data::pixel_surface::TileView;

/// Row-major RGBA copy of everything workers have published so far.
///
/// Filled from render threads under the publish lock and drained into the
/// `pixels` framebuffer on the event loop thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingFrame {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
    dirty: bool,
}

impl StagingFrame {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let mut rgba = vec![0; width as usize * height as usize * 4];
        for pixel in rgba.chunks_exact_mut(4) {
            pixel[3] = 255;
        }

        Self {
            width,
            height,
            rgba,
            dirty: false,
        }
    }

    pub fn write_tile(&mut self, tile: TileView<'_>) {
        let rect = tile.rect();
        if rect.right() > self.width || rect.bottom() > self.height {
            tracing::warn!(?rect, width = self.width, height = self.height, "tile outside staging frame, skipped");
            return;
        }

        for (x, y, colour) in tile.pixels() {
            let offset = (y as usize * self.width as usize + x as usize) * 4;
            self.rgba[offset] = colour.r;
            self.rgba[offset + 1] = colour.g;
            self.rgba[offset + 2] = colour.b;
            self.rgba[offset + 3] = 255;
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Copies the staged pixels into `dst` if anything was presented since the last copy.
    pub fn copy_if_dirty(&mut self, dst: &mut [u8]) -> bool {
        if !self.dirty || dst.len() != self.rgba.len() {
            return false;
        }

        dst.copy_from_slice(&self.rgba);
        self.dirty = false;
        true
    }

    #[must_use]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}
