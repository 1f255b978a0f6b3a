use crate::core::actions::render_pass::ports::display_surface::DisplaySurface;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::pixel_surface::{PixelSurface, SurfaceError, TileView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayStats {
    pub blits: u64,
    pub presents: u64,
    pub pixels_written: u64,
}

/// In-memory host surface that mirrors every blit and counts presents.
#[derive(Debug, Clone)]
pub struct RecordingDisplay {
    mirror: PixelSurface,
    stats: DisplayStats,
    last_tile: Option<PixelRect>,
}

impl RecordingDisplay {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        Ok(Self {
            mirror: PixelSurface::new(width, height)?,
            stats: DisplayStats::default(),
            last_tile: None,
        })
    }

    #[must_use]
    pub fn stats(&self) -> DisplayStats {
        self.stats
    }

    #[must_use]
    pub fn last_tile(&self) -> Option<PixelRect> {
        self.last_tile
    }

    #[must_use]
    pub fn mirror(&self) -> &PixelSurface {
        &self.mirror
    }

    #[must_use]
    pub fn colour_at(&self, x: u32, y: u32) -> Option<Colour> {
        self.mirror.colour_at(x, y)
    }
}

impl DisplaySurface for RecordingDisplay {
    fn blit(&mut self, tile: TileView<'_>) {
        for (x, y, colour) in tile.pixels() {
            if self.mirror.set_colour(x, y, colour).is_ok() {
                self.stats.pixels_written += 1;
            }
        }

        self.stats.blits += 1;
        self.last_tile = Some(tile.rect());
    }

    fn present(&mut self) {
        self.stats.presents += 1;
    }
}
