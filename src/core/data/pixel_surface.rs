use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("surface dimensions must be positive: {width}x{height}")]
    Degenerate { width: u32, height: u32 },
    #[error("pixel at x:{x}, y:{y} outside of {width}x{height} surface")]
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("strip starting at column {left} does not continue from column {expected}")]
    StripNotContiguous { left: u32, expected: u32 },
    #[error("strip must span the full surface height {height}, got rows {top}..{bottom}")]
    StripNotFullHeight { top: u32, bottom: u32, height: u32 },
    #[error("strips cover columns 0..{covered} of a {width} column surface")]
    StripsIncomplete { covered: u32, width: u32 },
    #[error("rgba frame length {actual} does not match expected {expected}")]
    RgbaLengthMismatch { actual: usize, expected: usize },
}

/// The engine's raster, stored column-major.
///
/// Column-major order makes every vertical strip a single contiguous slice,
/// so disjoint strips can be lent to separate workers as `&mut` slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::Degenerate { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![Colour::BLACK; width as usize * height as usize],
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn colour_at(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(self.pixels[self.index(x, y)])
    }

    pub fn set_colour(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), SurfaceError> {
        if x >= self.width || y >= self.height {
            return Err(SurfaceError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let index = self.index(x, y);
        self.pixels[index] = colour;

        Ok(())
    }

    /// Splits the surface into exclusive column strips.
    ///
    /// `strips` must be ordered left to right, span the full height and jointly
    /// cover every column exactly once.
    pub fn strips_mut(&mut self, strips: &[PixelRect]) -> Result<Vec<SurfaceStrip<'_>>, SurfaceError> {
        let height = self.height;
        let mut expected_left = 0;

        for strip in strips {
            if strip.left() != expected_left {
                return Err(SurfaceError::StripNotContiguous {
                    left: strip.left(),
                    expected: expected_left,
                });
            }
            if strip.top() != 0 || strip.height() != height {
                return Err(SurfaceError::StripNotFullHeight {
                    top: strip.top(),
                    bottom: strip.bottom(),
                    height,
                });
            }
            expected_left = strip.right();
        }

        if expected_left != self.width {
            return Err(SurfaceError::StripsIncomplete {
                covered: expected_left,
                width: self.width,
            });
        }

        let mut remaining: &mut [Colour] = &mut self.pixels;
        let mut result = Vec::with_capacity(strips.len());

        for &rect in strips {
            let (owned, rest) = remaining.split_at_mut(rect.width() as usize * height as usize);
            remaining = rest;
            result.push(SurfaceStrip {
                rect,
                height,
                pixels: owned,
            });
        }

        Ok(result)
    }

    /// Writes the surface as row-major RGBA (alpha 255), one row per rayon task.
    pub fn write_rgba_into(&self, dst: &mut [u8]) -> Result<(), SurfaceError> {
        let expected = self.pixels.len() * 4;

        if dst.len() != expected {
            return Err(SurfaceError::RgbaLengthMismatch {
                actual: dst.len(),
                expected,
            });
        }

        let height = self.height as usize;

        dst.par_chunks_exact_mut(self.width as usize * 4)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, dst_pixel) in row.chunks_exact_mut(4).enumerate() {
                    let Colour { r, g, b } = self.pixels[x * height + y];
                    dst_pixel[0] = r;
                    dst_pixel[1] = g;
                    dst_pixel[2] = b;
                    dst_pixel[3] = 255;
                }
            });

        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> usize {
        x as usize * self.height as usize + y as usize
    }
}

/// Exclusive write access to a full-height run of columns.
#[derive(Debug)]
pub struct SurfaceStrip<'a> {
    rect: PixelRect,
    height: u32,
    pixels: &'a mut [Colour],
}

impl SurfaceStrip<'_> {
    #[must_use]
    pub fn rect(&self) -> PixelRect {
        self.rect
    }

    /// Sets a pixel by surface coordinates. Panics if `(x, y)` is outside the strip.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, colour: Colour) {
        debug_assert!(self.rect.contains(x, y), "({x}, {y}) outside {:?}", self.rect);

        let index = (x - self.rect.left()) as usize * self.height as usize + y as usize;
        self.pixels[index] = colour;
    }

    /// Read-only view of a tile lying inside this strip.
    #[must_use]
    pub fn tile(&self, tile: PixelRect) -> TileView<'_> {
        debug_assert!(
            tile.left() >= self.rect.left() && tile.right() <= self.rect.right(),
            "tile {tile:?} outside strip {:?}",
            self.rect
        );

        TileView {
            rect: tile,
            strip_left: self.rect.left(),
            height: self.height,
            pixels: &self.pixels[..],
        }
    }
}

/// A finished tile handed to the display surface under the publish lock.
#[derive(Debug, Clone, Copy)]
pub struct TileView<'a> {
    rect: PixelRect,
    strip_left: u32,
    height: u32,
    pixels: &'a [Colour],
}

impl<'a> TileView<'a> {
    #[must_use]
    pub fn rect(&self) -> PixelRect {
        self.rect
    }

    #[must_use]
    pub fn colour_at(&self, x: u32, y: u32) -> Colour {
        self.pixels[(x - self.strip_left) as usize * self.height as usize + y as usize]
    }

    /// Tile pixels in row-major order as `(x, y, colour)`.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Colour)> + 'a {
        let view = *self;

        (view.rect.top()..view.rect.bottom()).flat_map(move |y| {
            (view.rect.left()..view.rect.right()).map(move |x| (x, y, view.colour_at(x, y)))
        })
    }
}
