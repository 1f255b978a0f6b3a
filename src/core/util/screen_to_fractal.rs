use crate::core::data::complex::Complex;
use crate::core::data::view_state::ViewState;

/// Maps a screen position to the fractal plane for `view`.
///
/// Scaling by `min(width, height)` keeps the aspect ratio independent of the
/// window shape.
#[must_use]
pub fn screen_to_fractal(px: f64, py: f64, width: u32, height: u32, view: ViewState) -> Complex {
    CoordinateMapper::new(width, height, view).map(px, py)
}

/// [`screen_to_fractal`] with the per-view terms computed once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    half_width: f64,
    half_height: f64,
    scale: f64,
    offset: Complex,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(width: u32, height: u32, view: ViewState) -> Self {
        let min_length = f64::from(width.min(height));

        Self {
            half_width: f64::from(width) / 2.0,
            half_height: f64::from(height) / 2.0,
            scale: 0.5 * view.zoom * min_length,
            offset: Complex::new(view.offset_x, view.offset_y),
        }
    }

    #[inline]
    #[must_use]
    pub fn map(&self, px: f64, py: f64) -> Complex {
        Complex {
            real: (px - self.half_width) / self.scale + self.offset.real,
            imag: (py - self.half_height) / self.scale + self.offset.imag,
        }
    }

    #[inline]
    #[must_use]
    pub fn map_pixel(&self, x: u32, y: u32) -> Complex {
        self.map(f64::from(x), f64::from(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_centre_maps_to_offset_for_any_zoom() {
        for zoom in [0.5, 1.0, 3.0, 1024.0] {
            let view = ViewState::new(zoom, -0.75, 0.1);
            let c = screen_to_fractal(640.0, 360.0, 1280, 720, view);

            assert_eq!(c, Complex::new(-0.75, 0.1));
        }
    }

    #[test]
    fn test_short_axis_spans_four_units_at_unit_zoom() {
        let view = ViewState::default();

        let top = screen_to_fractal(640.0, 0.0, 1280, 720, view);
        let bottom = screen_to_fractal(640.0, 720.0, 1280, 720, view);

        assert!((top.imag + 1.0).abs() < EPSILON);
        assert!((bottom.imag - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_aspect_ratio_is_preserved() {
        let view = ViewState::new(2.0, 0.0, 0.0);
        let right = screen_to_fractal(150.0, 50.0, 200, 100, view);
        let down = screen_to_fractal(100.0, 100.0, 200, 100, view);

        // 50 pixels along either axis covers the same plane distance
        assert!((right.real - down.imag).abs() < EPSILON);
    }

    #[test]
    fn test_mapping_is_affine() {
        let mapper = CoordinateMapper::new(300, 200, ViewState::new(1.5, 0.25, -0.5));

        let origin = mapper.map(0.0, 0.0);
        let step_x = mapper.map(1.0, 0.0) - origin;
        let step_y = mapper.map(0.0, 1.0) - origin;

        for (px, py) in [(10.0, 20.0), (299.0, 0.0), (150.5, 199.0)] {
            let expected = origin + step_x * px + step_y * py;
            let actual = mapper.map(px, py);

            assert!((actual.real - expected.real).abs() < 1e-9);
            assert!((actual.imag - expected.imag).abs() < 1e-9);
        }
    }

    #[test]
    fn test_map_pixel_matches_free_function() {
        let view = ViewState::new(4.0, -1.0, 0.3);
        let mapper = CoordinateMapper::new(64, 48, view);

        for (x, y) in [(0, 0), (63, 47), (17, 30)] {
            assert_eq!(
                mapper.map_pixel(x, y),
                screen_to_fractal(f64::from(x), f64::from(y), 64, 48, view)
            );
        }
    }
}
