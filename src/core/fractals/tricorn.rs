use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape_time;
use crate::core::fractals::kernel::FractalKernel;
use crate::core::fractals::orbit::Orbit;

/// `z ← conj(z)² + c`
#[derive(Debug, Clone, Copy, Default)]
pub struct Tricorn;

impl FractalKernel for Tricorn {
    fn iterate(&self, point: Complex, max_iterations: u32) -> Orbit {
        escape_time(point, max_iterations, |z, c| {
            let conjugate = z.conjugate();
            conjugate * conjugate + c
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_in_set() {
        assert_eq!(Tricorn.iterate(Complex::ZERO, 128), Orbit::Bounded);
    }

    #[test]
    fn test_set_is_symmetric_about_real_axis() {
        for point in [Complex::new(0.3, 0.6), Complex::new(-0.9, 0.2), Complex::new(0.1, 1.1)] {
            assert_eq!(
                Tricorn.iterate(point, 64),
                Tricorn.iterate(point.conjugate(), 64)
            );
        }
    }

    #[test]
    fn test_escapes_where_mandelbrot_is_bounded() {
        use crate::core::fractals::mandelbrot::Mandelbrot;

        // 0.5i lies inside the Mandelbrot main cardioid
        let point = Complex::new(0.0, 0.5);

        assert_eq!(Mandelbrot.iterate(point, 128), Orbit::Bounded);
        assert!(matches!(Tricorn.iterate(point, 128), Orbit::Escaped(_)));
    }
}
