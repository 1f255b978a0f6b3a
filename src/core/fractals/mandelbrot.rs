use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape_time;
use crate::core::fractals::kernel::FractalKernel;
use crate::core::fractals::orbit::Orbit;

/// `z ← z² + c`
#[derive(Debug, Clone, Copy, Default)]
pub struct Mandelbrot;

impl FractalKernel for Mandelbrot {
    fn iterate(&self, point: Complex, max_iterations: u32) -> Orbit {
        escape_time(point, max_iterations, |z, c| z * z + c)
    }
}
