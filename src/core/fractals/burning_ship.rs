use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape_time;
use crate::core::fractals::kernel::FractalKernel;
use crate::core::fractals::orbit::Orbit;

/// `z ← (|Re z| + i|Im z|)² + c`
#[derive(Debug, Clone, Copy, Default)]
pub struct BurningShip;

impl FractalKernel for BurningShip {
    fn iterate(&self, point: Complex, max_iterations: u32) -> Orbit {
        escape_time(point, max_iterations, |z, c| {
            let folded = Complex::new(z.real.abs(), z.imag.abs());
            folded * folded + c
        })
    }
}
