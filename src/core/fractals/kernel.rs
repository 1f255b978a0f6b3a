use crate::core::data::complex::Complex;
use crate::core::fractals::orbit::Orbit;

pub trait FractalKernel: Send + Sync {
    fn iterate(&self, point: Complex, max_iterations: u32) -> Orbit;
}
