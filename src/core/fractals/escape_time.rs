use crate::core::data::complex::Complex;
use crate::core::fractals::orbit::Orbit;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `step` from `z0 = 0` until `|z|² > 4` or the budget runs out.
///
/// The escape test runs after each step and reports the zero-based step
/// index, so a point that leaves on the first step reports `Escaped(0)`.
#[inline]
pub fn escape_time<F>(c: Complex, max_iterations: u32, step: F) -> Orbit
where
    F: Fn(Complex, Complex) -> Complex,
{
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = step(z, c);
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return Orbit::Escaped(iteration);
        }
    }

    Orbit::Bounded
}
