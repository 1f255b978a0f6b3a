use crate::core::data::complex::Complex;
use crate::core::fractals::kernel::FractalKernel;
use crate::core::fractals::orbit::Orbit;

pub const CONVERGENCE_THRESHOLD: f64 = 1e-6;

/// Newton's method on `f(z) = z³ − 1`, starting from `z0 = c`.
///
/// A point where `f′(z) = 0` has no next step and is reported as
/// [`Orbit::Bounded`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Newton;

impl FractalKernel for Newton {
    fn iterate(&self, point: Complex, max_iterations: u32) -> Orbit {
        let mut z = point;

        for iteration in 0..max_iterations {
            let z_squared = z * z;
            let f = z_squared * z - 1.0;

            if f.magnitude_squared() < CONVERGENCE_THRESHOLD {
                return Orbit::Converged(iteration);
            }

            let Some(step) = f.checked_div(z_squared * 3.0) else {
                return Orbit::Bounded;
            };

            z = z - step;
        }

        Orbit::Bounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_converges_immediately() {
        assert_eq!(Newton.iterate(Complex::ONE, 128), Orbit::Converged(0));
    }

    #[test]
    fn test_zero_derivative_is_bounded() {
        assert_eq!(Newton.iterate(Complex::ZERO, 128), Orbit::Bounded);
    }

    #[test]
    fn test_complex_roots_converge() {
        let half_root_three = 3.0_f64.sqrt() / 2.0;

        for root in [Complex::new(-0.5, half_root_three), Complex::new(-0.5, -half_root_three)] {
            assert_eq!(Newton.iterate(root, 128), Orbit::Converged(0));
        }
    }

    #[test]
    fn test_nearby_point_converges_in_a_few_steps() {
        let orbit = Newton.iterate(Complex::new(1.2, 0.1), 128);

        match orbit {
            Orbit::Converged(iteration) => assert!(iteration > 0 && iteration < 10),
            other => panic!("expected convergence, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_budget_is_bounded() {
        assert_eq!(Newton.iterate(Complex::ONE, 0), Orbit::Bounded);
    }
}
