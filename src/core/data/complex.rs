use std::ops::{Add, Div, Mul, Sub};

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self { real: 0.0, imag: 0.0 };
    pub const ONE: Self = Self { real: 1.0, imag: 0.0 };
    pub const I: Self = Self { real: 0.0, imag: 1.0 };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    /// Division that reports a zero divisor instead of producing NaN or infinity.
    #[must_use]
    pub fn checked_div(self, divisor: Self) -> Option<Self> {
        let denominator = divisor.magnitude_squared();

        if denominator == 0.0 {
            return None;
        }

        Some(Self {
            real: (self.real * divisor.real + self.imag * divisor.imag) / denominator,
            imag: (self.imag * divisor.real - self.real * divisor.imag) / denominator,
        })
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

/// Multiplies by the conjugate of `other` over its squared magnitude.
///
/// The divisor must be non-zero; use [`Complex::checked_div`] when it may not be.
impl Div for Complex {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        let denominator = other.magnitude_squared();

        Self {
            real: (self.real * other.real + self.imag * other.imag) / denominator,
            imag: (self.imag * other.real - self.real * other.imag) / denominator,
        }
    }
}

impl Add<f64> for Complex {
    type Output = Self;

    fn add(self, scalar: f64) -> Self {
        Self {
            real: self.real + scalar,
            imag: self.imag,
        }
    }
}

impl Sub<f64> for Complex {
    type Output = Self;

    fn sub(self, scalar: f64) -> Self {
        Self {
            real: self.real - scalar,
            imag: self.imag,
        }
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            real: self.real * scalar,
            imag: self.imag * scalar,
        }
    }
}

impl Div<f64> for Complex {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self {
            real: self.real / scalar,
            imag: self.imag / scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: Complex, expected: Complex) {
        assert!(
            (actual.real - expected.real).abs() <= EPSILON
                && (actual.imag - expected.imag).abs() <= EPSILON,
            "actual={:?} expected={:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude_squared_ignores_signs() {
        assert_eq!(Complex::new(-3.0, 4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::new(3.0, -4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::new(-3.0, -4.0).magnitude_squared(), 25.0);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Complex::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Complex::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(3.0, 4.0);
        assert_eq!(result, Complex::new(4.0, 6.0));
    }

    #[test]
    fn test_add_is_commutative_and_associative() {
        let a = Complex::new(1.5, -2.0);
        let b = Complex::new(-0.25, 4.0);
        let c = Complex::new(3.0, 0.5);

        assert_eq!(a + b, b + a);
        assert_approx_eq((a + b) + c, a + (b + c));
    }

    #[test]
    fn test_sub() {
        let result = Complex::new(1.0, 2.0) - Complex::new(3.0, 7.0);
        assert_eq!(result, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = 3 + 10i - 8 = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_mul_by_zero() {
        let result = Complex::new(5.0, 3.0) * Complex::ZERO;
        assert_eq!(result, Complex::ZERO);
    }

    #[test]
    fn test_i_squared_is_minus_one() {
        assert_eq!(Complex::I * Complex::I, Complex::new(-1.0, 0.0));
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i + 9i² = -5 + 12i
        let c = Complex::new(2.0, 3.0);
        assert_eq!(c * c, Complex::new(-5.0, 12.0));
    }

    #[test]
    fn test_div() {
        // (-5 + 10i) / (3 + 4i) = 1 + 2i
        let result = Complex::new(-5.0, 10.0) / Complex::new(3.0, 4.0);
        assert_approx_eq(result, Complex::new(1.0, 2.0));
    }

    #[test]
    fn test_mul_then_div_recovers_original() {
        let samples = [
            (Complex::new(1.0, 2.0), Complex::new(3.0, -4.0)),
            (Complex::new(-0.7, 0.2), Complex::new(0.001, 0.5)),
            (Complex::new(12.0, -9.5), Complex::new(-2.0, -2.0)),
            (Complex::new(0.0, 1.0), Complex::new(1.0, 0.0)),
        ];

        for (a, b) in samples {
            assert_approx_eq((a * b) / b, a);
        }
    }

    #[test]
    fn test_checked_div_matches_div_for_non_zero_divisor() {
        let a = Complex::new(2.0, -1.0);
        let b = Complex::new(0.5, 0.25);

        assert_eq!(a.checked_div(b), Some(a / b));
    }

    #[test]
    fn test_checked_div_by_zero_is_none() {
        assert_eq!(Complex::new(1.0, 1.0).checked_div(Complex::ZERO), None);
    }

    #[test]
    fn test_conjugate_twice_is_identity() {
        let z = Complex::new(-1.25, 3.5);

        assert_eq!(z.conjugate(), Complex::new(-1.25, -3.5));
        assert_eq!(z.conjugate().conjugate(), z);
    }

    #[test]
    fn test_scalar_operations() {
        let z = Complex::new(2.0, -4.0);

        assert_eq!(z + 1.0, Complex::new(3.0, -4.0));
        assert_eq!(z - 1.0, Complex::new(1.0, -4.0));
        assert_eq!(z * 3.0, Complex::new(6.0, -12.0));
        assert_eq!(z / 2.0, Complex::new(1.0, -2.0));
    }
}
