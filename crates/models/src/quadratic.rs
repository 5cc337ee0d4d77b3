use std::convert::Infallible;

use quadroot_core::Model;

/// A quadratic polynomial `f(x) = a0 + a1·x + a2·x²`.
///
/// Coefficients are stored lowest degree first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
}

impl Quadratic {
    /// Creates a quadratic from its coefficients, constant term first.
    #[must_use]
    pub const fn new(a0: f64, a1: f64, a2: f64) -> Self {
        Self { a0, a1, a2 }
    }

    /// Returns the coefficients as `[a0, a1, a2]`.
    #[must_use]
    pub fn coeffs(&self) -> [f64; 3] {
        [self.a0, self.a1, self.a2]
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// NaN in any coefficient or in `x` yields NaN.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.a0 + self.a1 * x + self.a2 * x * x
    }
}

impl From<[f64; 3]> for Quadratic {
    fn from([a0, a1, a2]: [f64; 3]) -> Self {
        Self::new(a0, a1, a2)
    }
}

impl Model for Quadratic {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(self.eval(*x))
    }
}
