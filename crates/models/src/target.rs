use std::convert::Infallible;

use quadroot_core::EquationProblem;

/// Drives a scalar model's output to a target value.
///
/// The residual is `output - target`, so a root of the residual is an `x`
/// where the model produces exactly `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetValue {
    pub target: f64,
}

impl TargetValue {
    #[must_use]
    pub const fn new(target: f64) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for TargetValue {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([output - self.target])
    }
}
