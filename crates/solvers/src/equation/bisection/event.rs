use crate::equation::Evaluation;

use super::Bracket;

/// Iteration event emitted by the bisection solver.
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,

    /// Bracket that was halved to produce this midpoint.
    pub bracket: &'a Bracket,

    /// Evaluation at the midpoint.
    pub eval: &'a Evaluation<I, O, 1>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the evaluated midpoint.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x[0]
    }

    /// Returns the residual at the midpoint.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residual()
    }
}
