//! Models evaluated by the solvers.
//!
//! The canonical model here is `quadroot_models::Quadratic`, a total map from
//! `x` to `a0 + a1·x + a2·x²`. Solvers only see the [`Model`] trait, so a
//! fallible model plugs in the same way and its error is handed back to the
//! caller untouched.

/// Maps one input to one output, possibly failing.
pub trait Model {
    /// What the model is called with, `x` for a polynomial.
    type Input;

    /// What the model produces.
    type Output;

    /// Failure of a single call. Total models use `Infallible`.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model once.
    ///
    /// # Errors
    ///
    /// Returns [`Model::Error`] when no output exists for `input`.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A model call as seen by observers: the input and what came out of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Pairs `input` with the `output` the model returned for it.
    #[must_use]
    pub const fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
