//! One trial point of an equation problem.
//!
//! Bisection calls [`evaluate`] at both bracket ends and at every midpoint.
//! For the quadratic the model input is `x` itself and the single residual is
//! `a0 + a1·x + a2·x² - target`.

use thiserror::Error;

use quadroot_core::{EquationProblem, Model, Snapshot};

/// Residuals at a trial `x`, together with the model call behind them.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],
    pub residuals: [f64; N],
    pub snapshot: Snapshot<I, O>,
}

impl<I, O> Evaluation<I, O, 1> {
    /// The residual of a scalar problem, `f(x) - target` for the quadratic.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.residuals[0]
    }
}

/// Why a trial point could not be evaluated.
///
/// Neither variant occurs for the quadratic, whose model and problem are
/// both `Infallible`.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    #[error("model evaluation failed")]
    Model(#[source] ME),

    #[error("equation problem rejected the trial point")]
    Problem(#[source] PE),
}

/// Return type of [`evaluate`] for a model `M` and problem `P`.
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as EquationProblem<N>>::Error>,
>;

/// Evaluates `problem` at `x` through `model`.
///
/// # Errors
///
/// Returns [`EvalError::Problem`] if `x` cannot be turned into a model input
/// or the residuals cannot be computed, and [`EvalError::Model`] if the model
/// call fails.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let residuals = problem
        .residuals(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        residuals,
        snapshot: Snapshot::new(input, output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use quadroot_models::{Quadratic, TargetValue};

    #[derive(Debug, Error)]
    #[error("negative input")]
    struct NegativeInput;

    /// Square root model that refuses negative inputs.
    struct Sqrt;

    impl Model for Sqrt {
        type Input = f64;
        type Output = f64;
        type Error = NegativeInput;

        fn call(&self, x: &f64) -> Result<f64, Self::Error> {
            if *x < 0.0 {
                Err(NegativeInput)
            } else {
                Ok(x.sqrt())
            }
        }
    }

    #[test]
    fn captures_snapshot_and_residual() {
        let model = Quadratic::new(1.0, 0.0, 1.0);
        let problem = TargetValue::new(5.0);

        let eval = evaluate(&model, &problem, [3.0]).expect("infallible");

        assert_eq!(eval.x, [3.0]);
        assert_relative_eq!(eval.snapshot.input, 3.0);
        assert_relative_eq!(eval.snapshot.output, 10.0);
        assert_relative_eq!(eval.residual(), 5.0);
    }

    #[test]
    fn model_failure_is_reported() {
        let result = evaluate(&Sqrt, &TargetValue::new(1.0), [-1.0]);
        assert!(matches!(result, Err(EvalError::Model(NegativeInput))));
    }
}
