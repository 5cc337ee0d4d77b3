//! Models and equation problems for quadratic root finding.
//!
//! - [`Quadratic`] evaluates `a0 + a1·x + a2·x²` as a [`Model`]
//! - [`TargetValue`] turns any scalar model into an [`EquationProblem`] whose
//!   residual is `output - target`
//!
//! [`Model`]: quadroot_core::Model
//! [`EquationProblem`]: quadroot_core::EquationProblem

mod quadratic;
mod target;

pub use quadratic::Quadratic;
pub use target::TargetValue;
