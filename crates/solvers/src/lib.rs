//! Numerical solvers for quadroot.
//!
//! # Modules
//!
//! - [`equation`] — root finding for [`EquationProblem`]s
//!
//! [`EquationProblem`]: quadroot_core::EquationProblem

pub mod equation;
