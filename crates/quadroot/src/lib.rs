//! Find a root of `a0 + a1·x + a2·x² = target` on an interval by bisection.
//!
//! The library wires the [`Quadratic`] model and the [`TargetValue`] problem
//! into the bisection solver, and provides the pieces the `quadroot` binary
//! is built from:
//!
//! - [`form`] — parses and validates the seven text fields
//! - [`present`] — renders a [`Solution`] as text or JSON
//! - [`logging`] — `tracing` subscriber setup
//! - [`TraceObserver`] — logs every bisection step
//!
//! ```
//! use quadroot::{Config, Quadratic, Solution, solve};
//!
//! let config = Config::with_eps(1e-6).unwrap();
//! let solution = solve(&Quadratic::new(0.0, 0.0, 1.0), 4.0, [0.0, 3.0], &config);
//!
//! let Solution::Found(root) = solution else { panic!("x² = 4 has a root in [0, 3]") };
//! assert!((root.x - 2.0).abs() < 1e-6);
//! ```

pub mod form;
pub mod logging;
pub mod present;

mod observe;

pub use observe::TraceObserver;
pub use quadroot_models::{Quadratic, TargetValue};
pub use quadroot_solvers::equation::bisection::{
    Config, ConfigError, NoRoot, Root, Solution, Termination,
};

use quadroot_solvers::equation::bisection;

/// Solves `quadratic(x) = target` on `bracket`.
///
/// Every step is logged at `trace` level through [`TraceObserver`].
#[must_use]
pub fn solve(quadratic: &Quadratic, target: f64, bracket: [f64; 2], config: &Config) -> Solution {
    let problem = TargetValue::new(target);
    // Both the model and the problem have `Infallible` errors.
    bisection::solve(quadratic, &problem, bracket, config, TraceObserver)
        .expect("quadratic evaluation is infallible")
}
