//! Bisection for scalar equation problems.
//!
//! # Algorithm
//!
//! Bisection needs a bracket `[left, right]` whose residuals differ in sign
//! (or touch zero). Each iteration evaluates the midpoint and keeps the half
//! whose endpoints still show a sign change, until either
//!
//! - the midpoint residual is within `eps` of zero,
//! - the bracket width drops to `eps` or below, or
//! - the iteration cap is reached.
//!
//! The bracket is never reordered: `[right, left]` works as well as
//! `[left, right]` because only residual signs are compared.
//!
//! # Outcomes
//!
//! A bracket with a NaN residual or without a sign change yields
//! [`Solution::NotFound`]. Everything else yields [`Solution::Found`], even
//! when the iteration cap stops the search before the bracket is narrow
//! enough. [`Root::termination`] tells the cases apart.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint evaluation. Observers can
//! return [`Action::StopEarly`] to halt with the current midpoint.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;
mod state;


pub use action::Action;
pub use bracket::Bracket;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{NoRoot, Root, Solution, Termination};

use quadroot_core::{EquationProblem, Model, Observer};

use crate::equation::evaluate;

use state::{State, Step};

/// Finds a root of the equation using the bisection method.
///
/// The observer receives an [`Event`] after every midpoint evaluation.
///
/// # Errors
///
/// Returns an error only if the model or problem fails during evaluation.
/// A bracket that cannot contain a root is reported as [`Solution::NotFound`].
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let [left, right] = bracket;
    let f_left = evaluate(model, problem, [left])?.residual();
    let f_right = evaluate(model, problem, [right])?.residual();

    let bracket = match Bracket::new(bracket, f_left, f_right) {
        Ok(bracket) => bracket,
        Err(reason) => return Ok(Solution::NotFound(reason)),
    };

    let mut state = State::new(bracket);

    while state.is_running(config) {
        let mid = state.midpoint();
        let eval = evaluate(model, problem, [mid])?;
        let f_mid = eval.residual();

        let event = Event {
            iter: state.iters() + 1,
            bracket: state.bracket(),
            eval: &eval,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::Found(state.stop(mid, f_mid)));
        }

        state = match state.advance(mid, f_mid, config.eps()) {
            Step::Continue(next) => next,
            Step::Done(root) => return Ok(Solution::Found(root)),
        };
    }

    Ok(Solution::Found(state.finish(config.eps())))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error only if the model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}
