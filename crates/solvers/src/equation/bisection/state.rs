use super::{Bracket, Config, Root, Termination};

/// Outcome of a single bisection step.
#[derive(Debug)]
pub(super) enum Step {
    Continue(State),
    Done(Root),
}

/// Loop state threaded through the bisection iterations.
///
/// `mid` starts at the left bound and `err` at the full bracket width, so a
/// loop that never runs reports the left bound with the initial width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct State {
    bracket: Bracket,
    mid: f64,
    f_mid: f64,
    err: f64,
    iters: usize,
}

impl State {
    pub(super) fn new(bracket: Bracket) -> Self {
        let [f_left, _] = bracket.residuals();
        Self {
            mid: bracket.left(),
            f_mid: f_left,
            err: bracket.width(),
            iters: 0,
            bracket,
        }
    }

    pub(super) fn bracket(&self) -> &Bracket {
        &self.bracket
    }

    pub(super) fn iters(&self) -> usize {
        self.iters
    }

    pub(super) fn midpoint(&self) -> f64 {
        self.bracket.midpoint()
    }

    /// True while the bracket is wider than `eps` and the cap is not reached.
    pub(super) fn is_running(&self, config: &Config) -> bool {
        self.err > config.eps() && self.iters < config.max_iters()
    }

    /// Consumes an evaluated midpoint.
    ///
    /// Finishes on a residual within `eps`, otherwise halves the bracket.
    pub(super) fn advance(mut self, mid: f64, f_mid: f64, eps: f64) -> Step {
        self.mid = mid;
        self.f_mid = f_mid;

        if f_mid.abs() < eps {
            return Step::Done(Root {
                x: mid,
                error: f_mid.abs(),
                residual: f_mid,
                iters: self.iters + 1,
                termination: Termination::Residual,
            });
        }

        self.bracket.shrink(mid, f_mid);
        self.err = self.bracket.width();
        self.iters += 1;
        Step::Continue(self)
    }

    /// Reports the last midpoint once the loop has exited.
    pub(super) fn finish(self, eps: f64) -> Root {
        let termination = if self.err <= eps {
            Termination::BracketWidth
        } else {
            Termination::MaxIters
        };
        self.into_root(termination)
    }

    /// Reports a midpoint the observer stopped on, before it shrinks the bracket.
    pub(super) fn stop(self, mid: f64, f_mid: f64) -> Root {
        Root {
            x: mid,
            error: self.err,
            residual: f_mid,
            iters: self.iters + 1,
            termination: Termination::StoppedByObserver,
        }
    }

    fn into_root(self, termination: Termination) -> Root {
        Root {
            x: self.mid,
            error: self.err,
            residual: self.f_mid,
            iters: self.iters,
            termination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Bracket for `f(x) = x - 0.3` on `[0, 1]`.
    fn linear_state() -> State {
        State::new(Bracket::new([0.0, 1.0], -0.3, 0.7).expect("valid bracket"))
    }

    fn expect_continue(step: Step) -> State {
        match step {
            Step::Continue(state) => state,
            Step::Done(root) => panic!("unexpected finish: {root:?}"),
        }
    }

    #[test]
    fn new_state_reports_left_bound() {
        let root = linear_state().finish(1e-3);

        assert_relative_eq!(root.x, 0.0);
        assert_relative_eq!(root.error, 1.0);
        assert_relative_eq!(root.residual, -0.3);
        assert_eq!(root.iters, 0);
        assert_eq!(root.termination, Termination::MaxIters);
    }

    #[test]
    fn advance_halves_toward_sign_change() {
        let state = linear_state();
        let mid = state.midpoint();
        let state = expect_continue(state.advance(mid, mid - 0.3, 1e-3));

        assert_eq!(state.bracket().as_array(), [0.0, 0.5]);
        assert_relative_eq!(state.err, 0.5);
        assert_eq!(state.iters(), 1);

        let mid = state.midpoint();
        let state = expect_continue(state.advance(mid, mid - 0.3, 1e-3));

        assert_eq!(state.bracket().as_array(), [0.25, 0.5]);
        assert_relative_eq!(state.err, 0.25);
        assert_eq!(state.iters(), 2);
    }

    #[test]
    fn advance_finishes_on_small_residual() {
        let state = linear_state();
        match state.advance(0.5, 1e-4, 1e-3) {
            Step::Done(root) => {
                assert_relative_eq!(root.x, 0.5);
                assert_relative_eq!(root.error, 1e-4);
                assert_eq!(root.iters, 1);
                assert_eq!(root.termination, Termination::Residual);
            }
            Step::Continue(_) => panic!("expected residual termination"),
        }
    }

    #[test]
    fn is_running_respects_width_and_cap() {
        let state = linear_state();
        assert!(state.is_running(&Config::new(0.5, 10).unwrap()));
        assert!(!state.is_running(&Config::new(1.0, 10).unwrap()));
        assert!(!state.is_running(&Config::new(0.5, 0).unwrap()));
    }

    #[test]
    fn finish_tags_bracket_width() {
        let state = linear_state();
        let state = expect_continue(state.advance(0.5, 0.2, 1e-3));
        let root = state.finish(0.5);

        assert_relative_eq!(root.x, 0.5);
        assert_relative_eq!(root.error, 0.5);
        assert_eq!(root.termination, Termination::BracketWidth);
    }

    #[test]
    fn stop_reports_unshrunk_width() {
        let root = linear_state().stop(0.5, 0.2);

        assert_relative_eq!(root.x, 0.5);
        assert_relative_eq!(root.error, 1.0);
        assert_eq!(root.iters, 1);
        assert_eq!(root.termination, Termination::StoppedByObserver);
    }
}
