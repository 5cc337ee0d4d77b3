use quadroot_core::Observer;
use quadroot_solvers::equation::bisection::{Action, Event};
use tracing::trace;

/// Observer that logs each bisection step at `trace` level and never intervenes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceObserver;

impl<I, O> Observer<Event<'_, I, O>, Action> for TraceObserver {
    fn observe(&mut self, event: &Event<'_, I, O>) -> Option<Action> {
        let [left, right] = event.bracket.as_array();
        trace!(
            iter = event.iter,
            left,
            right,
            x = event.x(),
            residual = event.residual(),
            "bisection step"
        );
        None
    }
}
