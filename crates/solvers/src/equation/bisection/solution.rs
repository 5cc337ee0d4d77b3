/// Why the solver stopped after finding a root estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The midpoint residual was within tolerance.
    Residual,

    /// The bracket narrowed to the tolerance.
    BracketWidth,

    /// Reached the iteration limit with the bracket still wider than the tolerance.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Termination {
    /// Returns true if the reported error is within the requested tolerance.
    #[must_use]
    pub fn met_tolerance(self) -> bool {
        matches!(self, Self::Residual | Self::BracketWidth)
    }
}

/// A root estimate and its error bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// Estimate of the root.
    pub x: f64,

    /// Residual magnitude on residual termination, bracket width otherwise.
    pub error: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Number of midpoint evaluations performed.
    pub iters: usize,

    /// What ended the search.
    pub termination: Termination,
}

/// Why bisection could not be applied to a bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoRoot {
    /// A bound residual was NaN.
    NanResidual,

    /// Both bound residuals have the same strict sign.
    NoSignChange,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solution {
    /// A root estimate was produced.
    Found(Root),

    /// The bracket does not guarantee a root.
    NotFound(NoRoot),
}

impl Solution {
    /// Returns the root, if one was found.
    #[must_use]
    pub fn root(&self) -> Option<&Root> {
        match self {
            Self::Found(root) => Some(root),
            Self::NotFound(_) => None,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
