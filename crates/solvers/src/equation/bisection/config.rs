use thiserror::Error;

/// Configuration for the bisection solver.
///
/// `eps` is both the bracket width to stop at and the residual magnitude
/// accepted as a root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    eps: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("eps must be finite and positive")]
    Eps,
}

impl Config {
    /// Default tolerance.
    pub const DEFAULT_EPS: f64 = 1e-6;

    /// Default iteration cap.
    pub const DEFAULT_MAX_ITERS: usize = 10_000;

    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Eps`] if `eps` is NaN, infinite, zero, or negative.
    pub fn new(eps: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ConfigError::Eps);
        }

        Ok(Self { eps, max_iters })
    }

    /// Creates a config with the given tolerance and the default iteration cap.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Eps`] if `eps` is not finite and positive.
    pub fn with_eps(eps: f64) -> Result<Self, ConfigError> {
        Self::new(eps, Self::DEFAULT_MAX_ITERS)
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the maximum number of midpoint evaluations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eps: Self::DEFAULT_EPS,
            max_iters: Self::DEFAULT_MAX_ITERS,
        }
    }
}
