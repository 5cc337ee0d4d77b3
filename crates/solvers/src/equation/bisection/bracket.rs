use super::NoRoot;

/// Current bracket bounds and their residuals.
///
/// The bounds keep the order they were given in, so `left > right` is allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
    f_left: f64,
    f_right: f64,
}

impl Bracket {
    /// Creates a bracket from its bounds and their residuals.
    ///
    /// # Errors
    ///
    /// Returns [`NoRoot::NanResidual`] if either residual is NaN and
    /// [`NoRoot::NoSignChange`] if the residuals share a strict sign.
    pub(super) fn new(bounds: [f64; 2], f_left: f64, f_right: f64) -> Result<Self, NoRoot> {
        if f_left.is_nan() || f_right.is_nan() {
            return Err(NoRoot::NanResidual);
        }

        if f_left * f_right > 0.0 {
            return Err(NoRoot::NoSignChange);
        }

        let [left, right] = bounds;
        Ok(Self {
            left,
            right,
            f_left,
            f_right,
        })
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the residuals at the bounds as an array.
    #[must_use]
    pub fn residuals(&self) -> [f64; 2] {
        [self.f_left, self.f_right]
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns the absolute bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.right - self.left).abs()
    }

    /// Replaces one bound with `x` so the sign change is kept.
    ///
    /// The left half wins whenever `f_left * f_x <= 0`.
    pub(super) fn shrink(&mut self, x: f64, f_x: f64) {
        if self.f_left * f_x <= 0.0 {
            self.right = x;
            self.f_right = f_x;
        } else {
            self.left = x;
            self.f_left = f_x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_same_sign() {
        assert_eq!(
            Bracket::new([0.0, 1.0], 2.0, 3.0),
            Err(NoRoot::NoSignChange)
        );
        assert_eq!(
            Bracket::new([0.0, 1.0], -2.0, -3.0),
            Err(NoRoot::NoSignChange)
        );
    }

    #[test]
    fn rejects_nan_residual() {
        assert_eq!(
            Bracket::new([0.0, 1.0], f64::NAN, -1.0),
            Err(NoRoot::NanResidual)
        );
        assert_eq!(
            Bracket::new([0.0, 1.0], 1.0, f64::NAN),
            Err(NoRoot::NanResidual)
        );
    }

    #[test]
    fn accepts_zero_residual_at_bound() {
        assert!(Bracket::new([0.0, 1.0], 0.0, 5.0).is_ok());
        assert!(Bracket::new([0.0, 1.0], 5.0, 0.0).is_ok());
    }

    #[test]
    fn keeps_reversed_order() {
        let bracket = Bracket::new([3.0, 1.0], 1.0, -1.0).expect("valid bracket");
        assert_eq!(bracket.as_array(), [3.0, 1.0]);
        assert_relative_eq!(bracket.width(), 2.0);
        assert_relative_eq!(bracket.midpoint(), 2.0);
    }

    #[test]
    fn shrink_keeps_sign_change() {
        let mut bracket = Bracket::new([0.0, 2.0], -1.0, 1.0).expect("valid bracket");

        bracket.shrink(1.0, -0.5);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);
        assert_eq!(bracket.residuals(), [-0.5, 1.0]);

        bracket.shrink(1.5, 0.25);
        assert_eq!(bracket.as_array(), [1.0, 1.5]);
        assert_eq!(bracket.residuals(), [-0.5, 0.25]);
    }

    #[test]
    fn shrink_zero_residual_moves_right() {
        let mut bracket = Bracket::new([0.0, 2.0], -1.0, 1.0).expect("valid bracket");
        bracket.shrink(1.0, 0.0);
        assert_eq!(bracket.as_array(), [0.0, 1.0]);
    }
}
