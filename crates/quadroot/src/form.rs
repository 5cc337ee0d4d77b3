//! Input collection: the seven text fields of the form and their validation.

use std::{fmt, num::ParseFloatError};

use clap::Args;
use thiserror::Error;

use crate::{Config, ConfigError, Quadratic};

/// The raw text of each form field, as typed by the user.
///
/// Every field defaults to empty, so a missing flag is reported like a blank
/// field instead of as a usage error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct RawForm {
    /// Left end of the search interval.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub left: String,

    /// Right end of the search interval.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub right: String,

    /// Constant coefficient.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub a0: String,

    /// Linear coefficient.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub a1: String,

    /// Quadratic coefficient.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub a2: String,

    /// Value the polynomial should equal at the root.
    #[arg(long = "target", visible_alias = "fx", default_value = "", allow_hyphen_values = true)]
    pub target: String,

    /// Tolerance on both the bracket width and the residual.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub eps: String,
}

/// Identifies a form field in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Left,
    Right,
    A0,
    A1,
    A2,
    Target,
    Eps,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::A0 => "a0",
            Self::A1 => "a1",
            Self::A2 => "a2",
            Self::Target => "target",
            Self::Eps => "eps",
        };
        f.write_str(name)
    }
}

/// Reasons a form is rejected before the solver runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{field} is empty")]
    Missing { field: Field },

    #[error("{field} is not a number: {text:?}")]
    Unparsable {
        field: Field,
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("{field} must be finite")]
    NonFinite { field: Field },

    #[error("invalid tolerance: {0}")]
    Config(#[from] ConfigError),
}

/// A validated form, ready to hand to [`solve`](crate::solve).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormInput {
    pub quadratic: Quadratic,
    pub target: f64,
    pub bracket: [f64; 2],
    pub config: Config,
}

impl FormInput {
    /// Parses every field and validates the tolerance.
    ///
    /// Fields are checked in form order (`left`, `right`, `a0`, `a1`, `a2`,
    /// `target`, `eps`), and the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] if a field is empty, unparsable, or not finite,
    /// or if `eps` is not positive.
    pub fn parse(raw: &RawForm, max_iters: usize) -> Result<Self, FormError> {
        let left = parse_field(Field::Left, &raw.left)?;
        let right = parse_field(Field::Right, &raw.right)?;
        let a0 = parse_field(Field::A0, &raw.a0)?;
        let a1 = parse_field(Field::A1, &raw.a1)?;
        let a2 = parse_field(Field::A2, &raw.a2)?;
        let target = parse_field(Field::Target, &raw.target)?;
        let eps = parse_field(Field::Eps, &raw.eps)?;

        Ok(Self {
            quadratic: Quadratic::new(a0, a1, a2),
            target,
            bracket: [left, right],
            config: Config::new(eps, max_iters)?,
        })
    }
}

/// Parses one trimmed field into a finite number.
fn parse_field(field: Field, text: &str) -> Result<f64, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FormError::Missing { field });
    }

    let value: f64 = text.parse().map_err(|source| FormError::Unparsable {
        field,
        text: text.to_owned(),
        source,
    })?;

    if !value.is_finite() {
        return Err(FormError::NonFinite { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn raw(fields: [&str; 7]) -> RawForm {
        let [left, right, a0, a1, a2, target, eps] = fields.map(str::to_owned);
        RawForm {
            left,
            right,
            a0,
            a1,
            a2,
            target,
            eps,
        }
    }

    #[test]
    fn parses_trimmed_fields() {
        let form = raw([" 0", "3 ", "0", "0", "1", "4", "1e-6"]);
        let input = FormInput::parse(&form, 10_000).expect("valid form");

        assert_eq!(input.bracket, [0.0, 3.0]);
        assert_eq!(input.quadratic, Quadratic::new(0.0, 0.0, 1.0));
        assert_relative_eq!(input.target, 4.0);
        assert_relative_eq!(input.config.eps(), 1e-6);
        assert_eq!(input.config.max_iters(), 10_000);
    }

    #[test]
    fn accepts_negative_values() {
        let input = FormInput::parse(&raw(["-1", "1", "-0.5", "0", "0", "-2", "0.01"]), 50)
            .expect("valid form");
        assert_eq!(input.bracket, [-1.0, 1.0]);
        assert_relative_eq!(input.quadratic.a0, -0.5);
        assert_relative_eq!(input.target, -2.0);
    }

    #[test]
    fn rejects_blank_field() {
        let err = FormInput::parse(&raw(["0", "   ", "0", "0", "1", "4", "1e-6"]), 10).unwrap_err();
        assert_eq!(err, FormError::Missing { field: Field::Right });
    }

    #[test]
    fn rejects_unparsable_field() {
        let err = FormInput::parse(&raw(["0", "3", "0", "zero", "1", "4", "1e-6"]), 10).unwrap_err();
        assert!(matches!(
            err,
            FormError::Unparsable { field: Field::A1, ref text, .. } if text == "zero"
        ));
    }

    #[test]
    fn rejects_non_finite_field() {
        let err = FormInput::parse(&raw(["0", "3", "NaN", "0", "1", "4", "1e-6"]), 10).unwrap_err();
        assert_eq!(err, FormError::NonFinite { field: Field::A0 });

        let err = FormInput::parse(&raw(["0", "inf", "0", "0", "1", "4", "1e-6"]), 10).unwrap_err();
        assert_eq!(err, FormError::NonFinite { field: Field::Right });
    }

    #[test]
    fn rejects_non_positive_eps() {
        let err = FormInput::parse(&raw(["0", "3", "0", "0", "1", "4", "0"]), 10).unwrap_err();
        assert_eq!(err, FormError::Config(ConfigError::Eps));

        let err = FormInput::parse(&raw(["0", "3", "0", "0", "1", "4", "-1e-3"]), 10).unwrap_err();
        assert_eq!(err, FormError::Config(ConfigError::Eps));
    }

    #[test]
    fn reports_first_bad_field() {
        let err = FormInput::parse(&raw(["", "", "", "", "", "", ""]), 10).unwrap_err();
        assert_eq!(err, FormError::Missing { field: Field::Left });
    }

    #[test]
    fn omitted_flags_parse_as_blank_fields() {
        use clap::Parser;

        #[derive(Parser)]
        struct Cli {
            #[command(flatten)]
            form: RawForm,
        }

        let cli = Cli::try_parse_from(["quadroot", "--left", "0", "--right", "3"])
            .expect("omitted fields are not a usage error");
        assert_eq!(cli.form.a0, "");

        let err = FormInput::parse(&cli.form, 10).unwrap_err();
        assert_eq!(err, FormError::Missing { field: Field::A0 });
    }

    #[test]
    fn messages_name_the_field() {
        let err = FormError::Missing { field: Field::Eps };
        assert_eq!(err.to_string(), "eps is empty");
    }
}
