//! Output presentation for solver outcomes.
//!
//! A found root is shown with `x` to six decimal places and the error to six
//! significant digits (`%g` style). Missing roots and rejected input get fixed
//! notices, so the exact validation failure is only visible in the logs.

use clap::ValueEnum;
use serde::Serialize;

use crate::{Root, Solution, Termination};

/// Notice shown when the interval does not bracket a root.
pub const NO_ROOT_NOTICE: &str = "no root in the given interval";

/// Notice shown when a field is missing, unparsable, or out of range.
pub const INVALID_INPUT_NOTICE: &str = "invalid input";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Everything the user can be shown after pressing "compute".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    Found {
        x: f64,
        error: f64,
        residual: f64,
        iterations: usize,
        termination: &'static str,
    },
    NotFound,
    InvalidInput,
}

impl Report {
    #[must_use]
    pub fn from_solution(solution: &Solution) -> Self {
        match solution {
            Solution::Found(root) => Self::found(root),
            Solution::NotFound(_) => Self::NotFound,
        }
    }

    fn found(root: &Root) -> Self {
        Self::Found {
            x: root.x,
            error: root.error,
            residual: root.residual,
            iterations: root.iters,
            termination: termination_name(root.termination),
        }
    }

    /// Renders the report in the requested format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }

    fn to_text(&self) -> String {
        match self {
            Self::Found { x, error, .. } => {
                format!("x = {}\nerror = {}", format_fixed(*x), format_general(*error, 6))
            }
            Self::NotFound => NO_ROOT_NOTICE.to_owned(),
            Self::InvalidInput => INVALID_INPUT_NOTICE.to_owned(),
        }
    }
}

fn termination_name(termination: Termination) -> &'static str {
    match termination {
        Termination::Residual => "residual",
        Termination::BracketWidth => "bracket_width",
        Termination::MaxIters => "max_iters",
        Termination::StoppedByObserver => "stopped_by_observer",
    }
}

/// Formats `value` with six digits after the decimal point.
///
/// Ties round away from zero, so `format_fixed(0.0078125)` is `"0.007813"`.
#[must_use]
pub fn format_fixed(value: f64) -> String {
    let Some(digits) = Digits::of(value) else {
        return format!("{value:.6}");
    };
    with_sign(value, &digits.round_at(-6).fixed(6))
}

/// Formats `value` with `precision` significant digits, `%g` style.
///
/// After rounding, magnitudes in `[1e-4, 10^precision)` are written in
/// decimal notation, everything else in scientific notation with a signed
/// exponent of at least two digits. Trailing zeros are kept, so
/// `format_general(0.5, 6)` is `"0.500000"` and `format_general(1e-7, 6)` is
/// `"1.00000e-07"`. Ties round away from zero.
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    let Some(digits) = Digits::of(value) else {
        return if value == 0.0 {
            format!("{value:.prec$}", prec = precision - 1)
        } else {
            value.to_string()
        };
    };
    let Ok(significant) = i32::try_from(precision) else {
        return value.to_string();
    };

    let lowest = digits.exponent - (significant - 1);
    let digits = digits.round_at(lowest);
    let text = if (-4..significant).contains(&digits.exponent) {
        // In range, so this is never negative.
        let decimals = (significant - 1 - digits.exponent).unsigned_abs() as usize;
        digits.fixed(decimals)
    } else {
        digits.scientific(precision)
    };
    with_sign(value, &text)
}

fn with_sign(value: f64, magnitude: &str) -> String {
    if value.is_sign_negative() {
        format!("-{magnitude}")
    } else {
        magnitude.to_owned()
    }
}

/// Decimal digits of a finite, non-zero magnitude.
///
/// `digits[i]` is the digit at `10^(exponent - i)`. The digits start out as
/// the shortest representation that round-trips to the same `f64`, which is
/// what gets rounded, so `0.0078125` rounds to `0.007813` at six decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Digits {
    digits: Vec<u8>,
    exponent: i32,
}

impl Digits {
    fn of(value: f64) -> Option<Self> {
        if !value.is_finite() || value == 0.0 {
            return None;
        }

        let text = format!("{:e}", value.abs());
        let (mantissa, exponent) = text.split_once('e')?;
        Some(Self {
            digits: mantissa
                .bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0')
                .collect(),
            exponent: exponent.parse().ok()?,
        })
    }

    /// Rounds half up to the digit at `10^lowest`.
    ///
    /// A carry out of the leading digit bumps the exponent. Rounding below
    /// the first half unit leaves no digits, which reads as zero.
    fn round_at(mut self, lowest: i32) -> Self {
        let Ok(keep) = usize::try_from(self.exponent - lowest + 1) else {
            self.digits.clear();
            return self;
        };
        if keep >= self.digits.len() {
            return self;
        }

        let round_up = self.digits[keep] >= 5;
        self.digits.truncate(keep);
        if round_up {
            self.carry();
        }
        self
    }

    fn carry(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                return;
            }
        }
        self.digits.insert(0, 1);
        self.exponent += 1;
    }

    /// Digit at `10^power`, zero outside the stored digits.
    fn at(&self, power: i32) -> u8 {
        usize::try_from(self.exponent - power)
            .ok()
            .and_then(|i| self.digits.get(i).copied())
            .unwrap_or(0)
    }

    fn fixed(&self, decimals: usize) -> String {
        let lowest = -i32::try_from(decimals).unwrap_or(i32::MAX);
        let mut text: String = (0..=self.exponent.max(0))
            .rev()
            .map(|power| char::from(b'0' + self.at(power)))
            .collect();
        if decimals > 0 {
            text.push('.');
            text.extend((lowest..0).rev().map(|power| char::from(b'0' + self.at(power))));
        }
        text
    }

    fn scientific(&self, precision: usize) -> String {
        let mut text = String::with_capacity(precision + 5);
        for (i, power) in (0..precision).zip((i32::MIN..=self.exponent).rev()) {
            text.push(char::from(b'0' + self.at(power)));
            if i == 0 && precision > 1 {
                text.push('.');
            }
        }
        let sign = if self.exponent < 0 { '-' } else { '+' };
        format!("{text}e{sign}{:02}", self.exponent.unsigned_abs())
    }
}
