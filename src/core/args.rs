//! Positional argument interpretation: `[start] [step] end`.
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Field;

/// Numeric bounds resolved from the positional tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub start: f64,
    pub step: f64,
    pub end: f64,
    /// Decimal digits written in a fractional step literal, only set when
    /// the step was given explicitly.
    pub precision: Option<usize>,
}

fn parse_field(token: &str, field: Field) -> Result<f64> {
    match token.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::Parse {
            field,
            token: token.to_string(),
        }),
    }
}

/// Number of decimal digits a numeric literal is written with. Exponents
/// shift the count, so `1e-3` has three and `2.5e1` has none.
pub fn written_precision(literal: &str) -> usize {
    let literal = literal.trim();
    let (mantissa, exponent) = match literal.find(['e', 'E']) {
        Some(i) => (&literal[..i], literal[i + 1..].parse::<i64>().unwrap_or(0)),
        None => (literal, 0),
    };
    let digits = mantissa
        .split_once('.')
        .map(|(_, fraction)| fraction.chars().filter(char::is_ascii_digit).count())
        .unwrap_or(0);
    (digits as i64 - exponent).max(0) as usize
}

/// Map 1 to 3 tokens onto start, step and end, applying the defaults
/// `start = 1` and `step = 1`.
pub fn interpret<S: AsRef<str>>(tokens: &[S]) -> Result<Bounds> {
    let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();

    let (start, step, end) = match tokens.as_slice() {
        [end] => (1.0, 1.0, parse_field(end, Field::End)?),
        [start, end] => (
            parse_field(start, Field::Start)?,
            1.0,
            parse_field(end, Field::End)?,
        ),
        [start, step, end] => {
            let step = parse_field(step, Field::Step)?;
            if step == 0.0 {
                return Err(Error::ZeroStep);
            }
            (
                parse_field(start, Field::Start)?,
                step,
                parse_field(end, Field::End)?,
            )
        }
        other => return Err(Error::ArgumentCount { count: other.len() }),
    };

    if step < 0.0 && start <= end {
        return Err(Error::Divergent { start, step, end });
    }

    let precision = match tokens.as_slice() {
        [_, step_literal, _] if step.fract() != 0.0 => Some(written_precision(step_literal)),
        _ => None,
    };

    debug!(start, step, end, ?precision, "interpreted positional arguments");

    Ok(Bounds {
        start,
        step,
        end,
        precision,
    })
}
