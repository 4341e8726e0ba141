//! Sequence emission: value stepping, separators and the trailing newline.
use std::io::Write;

use tracing::debug;

use crate::core::sequence::SequenceSpec;
use crate::error::Result;

/// Ascending values `start + i * step` up to and including `end`.
///
/// Each value is computed from its index rather than by repeated addition,
/// so rounding error does not accumulate. A step too small to change `start`
/// still repeats the same value indefinitely.
#[derive(Debug, Clone)]
pub struct Values {
    start: f64,
    step: f64,
    end: f64,
    index: u64,
}

impl Values {
    pub fn new(start: f64, step: f64, end: f64) -> Self {
        Self {
            start,
            step,
            end,
            index: 0,
        }
    }
}

impl Iterator for Values {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = self.start + self.index as f64 * self.step;
        if value <= self.end {
            self.index += 1;
            Some(value)
        } else {
            None
        }
    }
}

/// Write the sequence to `out` and return how many values were written.
///
/// The separator goes strictly between values; a single `'\n'` always ends
/// the output, even when no value is in range.
pub fn emit<W: Write>(spec: &SequenceSpec, out: &mut W) -> Result<usize> {
    let mut count = 0;
    for value in spec.values() {
        if count > 0 {
            out.write_all(spec.separator.as_bytes())?;
        }
        out.write_all(spec.template.render(value).as_bytes())?;
        count += 1;
    }
    out.write_all(b"\n")?;

    debug!(count, "sequence emitted");
    Ok(count)
}
