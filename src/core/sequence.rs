use tracing::debug;

use crate::core::args::interpret;
use crate::core::emit::Values;
use crate::core::format::{Template, synthesize};
use crate::core::params::SequenceParams;
use crate::error::Result;

/// Everything needed to emit one sequence, fully resolved before any output.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSpec {
    pub start: f64,
    pub step: f64,
    /// Inclusive upper bound
    pub end: f64,
    pub template: Template,
    pub separator: String,
    pub equal_width: bool,
    /// Padding width derived from the bounds; 0 unless `equal_width`
    pub width: usize,
}

impl SequenceSpec {
    /// Interpret the positional tokens and synthesize the final template.
    pub fn from_args<S: AsRef<str>>(tokens: &[S], params: &SequenceParams) -> Result<Self> {
        let bounds = interpret(tokens)?;

        let template = match bounds.precision {
            Some(precision) if params.has_default_format() => {
                debug!(precision, "using step precision for default format");
                Template::fixed(precision)
            }
            _ => Template::parse(&params.format)?,
        };
        let (template, width) = synthesize(template, params.equal_width, bounds.end);

        Ok(Self {
            start: bounds.start,
            step: bounds.step,
            end: bounds.end,
            template,
            separator: params.separator.clone(),
            equal_width: params.equal_width,
            width,
        })
    }

    pub fn values(&self) -> Values {
        Values::new(self.start, self.step, self.end)
    }
}
