//! printf-style value templates and the width synthesis applied to them.
//!
//! A template is literal text around exactly one conversion,
//! `%[flags][width][.precision]verb`, with `%%` standing for a literal
//! percent sign. Supported flags are `-`, `+`, space and `0`; supported verbs
//! are `v` (shortest round-trip decimal), `f`, `e`/`E` and `g`/`G`.
use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Verb;

/// Template used when no format is given.
pub const DEFAULT_FORMAT: &str = "%v";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    pub left: bool,
    pub plus: bool,
    pub space: bool,
    pub zero: bool,
}

/// The single value placeholder of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub flags: Flags,
    pub width: usize,
    pub precision: Option<usize>,
    pub verb: Verb,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    prefix: String,
    conversion: Conversion,
    suffix: String,
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        digits.push(c);
        chars.next();
    }
    digits.parse().ok()
}

impl Template {
    pub fn parse(text: &str) -> Result<Self> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut conversion: Option<Conversion> = None;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            let literal = if conversion.is_some() {
                &mut suffix
            } else {
                &mut prefix
            };
            if c != '%' {
                literal.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                literal.push('%');
                continue;
            }
            if conversion.is_some() {
                return Err(Error::invalid_format(text, "more than one value placeholder"));
            }

            let mut flags = Flags::default();
            while let Some(&flag) = chars.peek() {
                match flag {
                    '-' => flags.left = true,
                    '+' => flags.plus = true,
                    ' ' => flags.space = true,
                    '0' => flags.zero = true,
                    _ => break,
                }
                chars.next();
            }
            let width = take_digits(&mut chars).unwrap_or(0);
            let precision = if chars.peek() == Some(&'.') {
                chars.next();
                Some(take_digits(&mut chars).unwrap_or(0))
            } else {
                None
            };
            let verb = match chars.next() {
                Some(v) => Verb::from_char(v)
                    .ok_or_else(|| Error::invalid_format(text, format!("unsupported verb '{}'", v)))?,
                None => return Err(Error::invalid_format(text, "unterminated value placeholder")),
            };

            conversion = Some(Conversion {
                flags,
                width,
                precision,
                verb,
            });
        }

        let conversion =
            conversion.ok_or_else(|| Error::invalid_format(text, "missing value placeholder"))?;
        Ok(Self {
            prefix,
            conversion,
            suffix,
        })
    }

    /// `%.{precision}f`, the template derived from a fractional step.
    pub fn fixed(precision: usize) -> Self {
        Self {
            prefix: String::new(),
            conversion: Conversion {
                flags: Flags::default(),
                width: 0,
                precision: Some(precision),
                verb: Verb::Fixed,
            },
            suffix: String::new(),
        }
    }

    pub fn conversion(&self) -> &Conversion {
        &self.conversion
    }

    /// Render a value including the literal text around the placeholder.
    pub fn render(&self, value: f64) -> String {
        let mut out = String::with_capacity(self.prefix.len() + self.suffix.len() + 8);
        out.push_str(&self.prefix);
        out.push_str(&self.conversion.render(value));
        out.push_str(&self.suffix);
        out
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.conversion;
        write!(f, "{}%", self.prefix.replace('%', "%%"))?;
        if c.flags.left {
            write!(f, "-")?;
        }
        if c.flags.plus {
            write!(f, "+")?;
        }
        if c.flags.space {
            write!(f, " ")?;
        }
        if c.flags.zero {
            write!(f, "0")?;
        }
        if c.width > 0 {
            write!(f, "{}", c.width)?;
        }
        if let Some(p) = c.precision {
            write!(f, ".{}", p)?;
        }
        write!(f, "{}{}", c.verb, self.suffix.replace('%', "%%"))
    }
}

/// Drop trailing fractional zeros, and the point itself if nothing is left.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Rust's `{:e}` writes `1.5e0`; printf writes `1.5e+00`.
fn exponent_form(magnitude: f64, precision: usize, upper: bool) -> (String, i32) {
    let raw = format!("{:.*e}", precision, magnitude);
    let (mantissa, exp) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let marker = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    (
        format!("{}{}{}{:02}", mantissa, marker, sign, exp.abs()),
        exp,
    )
}

fn general_form(magnitude: f64, precision: usize, upper: bool) -> String {
    let p = precision.max(1);
    let (exp_text, exp) = exponent_form(magnitude, p - 1, upper);
    if exp < -4 || exp >= p as i32 {
        let (mantissa, rest) = exp_text.split_at(exp_text.find(['e', 'E']).unwrap_or(exp_text.len()));
        format!("{}{}", trim_fraction(mantissa), rest)
    } else {
        let decimals = (p as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, magnitude)).to_string()
    }
}

impl Conversion {
    pub fn render(&self, value: f64) -> String {
        let magnitude = value.abs();
        let body = match (self.verb, self.precision) {
            (Verb::Generic, None) => format!("{}", magnitude),
            (Verb::Generic, Some(p)) => general_form(magnitude, p, false),
            (Verb::Fixed, p) => format!("{:.*}", p.unwrap_or(6), magnitude),
            (Verb::Exponent { upper }, p) => exponent_form(magnitude, p.unwrap_or(6), upper).0,
            (Verb::General { upper }, p) => general_form(magnitude, p.unwrap_or(6), upper),
        };
        let sign = if value < 0.0 && body.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
            "-"
        } else if self.flags.plus {
            "+"
        } else if self.flags.space {
            " "
        } else {
            ""
        };

        let len = sign.len() + body.len();
        if len >= self.width {
            return format!("{}{}", sign, body);
        }
        let fill = self.width - len;
        if self.flags.left {
            format!("{}{}{}", sign, body, " ".repeat(fill))
        } else if self.flags.zero {
            format!("{}{}{}", sign, "0".repeat(fill), body)
        } else {
            format!("{}{}{}", " ".repeat(fill), sign, body)
        }
    }
}

/// Give the template an equal-width, zero-filled placeholder when requested.
///
/// The width is the length of the full text `end` renders to through the
/// template with a zero width, literal text included. With `equal_width` off
/// the template is returned untouched and the width is 0.
pub fn synthesize(template: Template, equal_width: bool, end: f64) -> (Template, usize) {
    if !equal_width {
        return (template, 0);
    }

    let mut template = template;
    template.conversion.width = 0;
    let width = template.render(end).chars().count();
    template.conversion.flags.zero = true;
    template.conversion.width = width;

    debug!(template = %template, width, "synthesized equal-width template");
    (template, width)
}
