//! High-level library API: build a sequence from positional tokens and write
//! it to any `std::io::Write`, or collect it into a `String`. Prefer these
//! entrypoints over the low-level `core` modules when embedding the crate.
use std::io::Write;

use crate::core::emit::emit;
use crate::core::params::SequenceParams;
use crate::core::sequence::SequenceSpec;
use crate::error::Result;

/// Interpret `tokens` as `[start] [step] end` and write the sequence to `out`.
/// Returns the number of values written.
pub fn write_sequence<W: Write, S: AsRef<str>>(
    out: &mut W,
    tokens: &[S],
    params: &SequenceParams,
) -> Result<usize> {
    let spec = SequenceSpec::from_args(tokens, params)?;
    emit(&spec, out)
}

/// Same as [`write_sequence`], collected into a `String`.
pub fn sequence_to_string<S: AsRef<str>>(tokens: &[S], params: &SequenceParams) -> Result<String> {
    let mut buf = Vec::new();
    write_sequence(&mut buf, tokens, params)?;
    // Templates and separators are UTF-8 strings, so the buffer is too.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
