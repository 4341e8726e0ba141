#![doc = r#"
seq — print an arithmetic sequence of numbers.

This crate provides the library behind the `seq` command: positional argument
interpretation (`[start] [step] end`), printf-style value templates with
precision inferred from the step, equal-width zero padding, and emission with
separators and a trailing newline.

Quick start
-----------
```rust
use seq::{sequence_to_string, SequenceParams};

fn main() -> seq::Result<()> {
    let out = sequence_to_string(&["1", "0.5", "3"], &SequenceParams::default())?;
    assert_eq!(out, "1.0\n1.5\n2.0\n2.5\n3.0\n");
    Ok(())
}
```

Equal width and custom separators
---------------------------------
```rust
use seq::{sequence_to_string, SequenceParams};

fn main() -> seq::Result<()> {
    let params = SequenceParams {
        separator: " ".to_string(),
        equal_width: true,
        ..SequenceParams::default()
    };
    let out = sequence_to_string(&["8", "11"], &params)?;
    assert_eq!(out, "08 09 10 11\n");
    Ok(())
}
```

Writing to any sink
-------------------
```rust
use seq::{write_sequence, SequenceParams};

fn main() -> seq::Result<()> {
    let mut sink = Vec::new();
    let count = write_sequence(&mut sink, &["5"], &SequenceParams::default())?;
    assert_eq!(count, 5);
    Ok(())
}
```

Error handling
--------------
All public functions return `seq::Result<T>`. Argument and template problems
are detected before anything is written.

```rust
use seq::{sequence_to_string, Error, SequenceParams};

match sequence_to_string(&["1", "0", "5"], &SequenceParams::default()) {
    Err(Error::ZeroStep) => {}
    other => panic!("unexpected: {:?}", other),
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — interpreter, template synthesis and emitter.
- [`types`] — `Field` and `Verb`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use crate::core::emit::{Values, emit};
pub use crate::core::format::{DEFAULT_FORMAT, Template, synthesize};
pub use crate::core::params::SequenceParams;
pub use crate::core::sequence::SequenceSpec;
pub use error::{Error, Result};
pub use types::{Field, Verb};

pub use api::{sequence_to_string, write_sequence};
