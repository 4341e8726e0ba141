//! Core building blocks: argument interpretation, template synthesis and
//! emission, plus the `SequenceSpec` they populate. These are internal
//! primitives consumed by the high-level `api` module.
pub mod args;
pub mod emit;
pub mod format;
pub mod params;
pub mod sequence;
