//! Pointer event sources.
//!
//! Scripts and tests can drive a view without a windowing system by
//! writing newline-delimited JSON events to any reader.

pub mod jsonl;
