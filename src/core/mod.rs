//! Core literal types and configuration.
//!
//! This module contains the plain data the rest of the crate operates on:
//! - Input literals, as bare values or models
//! - The provided form, decided once per input
//! - Caller-supplied and resolved accessor options

mod literal;
mod options;

pub use literal::{Literal, LiteralModel, ProvidedForm};
pub use options::{
    AccessorCase, AccessorHyphenReplacement, AccessorOptions, AccessorSpaceReplacement,
    EnumeratedLiteralsOptions, InvalidValueMessage,
};
