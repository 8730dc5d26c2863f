//! Omnifest intake and validation for otk.
//!
//! This crate defines the parse layer: YAML document intake (`Omnifest`),
//! the top-level shape and required-key checks, and the parse error
//! taxonomy (`ParseError`). An `Omnifest` is the root document of the
//! toolkit; everything downstream traverses the tree it exposes.

pub mod document;
pub mod error;

pub use document::{Omnifest, VERSION_KEY};
pub use error::ParseError;
