use crate::error::ParseError;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, error};

/// Key that marks a mapping as an omnifest. Every validated [`Omnifest`]
/// contains it at the top level.
pub const VERSION_KEY: &str = "otk.version";

/// The validated root document of the toolkit.
///
/// Wraps the deserialized contents of the bytes that were used to create
/// it. When produced by one of the validated constructors the wrapped
/// value is guaranteed to be a mapping containing [`VERSION_KEY`]; the
/// `_unchecked` constructors skip both checks and make no guarantees.
///
/// The field is private, so an `Omnifest` cannot exist without having
/// passed through either the validated pipeline or an explicit bypass.
#[derive(Debug, Clone, PartialEq)]
pub struct Omnifest {
    tree: Value,
}

impl Omnifest {
    /// Read a YAML file into an `Omnifest`, validating its top-level shape
    /// and required keys.
    ///
    /// The path must exist; that invariant is handled at the calling side
    /// of this function and violating it panics. I/O failures on an
    /// existing path surface as [`ParseError::Io`].
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        debug!("reading yaml from path {}", path.display());
        assert!(path.exists(), "omnifest path to exist");

        Self::from_yaml_bytes(&fs::read(path)?)
    }

    /// Read a YAML file into an `Omnifest` without shape or key checks.
    ///
    /// Same caller contract as [`Omnifest::from_yaml_path`]: the path must
    /// exist.
    pub fn from_yaml_path_unchecked(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        debug!("reading yaml from path {}", path.display());
        assert!(path.exists(), "omnifest path to exist");

        Self::from_yaml_bytes_unchecked(&fs::read(path)?)
    }

    /// Deserialize YAML bytes and validate them as an `Omnifest`.
    ///
    /// Fails with [`ParseError::Syntax`] when the bytes are not valid
    /// YAML, [`ParseError::TopLevel`] when they deserialize to anything
    /// other than a mapping, and [`ParseError::MissingVersionKey`] when
    /// the mapping lacks [`VERSION_KEY`].
    pub fn from_yaml_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        Self::from_value(serde_yaml::from_slice(bytes)?)
    }

    /// Deserialize YAML bytes without shape or key checks. Only a syntax
    /// failure is possible.
    pub fn from_yaml_bytes_unchecked(bytes: &[u8]) -> Result<Self, ParseError> {
        Ok(Self::from_value_unchecked(serde_yaml::from_slice(bytes)?))
    }

    /// Validate an already-deserialized value as an `Omnifest`.
    pub fn from_value(value: Value) -> Result<Self, ParseError> {
        let map = read(value)?;
        ensure(&map)?;
        Ok(Self {
            tree: Value::Mapping(map),
        })
    }

    /// Wrap an already-deserialized value without any checks.
    ///
    /// The caller accepts responsibility for downstream misuse: the result
    /// may wrap a sequence, a scalar, or a mapping without [`VERSION_KEY`].
    pub fn from_value_unchecked(value: Value) -> Self {
        Self { tree: value }
    }

    /// The wrapped tree, by shared reference, for downstream traversal.
    pub fn to_tree(&self) -> &Value {
        &self.tree
    }
}

/// Take any value returned by the deserializer and check that it is
/// something that could represent an omnifest: the top level must be a
/// mapping.
fn read(value: Value) -> Result<Mapping, ParseError> {
    match value {
        Value::Mapping(map) => Ok(map),
        other => {
            error!(
                "data did not deserialize to a mapping: type={}, data={:?}",
                crate::error::value_type_name(&other),
                other
            );
            Err(ParseError::top_level(other))
        }
    }
}

/// Check that a mapping's keys would be considered an omnifest: it must
/// contain [`VERSION_KEY`]. Assumes the mapping already passed [`read`].
fn ensure(map: &Mapping) -> Result<(), ParseError> {
    if !map.contains_key(VERSION_KEY) {
        return Err(ParseError::MissingVersionKey(VERSION_KEY));
    }
    Ok(())
}
