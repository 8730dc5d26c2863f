pub mod completions;
pub mod tree;
pub mod validate;

use otk_parse::ParseError;
use serde::Serialize;
use std::path::Path;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_SYNTAX_ERROR: u8 = 2;
pub const EXIT_SCHEMA_ERROR: u8 = 3;

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

/// Map a parse failure to its exit code class.
pub fn exit_code_for(err: &ParseError) -> u8 {
    match err {
        ParseError::Syntax(_) => EXIT_SYNTAX_ERROR,
        ParseError::TopLevel { .. } | ParseError::MissingVersionKey(_) => EXIT_SCHEMA_ERROR,
        ParseError::Io(_) => EXIT_FAILURE,
    }
}

/// Short class name for a parse failure, used in JSON verdicts.
pub fn error_class(err: &ParseError) -> &'static str {
    match err {
        ParseError::Syntax(_) => "syntax",
        ParseError::TopLevel { .. } | ParseError::MissingVersionKey(_) => "schema",
        ParseError::Io(_) => "io",
    }
}

/// Machine-readable outcome of an intake run, printed under `--json`.
#[derive(Debug, Serialize)]
pub struct Verdict {
    pub path: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Verdict {
    pub fn ok(path: &Path) -> Self {
        Self {
            path: path.display().to_string(),
            valid: true,
            class: None,
            error: None,
        }
    }

    pub fn fail(path: &Path, err: &ParseError) -> Self {
        Self {
            path: path.display().to_string(),
            valid: false,
            class: Some(error_class(err)),
            error: Some(err.to_string()),
        }
    }
}
