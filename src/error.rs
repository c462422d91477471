// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for method generation.
//!
//! Every failure here is a configuration or model error detected while
//! composing text. Generated Go code never depends on these: its own error
//! paths are part of the emitted bodies.
//!
//! # Isolation
//!
//! Failures are attributed to the field (or struct) that caused them via
//! [`Error::Field`], and the generator collects all of them into a single
//! [`Error::Generation`] so one bad field never hides another.

use std::path::PathBuf;

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while building method descriptors or loading models.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Logical comparison name missing from the operator table.
    #[error("no operation for filter \"{name}\"")]
    UnknownOperator {
        /// Offending logical operation name.
        name: String
    },

    /// Struct or field name that is not a valid identifier.
    #[error("invalid {kind} name {name:?}: expected a non-empty identifier")]
    InvalidIdentifier {
        /// What the name belongs to (`package`, `struct`, `field`).
        kind: &'static str,
        /// The rejected name.
        name: String
    },

    /// Field whose argument name would be a reserved Go word.
    #[error("argument name \"{name}\" is a Go keyword")]
    KeywordArgument {
        /// The reserved argument name.
        name: String
    },

    /// Failure scoped to one field of one struct.
    #[error("{struct_name}.{field}: {source}")]
    Field {
        /// Struct being generated.
        struct_name: String,
        /// Field whose methods failed to build.
        field:       String,
        /// Underlying failure.
        #[source]
        source:      Box<Error>
    },

    /// All failures collected during one generation run.
    #[error("generation failed with {} error(s): {}", .0.len(), join_errors(.0))]
    Generation(Vec<Error>),

    /// Malformed schema document or failed descriptor serialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure while reading a schema or writing output.
    #[error("{}: {source}", .path.display())]
    Io {
        /// Path being read or written.
        path:   PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error
    }
}

impl Error {
    /// Attach struct and field context to an error.
    pub fn in_field(self, struct_name: &str, field: &str) -> Self {
        Self::Field {
            struct_name: struct_name.to_owned(),
            field:       field.to_owned(),
            source:      Box::new(self)
        }
    }
}

fn join_errors(errors: &[Error]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_operator_names_operation() {
        let err = Error::UnknownOperator {
            name: "like".into()
        };
        assert_eq!(err.to_string(), "no operation for filter \"like\"");
    }

    #[test]
    fn field_context_prefixes_message() {
        let err = Error::UnknownOperator {
            name: "between".into()
        }
        .in_field("User", "Age");
        assert_eq!(
            err.to_string(),
            "User.Age: no operation for filter \"between\""
        );
    }

    #[test]
    fn keyword_argument_names_keyword() {
        let err = Error::KeywordArgument {
            name: "type".into()
        };
        assert_eq!(err.to_string(), "argument name \"type\" is a Go keyword");
    }

    #[test]
    fn generation_lists_every_failure() {
        let err = Error::Generation(vec![
            Error::InvalidIdentifier {
                kind: "field",
                name: "".into()
            },
            Error::UnknownOperator {
                name: "like".into()
            },
        ]);
        let message = err.to_string();
        assert!(message.starts_with("generation failed with 2 error(s)"));
        assert!(message.contains("invalid field name \"\""));
        assert!(message.contains("\"like\""));
    }
}
