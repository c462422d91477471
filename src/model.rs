// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model definitions consumed by the generator.
//!
//! A model scanner describes each Go struct by name and its fields by name
//! and declared type. The JSON form is:
//!
//! ```json
//! {
//!   "package": "models",
//!   "structs": [
//!     {
//!       "name": "User",
//!       "fields": [
//!         { "name": "ID", "type": "uint" },
//!         { "name": "Name", "type": "string" },
//!         { "name": "DeletedAt", "type": "*time.Time" },
//!         { "name": "Books", "type": "[]Book" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! # Data Structures
//!
//! ```text
//! Schema
//! ├── package: String
//! ├── options: GeneratorConfig
//! └── structs: Vec<StructDef>
//!     └── StructDef
//!         ├── name: String      (e.g., "User")
//!         └── fields: Vec<FieldDef>
//!             └── FieldDef
//!                 ├── name: String          (e.g., "UserID")
//!                 ├── type_name: String     (e.g., "*time.Time")
//!                 └── kind: Option<FieldKind>
//! ```

use std::{fs, path::Path};

use serde::Deserialize;
use syn::{Ident, ext::IdentExt, parse::Parser};

use crate::{
    config::GeneratorConfig,
    error::{Error, Result}
};

/// Go types that support ordering comparisons.
const ORDERED_TYPES: &[&str] = &[
    "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32", "uint64",
    "float32", "float64", "byte", "rune", "time.Time"
];

/// A scanned package: the unit written to one output file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    /// Go package of the generated file.
    pub package: String,

    /// Generator options.
    #[serde(default)]
    pub options: GeneratorConfig,

    /// Structs to generate query sets for, in output order.
    pub structs: Vec<StructDef>
}

impl Schema {
    /// Parse a schema document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a schema document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source
        })?;
        Self::from_json(&json)
    }
}

/// A model struct.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructDef {
    /// Struct name (e.g., `User`).
    pub name:   String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>
}

impl StructDef {
    /// Create a struct definition.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields
        }
    }
}

/// A struct field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    /// Field name in model casing (e.g., `UserID`).
    pub name: String,

    /// Declared Go type (e.g., `string`, `*time.Time`, `[]Book`).
    #[serde(rename = "type")]
    pub type_name: String,

    /// Explicit classification, overriding inference from the type.
    #[serde(default)]
    pub kind: Option<FieldKind>
}

/// How a field takes part in generated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Plain column: filters and ordering.
    Scalar,
    /// Pointer column: filters, ordering and null checks.
    Nullable,
    /// Association to another model: preloading only.
    Relation,
    /// Nothing is generated.
    Unsupported
}

impl FieldDef {
    /// Create a field with an inferred kind.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name:      name.into(),
            type_name: type_name.into(),
            kind:      None
        }
    }

    /// Classification, explicit or inferred from the declared type.
    ///
    /// | Type | Kind |
    /// |------|------|
    /// | `Book`, `*Book`, `[]Book`, `[]*Book` | `Relation` |
    /// | `*string`, `*time.Time` | `Nullable` |
    /// | `[]byte` | `Scalar` |
    /// | `[]string`, `map[string]int` | `Unsupported` |
    /// | anything else | `Scalar` |
    pub fn kind(&self) -> FieldKind {
        self.kind.unwrap_or_else(|| infer_kind(self.type_name.trim()))
    }

    /// Argument type for comparison filters; pointers compare by element.
    pub fn filter_type(&self) -> &str {
        let ty = self.type_name.trim();
        ty.strip_prefix('*').unwrap_or(ty)
    }

    /// Whether `<`, `<=`, `>`, `>=` apply to this field.
    pub fn is_ordered(&self) -> bool {
        ORDERED_TYPES.contains(&self.filter_type())
    }
}

fn infer_kind(ty: &str) -> FieldKind {
    if let Some(elem) = ty.strip_prefix("[]") {
        let elem = elem.trim_start_matches('*');
        return if is_model_type(elem) {
            FieldKind::Relation
        } else if matches!(elem, "byte" | "uint8") {
            FieldKind::Scalar
        } else {
            FieldKind::Unsupported
        };
    }

    if ["map[", "chan ", "func", "interface"]
        .iter()
        .any(|prefix| ty.starts_with(prefix))
    {
        return FieldKind::Unsupported;
    }

    match ty.strip_prefix('*') {
        Some(elem) if is_model_type(elem) => FieldKind::Relation,
        Some(_) => FieldKind::Nullable,
        None if is_model_type(ty) => FieldKind::Relation,
        None => FieldKind::Scalar
    }
}

/// Unqualified exported identifier, i.e. a struct of the same package.
fn is_model_type(ty: &str) -> bool {
    ty.chars().next().is_some_and(char::is_uppercase)
        && ty.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Check that `name` is a plain, non-empty identifier.
///
/// # Errors
///
/// Returns [`Error::InvalidIdentifier`] tagged with `kind` otherwise.
pub fn validate_identifier(kind: &'static str, name: &str) -> Result<()> {
    match Ident::parse_any.parse_str(name) {
        Ok(ident) if ident == name && !name.starts_with("r#") => Ok(()),
        _ => Err(Error::InvalidIdentifier {
            kind,
            name: name.to_owned()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_field_kinds() {
        let cases = [
            ("string", FieldKind::Scalar),
            ("time.Time", FieldKind::Scalar),
            ("[]byte", FieldKind::Scalar),
            ("*time.Time", FieldKind::Nullable),
            ("*string", FieldKind::Nullable),
            ("Profile", FieldKind::Relation),
            ("*Profile", FieldKind::Relation),
            ("[]Book", FieldKind::Relation),
            ("[]*Book", FieldKind::Relation),
            ("[]string", FieldKind::Unsupported),
            ("map[string]int", FieldKind::Unsupported),
        ];
        for (ty, expected) in cases {
            assert_eq!(FieldDef::new("F", ty).kind(), expected, "{ty}");
        }
    }

    #[test]
    fn explicit_kind_wins() {
        let field: FieldDef =
            serde_json::from_str(r#"{"name": "Status", "type": "Status", "kind": "scalar"}"#)
                .unwrap();
        assert_eq!(field.kind(), FieldKind::Scalar);
    }

    #[test]
    fn filter_type_strips_pointer() {
        assert_eq!(FieldDef::new("DeletedAt", "*time.Time").filter_type(), "time.Time");
        assert_eq!(FieldDef::new("Name", "string").filter_type(), "string");
    }

    #[test]
    fn ordering_follows_element_type() {
        assert!(FieldDef::new("Age", "int").is_ordered());
        assert!(FieldDef::new("DeletedAt", "*time.Time").is_ordered());
        assert!(!FieldDef::new("Name", "string").is_ordered());
        assert!(!FieldDef::new("Active", "bool").is_ordered());
    }

    #[test]
    fn validates_identifiers() {
        assert!(validate_identifier("field", "UserID").is_ok());
        assert!(validate_identifier("field", "type").is_ok());
        assert!(validate_identifier("field", "").is_err());
        assert!(validate_identifier("field", "First Name").is_err());
        assert!(validate_identifier("field", " Name").is_err());
        assert!(validate_identifier("field", "1st").is_err());
        assert!(validate_identifier("field", "r#type").is_err());
    }

    #[test]
    fn parses_schema_document() {
        let schema = Schema::from_json(
            r#"{
                "package": "models",
                "structs": [
                    { "name": "User", "fields": [ { "name": "Name", "type": "string" } ] }
                ]
            }"#
        )
        .unwrap();
        assert_eq!(schema.package, "models");
        assert_eq!(schema.options, GeneratorConfig::default());
        assert_eq!(schema.structs[0].fields[0], FieldDef::new("Name", "string"));
    }

    #[test]
    fn malformed_schema_is_json_error() {
        let err = Schema::from_json(r#"{"package": "models"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Schema::load(Path::new("/nonexistent/schema.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
