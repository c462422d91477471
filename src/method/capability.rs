// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Capability strategies.
//!
//! Each type here answers exactly one slice of a method declaration. Recipes
//! hold the strategies they need and delegate to them, so overriding a
//! default means holding a different value, never shadowing a method.
//!
//! | Capability | Answers |
//! |------------|---------|
//! | [`Receiver`] | receiver declaration |
//! | [`FieldNaming`] | method name for field-keyed methods |
//! | [`Args`] | argument list |
//! | [`Returns`] | return values |
//! | [`Doc`] | doc comment |
//! | [`TargetCall`] | ORM method the body delegates to |

use crate::utils::naming::capitalize_first;

/// Explicit receiver declaration.
///
/// Empty means the emitter binds the standard query-set receiver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Receiver {
    declaration: String
}

impl Receiver {
    /// Use the emitter's default query-set receiver.
    pub fn query_set() -> Self {
        Self::default()
    }

    /// Bind an explicit receiver, e.g. `o *User`.
    pub fn explicit(declaration: impl Into<String>) -> Self {
        Self {
            declaration: declaration.into()
        }
    }

    /// Receiver declaration text, possibly empty.
    pub fn declaration(&self) -> &str {
        &self.declaration
    }
}

/// Order of the parts in a field-keyed method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrder {
    /// `NameEq`, `DeletedAtIsNull`.
    FieldFirst,
    /// `PreloadBooks`, `OrderByName`.
    OperationFirst
}

/// Method naming for operations keyed by a struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNaming {
    operation: String,
    field:     String,
    order:     NameOrder
}

impl FieldNaming {
    /// Create naming for `operation` applied to `field`.
    pub fn new(operation: impl Into<String>, field: impl Into<String>, order: NameOrder) -> Self {
        Self {
            operation: operation.into(),
            field:     field.into(),
            order
        }
    }

    /// Logical operation name as supplied (`eq`, `Preload`).
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Field name in model casing.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Composed method name with the operation capitalized.
    pub fn render(&self) -> String {
        let operation = capitalize_first(&self.operation);
        match self.order {
            NameOrder::FieldFirst => format!("{}{}", self.field, operation),
            NameOrder::OperationFirst => format!("{}{}", operation, self.field)
        }
    }
}

/// A single named, typed argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    /// Argument name.
    pub name:      String,
    /// Go type of the argument.
    pub type_name: String
}

impl Arg {
    /// Create an argument.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name:      name.into(),
            type_name: type_name.into()
        }
    }
}

/// Argument list of a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Args {
    /// `()`
    None,
    /// `(<name> <type>)`
    One(Arg)
}

impl Args {
    /// Declaration text placed between the parentheses.
    pub fn declaration(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::One(arg) => format!("{} {}", arg.name, arg.type_name)
        }
    }

    /// Name of the single argument, if any.
    pub fn arg_name(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::One(arg) => Some(&arg.name)
        }
    }
}

/// Return values of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Returns {
    /// The enclosing query-set type, enabling chaining.
    QuerySet,
    /// Plain `error`, regardless of the query-set type.
    Error
}

impl Returns {
    /// Declaration text for the given query-set type.
    pub fn declaration(self, qs_type_name: &str) -> String {
        match self {
            Self::QuerySet => qs_type_name.to_owned(),
            Self::Error => "error".to_owned()
        }
    }
}

/// Documentation comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Doc {
    text: Option<String>
}

impl Doc {
    /// Standard comment derived from the method name.
    pub fn autogenerated() -> Self {
        Self::default()
    }

    /// Verbatim comment text, including `//` markers.
    pub fn explicit(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into())
        }
    }

    /// Build from an optional override.
    pub fn from_override(text: Option<String>) -> Self {
        Self {
            text
        }
    }

    /// Comment text for a method rendered as `method_name`.
    pub fn render(&self, method_name: &str) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None => format!("// {method_name} is an autogenerated method\n// nolint: dupl")
        }
    }
}

/// ORM method a generated body delegates to.
///
/// Defaults to the logical method name; `OrderBy` maps to `Order`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCall {
    name: String
}

impl TargetCall {
    /// Delegate to `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into()
        }
    }

    /// ORM method name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naming_respects_order() {
        let preload = FieldNaming::new("Preload", "Books", NameOrder::OperationFirst);
        assert_eq!(preload.render(), "PreloadBooks");

        let eq = FieldNaming::new("eq", "Name", NameOrder::FieldFirst);
        assert_eq!(eq.render(), "NameEq");
    }

    #[test]
    fn receiver_defaults_to_empty() {
        assert_eq!(Receiver::query_set().declaration(), "");
        assert_eq!(Receiver::explicit("o *User").declaration(), "o *User");
    }

    #[test]
    fn args_declarations() {
        assert_eq!(Args::None.declaration(), "");
        assert_eq!(Args::None.arg_name(), None);

        let one = Args::One(Arg::new("name", "string"));
        assert_eq!(one.declaration(), "name string");
        assert_eq!(one.arg_name(), Some("name"));
    }

    #[test]
    fn returns_ignore_qs_type_for_error() {
        assert_eq!(Returns::QuerySet.declaration("UserQuerySet"), "UserQuerySet");
        assert_eq!(Returns::Error.declaration("UserQuerySet"), "error");
    }

    #[test]
    fn doc_falls_back_to_autogenerated() {
        let doc = Doc::autogenerated().render("NameEq");
        assert_eq!(doc, "// NameEq is an autogenerated method\n// nolint: dupl");
    }

    #[test]
    fn explicit_doc_wins() {
        let doc = Doc::explicit("// Custom").render("NameEq");
        assert_eq!(doc, "// Custom");
    }
}
