// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Go source emission.
//!
//! Turns rendered descriptors into a gofmt-compatible file:
//!
//! ```text
//! // Code generated by queryset-gen. DO NOT EDIT.
//!
//! package models
//!
//! import (
//!     "fmt"
//!
//!     "github.com/jinzhu/gorm"
//! )
//!
//! // UserQuerySet is a queryset type for User
//! type UserQuerySet struct {
//!     db *gorm.DB
//! }
//!
//! // NewUserQuerySet constructs new UserQuerySet
//! func NewUserQuerySet(db *gorm.DB) UserQuerySet { ... }
//!
//! // NameEq is an autogenerated method
//! // nolint: dupl
//! func (qs UserQuerySet) NameEq(name string) UserQuerySet { ... }
//! ```

use serde::Serialize;
use tracing::debug;

use crate::{
    error::Result,
    generator::GeneratedStruct,
    method::RenderedMethod,
    utils::template::DB_HANDLE_TYPE
};

/// First line of every generated file.
pub const GENERATED_MARKER: &str = "// Code generated by queryset-gen. DO NOT EDIT.";

/// Import path of the ORM package.
const ORM_IMPORT: &str = "github.com/jinzhu/gorm";

/// Receiver bound when a method leaves its declaration empty.
pub fn default_receiver(qs_type_name: &str) -> String {
    format!("qs {qs_type_name}")
}

/// Render one method as a Go function declaration.
pub fn render_method(method: &RenderedMethod, default_receiver: &str) -> String {
    let receiver = if method.receiver.is_empty() {
        default_receiver
    } else {
        &method.receiver
    };
    let returns = if method.returns.is_empty() {
        String::new()
    } else {
        format!(" {}", method.returns)
    };

    let mut out = String::new();
    if !method.doc.is_empty() {
        out.push_str(&method.doc);
        out.push('\n');
    }
    out.push_str(&format!(
        "func ({receiver}) {}({}){returns} {{\n",
        method.name, method.args
    ));
    out.push_str(&indent(&method.body));
    out.push_str("}\n");
    out
}

/// Render the query-set type, its constructor and all its methods.
pub fn render_query_set(generated: &GeneratedStruct) -> String {
    let qs = &generated.query_set_name;
    let model = &generated.struct_name;
    let receiver = default_receiver(qs);

    let mut sections = vec![format!(
        "// {qs} is a queryset type for {model}\n\
         type {qs} struct {{\n\tdb {DB_HANDLE_TYPE}\n}}\n\n\
         // New{qs} constructs new {qs}\n\
         func New{qs}(db {DB_HANDLE_TYPE}) {qs} {{\n\treturn {qs}{{\n\t\tdb: db.Model(&{model}{{}}),\n\t}}\n}}\n"
    )];
    sections.extend(
        generated
            .rendered()
            .iter()
            .map(|method| render_method(method, &receiver))
    );
    sections.join("\n")
}

/// Render a complete Go file for `package`.
pub fn render_file(package: &str, structs: &[GeneratedStruct]) -> String {
    let query_sets: Vec<String> = structs.iter().map(render_query_set).collect();
    let needs_fmt = structs
        .iter()
        .flat_map(GeneratedStruct::rendered)
        .any(|method| method.body.contains("fmt."));

    let imports = if needs_fmt {
        format!("import (\n\t\"fmt\"\n\n\t\"{ORM_IMPORT}\"\n)\n")
    } else {
        format!("import (\n\t\"{ORM_IMPORT}\"\n)\n")
    };

    debug!(package, structs = structs.len(), "rendering file");

    let mut out = format!("{GENERATED_MARKER}\n\npackage {package}\n\n{imports}");
    for query_set in query_sets {
        out.push('\n');
        out.push_str(&query_set);
    }
    out
}

/// Descriptor text of one query set, for external emitters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuerySetDescription {
    /// Model struct name.
    pub struct_name:    String,
    /// Query-set type name.
    pub query_set_name: String,
    /// Rendered methods in output order.
    pub methods:        Vec<RenderedMethod>
}

impl From<&GeneratedStruct> for QuerySetDescription {
    fn from(generated: &GeneratedStruct) -> Self {
        Self {
            struct_name:    generated.struct_name.clone(),
            query_set_name: generated.query_set_name.clone(),
            methods:        generated.rendered()
        }
    }
}

/// Serialize the descriptors of every struct as pretty JSON.
pub fn render_json(structs: &[GeneratedStruct]) -> Result<String> {
    let descriptions: Vec<QuerySetDescription> = structs.iter().map(Into::into).collect();
    Ok(serde_json::to_string_pretty(&descriptions)?)
}

fn indent(body: &str) -> String {
    body.lines()
        .map(|line| {
            if line.is_empty() {
                "\n".to_owned()
            } else {
                format!("\t{line}\n")
            }
        })
        .collect()
}
