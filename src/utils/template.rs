// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Go body templates.
//!
//! Bodies are emitted without outer indentation; the renderer indents them
//! when placing them inside a function declaration.
//!
//! # Scope Pattern
//!
//! Chainable methods never call the ORM directly. They append a scope to
//! the query set's handle and return the (copied) receiver:
//!
//! ```text
//! qs.db = qs.db.Scopes(func(d *gorm.DB) *gorm.DB {
//!     return d.Where("name = ?", name)
//! })
//! return qs
//! ```

/// Data-source handle type used by generated code.
pub const DB_HANDLE_TYPE: &str = "*gorm.DB";

/// Wrap a single ORM call in the scope pattern.
///
/// `call` is the full statement executed inside the scope, usually produced
/// by [`orm_call`] or [`where_call`].
pub fn scope(call: &str) -> String {
    format!(
        "qs.db = qs.db.Scopes(func(d {DB_HANDLE_TYPE}) {DB_HANDLE_TYPE} {{\n\t{call}\n}})\nreturn qs"
    )
}

/// `return d.<method>(<args>)`
pub fn orm_call(method: &str, args: &str) -> String {
    format!("return d.{method}({args})")
}

/// `return d.Where("<condition>"[, <arg>])`
pub fn where_call(condition: &str, arg: Option<&str>) -> String {
    match arg {
        Some(arg) => format!("return d.Where(\"{condition}\", {arg})"),
        None => format!("return d.Where(\"{condition}\")")
    }
}

/// Go string literal for a plain identifier-like value.
pub fn quoted(value: &str) -> String {
    format!("\"{value}\"")
}
