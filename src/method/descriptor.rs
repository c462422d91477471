// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The method descriptor contract.

use std::fmt::Debug;

use serde::Serialize;

/// Everything an emitter needs to write one generated method.
///
/// Implementations are immutable once built and answer every query without
/// outside input, except the query-set type name which belongs to the
/// enclosing struct.
pub trait MethodDescriptor: Debug + Send + Sync {
    /// Final method name, e.g. `NameEq` or `PreloadBooks`.
    fn method_name(&self) -> String;

    /// Explicit receiver declaration; empty selects the query-set receiver.
    fn receiver_declaration(&self) -> &str;

    /// Argument list without parentheses.
    fn args_declaration(&self) -> String;

    /// Return values for a method on `qs_type_name`.
    fn return_values_declaration(&self, qs_type_name: &str) -> String;

    /// Function body, valid Go in isolation.
    fn body(&self) -> String;

    /// Doc comment, one `//` line per line.
    fn doc(&self) -> String;

    /// Snapshot all answers for `qs_type_name`.
    fn render(&self, qs_type_name: &str) -> RenderedMethod {
        RenderedMethod {
            name:     self.method_name(),
            receiver: self.receiver_declaration().to_owned(),
            args:     self.args_declaration(),
            returns:  self.return_values_declaration(qs_type_name),
            body:     self.body(),
            doc:      self.doc()
        }
    }
}

/// Owned text of one method, as handed to the emitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMethod {
    /// Method name.
    pub name:     String,
    /// Receiver declaration, possibly empty.
    pub receiver: String,
    /// Argument list, possibly empty.
    pub args:     String,
    /// Return values.
    pub returns:  String,
    /// Body text.
    pub body:     String,
    /// Doc comment.
    pub doc:      String
}
