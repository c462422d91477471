// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Query-set level operations taking one argument (`Limit`, `Offset`).

use crate::method::{
    capability::{Arg, Args, Doc, Receiver, Returns},
    descriptor::MethodDescriptor
};
use crate::utils::template::{orm_call, scope};

/// Chainable operation on the whole query set, not keyed by a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructOperationOneArg {
    name:     String,
    args:     Args,
    receiver: Receiver,
    doc:      Doc
}

impl StructOperationOneArg {
    /// Start configuring `operation` taking a value of `arg_type`.
    pub fn builder(operation: &str, arg_type: &str) -> StructOperationOneArgBuilder {
        StructOperationOneArgBuilder {
            operation: operation.to_owned(),
            arg_type:  arg_type.to_owned(),
            arg_name:  None,
            doc:       None
        }
    }

    fn arg_name(&self) -> &str {
        self.args.arg_name().unwrap_or_default()
    }
}

/// Builder for [`StructOperationOneArg`].
#[derive(Debug, Clone)]
pub struct StructOperationOneArgBuilder {
    operation: String,
    arg_type:  String,
    arg_name:  Option<String>,
    doc:       Option<String>
}

impl StructOperationOneArgBuilder {
    /// Override the argument name (default: lowercased operation).
    pub fn arg_name(mut self, name: &str) -> Self {
        self.arg_name = Some(name.to_owned());
        self
    }

    /// Replace the autogenerated doc comment.
    pub fn doc(mut self, doc: &str) -> Self {
        self.doc = Some(doc.to_owned());
        self
    }

    /// Finish configuration.
    pub fn build(self) -> StructOperationOneArg {
        let arg_name = self
            .arg_name
            .unwrap_or_else(|| self.operation.to_lowercase());
        StructOperationOneArg {
            name:     self.operation,
            args:     Args::One(Arg::new(arg_name, self.arg_type)),
            receiver: Receiver::query_set(),
            doc:      Doc::from_override(self.doc)
        }
    }
}

impl MethodDescriptor for StructOperationOneArg {
    fn method_name(&self) -> String {
        self.name.clone()
    }

    fn receiver_declaration(&self) -> &str {
        self.receiver.declaration()
    }

    fn args_declaration(&self) -> String {
        self.args.declaration()
    }

    fn return_values_declaration(&self, qs_type_name: &str) -> String {
        Returns::QuerySet.declaration(qs_type_name)
    }

    fn body(&self) -> String {
        scope(&orm_call(&self.name, self.arg_name()))
    }

    fn doc(&self) -> String {
        self.doc.render(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arg_defaults_to_lowercased_operation() {
        let method = StructOperationOneArg::builder("Limit", "int").build();
        assert_eq!(method.method_name(), "Limit");
        assert_eq!(method.args_declaration(), "limit int");
        assert!(method.body().contains("return d.Limit(limit)"));
    }

    #[test]
    fn arg_name_override() {
        let method = StructOperationOneArg::builder("Offset", "int")
            .arg_name("n")
            .build();
        assert_eq!(method.args_declaration(), "n int");
        assert!(method.body().contains("return d.Offset(n)"));
    }
}
