// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Operations keyed by a single struct field.
//!
//! - [`FieldOperationNoArgs`] — `PreloadBooks()`, `OrderByName()`
//! - [`FieldOperationOneArg`] — `<Field><Op>(<arg>)`, base of the filters

use crate::{
    method::{
        capability::{Arg, Args, Doc, FieldNaming, NameOrder, Receiver, Returns, TargetCall},
        descriptor::MethodDescriptor
    },
    utils::{
        naming::{field_name_to_arg_name, to_db_name},
        template::{orm_call, quoted, scope}
    }
};

/// Chainable operation on a field that takes no argument.
///
/// The field name is the only argument of the ORM call, either as declared
/// (`Preload("Books")`) or as a column name (`Order("user_id")`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOperationNoArgs {
    naming:               FieldNaming,
    target:               TargetCall,
    transform_field_name: bool,
    receiver:             Receiver,
    doc:                  Doc
}

impl FieldOperationNoArgs {
    /// Start configuring `operation` on `field`.
    pub fn builder(operation: &str, field: &str) -> FieldOperationNoArgsBuilder {
        FieldOperationNoArgsBuilder {
            operation:            operation.to_owned(),
            field:                field.to_owned(),
            target:               None,
            transform_field_name: true,
            doc:                  None
        }
    }

    /// Name of the underlying ORM call.
    pub fn target_call(&self) -> &str {
        self.target.name()
    }

    /// Whether the field is passed as a column name.
    pub fn transforms_field_name(&self) -> bool {
        self.transform_field_name
    }

    fn call_argument(&self) -> String {
        let field = self.naming.field();
        if self.transform_field_name {
            to_db_name(field)
        } else {
            field.to_owned()
        }
    }
}

/// Builder for [`FieldOperationNoArgs`].
#[derive(Debug, Clone)]
pub struct FieldOperationNoArgsBuilder {
    operation:            String,
    field:                String,
    target:               Option<String>,
    transform_field_name: bool,
    doc:                  Option<String>
}

impl FieldOperationNoArgsBuilder {
    /// Delegate to a differently named ORM call.
    pub fn target_call(mut self, name: &str) -> Self {
        self.target = Some(name.to_owned());
        self
    }

    /// Pass the field as a column name (default) or verbatim.
    pub fn transform_field_name(mut self, transform: bool) -> Self {
        self.transform_field_name = transform;
        self
    }

    /// Replace the autogenerated doc comment.
    pub fn doc(mut self, doc: &str) -> Self {
        self.doc = Some(doc.to_owned());
        self
    }

    /// Finish configuration.
    pub fn build(self) -> FieldOperationNoArgs {
        let target = TargetCall::new(self.target.unwrap_or_else(|| self.operation.clone()));
        let naming = FieldNaming::new(self.operation, self.field, NameOrder::OperationFirst);
        FieldOperationNoArgs {
            naming,
            target,
            transform_field_name: self.transform_field_name,
            receiver:             Receiver::query_set(),
            doc:                  Doc::from_override(self.doc)
        }
    }
}

impl MethodDescriptor for FieldOperationNoArgs {
    fn method_name(&self) -> String {
        self.naming.render()
    }

    fn receiver_declaration(&self) -> &str {
        self.receiver.declaration()
    }

    fn args_declaration(&self) -> String {
        Args::None.declaration()
    }

    fn return_values_declaration(&self, qs_type_name: &str) -> String {
        Returns::QuerySet.declaration(qs_type_name)
    }

    fn body(&self) -> String {
        scope(&orm_call(self.target.name(), &quoted(&self.call_argument())))
    }

    fn doc(&self) -> String {
        self.doc.render(&self.method_name())
    }
}

/// Chainable operation on a field that forwards one argument.
///
/// Named field-first (`NameEq`); the argument is named after the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOperationOneArg {
    naming:   FieldNaming,
    args:     Args,
    receiver: Receiver,
    doc:      Doc
}

impl FieldOperationOneArg {
    /// Create `operation` on `field` taking a value of `arg_type`.
    pub fn new(operation: &str, field: &str, arg_type: &str) -> Self {
        Self {
            naming:   FieldNaming::new(operation, field, NameOrder::FieldFirst),
            args:     Args::One(Arg::new(field_name_to_arg_name(field), arg_type)),
            receiver: Receiver::query_set(),
            doc:      Doc::autogenerated()
        }
    }

    /// Field name in model casing.
    pub fn field(&self) -> &str {
        self.naming.field()
    }

    /// Logical operation name.
    pub fn operation(&self) -> &str {
        self.naming.operation()
    }

    /// Name of the forwarded argument.
    pub fn arg_name(&self) -> &str {
        self.args.arg_name().unwrap_or_default()
    }
}

impl MethodDescriptor for FieldOperationOneArg {
    fn method_name(&self) -> String {
        self.naming.render()
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
        scope(&orm_call(self.naming.operation(), self.arg_name()))
    }

    fn doc(&self) -> String {
        self.doc.render(&self.method_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_names_operation_first() {
        let method = FieldOperationNoArgs::builder("Preload", "Books").build();
        assert_eq!(method.method_name(), "PreloadBooks");
        assert_eq!(method.args_declaration(), "");
        assert_eq!(method.receiver_declaration(), "");
    }

    #[test]
    fn no_args_transforms_by_default() {
        let method = FieldOperationNoArgs::builder("OrderBy", "UserID")
            .target_call("Order")
            .build();
        assert!(method.transforms_field_name());
        assert!(method.body().contains("return d.Order(\"user_id\")"));
    }

    #[test]
    fn no_args_keeps_field_when_not_transforming() {
        let method = FieldOperationNoArgs::builder("Preload", "UserGroups")
            .transform_field_name(false)
            .build();
        assert!(method.body().contains("return d.Preload(\"UserGroups\")"));
    }

    #[test]
    fn target_defaults_to_operation() {
        let method = FieldOperationNoArgs::builder("Preload", "Books").build();
        assert_eq!(method.target_call(), "Preload");
    }

    #[test]
    fn builder_doc_override() {
        let method = FieldOperationNoArgs::builder("Preload", "Books")
            .doc("// PreloadBooks loads books")
            .build();
        assert_eq!(method.doc(), "// PreloadBooks loads books");
    }

    #[test]
    fn one_arg_forwards_argument() {
        let method = FieldOperationOneArg::new("Not", "Name", "string");
        assert_eq!(method.method_name(), "NameNot");
        assert_eq!(method.args_declaration(), "name string");
        assert!(method.body().contains("return d.Not(name)"));
        assert_eq!(method.return_values_declaration("UserQuerySet"), "UserQuerySet");
    }

    #[test]
    fn one_arg_id_argument_verbatim() {
        let method = FieldOperationOneArg::new("eq", "ID", "uint");
        assert_eq!(method.args_declaration(), "ID uint");
    }
}
