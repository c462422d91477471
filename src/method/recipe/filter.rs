// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! WHERE-clause filters.
//!
//! # Operator Table
//!
//! | Logical name | SQL |
//! |--------------|-----|
//! | `eq`  | `=`  |
//! | `ne`  | `!=` |
//! | `lt`  | `<`  |
//! | `lte` | `<=` |
//! | `gt`  | `>`  |
//! | `gte` | `>=` |
//!
//! # Generated Code
//!
//! ```text
//! NameEq(name string)  -> d.Where("name = ?", name)
//! DeletedAtIsNull()    -> d.Where("deleted_at IS NULL")
//! ```

use std::{fmt, str::FromStr};

use super::field_op::FieldOperationOneArg;
use crate::{
    error::{Error, Result},
    method::{
        capability::{Args, Doc, FieldNaming, NameOrder, Receiver, Returns},
        descriptor::MethodDescriptor
    },
    utils::{
        naming::to_db_name,
        template::{scope, where_call}
    }
};

/// Binary comparison supported by [`BinaryFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte
}

impl ComparisonOp {
    /// Every operator, in table order.
    pub const ALL: [Self; 6] = [Self::Eq, Self::Ne, Self::Lt, Self::Lte, Self::Gt, Self::Gte];

    /// Logical name used in method names.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Gt => "gt",
            Self::Gte => "gte"
        }
    }

    /// SQL operator token.
    pub const fn sql_token(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">="
        }
    }

    /// Whether the comparison only makes sense for ordered types.
    pub const fn is_ordering(self) -> bool {
        !matches!(self, Self::Eq | Self::Ne)
    }
}

impl FromStr for ComparisonOp {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| Error::UnknownOperator {
                name: name.to_owned()
            })
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `<Field><Op>(<arg>)` filtering with `<column> <op> ?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryFilter {
    inner: FieldOperationOneArg,
    op:    ComparisonOp
}

impl BinaryFilter {
    /// Build a filter from its logical name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOperator`] if `name` is not in the operator
    /// table.
    pub fn new(name: &str, field: &str, arg_type: &str) -> Result<Self> {
        let op = name.parse::<ComparisonOp>()?;
        Ok(Self::with_op(op, field, arg_type))
    }

    /// Build a filter for a known operator.
    pub fn with_op(op: ComparisonOp, field: &str, arg_type: &str) -> Self {
        Self {
            inner: FieldOperationOneArg::new(op.name(), field, arg_type),
            op
        }
    }

    /// Comparison operator.
    pub fn op(&self) -> ComparisonOp {
        self.op
    }

    fn where_condition(&self) -> String {
        format!("{} {} ?", to_db_name(self.inner.field()), self.op.sql_token())
    }
}

impl MethodDescriptor for BinaryFilter {
    fn method_name(&self) -> String {
        self.inner.method_name()
    }

    fn receiver_declaration(&self) -> &str {
        self.inner.receiver_declaration()
    }

    fn args_declaration(&self) -> String {
        self.inner.args_declaration()
    }

    fn return_values_declaration(&self, qs_type_name: &str) -> String {
        Returns::QuerySet.declaration(qs_type_name)
    }

    fn body(&self) -> String {
        scope(&where_call(&self.where_condition(), Some(self.inner.arg_name())))
    }

    fn doc(&self) -> String {
        self.inner.doc()
    }
}

/// `<Field><Op>()` filtering with a fixed condition, e.g. `IS NULL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryFilter {
    naming:    FieldNaming,
    condition: String,
    receiver:  Receiver,
    doc:       Doc
}

impl UnaryFilter {
    /// Create `operation` on `field` emitting `<column> <condition>`.
    pub fn new(operation: &str, field: &str, condition: &str) -> Self {
        Self {
            naming:    FieldNaming::new(operation, field, NameOrder::FieldFirst),
            condition: condition.to_owned(),
            receiver:  Receiver::query_set(),
            doc:       Doc::autogenerated()
        }
    }

    /// Literal condition text following the column.
    pub fn condition(&self) -> &str {
        &self.condition
    }
}

impl MethodDescriptor for UnaryFilter {
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
        let column = to_db_name(self.naming.field());
        scope(&where_call(&format!("{column} {}", self.condition), None))
    }

    fn doc(&self) -> String {
        self.doc.render(&self.method_name())
    }
}
