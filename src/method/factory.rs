// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! One constructor per generated method.
//!
//! Factories are pure: the same inputs always produce descriptors with
//! byte-identical text.
//!
//! | Factory | Method | Recipe |
//! |---------|--------|--------|
//! | [`preload`] | `PreloadBooks()` | [`FieldOperationNoArgs`] |
//! | [`order_by`] | `OrderByName()` | [`FieldOperationNoArgs`] |
//! | [`limit`] | `Limit(limit int)` | [`StructOperationOneArg`] |
//! | [`all`] | `All(ret *[]User) error` | [`ModelOperation`] |
//! | [`one`] | `One(ret *User) error` | [`ModelOperation`] |
//! | [`eq`] .. [`gte`] | `NameEq(name string)` | [`BinaryFilter`] |
//! | [`is_null`], [`is_not_null`] | `DeletedAtIsNull()` | [`UnaryFilter`] |
//! | [`create`] | `(o *User) Create(db *gorm.DB) error` | [`CreateMethod`] |

use super::recipe::{
    BinaryFilter, ComparisonOp, CreateMethod, FieldOperationNoArgs, ModelOperation,
    StructOperationOneArg, UnaryFilter
};
use crate::error::Result;

/// Doc comment of [`one`], the only method documenting a failure mode.
const ONE_DOC: &str = "// One is used to retrieve one result. It returns gorm.ErrRecordNotFound\n// if nothing was fetched";

/// `Preload<Field>()`: eager-load an association by its field name.
pub fn preload(field: &str) -> FieldOperationNoArgs {
    FieldOperationNoArgs::builder("Preload", field)
        .transform_field_name(false)
        .build()
}

/// `OrderBy<Field>()`: order by the field's column.
pub fn order_by(field: &str) -> FieldOperationNoArgs {
    FieldOperationNoArgs::builder("OrderBy", field)
        .target_call("Order")
        .build()
}

/// `Limit(limit int)`.
pub fn limit() -> StructOperationOneArg {
    StructOperationOneArg::builder("Limit", "int").build()
}

/// `All(ret *[]<Struct>) error`: fetch every matching row.
pub fn all(struct_name: &str) -> ModelOperation {
    ModelOperation::builder("All", &format!("*[]{struct_name}"))
        .target_call("Find")
        .build()
}

/// `One(ret *<Struct>) error`: fetch the first matching row.
pub fn one(struct_name: &str) -> ModelOperation {
    ModelOperation::builder("One", &format!("*{struct_name}"))
        .target_call("First")
        .doc(ONE_DOC)
        .build()
}

/// Comparison filter from its logical name (`eq`, `lte`, ...).
///
/// # Errors
///
/// Returns [`Error::UnknownOperator`](crate::Error::UnknownOperator) for
/// names outside the operator table.
pub fn binary_filter(name: &str, field: &str, arg_type: &str) -> Result<BinaryFilter> {
    BinaryFilter::new(name, field, arg_type)
}

/// Comparison filter for a known operator.
pub fn comparison(op: ComparisonOp, field: &str, arg_type: &str) -> BinaryFilter {
    BinaryFilter::with_op(op, field, arg_type)
}

/// `<Field>Eq(<arg>)`
pub fn eq(field: &str, arg_type: &str) -> BinaryFilter {
    comparison(ComparisonOp::Eq, field, arg_type)
}

/// `<Field>Ne(<arg>)`
pub fn ne(field: &str, arg_type: &str) -> BinaryFilter {
    comparison(ComparisonOp::Ne, field, arg_type)
}

/// `<Field>Lt(<arg>)`
pub fn lt(field: &str, arg_type: &str) -> BinaryFilter {
    comparison(ComparisonOp::Lt, field, arg_type)
}

/// `<Field>Lte(<arg>)`
pub fn lte(field: &str, arg_type: &str) -> BinaryFilter {
    comparison(ComparisonOp::Lte, field, arg_type)
}

/// `<Field>Gt(<arg>)`
pub fn gt(field: &str, arg_type: &str) -> BinaryFilter {
    comparison(ComparisonOp::Gt, field, arg_type)
}

/// `<Field>Gte(<arg>)`
pub fn gte(field: &str, arg_type: &str) -> BinaryFilter {
    comparison(ComparisonOp::Gte, field, arg_type)
}

/// `<Field>IsNull()`
pub fn is_null(field: &str) -> UnaryFilter {
    UnaryFilter::new("IsNull", field, "IS NULL")
}

/// `<Field>IsNotNull()`
pub fn is_not_null(field: &str) -> UnaryFilter {
    UnaryFilter::new("IsNotNull", field, "IS NOT NULL")
}

/// `Create(db *gorm.DB) error` on `*<Struct>`.
pub fn create(struct_name: &str) -> CreateMethod {
    CreateMethod::new(struct_name)
}

#[cfg(test)]
mod tests;
