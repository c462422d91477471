// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for method factories.

use proptest::prelude::*;

use super::*;
use crate::{Error, method::MethodDescriptor};

const QS: &str = "UserQuerySet";

#[test]
fn name_eq_scenario() {
    let method = eq("Name", "string");
    assert_eq!(method.method_name(), "NameEq");
    assert_eq!(method.args_declaration(), "name string");
    assert_eq!(method.return_values_declaration(QS), QS);
    assert_eq!(
        method.body(),
        "qs.db = qs.db.Scopes(func(d *gorm.DB) *gorm.DB {\n\treturn d.Where(\"name = ?\", name)\n})\nreturn qs"
    );
}

#[test]
fn each_comparison_factory_uses_its_token() {
    let cases: [(fn(&str, &str) -> BinaryFilter, &str, &str); 6] = [
        (eq, "AgeEq", "age = ?"),
        (ne, "AgeNe", "age != ?"),
        (lt, "AgeLt", "age < ?"),
        (lte, "AgeLte", "age <= ?"),
        (gt, "AgeGt", "age > ?"),
        (gte, "AgeGte", "age >= ?"),
    ];
    for (factory, name, fragment) in cases {
        let method = factory("Age", "int");
        assert_eq!(method.method_name(), name);
        assert!(method.body().contains(&format!("\"{fragment}\", age")));
    }
}

#[test]
fn binary_filter_by_name() {
    let method = binary_filter("lte", "CreatedAt", "time.Time").unwrap();
    assert_eq!(method.method_name(), "CreatedAtLte");
    assert_eq!(method.args_declaration(), "createdAt time.Time");
    assert!(method.body().contains("created_at <= ?"));
}

#[test]
fn binary_filter_rejects_unknown_name() {
    let err = binary_filter("in", "Name", "string").unwrap_err();
    assert!(matches!(err, Error::UnknownOperator { .. }));
    assert_eq!(err.to_string(), "no operation for filter \"in\"");
}

#[test]
fn id_filter_keeps_argument_name() {
    let method = eq("ID", "uint");
    assert_eq!(method.method_name(), "IDEq");
    assert_eq!(method.args_declaration(), "ID uint");
    assert!(method.body().contains("d.Where(\"id = ?\", ID)"));
}

#[test]
fn is_null_scenario() {
    let method = is_null("DeletedAt");
    assert_eq!(method.method_name(), "DeletedAtIsNull");
    assert_eq!(method.args_declaration(), "");
    assert_eq!(method.return_values_declaration(QS), QS);
    assert!(method.body().contains("d.Where(\"deleted_at IS NULL\")"));
}

#[test]
fn is_not_null_scenario() {
    let method = is_not_null("DeletedAt");
    assert_eq!(method.method_name(), "DeletedAtIsNotNull");
    assert!(method.body().contains("d.Where(\"deleted_at IS NOT NULL\")"));
}

#[test]
fn preload_scenario() {
    let method = preload("Books");
    assert_eq!(method.method_name(), "PreloadBooks");
    assert_eq!(method.args_declaration(), "");
    assert_eq!(method.return_values_declaration(QS), QS);
    assert!(!method.transforms_field_name());
    assert!(method.body().contains("return d.Preload(\"Books\")"));
}

#[test]
fn order_by_maps_to_order_on_column() {
    let method = order_by("CreatedAt");
    assert_eq!(method.method_name(), "OrderByCreatedAt");
    assert_eq!(method.target_call(), "Order");
    assert!(method.body().contains("return d.Order(\"created_at\")"));
}

#[test]
fn limit_scenario() {
    let method = limit();
    assert_eq!(method.method_name(), "Limit");
    assert_eq!(method.args_declaration(), "limit int");
    assert_eq!(method.return_values_declaration(QS), QS);
}

#[test]
fn all_scenario() {
    let method = all("User");
    assert_eq!(method.method_name(), "All");
    assert_eq!(method.args_declaration(), "ret *[]User");
    assert_eq!(method.return_values_declaration(QS), "error");
    assert_eq!(method.body(), "return qs.db.Find(ret).Error");
    assert_eq!(
        method.doc(),
        "// All is an autogenerated method\n// nolint: dupl"
    );
}

#[test]
fn one_scenario_documents_not_found() {
    let method = one("User");
    assert_eq!(method.method_name(), "One");
    assert_eq!(method.args_declaration(), "ret *User");
    assert_eq!(method.return_values_declaration(QS), "error");
    assert_eq!(method.body(), "return qs.db.First(ret).Error");
    assert!(method.doc().contains("gorm.ErrRecordNotFound"));
    assert!(!method.doc().contains("autogenerated"));
}

#[test]
fn create_scenario() {
    let method = create("User");
    assert_eq!(method.method_name(), "Create");
    assert_eq!(method.receiver_declaration(), "o *User");
    assert_eq!(method.args_declaration(), "db *gorm.DB");
    assert_eq!(method.return_values_declaration(QS), "error");
    assert!(method.body().contains("can't create User"));
}

#[test]
fn query_set_methods_leave_receiver_to_emitter() {
    let methods: Vec<Box<dyn MethodDescriptor>> = vec![
        Box::new(preload("Books")),
        Box::new(order_by("Name")),
        Box::new(limit()),
        Box::new(all("User")),
        Box::new(one("User")),
        Box::new(eq("Name", "string")),
        Box::new(is_null("DeletedAt")),
    ];
    for method in methods {
        assert_eq!(method.receiver_declaration(), "", "{}", method.method_name());
    }
}

#[test]
fn default_doc_mentions_final_name() {
    assert_eq!(
        preload("Books").doc(),
        "// PreloadBooks is an autogenerated method\n// nolint: dupl"
    );
    assert!(eq("Name", "string").doc().starts_with("// NameEq is"));
}

#[test]
fn descriptors_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Box<dyn MethodDescriptor>>();
}

proptest! {
    #[test]
    fn factories_are_idempotent(
        field in "[A-Z][A-Za-z0-9]{0,12}",
        ty in prop::sample::select(vec!["string", "int", "uint", "time.Time", "bool"]),
        op in prop::sample::select(ComparisonOp::ALL.to_vec())
    ) {
        prop_assert_eq!(comparison(op, &field, ty).render(QS), comparison(op, &field, ty).render(QS));
        prop_assert_eq!(preload(&field).render(QS), preload(&field).render(QS));
        prop_assert_eq!(order_by(&field).render(QS), order_by(&field).render(QS));
        prop_assert_eq!(is_null(&field).render(QS), is_null(&field).render(QS));
        prop_assert_eq!(create(&field).render(QS), create(&field).render(QS));
    }

    #[test]
    fn filters_name_field_first(field in "[A-Z][A-Za-z]{0,12}") {
        prop_assert_eq!(eq(&field, "int").method_name(), format!("{field}Eq"));
        prop_assert_eq!(preload(&field).method_name(), format!("Preload{field}"));
    }
}
