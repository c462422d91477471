// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier transforms.
//!
//! | Function | Example |
//! |----------|---------|
//! | [`to_db_name`] | `UserID` -> `user_id`, `Address1` -> `address1` |
//! | [`field_name_to_arg_name`] | `Name` -> `name`, `ID` -> `ID` |
//! | [`is_go_keyword`] | `type` -> `true` |
//! | [`capitalize_first`] | `eq` -> `Eq` |

use convert_case::{Boundary, Case, Casing};

/// Field name kept verbatim as an argument name.
///
/// Lowercasing it would yield `iD`, which Go linters reject.
const VERBATIM_ARG_NAME: &str = "ID";

/// Initialisms the ORM folds into one word before snake casing.
///
/// Matched left to right, earlier entries first.
const COMMON_INITIALISMS: &[&str] = &[
    "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SSH", "TLS", "TTL", "UID", "UI",
    "UUID", "URI", "URL", "UTF8", "VM", "XML", "XSRF", "XSS"
];

/// Word boundaries of column names. A digit ends a word only when an
/// uppercase letter follows it.
const COLUMN_BOUNDARIES: &[Boundary] = &[
    Boundary::Underscore,
    Boundary::LowerUpper,
    Boundary::Acronym,
    Boundary::DigitUpper
];

/// Go keywords, which cannot name an argument.
const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var"
];

/// Convert a struct field name into the column name the ORM maps it to.
///
/// # Example
///
/// ```text
/// "DeletedAt"   -> "deleted_at"
/// "UserIDs"     -> "user_ids"
/// "Address1"    -> "address1"
/// "OAuth2Token" -> "o_auth2_token"
/// ```
pub fn to_db_name(field_name: &str) -> String {
    fold_initialisms(field_name)
        .set_boundaries(COLUMN_BOUNDARIES)
        .to_case(Case::Snake)
}

/// Rewrite common initialisms as capitalized words (`URL` -> `Url`).
fn fold_initialisms(name: &str) -> String {
    let mut folded = String::with_capacity(name.len());
    let mut rest = name;
    while let Some(ch) = rest.chars().next() {
        match COMMON_INITIALISMS
            .iter()
            .find(|initialism| rest.starts_with(**initialism))
        {
            Some(initialism) => {
                folded.push_str(&capitalize_first(&initialism.to_lowercase()));
                rest = &rest[initialism.len()..];
            }
            None => {
                folded.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    folded
}

/// Derive a Go argument name from a field name.
///
/// The result may be a Go keyword (`Type` -> `type`); callers check it with
/// [`is_go_keyword`].
pub fn field_name_to_arg_name(field_name: &str) -> String {
    if field_name == VERBATIM_ARG_NAME {
        return field_name.to_owned();
    }

    lowercase_first(field_name)
}

/// Whether `name` is reserved in Go.
pub fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Lowercase the first character, leaving the rest untouched.
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new()
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn db_name_snake_cases_words() {
        assert_eq!(to_db_name("Name"), "name");
        assert_eq!(to_db_name("DeletedAt"), "deleted_at");
        assert_eq!(to_db_name("UserID"), "user_id");
        assert_eq!(to_db_name("ID"), "id");
    }

    #[test]
    fn db_name_splits_leading_acronym() {
        assert_eq!(to_db_name("HTTPServer"), "http_server");
    }

    #[test]
    fn db_name_matches_orm_columns() {
        let cases = [
            ("UserIDs", "user_ids"),
            ("URLs", "urls"),
            ("Address1", "address1"),
            ("Line2Text", "line2_text"),
            ("OAuth2Token", "o_auth2_token"),
            ("APIKey", "api_key"),
            ("CreatedAt", "created_at"),
            ("already_snake", "already_snake"),
        ];
        for (field, column) in cases {
            assert_eq!(to_db_name(field), column, "{field}");
        }
    }

    #[test]
    fn initialisms_fold_left_to_right() {
        assert_eq!(fold_initialisms("UserID"), "UserId");
        assert_eq!(fold_initialisms("HTTPSPort"), "HttpSPort");
        assert_eq!(fold_initialisms("Name"), "Name");
    }

    #[test]
    fn keyword_argument_names_are_detected() {
        assert_eq!(field_name_to_arg_name("Type"), "type");
        assert!(is_go_keyword(&field_name_to_arg_name("Type")));
        assert!(is_go_keyword(&field_name_to_arg_name("Range")));
        assert!(!is_go_keyword(&field_name_to_arg_name("Name")));
        assert!(!is_go_keyword("Type"));
    }

    #[test]
    fn arg_name_keeps_id() {
        assert_eq!(field_name_to_arg_name("ID"), "ID");
    }

    #[test]
    fn arg_name_lowercases_first_rune() {
        assert_eq!(field_name_to_arg_name("Name"), "name");
        assert_eq!(field_name_to_arg_name("UserID"), "userID");
        assert_eq!(field_name_to_arg_name("Ünit"), "ünit");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(lowercase_first(""), "");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn capitalize_only_touches_first() {
        assert_eq!(capitalize_first("eq"), "Eq");
        assert_eq!(capitalize_first("isNull"), "IsNull");
        assert_eq!(capitalize_first("OrderBy"), "OrderBy");
    }

    proptest! {
        #[test]
        fn arg_name_is_field_with_lower_first(field in "[A-Za-z][A-Za-z0-9_]{0,16}") {
            prop_assume!(field != "ID");
            let arg = field_name_to_arg_name(&field);
            let mut expected = field[..1].to_lowercase();
            expected.push_str(&field[1..]);
            prop_assert_eq!(arg, expected);
        }
    }
}
