// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator configuration.
//!
//! Read from the `options` object of a schema document. Every key is
//! optional:
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `query_set_suffix` | `"QuerySet"` | Appended to struct names |
//! | `comparisons` | all six | Comparison filters per field |
//! | `create` | `true` | Emit `Create` on the model struct |
//! | `skip_invalid` | `false` | Drop failing methods instead of aborting |
//!
//! ```json
//! { "options": { "comparisons": ["eq", "ne"], "create": false } }
//! ```

use serde::Deserialize;

use crate::method::recipe::ComparisonOp;

/// Options controlling which methods are generated and how.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Suffix forming the query-set type name (`User` + `QuerySet`).
    pub query_set_suffix: String,

    /// Logical names of comparison filters generated for each field.
    ///
    /// Kept as names so that an unknown entry surfaces as a construction
    /// error for the fields it applies to.
    pub comparisons: Vec<String>,

    /// Generate `Create` with the model struct as receiver.
    pub create: bool,

    /// Skip methods that fail to build and keep generating the rest.
    ///
    /// Off by default: any failure aborts the run after all failures have
    /// been collected.
    pub skip_invalid: bool
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            query_set_suffix: "QuerySet".to_owned(),
            comparisons:      ComparisonOp::ALL
                .iter()
                .map(|op| op.name().to_owned())
                .collect(),
            create:           true,
            skip_invalid:     false
        }
    }
}

impl GeneratorConfig {
    /// Query-set type name for `struct_name`.
    pub fn query_set_name(&self, struct_name: &str) -> String {
        format!("{struct_name}{}", self.query_set_suffix)
    }
}
