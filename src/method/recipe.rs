// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Method recipes.
//!
//! A recipe is a fixed set of capabilities plus one body rule. Recipes with
//! optional settings are produced by builders and are immutable afterwards.
//!
//! # Architecture
//!
//! ```text
//! recipe.rs (coordinator)
//! ├── field_op.rs  - FieldOperationNoArgs, FieldOperationOneArg
//! ├── struct_op.rs - StructOperationOneArg
//! ├── filter.rs    - ComparisonOp, BinaryFilter, UnaryFilter
//! ├── model_op.rs  - ModelOperation
//! └── create.rs    - CreateMethod
//! ```

mod create;
mod field_op;
mod filter;
mod model_op;
mod struct_op;

pub use create::{CREATE_METHOD_NAME, CreateMethod};
pub use field_op::{FieldOperationNoArgs, FieldOperationNoArgsBuilder, FieldOperationOneArg};
pub use filter::{BinaryFilter, ComparisonOp, UnaryFilter};
pub use model_op::{ModelOperation, ModelOperationBuilder};
pub use struct_op::{StructOperationOneArg, StructOperationOneArgBuilder};
