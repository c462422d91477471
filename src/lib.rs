// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # queryset-gen
//!
//! Generates typed, chainable query-set methods for GORM models.
//!
//! Each generated method is described by a [`MethodDescriptor`] composed of
//! small capabilities (name, receiver, arguments, return values, body,
//! doc). Factories configure one descriptor per API surface: filters
//! (`NameEq`, `DeletedAtIsNull`), field operations (`PreloadBooks`,
//! `OrderByName`), query-set operations (`Limit`), fetches (`All`, `One`)
//! and `Create` on the model itself.
//!
//! ## Quick Start
//!
//! ```rust
//! use queryset_gen::{Schema, generate_file};
//!
//! let schema = Schema::from_json(r#"{
//!     "package": "models",
//!     "structs": [
//!         { "name": "User", "fields": [ { "name": "Name", "type": "string" } ] }
//!     ]
//! }"#)?;
//!
//! let go = generate_file(&schema)?;
//! assert!(go.contains("func (qs UserQuerySet) NameEq(name string) UserQuerySet {"));
//! # Ok::<(), queryset_gen::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`method`] — descriptor contract, capabilities, recipes, factories
//! - [`model`] — scanned structs and fields
//! - [`config`] — generator options
//! - [`generator`] — per-struct planning and failure isolation
//! - [`render`] — Go file emission

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod generator;
pub mod method;
pub mod model;
pub mod render;
mod utils;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use generator::{GeneratedStruct, Generator};
pub use method::{MethodDescriptor, RenderedMethod};
pub use model::{FieldDef, FieldKind, Schema, StructDef};

/// Generate the complete Go file for a schema.
///
/// # Errors
///
/// Returns [`Error::InvalidIdentifier`] for an invalid package name and
/// [`Error::Generation`] when any method fails to build (unless the schema
/// enables `skip_invalid`).
pub fn generate_file(schema: &Schema) -> Result<String> {
    model::validate_identifier("package", &schema.package)?;
    let structs = Generator::new(&schema.options).generate(&schema.structs)?;
    Ok(render::render_file(&schema.package, &structs))
}

/// Generate the method descriptions of a schema as JSON.
///
/// Each query set lists its methods with name, receiver, arguments, return
/// values, body and doc, for emitters other than [`render`].
///
/// # Errors
///
/// Same as [`generate_file`], except that the package name is not checked.
pub fn generate_descriptions(schema: &Schema) -> Result<String> {
    let structs = Generator::new(&schema.options).generate(&schema.structs)?;
    render::render_json(&structs)
}
