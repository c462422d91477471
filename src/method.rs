// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Method descriptor composition.
//!
//! Every generated method is described by a value implementing
//! [`MethodDescriptor`]. Descriptors are assembled from small capability
//! strategies ([`capability`]) into recipes ([`recipe`]), and the
//! [`factory`] functions configure one recipe per generated API.
//!
//! # Architecture
//!
//! ```text
//! method.rs (coordinator)
//! ├── capability.rs - receiver, naming, args, returns, doc, target call
//! ├── descriptor.rs - MethodDescriptor, RenderedMethod
//! ├── recipe.rs     - concrete compositions
//! └── factory.rs    - one constructor per generated method
//! ```
//!
//! # Example
//!
//! ```rust
//! use queryset_gen::method::{MethodDescriptor, factory};
//!
//! let eq = factory::eq("Name", "string");
//! assert_eq!(eq.method_name(), "NameEq");
//! assert_eq!(eq.args_declaration(), "name string");
//! assert!(eq.body().contains("d.Where(\"name = ?\", name)"));
//! ```

pub mod capability;
pub mod descriptor;
pub mod factory;
pub mod recipe;

pub use descriptor::{MethodDescriptor, RenderedMethod};
