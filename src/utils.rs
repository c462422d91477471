// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for code generation.
//!
//! # Submodules
//!
//! - [`naming`] — Identifier transforms (column names, argument names)
//! - [`template`] — Go body templates wrapping ORM calls

pub mod naming;
pub mod template;
