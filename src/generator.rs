// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-struct method planning.
//!
//! Decides which descriptors each struct gets and isolates failures so that
//! a bad field never corrupts generation for the others.
//!
//! # Method Plan
//!
//! | Field kind | Methods |
//! |------------|---------|
//! | `Scalar` | comparisons, `OrderBy<Field>` |
//! | `Nullable` | comparisons, `<Field>IsNull`, `<Field>IsNotNull`, `OrderBy<Field>` |
//! | `Relation` | `Preload<Field>` |
//! | `Unsupported` | none |
//!
//! Ordering comparisons (`lt`, `lte`, `gt`, `gte`) are only planned for
//! ordered types. A comparison listed twice is planned once. A field whose
//! argument name is a Go keyword (`Type` -> `type`) fails its comparisons
//! with [`Error::KeywordArgument`]; its other methods are unaffected.
//!
//! After the fields come `Limit`, `All`, `One` and, unless disabled,
//! `Create`.
//!
//! # Failure Policy
//!
//! Every failure is wrapped with its struct and field. By default all of
//! them are collected and returned as one [`Error::Generation`]; with
//! `skip_invalid` the failing methods are dropped and logged instead.

use tracing::{debug, warn};

use crate::{
    config::GeneratorConfig,
    error::{Error, Result},
    method::{MethodDescriptor, RenderedMethod, factory},
    model::{FieldDef, FieldKind, StructDef, validate_identifier},
    utils::naming::{field_name_to_arg_name, is_go_keyword}
};

type BoxedMethod = Box<dyn MethodDescriptor>;

/// Methods generated for one struct.
#[derive(Debug)]
pub struct GeneratedStruct {
    /// Model struct name.
    pub struct_name:    String,
    /// Query-set type name.
    pub query_set_name: String,
    /// Descriptors in output order.
    pub methods:        Vec<BoxedMethod>
}

impl GeneratedStruct {
    /// Render every descriptor against this struct's query-set type.
    pub fn rendered(&self) -> Vec<RenderedMethod> {
        self.methods
            .iter()
            .map(|m| m.render(&self.query_set_name))
            .collect()
    }

    /// Final names of the generated methods.
    pub fn method_names(&self) -> Vec<String> {
        self.methods.iter().map(|m| m.method_name()).collect()
    }
}

/// Plans descriptors for model structs.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    config: &'a GeneratorConfig
}

impl<'a> Generator<'a> {
    /// Create a generator using `config`.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config
        }
    }

    /// Generate every struct.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generation`] with all collected failures unless
    /// `skip_invalid` is set.
    pub fn generate(&self, structs: &[StructDef]) -> Result<Vec<GeneratedStruct>> {
        let mut generated = Vec::with_capacity(structs.len());
        let mut errors = Vec::new();

        for def in structs {
            match self.generate_struct(def) {
                Ok(query_set) => generated.push(query_set),
                Err(Error::Generation(nested)) => errors.extend(nested),
                Err(err) if self.config.skip_invalid => {
                    warn!(struct_name = %def.name, "skipping struct: {err}");
                }
                Err(err) => errors.push(err)
            }
        }

        if errors.is_empty() {
            Ok(generated)
        } else {
            Err(Error::Generation(errors))
        }
    }

    /// Generate a single struct.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] for an invalid struct name and
    /// [`Error::Generation`] for field failures (unless skipped).
    pub fn generate_struct(&self, def: &StructDef) -> Result<GeneratedStruct> {
        validate_identifier("struct", &def.name)?;

        let mut methods = Vec::new();
        let mut errors = Vec::new();

        for field in &def.fields {
            for planned in self.field_methods(field) {
                match planned {
                    Ok(method) => methods.push(method),
                    Err(err) => {
                        let err = err.in_field(&def.name, &field.name);
                        if self.config.skip_invalid {
                            warn!("skipping method: {err}");
                        } else {
                            errors.push(err);
                        }
                    }
                }
            }
        }

        if !errors.is_empty() {
            return Err(Error::Generation(errors));
        }

        methods.extend(self.struct_methods(&def.name));
        debug!(struct_name = %def.name, methods = methods.len(), "planned query set");

        Ok(GeneratedStruct {
            struct_name: def.name.clone(),
            query_set_name: self.config.query_set_name(&def.name),
            methods
        })
    }

    fn field_methods(&self, field: &FieldDef) -> Vec<Result<BoxedMethod>> {
        if let Err(err) = validate_identifier("field", &field.name) {
            return vec![Err(err)];
        }

        let kind = field.kind();
        debug!(field = %field.name, ty = %field.type_name, ?kind, "planning field");

        match kind {
            FieldKind::Relation => {
                let preload: BoxedMethod = Box::new(factory::preload(&field.name));
                vec![Ok(preload)]
            }
            FieldKind::Unsupported => Vec::new(),
            FieldKind::Scalar | FieldKind::Nullable => {
                let mut methods = self.comparisons(field);
                if kind == FieldKind::Nullable {
                    methods.push(Ok(Box::new(factory::is_null(&field.name))));
                    methods.push(Ok(Box::new(factory::is_not_null(&field.name))));
                }
                methods.push(Ok(Box::new(factory::order_by(&field.name))));
                methods
            }
        }
    }

    fn comparisons(&self, field: &FieldDef) -> Vec<Result<BoxedMethod>> {
        let mut methods: Vec<Result<BoxedMethod>> = Vec::new();
        let mut planned: Vec<&str> = Vec::new();
        for name in &self.config.comparisons {
            if planned.contains(&name.as_str()) {
                debug!(field = %field.name, comparison = %name, "duplicate comparison");
                continue;
            }
            planned.push(name);

            match factory::binary_filter(name, &field.name, field.filter_type()) {
                Ok(filter) if filter.op().is_ordering() && !field.is_ordered() => {}
                Ok(filter) => methods.push(Ok(Box::new(filter))),
                Err(err) => methods.push(Err(err))
            }
        }

        let arg_name = field_name_to_arg_name(&field.name);
        if is_go_keyword(&arg_name) && methods.iter().any(Result::is_ok) {
            methods.retain(Result::is_err);
            methods.push(Err(Error::KeywordArgument {
                name: arg_name
            }));
        }
        methods
    }

    fn struct_methods(&self, struct_name: &str) -> Vec<BoxedMethod> {
        let mut methods: Vec<BoxedMethod> = vec![
            Box::new(factory::limit()),
            Box::new(factory::all(struct_name)),
            Box::new(factory::one(struct_name)),
        ];
        if self.config.create {
            methods.push(Box::new(factory::create(struct_name)));
        }
        methods
    }
}
