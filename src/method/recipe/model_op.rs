// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Terminal operations that execute the query (`All`, `One`).
//!
//! These end a chain: the body runs the ORM call against the accumulated
//! scopes, writes into `ret` and returns the ORM error.
//!
//! ```text
//! func (qs UserQuerySet) All(ret *[]User) error {
//!     return qs.db.Find(ret).Error
//! }
//! ```

use crate::method::{
    capability::{Arg, Args, Doc, Receiver, Returns, TargetCall},
    descriptor::MethodDescriptor
};

/// Name of the result argument of every model operation.
const RET_ARG: &str = "ret";

/// Query-executing operation returning `error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOperation {
    name:     String,
    target:   TargetCall,
    args:     Args,
    receiver: Receiver,
    doc:      Doc
}

impl ModelOperation {
    /// Start configuring `name` writing its result into `ret_type`.
    pub fn builder(name: &str, ret_type: &str) -> ModelOperationBuilder {
        ModelOperationBuilder {
            name:     name.to_owned(),
            ret_type: ret_type.to_owned(),
            target:   None,
            doc:      None
        }
    }

    /// Name of the underlying ORM call.
    pub fn target_call(&self) -> &str {
        self.target.name()
    }
}

/// Builder for [`ModelOperation`].
#[derive(Debug, Clone)]
pub struct ModelOperationBuilder {
    name:     String,
    ret_type: String,
    target:   Option<String>,
    doc:      Option<String>
}

impl ModelOperationBuilder {
    /// Delegate to a differently named ORM call.
    pub fn target_call(mut self, name: &str) -> Self {
        self.target = Some(name.to_owned());
        self
    }

    /// Replace the autogenerated doc comment.
    pub fn doc(mut self, doc: &str) -> Self {
        self.doc = Some(doc.to_owned());
        self
    }

    /// Finish configuration.
    pub fn build(self) -> ModelOperation {
        let target = TargetCall::new(self.target.unwrap_or_else(|| self.name.clone()));
        ModelOperation {
            name: self.name,
            target,
            args: Args::One(Arg::new(RET_ARG, self.ret_type)),
            receiver: Receiver::query_set(),
            doc: Doc::from_override(self.doc)
        }
    }
}

impl MethodDescriptor for ModelOperation {
    fn method_name(&self) -> String {
        self.name.clone()
    }

    fn receiver_declaration(&self) -> &str {
        self.receiver.declaration()
    }

    fn args_declaration(&self) -> String {
        self.args.declaration()
    }

    fn return_values_declaration(&self, qs_type_name: &str) -> String {
        Returns::Error.declaration(qs_type_name)
    }

    fn body(&self) -> String {
        format!("return qs.db.{}({RET_ARG}).Error", self.target.name())
    }

    fn doc(&self) -> String {
        self.doc.render(&self.name)
    }
}
