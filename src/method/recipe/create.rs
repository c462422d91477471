// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Create` on the model struct itself.
//!
//! # Generated Code
//!
//! ```text
//! func (o *User) Create(db *gorm.DB) error {
//!     if err := db.Create(o).Error; err != nil {
//!         return fmt.Errorf("can't create User %v: %s", o, err)
//!     }
//!     return nil
//! }
//! ```

use crate::{
    method::{
        capability::{Arg, Args, Doc, Receiver, Returns},
        descriptor::MethodDescriptor
    },
    utils::template::DB_HANDLE_TYPE
};

/// Method name shared by every create method.
pub const CREATE_METHOD_NAME: &str = "Create";

/// Insert of the receiver struct through an explicit handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMethod {
    struct_name: String,
    args:        Args,
    receiver:    Receiver,
    doc:         Doc
}

impl CreateMethod {
    /// Create method for `struct_name`, bound to `o *<struct_name>`.
    pub fn new(struct_name: &str) -> Self {
        Self {
            struct_name: struct_name.to_owned(),
            args:        Args::One(Arg::new("db", DB_HANDLE_TYPE)),
            receiver:    Receiver::explicit(format!("o *{struct_name}")),
            doc:         Doc::autogenerated()
        }
    }
}

impl MethodDescriptor for CreateMethod {
    fn method_name(&self) -> String {
        CREATE_METHOD_NAME.to_owned()
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
        format!(
            "if err := db.Create(o).Error; err != nil {{\n\treturn fmt.Errorf(\"can't create {} %v: %s\", o, err)\n}}\nreturn nil",
            self.struct_name
        )
    }

    fn doc(&self) -> String {
        self.doc.render(CREATE_METHOD_NAME)
    }
}
