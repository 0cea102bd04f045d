//! Schema View: the read-only descriptor tree the generator walks.
//!
//! Parsing the schema definition language itself is an upstream concern;
//! this tool consumes an already-descriptor-shaped JSON document (see
//! `parser`) and never mutates it.

use serde::Deserialize;

/// One schema file: the unit of a generation run.
#[derive(Debug, Clone, Deserialize)]
pub struct FileSchema {
    /// Schema file name, e.g. `login.proto`.
    pub name: String,
    /// Dotted package, e.g. `Game.Protocol`. May be empty.
    #[serde(default)]
    pub package: String,
    /// Names of imported schema files.
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub messages: Vec<MessageSchema>,
    #[serde(default)]
    pub enums: Vec<EnumSchema>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageSchema {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
    #[serde(default)]
    pub messages: Vec<MessageSchema>,
    #[serde(default)]
    pub enums: Vec<EnumSchema>,
    /// Synthetic map-entry types travel through the flatten pass like any
    /// other nested message but never produce a standalone binding.
    #[serde(default)]
    pub map_entry: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnumSchema {
    pub name: String,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub number: i32,
    /// Trailing documentation comment; carries the side-channel
    /// `file=` / `req=` directives.
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// Numeric scalar types; all of them convert by direct value copy.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    Int32,
    Int64,
    Uint32,
    Uint64,
    Float,
    Double,
}

/// Closed set of field shapes. The conversion dispatcher matches on this
/// without a wildcard arm, so a new variant forces every emitter to grow
/// a branch before the crate compiles again.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldKind {
    Scalar {
        #[serde(rename = "type")]
        ty: ScalarType,
    },
    Bool,
    String,
    Enum {
        #[serde(rename = "enum")]
        name: String,
    },
    Message {
        message: String,
    },
    Repeated {
        element: Box<FieldKind>,
    },
    /// Map entries reference the synthetic `key` / `value` fields.
    Map {
        key: Box<FieldSchema>,
        value: Box<FieldSchema>,
    },
}
