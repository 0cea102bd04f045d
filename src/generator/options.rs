//! Generator options, passed on the command line the way protoc hands
//! parameters to a plugin.

use crate::error::GenError;

#[derive(Debug, Clone)]
pub struct Options {
    /// Export macro placed on generated classes.
    pub export_macro: String,
    /// Include carrying the request/response base classes.
    pub runtime_header: String,
    /// Path prefix for directive-driven includes.
    pub include_prefix: String,
    /// Classify unsuffixed message names as Plain-Data.
    pub data_fallback: bool,
    /// Treat an unclassified message as a hard error.
    pub strict: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            export_macro: "PROTO_API".into(),
            runtime_header: "ApiProtocol.h".into(),
            include_prefix: String::new(),
            data_fallback: false,
            strict: false,
        }
    }
}

impl Options {
    /// Parse `key=value` pairs. An unrecognized key aborts the whole run
    /// before any generation starts.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, GenError> {
        let mut options = Options::default();
        for arg in args {
            let arg = arg.as_ref();
            let (key, value) = arg.split_once('=').unwrap_or((arg, ""));
            match key {
                "export_macro" => options.export_macro = value.to_string(),
                "runtime_header" => options.runtime_header = value.to_string(),
                "include_prefix" => options.include_prefix = value.to_string(),
                "data_fallback" => options.data_fallback = parse_bool(key, value)?,
                "strict" => options.strict = parse_bool(key, value)?,
                _ => return Err(GenError::UnknownOption(key.to_string())),
            }
        }
        Ok(options)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, GenError> {
    match value {
        // bare flag counts as enabling it
        "" | "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(GenError::InvalidOptionValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
