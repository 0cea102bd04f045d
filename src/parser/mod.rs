//! Loads the schema descriptor JSON into the Schema View.
//!
//! The descriptor is expected to be pre-validated by whatever produced it;
//! the checks here are structural only: shapes the conversion dispatcher
//! cannot express are rejected before generation starts.

use anyhow::{Context, Result, bail};

use crate::model::{FieldKind, FieldSchema, FileSchema, MessageSchema};

/// Parse the whole input JSON string into a `FileSchema`.
pub fn load_from_json(json: &str) -> Result<FileSchema> {
    let schema: FileSchema =
        serde_json::from_str(json).context("schema descriptor is not valid JSON")?;

    if !schema.name.ends_with(".proto") {
        bail!("schema file name `{}` does not end in .proto", schema.name);
    }
    for dep in &schema.dependencies {
        if !dep.ends_with(".proto") {
            bail!("dependency `{dep}` does not end in .proto");
        }
    }

    for msg in &schema.messages {
        check_message(msg)?;
    }

    tracing::debug!(
        file = %schema.name,
        messages = schema.messages.len(),
        enums = schema.enums.len(),
        "schema descriptor loaded"
    );

    Ok(schema)
}

fn check_message(msg: &MessageSchema) -> Result<()> {
    for field in &msg.fields {
        check_field(&msg.name, field)?;
    }
    for nested in &msg.messages {
        check_message(nested)?;
    }
    Ok(())
}

fn check_field(owner: &str, field: &FieldSchema) -> Result<()> {
    match &field.kind {
        FieldKind::Map { key, value } => {
            match &key.kind {
                FieldKind::Scalar { .. } | FieldKind::Bool | FieldKind::String => {}
                _ => bail!(
                    "{owner}.{}: map keys must be scalar, bool or string",
                    field.name
                ),
            }
            match &value.kind {
                FieldKind::Repeated { .. } | FieldKind::Map { .. } => bail!(
                    "{owner}.{}: map values cannot be repeated or map",
                    field.name
                ),
                _ => {}
            }
        }
        FieldKind::Repeated { element } => match &**element {
            FieldKind::Repeated { .. } | FieldKind::Map { .. } => bail!(
                "{owner}.{}: repeated fields cannot nest repeated or map elements",
                field.name
            ),
            _ => {}
        },
        _ => {}
    }
    Ok(())
}
