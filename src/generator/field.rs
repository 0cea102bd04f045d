//! Field conversion dispatcher.
//!
//! For every field shape this emits the schema→native (`FromPB`) and
//! native→schema (`ToPB`) statements that message generators concatenate
//! into method bodies. The matches are exhaustive over `FieldKind`;
//! shapes the target model cannot express (nested repeated, map in map)
//! fail the run with an error naming the field instead of dropping it.

use crate::error::GenError;
use crate::generator::printer::CodeBuf;
use crate::model::{FieldKind, FieldSchema, ScalarType};

fn scalar_cpp(ty: ScalarType) -> &'static str {
    match ty {
        ScalarType::Int32 => "int32",
        ScalarType::Int64 => "int64",
        ScalarType::Uint32 => "uint32",
        ScalarType::Uint64 => "uint64",
        ScalarType::Float => "float",
        ScalarType::Double => "double",
    }
}

/// Native (UE-side) type for a field shape.
pub fn cpp_type(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Scalar { ty } => scalar_cpp(*ty).to_string(),
        FieldKind::Bool => "bool".to_string(),
        FieldKind::String => "FString".to_string(),
        FieldKind::Enum { name } => name.clone(),
        FieldKind::Message { message } => format!("F{message}"),
        FieldKind::Repeated { element } => format!("TArray<{}>", cpp_type(element)),
        FieldKind::Map { key, value } => {
            format!("TMap<{}, {}>", cpp_type(&key.kind), cpp_type(&value.kind))
        }
    }
}

/// UPROPERTY member declaration for one field.
pub fn member_decl(field: &FieldSchema, buf: &mut CodeBuf) {
    buf.line("UPROPERTY(EditAnywhere, BlueprintReadWrite, Meta = (ExposeOnSpawn = true))");
    buf.line(&format!("{} {};", cpp_type(&field.kind), field.name));
    buf.blank();
}

fn unsupported(field: &FieldSchema, detail: &str) -> GenError {
    GenError::UnsupportedField {
        field: field.name.clone(),
        detail: detail.to_string(),
    }
}

/// Native → schema statements for one field (`ToPB` body fragment).
pub fn to_schema(field: &FieldSchema, buf: &mut CodeBuf) -> Result<(), GenError> {
    let name = &field.name;
    let pb = field.name.to_lowercase();
    match &field.kind {
        FieldKind::Scalar { .. } | FieldKind::Bool => {
            buf.line(&format!("pbMessage.set_{pb}({name});"));
        }
        FieldKind::String => {
            buf.line(&format!("pbMessage.set_{pb}(TCHAR_TO_UTF8(*{name}));"));
        }
        FieldKind::Enum { .. } => {
            buf.line(&format!("pbMessage.set_{pb}((int32){name});"));
        }
        FieldKind::Message { .. } => {
            buf.line(&format!("{name}.ToPB(*pbMessage.mutable_{pb}());"));
        }
        FieldKind::Repeated { element } => {
            buf.line(&format!("for (const auto& element : {name}) {{"));
            buf.indent();
            match &**element {
                FieldKind::Scalar { .. } | FieldKind::Bool => {
                    buf.line(&format!("pbMessage.add_{pb}(element);"));
                }
                FieldKind::String => {
                    buf.line(&format!("pbMessage.add_{pb}(TCHAR_TO_UTF8(*element));"));
                }
                FieldKind::Enum { .. } => {
                    buf.line(&format!("pbMessage.add_{pb}((int32)element);"));
                }
                FieldKind::Message { .. } => {
                    buf.line(&format!("element.ToPB(*pbMessage.add_{pb}());"));
                }
                FieldKind::Repeated { .. } => {
                    return Err(unsupported(field, "repeated element inside repeated field"));
                }
                FieldKind::Map { .. } => {
                    return Err(unsupported(field, "map element inside repeated field"));
                }
            }
            buf.outdent();
            buf.line("}");
        }
        FieldKind::Map { key, value } => {
            buf.line(&format!("for (const auto& element : {name}) {{"));
            buf.indent();
            map_pair_to_schema(field, key, "Key", "key", buf)?;
            map_pair_to_schema(field, value, "Value", "value", buf)?;
            buf.line(&format!("(*pbMessage.mutable_{pb}())[key] = value;"));
            buf.outdent();
            buf.line("}");
        }
    }
    Ok(())
}

/// One half of a map entry, native → schema. `part` is the TPair member
/// (`Key` / `Value`), `local` the temporary inserted afterwards.
fn map_pair_to_schema(
    owner: &FieldSchema,
    part_field: &FieldSchema,
    part: &str,
    local: &str,
    buf: &mut CodeBuf,
) -> Result<(), GenError> {
    match &part_field.kind {
        FieldKind::Scalar { ty } => {
            buf.line(&format!("{} {local} = element.{part};", scalar_cpp(*ty)));
        }
        FieldKind::Bool => {
            buf.line(&format!("bool {local} = element.{part};"));
        }
        FieldKind::String => {
            buf.line(&format!(
                "std::string {local} = TCHAR_TO_UTF8(*element.{part});"
            ));
        }
        FieldKind::Enum { .. } => {
            buf.line(&format!("int32 {local} = (int32)element.{part};"));
        }
        FieldKind::Message { message } => {
            buf.line(&format!("{message} {local};"));
            buf.line(&format!("element.{part}.ToPB({local});"));
        }
        FieldKind::Repeated { .. } => {
            return Err(unsupported(owner, "repeated field inside map entry"));
        }
        FieldKind::Map { .. } => {
            return Err(unsupported(owner, "map field inside map entry"));
        }
    }
    Ok(())
}

/// Schema → native statements for one field (`FromPB` body fragment).
pub fn to_native(field: &FieldSchema, buf: &mut CodeBuf) -> Result<(), GenError> {
    let name = &field.name;
    let pb = field.name.to_lowercase();
    match &field.kind {
        FieldKind::Scalar { .. } | FieldKind::Bool => {
            buf.line(&format!("{name} = pbMessage.{pb}();"));
        }
        FieldKind::String => {
            buf.line(&format!(
                "{name} = FString(UTF8_TO_TCHAR(pbMessage.{pb}().c_str()));"
            ));
        }
        FieldKind::Enum { name: enum_name } => {
            buf.line(&format!(
                "if ({enum_name}_IsValid((int32)pbMessage.{pb}())) {{"
            ));
            buf.indent();
            buf.line(&format!(
                "{name} = static_cast<{enum_name}>(pbMessage.{pb}());"
            ));
            buf.outdent();
            buf.line("}");
        }
        FieldKind::Message { .. } => {
            buf.line(&format!("if (pbMessage.has_{pb}()) {{"));
            buf.indent();
            buf.line(&format!("{name}.FromPB(pbMessage.{pb}());"));
            buf.outdent();
            buf.line("}");
        }
        FieldKind::Repeated { element } => {
            buf.line(&format!("for (const auto& element : pbMessage.{pb}()) {{"));
            buf.indent();
            match &**element {
                FieldKind::Scalar { .. } | FieldKind::Bool => {
                    buf.line(&format!("{name}.Add(element);"));
                }
                FieldKind::String => {
                    buf.line(&format!(
                        "{name}.Add(FString(UTF8_TO_TCHAR(element.c_str())));"
                    ));
                }
                FieldKind::Enum { name: enum_name } => {
                    buf.line(&format!("if ({enum_name}_IsValid((int32)element)) {{"));
                    buf.indent();
                    buf.line(&format!("{name}.Add(static_cast<{enum_name}>(element));"));
                    buf.outdent();
                    buf.line("}");
                }
                FieldKind::Message { message } => {
                    buf.line(&format!("F{message} item;"));
                    buf.line("item.FromPB(element);");
                    buf.line(&format!("{name}.Add(item);"));
                }
                FieldKind::Repeated { .. } => {
                    return Err(unsupported(field, "repeated element inside repeated field"));
                }
                FieldKind::Map { .. } => {
                    return Err(unsupported(field, "map element inside repeated field"));
                }
            }
            buf.outdent();
            buf.line("}");
        }
        FieldKind::Map { key, value } => {
            buf.line(&format!("for (const auto& element : pbMessage.{pb}()) {{"));
            buf.indent();
            map_pair_to_native(field, key, "first", "key", buf)?;
            map_pair_to_native(field, value, "second", "value", buf)?;
            buf.line(&format!("{name}.Add(key, value);"));
            buf.outdent();
            buf.line("}");
        }
    }
    Ok(())
}

/// One half of a map entry, schema → native. `part` is the protobuf pair
/// member (`first` / `second`).
fn map_pair_to_native(
    owner: &FieldSchema,
    part_field: &FieldSchema,
    part: &str,
    local: &str,
    buf: &mut CodeBuf,
) -> Result<(), GenError> {
    match &part_field.kind {
        FieldKind::Scalar { ty } => {
            buf.line(&format!("{} {local} = element.{part};", scalar_cpp(*ty)));
        }
        FieldKind::Bool => {
            buf.line(&format!("bool {local} = element.{part};"));
        }
        FieldKind::String => {
            buf.line(&format!(
                "FString {local} = FString(UTF8_TO_TCHAR(element.{part}.c_str()));"
            ));
        }
        FieldKind::Enum { name } => {
            buf.line(&format!(
                "{name} {local} = static_cast<{name}>(element.{part});"
            ));
        }
        FieldKind::Message { message } => {
            buf.line(&format!("F{message} {local};"));
            buf.line(&format!("{local}.FromPB(element.{part});"));
        }
        FieldKind::Repeated { .. } => {
            return Err(unsupported(owner, "repeated field inside map entry"));
        }
        FieldKind::Map { .. } => {
            return Err(unsupported(owner, "map field inside map entry"));
        }
    }
    Ok(())
}
