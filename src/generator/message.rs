//! Message bindings: one declaration + conversion unit per message,
//! shaped by the name classifier and filled by the field dispatcher.

use crate::error::GenError;
use crate::generator::classify::{Classification, classify};
use crate::generator::field;
use crate::generator::options::Options;
use crate::generator::printer::CodeBuf;
use crate::generator::{Diagnostics, GeneratedUnit};
use crate::model::MessageSchema;

pub struct MessageGenerator<'a> {
    schema: &'a MessageSchema,
    options: &'a Options,
    classification: Classification,
}

impl<'a> MessageGenerator<'a> {
    pub fn new(schema: &'a MessageSchema, options: &'a Options) -> Self {
        let classification = classify(&schema.name, options.data_fallback);
        Self {
            schema,
            options,
            classification,
        }
    }

    /// Qualified protobuf-side type for this message.
    fn pb_type(&self, pb_namespace: &str) -> String {
        if pb_namespace.is_empty() {
            self.schema.name.clone()
        } else {
            format!("{pb_namespace}::{}", self.schema.name)
        }
    }

    /// Produce the declaration/definition unit for this message.
    ///
    /// Map-entry synthetic types are skipped outright; an unclassified
    /// message yields an empty unit plus a diagnostic (hard error under
    /// `strict`).
    pub fn generate(
        &self,
        pb_namespace: &str,
        diags: &mut Diagnostics,
    ) -> Result<GeneratedUnit, GenError> {
        if self.schema.map_entry {
            return Ok(GeneratedUnit::default());
        }
        match self.classification {
            Classification::PlainData => self.generate_data(pb_namespace),
            Classification::Request => self.generate_request(pb_namespace, diags),
            Classification::Response => self.generate_response(pb_namespace),
            Classification::Unclassified => {
                if self.options.strict {
                    Err(GenError::Unclassified(self.schema.name.clone()))
                } else {
                    diags.warn(format!(
                        "message {} matches no naming convention (Req/Resp/Push/Data); skipped",
                        self.schema.name
                    ));
                    Ok(GeneratedUnit::default())
                }
            }
        }
    }

    fn member_block(&self, buf: &mut CodeBuf) {
        for f in &self.schema.fields {
            field::member_decl(f, buf);
        }
    }

    fn from_pb_body(&self, buf: &mut CodeBuf) -> Result<(), GenError> {
        for f in &self.schema.fields {
            field::to_native(f, buf)?;
        }
        Ok(())
    }

    fn to_pb_body(&self, buf: &mut CodeBuf) -> Result<(), GenError> {
        for f in &self.schema.fields {
            field::to_schema(f, buf)?;
        }
        Ok(())
    }

    /// `*Data`: plain struct with bidirectional conversion.
    fn generate_data(&self, pb_namespace: &str) -> Result<GeneratedUnit, GenError> {
        let name = &self.schema.name;
        let pb_type = self.pb_type(pb_namespace);

        let mut decl = CodeBuf::new();
        decl.line("USTRUCT(BlueprintType)");
        decl.line(&format!("struct F{name} {{"));
        decl.indent();
        decl.line("GENERATED_USTRUCT_BODY()");
        decl.outdent();
        decl.blank();
        decl.line("public:");
        decl.indent();
        decl.line(&format!("void FromPB(const {pb_type}& pbMessage);"));
        decl.line(&format!("void ToPB({pb_type}& pbMessage) const;"));
        decl.blank();
        self.member_block(&mut decl);
        decl.outdent();
        decl.line("};");
        decl.blank();

        let mut def = CodeBuf::new();
        def.line(&format!("void F{name}::FromPB(const {pb_type}& pbMessage) {{"));
        def.indent();
        self.from_pb_body(&mut def)?;
        def.outdent();
        def.line("}");
        def.blank();
        def.line(&format!("void F{name}::ToPB({pb_type}& pbMessage) const {{"));
        def.indent();
        self.to_pb_body(&mut def)?;
        def.outdent();
        def.line("}");
        def.blank();

        Ok(GeneratedUnit {
            decl: decl.finish(),
            def: def.finish(),
        })
    }

    /// `*Req`: outgoing request. The routing command code comes from the
    /// name itself: `Module_ProtocolReq` → module, protocol.
    fn generate_request(
        &self,
        pb_namespace: &str,
        diags: &mut Diagnostics,
    ) -> Result<GeneratedUnit, GenError> {
        let name = &self.schema.name;
        let pb_type = self.pb_type(pb_namespace);

        let mut decl = CodeBuf::new();
        decl.line("UCLASS(Blueprintable)");
        decl.line(&format!(
            "class {} U{name} : public UProtoRequest {{",
            self.options.export_macro
        ));
        decl.indent();
        decl.line("GENERATED_BODY()");
        decl.outdent();
        decl.blank();
        decl.line("public:");
        decl.indent();
        decl.line("void Pack() override;");
        decl.blank();
        self.member_block(&mut decl);
        decl.outdent();
        decl.line("};");
        decl.blank();

        let stem = name.strip_suffix("Req").unwrap_or(name);
        let words: Vec<&str> = stem.split('_').filter(|w| !w.is_empty()).collect();
        if words.len() < 2 {
            diags.warn(format!(
                "request {name} has no Module_Protocol name parts; Pack body skipped"
            ));
            return Ok(GeneratedUnit {
                decl: decl.finish(),
                def: String::new(),
            });
        }
        let (module, protocol) = (words[0], words[1]);

        let mut def = CodeBuf::new();
        def.line(&format!("void U{name}::Pack() {{"));
        def.indent();
        def.line(&format!(
            "mProtocolModule = (uint8)EProtocolModule::{module};"
        ));
        def.line(&format!(
            "mSpecificProtocol = (uint8)E{module}Protocol::{protocol};"
        ));
        def.line(&format!("{pb_type} pbMessage;"));
        self.to_pb_body(&mut def)?;
        def.line("mMessage = &pbMessage;");
        def.line("UProtoRequest::Pack();");
        def.outdent();
        def.line("}");
        def.blank();

        Ok(GeneratedUnit {
            decl: decl.finish(),
            def: def.finish(),
        })
    }

    /// `*Resp` / `*Push`: paired data holder + unpack wrapper.
    fn generate_response(&self, pb_namespace: &str) -> Result<GeneratedUnit, GenError> {
        let name = &self.schema.name;
        let pb_type = self.pb_type(pb_namespace);
        let envelope = if pb_namespace.is_empty() {
            "AllResponse".to_string()
        } else {
            format!("{pb_namespace}::AllResponse")
        };

        let mut decl = CodeBuf::new();
        decl.line("USTRUCT(BlueprintType)");
        decl.line(&format!("struct F{name}Data {{"));
        decl.indent();
        decl.line("GENERATED_USTRUCT_BODY()");
        decl.outdent();
        decl.blank();
        decl.line("public:");
        decl.indent();
        decl.line(&format!("void FromPB(const {pb_type}& pbMessage);"));
        decl.blank();
        self.member_block(&mut decl);
        decl.outdent();
        decl.line("};");
        decl.blank();
        decl.line("UCLASS(Blueprintable)");
        decl.line(&format!(
            "class {} U{name} : public UProtoResponse {{",
            self.options.export_macro
        ));
        decl.indent();
        decl.line("GENERATED_BODY()");
        decl.outdent();
        decl.blank();
        decl.line("public:");
        decl.indent();
        decl.line("void Unpack(OriginalMessage* message) override;");
        decl.line("void* GetData() override { return &mData; }");
        decl.blank();
        decl.outdent();
        decl.line("private:");
        decl.indent();
        decl.line(&format!("F{name}Data mData;"));
        decl.outdent();
        decl.line("};");
        decl.blank();

        let mut def = CodeBuf::new();
        def.line(&format!("void F{name}Data::FromPB(const {pb_type}& pbMessage) {{"));
        def.indent();
        self.from_pb_body(&mut def)?;
        def.outdent();
        def.line("}");
        def.blank();
        def.line(&format!("void U{name}::Unpack(OriginalMessage* message) {{"));
        def.indent();
        def.line("mProtocolNo = (uint8)message->ProtocolModule << 8 | message->SpecificProtocol;");
        def.line(&format!("{envelope} response;"));
        def.line("response.ParseFromArray(message->Buffer, message->BufferSize);");
        def.line("mState = response.state();");
        def.line("mMsg = FString(UTF8_TO_TCHAR(response.msg().c_str()));");
        def.line(&format!("{pb_type} pbMessage;"));
        def.line("pbMessage.ParseFromArray(response.result().c_str(), response.result().length());");
        def.line("mData.FromPB(pbMessage);");
        def.outdent();
        def.line("}");
        def.blank();

        Ok(GeneratedUnit {
            decl: decl.finish(),
            def: def.finish(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldKind, FieldSchema, ScalarType};

    fn field(name: &str, kind: FieldKind) -> FieldSchema {
        FieldSchema {
            name: name.to_string(),
            kind,
        }
    }

    fn message(name: &str, fields: Vec<FieldSchema>) -> MessageSchema {
        MessageSchema {
            name: name.to_string(),
            fields,
            messages: Vec::new(),
            enums: Vec::new(),
            map_entry: false,
        }
    }

    fn generate(schema: &MessageSchema, options: &Options) -> (GeneratedUnit, Vec<String>) {
        let mut diags = Diagnostics::default();
        let unit = MessageGenerator::new(schema, options)
            .generate("Game::Protocol", &mut diags)
            .expect("generation ok");
        (unit, diags.into_warnings())
    }

    #[test]
    fn test_unclassified_message_yields_empty_unit() {
        let schema = message("Helper", vec![field("X", FieldKind::Bool)]);
        let options = Options::default();
        let (unit, warnings) = generate(&schema, &options);
        assert!(unit.decl.is_empty());
        assert!(unit.def.is_empty());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Helper"));
    }

    #[test]
    fn test_unclassified_is_fatal_under_strict() {
        let schema = message("Helper", vec![]);
        let options = Options {
            strict: true,
            ..Options::default()
        };
        let mut diags = Diagnostics::default();
        let err = MessageGenerator::new(&schema, &options)
            .generate("", &mut diags)
            .unwrap_err();
        assert!(matches!(err, GenError::Unclassified(name) if name == "Helper"));
    }

    #[test]
    fn test_map_entry_message_is_skipped_silently() {
        let mut schema = message("ScoresEntry", vec![]);
        schema.map_entry = true;
        let options = Options::default();
        let (unit, warnings) = generate(&schema, &options);
        assert!(unit.decl.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_plain_data_round_trip_covers_every_field() {
        let schema = message(
            "PlayerData",
            vec![
                field(
                    "Uid",
                    FieldKind::Scalar {
                        ty: ScalarType::Int64,
                    },
                ),
                field("Nick", FieldKind::String),
                field(
                    "Color",
                    FieldKind::Enum {
                        name: "EColor".into(),
                    },
                ),
            ],
        );
        let options = Options::default();
        let (unit, _) = generate(&schema, &options);

        assert!(unit.decl.contains("struct FPlayerData {"));
        assert!(unit.decl.contains("void FromPB(const Game::Protocol::PlayerData& pbMessage);"));
        assert!(unit.decl.contains("void ToPB(Game::Protocol::PlayerData& pbMessage) const;"));

        // every field converts in both directions
        for pb_name in ["uid", "nick", "color"] {
            assert!(
                unit.def.contains(&format!("pbMessage.set_{pb_name}")),
                "missing outgoing conversion for {pb_name}"
            );
            assert!(
                unit.def.contains(&format!("pbMessage.{pb_name}()")),
                "missing incoming conversion for {pb_name}"
            );
        }
    }

    #[test]
    fn test_request_derives_module_and_protocol() {
        let schema = message(
            "Login_SignInReq",
            vec![field("Token", FieldKind::String)],
        );
        let options = Options::default();
        let (unit, warnings) = generate(&schema, &options);
        assert!(warnings.is_empty());
        assert!(unit.decl.contains("class PROTO_API ULogin_SignInReq : public UProtoRequest {"));
        assert!(unit.def.contains("mProtocolModule = (uint8)EProtocolModule::Login;"));
        assert!(unit.def.contains("mSpecificProtocol = (uint8)ELoginProtocol::SignIn;"));
        assert!(unit.def.contains("UProtoRequest::Pack();"));
    }

    #[test]
    fn test_request_without_separator_skips_pack_body() {
        let schema = message("LoginReq", vec![]);
        let options = Options::default();
        let (unit, warnings) = generate(&schema, &options);
        assert!(unit.decl.contains("void Pack() override;"));
        assert!(unit.def.is_empty());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("LoginReq"));
    }

    #[test]
    fn test_response_pairs_holder_and_wrapper() {
        let schema = message(
            "LoginResp",
            vec![field(
                "Code",
                FieldKind::Scalar {
                    ty: ScalarType::Int32,
                },
            )],
        );
        let options = Options::default();
        let (unit, _) = generate(&schema, &options);

        assert!(unit.decl.contains("struct FLoginRespData {"));
        assert!(unit.decl.contains("class PROTO_API ULoginResp : public UProtoResponse {"));
        assert!(unit.decl.contains("void* GetData() override { return &mData; }"));
        assert!(unit.def.contains("void FLoginRespData::FromPB(const Game::Protocol::LoginResp& pbMessage) {"));
        assert!(unit.def.contains("Game::Protocol::AllResponse response;"));
        assert!(unit.def.contains("mData.FromPB(pbMessage);"));
    }

    #[test]
    fn test_push_uses_the_response_shape() {
        let schema = message("KickPush", vec![]);
        let options = Options::default();
        let (unit, _) = generate(&schema, &options);
        assert!(unit.decl.contains("class PROTO_API UKickPush : public UProtoResponse {"));
    }
}
