use std::fs;

use protobind::generator::{self, options::Options};
use protobind::parser::load_from_json;
use protobind::writer;

fn generate_fixture() -> generator::GeneratedFile {
    let json = fs::read_to_string("tests/login_schema.json").expect("fixture readable");
    let schema = load_from_json(&json).expect("valid schema");
    let options = Options::from_args::<&str>(&[]).expect("default options");
    generator::generate(&schema, &options).expect("generation ok")
}

#[test]
fn generates_header_and_source_streams() {
    let generated = generate_fixture();
    assert_eq!(generated.base, "login");

    assert!(generated.header.starts_with("// Generated by protobind. DO NOT EDIT!"));
    assert!(generated.header.contains("// source: login.proto"));
    assert!(generated.header.contains("#include \"ApiProtocol.h\""));
    assert!(generated.header.contains("#include \"login.pb.h\""));
    assert!(generated.header.contains("#include \"common_UE.h\""));
    assert!(generated.header.contains("using namespace Game::Protocol;"));

    assert!(generated.source.contains("#include \"login_UE.h\""));
}

#[test]
fn nested_messages_precede_their_parent() {
    let generated = generate_fixture();
    let item = generated.header.find("struct FItemData {").expect("item decl");
    let player = generated.header.find("struct FPlayerData {").expect("player decl");
    assert!(item < player);
}

#[test]
fn directive_includes_are_deduplicated() {
    let generated = generate_fixture();
    // two values carry file=login.proto; only one include survives
    assert_eq!(
        generated.header.matches("#include \"login_UE.h\"").count(),
        1
    );
}

#[test]
fn dispatch_table_applies_the_push_suffix_rule() {
    let generated = generate_fixture();
    assert!(generated.header.contains(
        "{ (int32)EProtocolId::LOGIN_SIGN_IN, ULogin_SignInResp::StaticClass() },"
    ));
    assert!(generated.header.contains(
        "{ (int32)EProtocolId::LOGIN_KICK_PUSH, ULogin_KickPush::StaticClass() },"
    ));
}

#[test]
fn duplicate_enum_numbers_collapse_in_validity_check() {
    let generated = generate_fixture();
    // LOGIN_SIGN_IN and LOGIN_LEGACY share number 1
    let is_valid = generated
        .source
        .split("bool EProtocolId_IsValid")
        .nth(1)
        .expect("EProtocolId_IsValid definition");
    let is_valid = &is_valid[..is_valid.find('}').unwrap_or(is_valid.len())];
    assert_eq!(is_valid.matches("case 1:").count(), 1);
}

#[test]
fn unclassified_and_map_entry_messages_are_omitted() {
    let generated = generate_fixture();
    assert!(!generated.header.contains("Helper"));
    assert!(!generated.header.contains("ScoresEntry"));
    assert_eq!(generated.warnings.len(), 1);
    assert!(generated.warnings[0].contains("Helper"));
}

#[test]
fn plain_data_converts_every_field_in_both_directions() {
    let generated = generate_fixture();
    for pb_name in ["uid", "nick", "vip", "color", "bag", "scores"] {
        assert!(
            generated.source.contains(&format!("{pb_name}(")),
            "missing conversion for {pb_name}"
        );
    }
    assert!(generated.source.contains("void FPlayerData::FromPB"));
    assert!(generated.source.contains("void FPlayerData::ToPB"));
    assert!(generated.source.contains("Scores.Add(key, value);"));
    assert!(generated.source.contains("(*pbMessage.mutable_scores())[key] = value;"));
}

#[test]
fn writer_emits_the_file_pair() {
    let generated = generate_fixture();
    let dir = tempfile::tempdir().expect("temp dir");
    writer::cpp::emit(&generated, dir.path()).expect("write ok");

    let header = fs::read_to_string(dir.path().join("login_UE.h")).expect("header written");
    let source = fs::read_to_string(dir.path().join("login_UE.cpp")).expect("source written");
    assert_eq!(header, generated.header);
    assert_eq!(source, generated.source);
}
