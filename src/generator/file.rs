//! File orchestrator: flattens the message tree into generation order,
//! assembles the header and source streams and wraps them in the package
//! namespace. No field-level logic lives here.

use crate::error::GenError;
use crate::generator::directive::DedupRegistry;
use crate::generator::enums::EnumGenerator;
use crate::generator::message::MessageGenerator;
use crate::generator::options::Options;
use crate::generator::printer::CodeBuf;
use crate::generator::{Diagnostics, GeneratedFile, GeneratedUnit};
use crate::model::{EnumSchema, FileSchema, MessageSchema};

/// Post-order flatten: children land strictly before their parent, so a
/// parent's unit can reference every nested type by name.
fn flatten<'a>(msg: &'a MessageSchema, order: &mut Vec<&'a MessageSchema>) {
    for child in &msg.messages {
        flatten(child, order);
    }
    order.push(msg);
}

/// Schema file name minus its fixed-width `.proto` extension.
fn base_name(file_name: &str) -> &str {
    let cut = file_name.len().saturating_sub(".proto".len());
    file_name.get(..cut).unwrap_or("")
}

pub struct FileGenerator<'a> {
    file: &'a FileSchema,
    options: &'a Options,
    /// Every message in the tree, post-order, each exactly once.
    order: Vec<&'a MessageSchema>,
    /// File-level enums first, then nested enums in flatten order.
    enums: Vec<&'a EnumSchema>,
}

impl<'a> FileGenerator<'a> {
    pub fn new(file: &'a FileSchema, options: &'a Options) -> Self {
        let mut order = Vec::new();
        for msg in &file.messages {
            flatten(msg, &mut order);
        }

        let mut enums: Vec<&EnumSchema> = file.enums.iter().collect();
        for msg in &order {
            enums.extend(msg.enums.iter());
        }

        Self {
            file,
            options,
            order,
            enums,
        }
    }

    pub fn generate(
        &self,
        registry: &mut DedupRegistry,
        diags: &mut Diagnostics,
    ) -> Result<(String, String), GenError> {
        let base = base_name(&self.file.name);
        let pb_namespace = self.file.package.replace('.', "::");
        let namespace_parts: Vec<&str> = self
            .file
            .package
            .split('.')
            .filter(|p| !p.is_empty())
            .collect();

        let enum_generators: Vec<EnumGenerator> = self
            .enums
            .iter()
            .map(|e| EnumGenerator::new(e, self.options))
            .collect();
        let enum_units: Vec<GeneratedUnit> =
            enum_generators.iter().map(|g| g.generate()).collect();

        let mut message_units = Vec::with_capacity(self.order.len());
        for msg in &self.order {
            let unit = MessageGenerator::new(msg, self.options).generate(&pb_namespace, diags)?;
            message_units.push(unit);
        }

        // ── Header ────────────────────────────────────────────────────
        let mut header = CodeBuf::new();
        header.line("// Generated by protobind. DO NOT EDIT!");
        header.line(&format!("// source: {}", self.file.name));
        header.line("#pragma once");
        header.blank();
        header.line(&format!("#include \"{}\"", self.options.runtime_header));
        header.line(&format!("#include \"{base}.pb.h\""));
        for generator in &enum_generators {
            for include in generator.directive_includes(registry) {
                header.line(&include);
            }
        }
        for dep in &self.file.dependencies {
            header.line(&format!("#include \"{}_UE.h\"", base_name(dep)));
        }
        if !pb_namespace.is_empty() {
            header.line(&format!("using namespace {pb_namespace};"));
        }
        header.blank();

        open_namespaces(&mut header, &namespace_parts);
        for unit in &enum_units {
            header.push(&unit.decl);
        }
        for unit in &message_units {
            header.push(&unit.decl);
        }
        close_namespaces(&mut header, &namespace_parts);

        // ── Source ────────────────────────────────────────────────────
        let mut source = CodeBuf::new();
        source.line("// Generated by protobind. DO NOT EDIT!");
        source.line(&format!("// source: {}", self.file.name));
        source.blank();
        source.line(&format!("#include \"{base}_UE.h\""));
        source.blank();

        open_namespaces(&mut source, &namespace_parts);
        for unit in &enum_units {
            source.push(&unit.def);
        }
        for unit in &message_units {
            source.push(&unit.def);
        }
        close_namespaces(&mut source, &namespace_parts);

        Ok((header.finish(), source.finish()))
    }
}

fn open_namespaces(buf: &mut CodeBuf, parts: &[&str]) {
    for part in parts {
        buf.line(&format!("namespace {part} {{"));
    }
    if !parts.is_empty() {
        buf.blank();
    }
}

fn close_namespaces(buf: &mut CodeBuf, parts: &[&str]) {
    if !parts.is_empty() {
        buf.blank();
    }
    for part in parts.iter().rev() {
        buf.line(&format!("}}  // namespace {part}"));
    }
}

/// Run the whole generation pass for one schema file.
///
/// Owns the per-run `DedupRegistry`, so two consecutive calls never see
/// each other's registrations.
pub fn generate(file: &FileSchema, options: &Options) -> Result<GeneratedFile, GenError> {
    let mut registry = DedupRegistry::default();
    let mut diags = Diagnostics::default();

    let generator = FileGenerator::new(file, options);
    let (header, source) = generator.generate(&mut registry, &mut diags)?;

    Ok(GeneratedFile {
        base: base_name(&file.name).to_string(),
        header,
        source,
        warnings: diags.into_warnings(),
    })
}
