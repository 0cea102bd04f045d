//! Enum bindings: value listing, validity check over the union of
//! declared numbers, directive-driven includes and the response dispatch
//! table.

use std::collections::BTreeSet;

use crate::generator::GeneratedUnit;
use crate::generator::directive::{DedupRegistry, Directive, parse_directives};
use crate::generator::options::Options;
use crate::generator::printer::CodeBuf;
use crate::model::EnumSchema;

/// One `req=` directive resolved to its generated handler class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchEntry {
    pub value_name: String,
    pub target_class: String,
}

pub struct EnumGenerator<'a> {
    schema: &'a EnumSchema,
    options: &'a Options,
}

impl<'a> EnumGenerator<'a> {
    pub fn new(schema: &'a EnumSchema, options: &'a Options) -> Self {
        Self { schema, options }
    }

    /// Includes contributed by `file=` directives, deduplicated through
    /// the per-run registry: at most one include per distinct name no
    /// matter how many values reference it.
    pub fn directive_includes(&self, registry: &mut DedupRegistry) -> Vec<String> {
        let mut includes = Vec::new();
        for value in &self.schema.values {
            for directive in parse_directives(&value.comment) {
                if let Directive::File(name) = directive {
                    if registry.register(&name) {
                        includes.push(format!(
                            "#include \"{}{}_UE.h\"",
                            self.options.include_prefix, name
                        ));
                    }
                }
            }
        }
        includes
    }

    /// Dispatch entries in encounter order. Unlike includes these are
    /// never deduplicated: every `req=` directive yields one entry.
    ///
    /// Target naming: a `_PUSH`-suffixed value dispatches to the Push
    /// handler, everything else to the Resp handler.
    pub fn dispatch_entries(&self) -> Vec<DispatchEntry> {
        let mut entries = Vec::new();
        for value in &self.schema.values {
            for directive in parse_directives(&value.comment) {
                if let Directive::Req(target) = directive {
                    let target_class = if value.name.ends_with("_PUSH") {
                        format!("U{target}Push")
                    } else {
                        format!("U{target}Resp")
                    };
                    entries.push(DispatchEntry {
                        value_name: value.name.clone(),
                        target_class,
                    });
                }
            }
        }
        entries
    }

    pub fn generate(&self) -> GeneratedUnit {
        GeneratedUnit {
            decl: self.render_decl(),
            def: self.render_def(),
        }
    }

    fn render_decl(&self) -> String {
        let mut buf = CodeBuf::new();
        let name = &self.schema.name;

        buf.line(&format!("enum class {name} : int32 {{"));
        buf.indent();
        for value in &self.schema.values {
            if value.comment.is_empty() {
                buf.line(&format!("{} = {},", value.name, value.number));
            } else {
                buf.line(&format!(
                    "{} = {}, // {}",
                    value.name, value.number, value.comment
                ));
            }
        }
        buf.outdent();
        buf.line("};");
        buf.line(&format!("bool {name}_IsValid(int32 value);"));
        buf.blank();

        let entries = self.dispatch_entries();
        if !entries.is_empty() {
            buf.line("UCLASS()");
            buf.line(&format!(
                "class {} U{name}ResponseMap : public UObject {{",
                self.options.export_macro
            ));
            buf.indent();
            buf.line("GENERATED_BODY()");
            buf.outdent();
            buf.line("public:");
            buf.indent();
            buf.line("TMap<int32, TSubclassOf<UProtoResponse>> ResponseMap = {");
            buf.indent();
            for entry in &entries {
                buf.line(&format!(
                    "{{ (int32){name}::{}, {}::StaticClass() }},",
                    entry.value_name, entry.target_class
                ));
            }
            buf.outdent();
            buf.line("};");
            buf.outdent();
            buf.line("};");
            buf.blank();
        }

        buf.finish()
    }

    fn render_def(&self) -> String {
        let mut buf = CodeBuf::new();
        let name = &self.schema.name;

        // Multiple values may share a number; cover each number once.
        let numbers: BTreeSet<i32> = self.schema.values.iter().map(|v| v.number).collect();

        buf.line(&format!("bool {name}_IsValid(int32 value) {{"));
        buf.indent();
        buf.line("switch (value) {");
        buf.indent();
        for number in numbers {
            buf.line(&format!("case {number}:"));
        }
        buf.indent();
        buf.line("return true;");
        buf.outdent();
        buf.line("default:");
        buf.indent();
        buf.line("return false;");
        buf.outdent();
        buf.outdent();
        buf.line("}");
        buf.outdent();
        buf.line("}");
        buf.blank();

        buf.finish()
    }
}
