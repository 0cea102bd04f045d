//! The generation engine.
//!
//! A run is one synchronous walk over the schema tree: the orchestrator
//! (`file`) flattens messages into post-order, every message/enum node
//! gets a generator that consults the classifier and directive parser and
//! calls the field dispatcher once per field, and the resulting units are
//! concatenated into a declarations stream and a definitions stream. The
//! core performs no I/O; `writer` owns the files.

pub mod classify;
pub mod directive;
pub mod enums;
pub mod field;
pub mod file;
pub mod message;
pub mod options;
pub mod printer;

pub use file::generate;

/// Immutable output for one message or enum node. Composed only by
/// concatenation at the orchestrator, never mutated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub decl: String,
    pub def: String,
}

/// Output of a whole run: the two text streams plus collected warnings.
#[derive(Debug)]
pub struct GeneratedFile {
    /// Schema file name minus its extension; the writer derives the
    /// output file names from it.
    pub base: String,
    pub header: String,
    pub source: String,
    pub warnings: Vec<String>,
}

/// Collects "skipped by naming convention" diagnostics. Warnings are
/// logged as they occur and carried on the generated file for callers
/// that want to inspect them.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<String>,
}

impl Diagnostics {
    pub fn warn(&mut self, message: String) {
        tracing::warn!("{message}");
        self.warnings.push(message);
    }

    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}
