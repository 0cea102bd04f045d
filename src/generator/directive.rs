//! Side-channel directives embedded in trailing documentation comments.
//!
//! A trailing comment is a comma-separated token list. `file=<name>.proto`
//! contributes a cross-file registration of the bare module name and
//! `req=<Target>` contributes a dispatch entry for the enclosing enum
//! value. Tokens matching neither prefix are dropped without error.

use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `file=login.proto`: bare module name, extension already stripped.
    File(String),
    /// `req=Login`: dispatch target stem for the enclosing enum value.
    Req(String),
}

/// Decode all directives from one comment, in encounter order.
///
/// Pure: deduplication of `file=` registrations is the caller's job,
/// through [`DedupRegistry`].
pub fn parse_directives(comment: &str) -> Vec<Directive> {
    let mut directives = Vec::new();
    for token in comment.split(',') {
        let token = token.trim();
        if let Some(rest) = token.strip_prefix("file=") {
            // a value missing the extension is kept verbatim
            let name = rest.strip_suffix(".proto").unwrap_or(rest);
            if !name.is_empty() {
                directives.push(Directive::File(name.to_string()));
            }
        } else if let Some(rest) = token.strip_prefix("req=") {
            if !rest.is_empty() {
                directives.push(Directive::Req(rest.to_string()));
            }
        }
    }
    directives
}

/// Per-run set of already-materialized cross-file registrations.
///
/// Created fresh inside `generator::generate` and threaded through the
/// orchestrator, so independent runs never share state.
#[derive(Debug, Default)]
pub struct DedupRegistry {
    seen: HashSet<String>,
}

impl DedupRegistry {
    /// Returns true the first time `name` is registered in this run.
    pub fn register(&mut self, name: &str) -> bool {
        self.seen.insert(name.to_string())
    }
}
