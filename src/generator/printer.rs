//! Indentation-aware text buffer for assembling generated C++.
//!
//! Generated units are plain strings that the orchestrator composes by
//! concatenation; no I/O happens here.

const INDENT: &str = "    ";

#[derive(Debug, Default)]
pub struct CodeBuf {
    out: String,
    depth: usize,
}

impl CodeBuf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line at the current indentation depth.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(INDENT);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn outdent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Append an already-rendered block verbatim.
    pub fn push(&mut self, block: &str) {
        self.out.push_str(block);
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let mut buf = CodeBuf::new();
        buf.line("struct Foo {");
        buf.indent();
        buf.line("int32 Bar;");
        buf.outdent();
        buf.line("};");
        assert_eq!(buf.finish(), "struct Foo {\n    int32 Bar;\n};\n");
    }

    #[test]
    fn test_blank_lines_are_not_indented() {
        let mut buf = CodeBuf::new();
        buf.indent();
        buf.blank();
        buf.line("x");
        assert_eq!(buf.finish(), "\n    x\n");
    }

    #[test]
    fn test_outdent_saturates() {
        let mut buf = CodeBuf::new();
        buf.outdent();
        buf.line("x");
        assert_eq!(buf.finish(), "x\n");
    }
}
