//! Renders code fragments into indented text.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates rendered nodes, tracking the indentation of nested blocks.
///
/// ```
/// use hookforge_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let ping = CodeFragment::block(
///     "export const ping = () => {",
///     vec![CodeFragment::line("return 'pong';")],
///     Some("};".to_string()),
/// );
/// let code = CodeBuilder::typescript().node(&ping).finish();
///
/// assert_eq!(code, "export const ping = () => {\n  return 'pong';\n};");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Two-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Render `node` at the current depth.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply(fragment);
        }
        self
    }

    /// Consuming form of [`emit`](Self::emit).
    pub fn node(mut self, node: &impl Renderable) -> Self {
        self.emit(node);
        self
    }

    /// The rendered text, newline-terminated.
    pub fn build(self) -> String {
        self.buffer
    }

    /// The rendered text without trailing whitespace, ready to be joined
    /// with other fragments.
    pub fn finish(self) -> String {
        let mut code = self.buffer;
        code.truncate(code.trim_end().len());
        code
    }

    fn apply(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => self.write_line(&s),
            CodeFragment::Blank => self.buffer.push('\n'),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.write_line(&header);
                self.nested(body);
                if let Some(close) = close {
                    self.write_line(&close);
                }
            }
            CodeFragment::Indent(fragments) => self.nested(fragments),
            CodeFragment::Sequence(fragments) => fragments.into_iter().for_each(|f| self.apply(f)),
            CodeFragment::JsDoc(text) => self.write_line(&format!("/** {} */", text)),
        }
    }

    fn nested(&mut self, fragments: Vec<CodeFragment>) {
        self.depth += 1;
        for fragment in fragments {
            self.apply(fragment);
        }
        self.depth -= 1;
    }

    fn write_line(&mut self, s: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks_indent() {
        let inner = CodeFragment::block("if (a) {", vec![CodeFragment::line("b();")], Some("}".into()));
        let outer = CodeFragment::block(
            "function foo() {",
            vec![inner, CodeFragment::blank(), CodeFragment::line("return 1;")],
            Some("}".into()),
        );
        let code = CodeBuilder::typescript().node(&outer).build();
        assert_eq!(code, "function foo() {\n  if (a) {\n    b();\n  }\n\n  return 1;\n}\n");
    }

    #[test]
    fn test_jsdoc_and_indent_fragments() {
        let nodes = vec![
            CodeFragment::jsdoc("Entry point"),
            CodeFragment::line("main(() =>"),
            CodeFragment::indent(vec![CodeFragment::line("run()")]),
            CodeFragment::line(");"),
        ];
        let code = CodeBuilder::typescript().node(&nodes).build();
        assert_eq!(code, "/** Entry point */\nmain(() =>\n  run()\n);\n");
    }

    #[test]
    fn test_finish_trims_trailing_newline() {
        let nodes = vec![CodeFragment::line("};"), CodeFragment::blank()];
        assert_eq!(CodeBuilder::typescript().node(&nodes).finish(), "};");
    }

    #[test]
    fn test_tab_indent() {
        let block = CodeFragment::block("{", vec![CodeFragment::line("x")], Some("}".into()));
        assert_eq!(CodeBuilder::new(Indent::Tab).node(&block).build(), "{\n\tx\n}\n");
    }
}
