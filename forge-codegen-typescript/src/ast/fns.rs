//! TypeScript arrow function declaration builder.

use hookforge_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter of an arrow function.
///
/// The name may be a destructuring pattern such as `{ userId }`.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: Option<String>,
    pub optional: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
            optional: false,
        }
    }

    /// A parameter without a type annotation.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn declaration(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        match &self.ty {
            Some(ty) => format!("{}{}: {}", self.name, optional, ty),
            None => format!("{}{}", self.name, optional),
        }
    }
}

/// Builder for `const name = (params): Ret => { ... };` declarations.
#[derive(Debug, Clone)]
pub struct ConstFn {
    name: String,
    exported: bool,
    is_async: bool,
    params: Vec<Param>,
    params_on_own_lines: bool,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl ConstFn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            is_async: false,
            params: Vec::new(),
            params_on_own_lines: false,
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Write each parameter on its own line.
    pub fn multiline_params(mut self) -> Self {
        self.params_on_own_lines = true;
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a statement fragment to the body.
    pub fn statement(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    /// Add raw body content; relative indentation inside `content` is kept.
    pub fn body(mut self, content: &str) -> Self {
        for line in content.lines() {
            if line.trim().is_empty() {
                self.body.push(CodeFragment::blank());
            } else {
                self.body.push(CodeFragment::line(line));
            }
        }
        self
    }

    /// Add an empty line to the body.
    pub fn blank(mut self) -> Self {
        self.body.push(CodeFragment::blank());
        self
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().node(self).build()
    }

    fn signature(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };
        let params: Vec<String> = self.params.iter().map(Param::declaration).collect();
        let params = if self.params_on_own_lines && !params.is_empty() {
            format!("\n  {}\n", params.join(",\n  "))
        } else {
            params.join(", ")
        };
        let return_type = match &self.return_type {
            Some(ret) => format!(": {}", ret),
            None => String::new(),
        };
        format!(
            "{}const {} = {}({}){} => {{",
            export, self.name, async_kw, params, return_type
        )
    }
}

impl Renderable for ConstFn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        // Parameter types may span lines; keep each on its own fragment.
        let mut fragments: Vec<CodeFragment> = self
            .signature()
            .lines()
            .map(CodeFragment::line)
            .collect();
        fragments.push(CodeFragment::indent(self.body.clone()));
        fragments.push(CodeFragment::line("};"));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fn() {
        let f = ConstFn::new("ping").body("return 'pong';").build();
        assert_eq!(f, "export const ping = () => {\n  return 'pong';\n};\n");
    }

    #[test]
    fn test_async_fn_with_params() {
        let f = ConstFn::new("updateUser")
            .async_()
            .param(Param::new("{ userId }", "UpdateUserVariables"))
            .returns("Promise<UpdateUserResponse>")
            .build();
        assert!(f.starts_with(
            "export const updateUser = async ({ userId }: UpdateUserVariables): Promise<UpdateUserResponse> => {\n"
        ));
    }

    #[test]
    fn test_multiline_params() {
        let f = ConstFn::new("getUser")
            .async_()
            .param(Param::new("context", "QueryFunctionContext"))
            .multiline_params()
            .returns("Promise<GetUserResponse>")
            .body("const { signal } = context;")
            .build();
        assert_eq!(
            f,
            "export const getUser = async (\n  context: QueryFunctionContext\n): Promise<GetUserResponse> => {\n  const { signal } = context;\n};\n"
        );
    }

    #[test]
    fn test_body_keeps_relative_indent_and_blanks() {
        let f = ConstFn::new("run")
            .private()
            .param(Param::new("flag", "boolean").optional())
            .body("if (flag) {\n  go();\n}\n\nreturn;")
            .build();
        assert_eq!(
            f,
            "const run = (flag?: boolean) => {\n  if (flag) {\n    go();\n  }\n\n  return;\n};\n"
        );
    }

    #[test]
    fn test_untyped_param() {
        let f = ConstFn::new("noop").param(Param::untyped("_")).build();
        assert!(f.starts_with("export const noop = (_) => {"));
    }
}
