//! TypeScript const declaration builder.

use hookforge_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::JsObject;

#[derive(Debug, Clone)]
enum ConstValue {
    Expr(String),
    Object(JsObject),
}

/// Builder for TypeScript const declarations.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: ConstValue,
    ty: Option<String>,
    exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: ConstValue::Expr(value.into()),
            ty: None,
            exported: true,
        }
    }

    /// A const initialized with a multi-line object literal.
    pub fn object(name: impl Into<String>, value: JsObject) -> Self {
        Self {
            name: name.into(),
            value: ConstValue::Object(value),
            ty: None,
            exported: true,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Make this const private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the const declaration as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().node(self).build()
    }

    fn head(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let type_annotation = match &self.ty {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };
        format!("{}const {}{} =", export, self.name, type_annotation)
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match &self.value {
            ConstValue::Expr(value) => {
                vec![CodeFragment::line(format!("{} {};", self.head(), value))]
            }
            ConstValue::Object(object) if object.is_empty() => {
                vec![CodeFragment::line(format!("{} {{}};", self.head()))]
            }
            ConstValue::Object(object) => {
                vec![object.block(format!("{} {{", self.head()), "};")]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_const() {
        let c = Const::new("foo", "42").build();
        assert_eq!(c, "export const foo = 42;\n");
    }

    #[test]
    fn test_const_with_type() {
        let c = Const::new("name", "'hello'").ty("string").build();
        assert_eq!(c, "export const name: string = 'hello';\n");
    }

    #[test]
    fn test_private_const() {
        let c = Const::new("secret", "123").private().build();
        assert_eq!(c, "const secret = 123;\n");
    }

    #[test]
    fn test_const_with_object() {
        let c = Const::object(
            "getUserKey",
            JsObject::new().raw("keys", "(args: { scope: 'getUser' }) => [args] as const"),
        )
        .build();
        assert_eq!(
            c,
            "export const getUserKey = {\n  keys: (args: { scope: 'getUser' }) => [args] as const,\n};\n"
        );
    }
}
