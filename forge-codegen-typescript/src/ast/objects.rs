//! TypeScript/JavaScript object literal builder.

use hookforge_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A property in a JavaScript object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A raw expression (will not be quoted).
    Raw(String),
    /// A spread of the key expression (`...key`).
    Spread,
    /// An arrow function body.
    ArrowFn(ArrowFn),
}

impl Property {
    /// Create a property with a raw expression value.
    pub fn raw(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Raw(value.into()),
        }
    }

    /// Create a spread entry (`...expr`).
    pub fn spread(expr: impl Into<String>) -> Self {
        Self {
            key: expr.into(),
            value: PropertyValue::Spread,
        }
    }

    /// Create a property with an arrow function value.
    pub fn arrow_fn(key: impl Into<String>, value: ArrowFn) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::ArrowFn(value),
        }
    }

    fn to_fragment(&self) -> CodeFragment {
        match &self.value {
            PropertyValue::Raw(value) => CodeFragment::line(format!("{}: {},", self.key, value)),
            PropertyValue::Spread => CodeFragment::line(format!("...{},", self.key)),
            PropertyValue::ArrowFn(func) => {
                let async_kw = if func.is_async { "async " } else { "" };
                CodeFragment::block(
                    format!("{}: {}({}) => {{", self.key, async_kw, func.params),
                    func.body.iter().cloned().map(CodeFragment::Line).collect(),
                    Some("},".to_string()),
                )
            }
        }
    }
}

/// An arrow function for use as a property value.
#[derive(Debug, Clone)]
pub struct ArrowFn {
    pub params: String,
    pub is_async: bool,
    pub body: Vec<String>,
}

impl ArrowFn {
    pub fn new(params: impl Into<String>) -> Self {
        Self {
            params: params.into(),
            is_async: false,
            body: Vec::new(),
        }
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }
}

/// Builder for JavaScript/TypeScript object literals.
///
/// Every entry is written on its own line with a trailing comma.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a raw expression value.
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::raw(key, value));
        self
    }

    /// Add a spread entry.
    pub fn spread(mut self, expr: impl Into<String>) -> Self {
        self.properties.push(Property::spread(expr));
        self
    }

    /// Add an arrow function property.
    pub fn arrow_fn(mut self, key: impl Into<String>, value: ArrowFn) -> Self {
        self.properties.push(Property::arrow_fn(key, value));
        self
    }

    /// Check if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// The object as a block opened by `header` (which ends in `{`) and
    /// closed by `close`, e.g. `return useMutation({` ... `});`.
    pub fn block(&self, header: impl Into<String>, close: impl Into<String>) -> CodeFragment {
        CodeFragment::block(header, self.properties_to_fragments(), Some(close.into()))
    }

    /// Build the object as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().node(self).finish()
    }

    fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        self.properties.iter().map(Property::to_fragment).collect()
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::line("{}")];
        }
        vec![self.block("{", "}")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object() {
        assert_eq!(JsObject::new().build(), "{}");
    }

    #[test]
    fn test_object_with_raw_and_spread() {
        let obj = JsObject::new()
            .raw("queryKey", "getUserKey.keys({ scope: 'getUser' })")
            .spread("options")
            .build();
        assert_eq!(
            obj,
            "{\n  queryKey: getUserKey.keys({ scope: 'getUser' }),\n  ...options,\n}"
        );
    }

    #[test]
    fn test_arrow_fn_block() {
        let func = ArrowFn::new("...args")
            .body_line("invalidateQueries();")
            .body_line("options?.onSuccess?.(...args);");
        let code = CodeBuilder::typescript()
            .node(&JsObject::new().raw("mutationFn", "updateUser").arrow_fn("onSuccess", func).block("return useMutation({", "});"))
            .build();
        assert_eq!(
            code,
            "return useMutation({\n  mutationFn: updateUser,\n  onSuccess: (...args) => {\n    invalidateQueries();\n    options?.onSuccess?.(...args);\n  },\n});\n"
        );
    }
}
