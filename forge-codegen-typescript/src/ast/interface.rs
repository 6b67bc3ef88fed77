//! TypeScript interface builder.

use hookforge_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A field in a TypeScript interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceField {
    /// Property name as written, already quoted when needed.
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub optional: bool,
    pub readonly: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            optional: false,
            readonly: false,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    fn declaration(&self) -> String {
        let readonly = if self.readonly { "readonly " } else { "" };
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}{}: {};", readonly, self.name, optional, self.ty)
    }
}

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    name: String,
    doc: Option<String>,
    fields: Vec<InterfaceField>,
    index_signature: Option<String>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            fields: Vec::new(),
            index_signature: None,
            exported: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Add an optional field.
    pub fn optional_field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty).optional());
        self
    }

    /// Add a field with full configuration.
    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    /// Allow extra keys of the given value type (`[key: string]: T;`).
    pub fn index_signature(mut self, ty: impl Into<String>) -> Self {
        self.index_signature = Some(ty.into());
        self
    }

    /// Make this interface private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().node(self).build()
    }

    fn fields_to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        for field in &self.fields {
            if let Some(doc) = &field.doc {
                fragments.push(CodeFragment::jsdoc(doc.clone()));
            }
            fragments.push(CodeFragment::line(field.declaration()));
        }
        if let Some(ty) = &self.index_signature {
            fragments.push(CodeFragment::line(format!("[key: string]: {};", ty)));
        }
        fragments
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }

        if self.fields.is_empty() && self.index_signature.is_none() {
            fragments.push(CodeFragment::line(format!(
                "{}interface {} {{}}",
                export, self.name
            )));
        } else {
            fragments.push(CodeFragment::block(
                format!("{}interface {} {{", export, self.name),
                self.fields_to_fragments(),
                Some("}".to_string()),
            ));
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interface() {
        let i = Interface::new("Empty").build();
        assert_eq!(i, "export interface Empty {}\n");
    }

    #[test]
    fn test_interface_with_fields() {
        let i = Interface::new("GetUserResponse")
            .field("id", "number")
            .field("name", "string")
            .build();
        assert_eq!(
            i,
            "export interface GetUserResponse {\n  id: number;\n  name: string;\n}\n"
        );
    }

    #[test]
    fn test_interface_with_optional_field() {
        let i = Interface::new("Config")
            .field("required", "string")
            .optional_field("optional", "number")
            .build();
        assert!(i.contains("required: string;"));
        assert!(i.contains("optional?: number;"));
    }

    #[test]
    fn test_field_doc_and_index_signature() {
        let i = Interface::new("Labels")
            .field_with(InterfaceField::new("\"x-id\"", "string").doc("Trace id"))
            .index_signature("any")
            .build();
        assert_eq!(
            i,
            "export interface Labels {\n  /** Trace id */\n  \"x-id\": string;\n  [key: string]: any;\n}\n"
        );
    }

    #[test]
    fn test_private_readonly() {
        let i = Interface::new("Point")
            .private()
            .field_with(InterfaceField::new("x", "number").readonly())
            .build();
        assert!(!i.contains("export"));
        assert!(i.contains("readonly x: number;"));
    }
}
