//! TypeScript type alias and union builders.

use hookforge_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript type aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    name: String,
    doc: Option<String>,
    ty: String,
    exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            ty: ty.into(),
            exported: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().node(self).build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }

        fragments.push(CodeFragment::line(format!(
            "{}type {} = {};",
            export, self.name, self.ty
        )));

        fragments
    }
}

/// Builder for TypeScript union types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Union {
    variants: Vec<String>,
}

impl Union {
    pub fn new() -> Self {
        Self {
            variants: Vec::new(),
        }
    }

    /// Add a variant, skipping duplicates.
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        let variant = variant.into();
        if !self.variants.contains(&variant) {
            self.variants.push(variant);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Type expression: `A | B`, the single variant itself, or `never` when empty.
    pub fn expression(&self) -> String {
        match self.variants.as_slice() {
            [] => "never".to_string(),
            [only] => only.clone(),
            variants => variants.join(" | "),
        }
    }

    /// Declare the union under a name.
    pub fn alias(&self, name: impl Into<String>) -> TypeAlias {
        TypeAlias::new(name, self.expression())
    }
}

impl Default for Union {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_alias() {
        let t = TypeAlias::new("GetUserResponse", "any").build();
        assert_eq!(t, "export type GetUserResponse = any;\n");
    }

    #[test]
    fn test_type_alias_with_doc() {
        let t = TypeAlias::new("Ids", "number[]").doc("Record ids").build();
        assert_eq!(t, "/** Record ids */\nexport type Ids = number[];\n");
    }

    #[test]
    fn test_private_type_alias() {
        let t = TypeAlias::new("Internal", "number").private().build();
        assert_eq!(t, "type Internal = number;\n");
    }

    #[test]
    fn test_union_dedupes_variants() {
        let u = Union::new()
            .variant("\"pending\"")
            .variant("\"active\"")
            .variant("\"pending\"");
        assert_eq!(u.len(), 2);
        assert_eq!(
            u.alias("Status").build(),
            "export type Status = \"pending\" | \"active\";\n"
        );
    }

    #[test]
    fn test_union_expression_edges() {
        assert_eq!(Union::new().expression(), "never");
        assert_eq!(Union::new().variant("string").expression(), "string");
    }
}
