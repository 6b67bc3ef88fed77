//! Named declarations collected during one compile.

use hookforge_codegen::builder::{CodeBuilder, CodeFragment, Renderable};
use hookforge_core::to_pascal_case;
use indexmap::IndexMap;

/// Ordered set of declared type names and their rendered declarations.
///
/// Names are reserved before their declaration is built, so a parent type is
/// always listed before the types nested inside it.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    decls: IndexMap<String, Option<Vec<CodeFragment>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a unique type name derived from `hint`.
    ///
    /// Collisions get `2`, `3`, ... suffixes.
    pub fn reserve(&mut self, hint: &str) -> String {
        let base = type_name(hint);
        let mut name = base.clone();
        let mut counter = 2;
        while self.decls.contains_key(&name) {
            name = format!("{}{}", base, counter);
            counter += 1;
        }
        self.decls.insert(name.clone(), None);
        name
    }

    /// Reserve a root name exactly as given.
    ///
    /// Callers reference roots by the name they passed in, so no re-casing
    /// is applied. A root that is already taken still gets a suffix.
    pub fn reserve_root(&mut self, name: &str) -> String {
        let mut reserved = name.to_string();
        let mut counter = 2;
        while self.decls.contains_key(&reserved) {
            reserved = format!("{}{}", name, counter);
            counter += 1;
        }
        self.decls.insert(reserved.clone(), None);
        reserved
    }

    /// Attach the declaration for a reserved name.
    pub fn define(&mut self, name: &str, decl: &impl Renderable) {
        self.decls
            .insert(name.to_string(), Some(decl.to_fragments()));
    }

    /// Every defined name, in reservation order.
    pub fn declared(&self) -> Vec<String> {
        self.decls
            .iter()
            .filter(|(_, decl)| decl.is_some())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// All declarations separated by blank lines.
    pub fn render(&self) -> String {
        self.decls
            .values()
            .flatten()
            .map(|fragments| CodeBuilder::typescript().node(fragments).finish())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// PascalCase type name for an arbitrary hint, guarded against a leading digit.
pub(crate) fn type_name(hint: &str) -> String {
    let name = to_pascal_case(hint);
    if name.is_empty() {
        "Type".to_string()
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("T{}", name)
    } else {
        name
    }
}

/// Property name as written in a declaration: bare when it is an identifier,
/// otherwise a quoted string.
pub(crate) fn property_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        key.to_string()
    } else {
        hookforge_codegen::naming::string_literal(key)
    }
}

/// Wrap a type expression in parentheses when used as an array element.
pub(crate) fn array_of(element: &str) -> String {
    if element.contains(' ') {
        format!("({})[]", element)
    } else {
        format!("{}[]", element)
    }
}
