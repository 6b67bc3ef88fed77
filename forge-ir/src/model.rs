//! Synthesis results.

use serde_json::{Map, Value};

/// Reference to the request variables type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariablesType {
    /// A declared variables type (e.g. `GetUserVariables`).
    Named(String),
    /// The feature takes no variables.
    Void,
}

impl VariablesType {
    /// Type reference as written at call sites.
    pub fn as_str(&self) -> &str {
        match self {
            VariablesType::Named(name) => name,
            VariablesType::Void => "void",
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, VariablesType::Named(_))
    }
}

/// Per-feature output of the type synthesizer.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelResult {
    /// Response declaration text; empty when declarations are skipped.
    pub response_model: String,
    /// Type reference the accessor resolves to. Never empty.
    pub api_return_type: String,
    /// Variables declaration text; may be empty.
    pub variables_definition: String,
    pub variables_type: VariablesType,
    /// Example params with URL placeholders injected; `None` when a schema was supplied.
    pub params_json: Option<Map<String, Value>>,
    /// Path-template variables, first-seen order, no duplicates.
    pub url_vars: Vec<String>,
    pub variables_interface_name: String,
    /// Every variable name: URL variables first, then body/query keys.
    pub variable_keys: Vec<String>,
    /// Array property holding a paginated page's records, when detected.
    pub records_key: Option<String>,
}

impl ModelResult {
    /// Variables that are not substituted into the URL path.
    pub fn body_keys(&self) -> impl Iterator<Item = &str> {
        self.variable_keys
            .iter()
            .filter(|k| !self.url_vars.contains(k))
            .map(String::as_str)
    }

    /// Returns true if the feature takes variables.
    pub fn has_variables(&self) -> bool {
        self.variables_type.is_named()
    }
}

/// Which generated fragment a piece of text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Model,
    Api,
    QueryKey,
    Hook,
}

impl FragmentKind {
    pub const ALL: [FragmentKind; 4] = [
        FragmentKind::Model,
        FragmentKind::Api,
        FragmentKind::QueryKey,
        FragmentKind::Hook,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FragmentKind::Model => "Model/Types",
            FragmentKind::Api => "API Function",
            FragmentKind::QueryKey => "Query Key",
            FragmentKind::Hook => "Hook",
        }
    }
}

/// The four independently appendable fragments for one feature.
///
/// An empty string means there is nothing to append.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub model: String,
    pub api: String,
    pub query_key: String,
    pub hook: String,
}

impl Fragments {
    pub fn get(&self, kind: FragmentKind) -> &str {
        match kind {
            FragmentKind::Model => &self.model,
            FragmentKind::Api => &self.api,
            FragmentKind::QueryKey => &self.query_key,
            FragmentKind::Hook => &self.hook,
        }
    }

    /// Non-empty fragments in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (FragmentKind, &str)> {
        FragmentKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, text)| !text.is_empty())
    }
}
