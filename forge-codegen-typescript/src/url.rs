//! URL template placeholders.
//!
//! Templates may use `{name}` or `${name}`; generated code always uses the
//! template-literal form `${binding}`.

use std::sync::LazyLock;

use hookforge_codegen::naming::{VarBinding, safe_var_name};
use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?\{(\w+)\}").expect("placeholder pattern is valid"));

/// Placeholder names in first-seen order, without duplicates.
pub fn url_vars(template: &str) -> Vec<String> {
    let mut vars: Vec<String> = Vec::new();
    for captures in PLACEHOLDER.captures_iter(template) {
        let name = &captures[1];
        if !vars.iter().any(|v| v == name) {
            vars.push(name.to_string());
        }
    }
    vars
}

/// Rewrite every placeholder as `${binding}`, using the binding chosen for
/// that variable (or its sanitized name when it has none).
pub fn interpolate(template: &str, bindings: &[VarBinding]) -> String {
    PLACEHOLDER
        .replace_all(template, |captures: &Captures| {
            let name = &captures[1];
            let safe = bindings
                .iter()
                .find(|binding| binding.key == name)
                .map(|binding| binding.safe.clone())
                .unwrap_or_else(|| safe_var_name(name));
            format!("${{{}}}", safe)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use hookforge_codegen::naming::unique_var_mapping;

    use super::*;

    #[test]
    fn test_url_vars_both_forms_deduped() {
        assert_eq!(
            url_vars("/v1/{orgId}/users/${userId}/{orgId}"),
            vec!["orgId", "userId"]
        );
        assert!(url_vars("/v1/users").is_empty());
    }

    #[test]
    fn test_interpolate_normalizes_form() {
        let bindings = unique_var_mapping(&["userId"]);
        assert_eq!(
            interpolate("/v1/user/{userId}", &bindings),
            "/v1/user/${userId}"
        );
        assert_eq!(
            interpolate("/v1/user/${userId}", &bindings),
            "/v1/user/${userId}"
        );
    }

    #[test]
    fn test_interpolate_uses_sanitized_binding() {
        let bindings = unique_var_mapping(&["class"]);
        assert_eq!(interpolate("/v1/{class}", &bindings), "/v1/${_class}");
        assert_eq!(interpolate("/v1/{delete}", &[]), "/v1/${_delete}");
    }
}
