//! Identifier sanitization for generated bindings.
//!
//! Payload keys are arbitrary strings (`"user-id"`, `"2fa"`, `"delete"`), but
//! generated code destructures them into local bindings. A [`NamingConvention`]
//! maps each key to a valid, non-reserved identifier, and
//! [`unique_var_mapping`] keeps a list of such bindings collision-free.

/// Language-specific rules for turning arbitrary keys into binding names.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "delete" -> "_delete")
    pub escape_reserved: fn(&str) -> String,
    /// Prefix guarding a name that would start with a digit
    pub digit_prefix: &'static str,
    /// Name used when nothing valid is left
    pub fallback: &'static str,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Check if a name can be used as a binding as-is.
    pub fn is_valid(&self, name: &str) -> bool {
        let mut chars = name.chars();
        let starts_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
        starts_ok && chars.all(is_ident_char) && !self.is_reserved(name)
    }

    /// Convert an arbitrary key into a valid binding name.
    ///
    /// Valid names are returned unchanged. Otherwise separator runs (`-`, `_`,
    /// whitespace) are removed while upper-casing the following character,
    /// remaining invalid characters are stripped, then the digit, reserved and
    /// empty guards apply in that order.
    pub fn safe_name(&self, key: &str) -> String {
        if self.is_valid(key) {
            return key.to_string();
        }

        let mut camel = String::with_capacity(key.len());
        let mut upper_next = false;
        for c in key.chars() {
            if c == '-' || c == '_' || c.is_whitespace() {
                upper_next = true;
            } else if upper_next {
                camel.extend(c.to_uppercase());
                upper_next = false;
            } else {
                camel.push(c);
            }
        }

        let mut safe: String = camel.chars().filter(|c| is_ident_char(*c)).collect();
        if safe.starts_with(|c: char| c.is_ascii_digit()) {
            safe = format!("{}{}", self.digit_prefix, safe);
        }
        if self.is_reserved(&safe) {
            safe = (self.escape_reserved)(&safe);
        }
        if safe.is_empty() {
            safe = self.fallback.to_string();
        }
        safe
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn escape_with_underscore(name: &str) -> String {
    format!("_{}", name)
}

/// TypeScript binding conventions.
pub const TYPESCRIPT_NAMING: NamingConvention = NamingConvention {
    reserved_words: &[
        "await",
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "interface",
        "let",
        "new",
        "null",
        "of",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "type",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
    ],
    escape_reserved: escape_with_underscore,
    digit_prefix: "var",
    fallback: "variable",
};

/// Sanitize a key with [`TYPESCRIPT_NAMING`].
pub fn safe_var_name(key: &str) -> String {
    TYPESCRIPT_NAMING.safe_name(key)
}

/// A payload key paired with the local binding it is destructured into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarBinding {
    pub key: String,
    pub safe: String,
}

impl VarBinding {
    /// Returns true if the key needs a rename form.
    pub fn is_renamed(&self) -> bool {
        self.key != self.safe
    }

    /// Destructuring/object-literal entry: `key` or `"original-key": safeName`.
    pub fn pattern(&self) -> String {
        if self.is_renamed() {
            format!("{}: {}", string_literal(&self.key), self.safe)
        } else {
            self.key.clone()
        }
    }
}

/// Double-quoted string literal with JSON escaping.
pub fn string_literal(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// Map keys to collision-free bindings, preserving input order.
///
/// Duplicate safe names get `_2`, `_3`, ... suffixes in order of appearance.
pub fn unique_var_mapping<S: AsRef<str>>(keys: &[S]) -> Vec<VarBinding> {
    unique_var_mapping_avoiding(keys, &[])
}

/// Like [`unique_var_mapping`], but `taken` names are treated as already bound.
///
/// Generated code declares its own locals next to the destructured keys;
/// passing them here makes a colliding key bind to `name_2` instead.
pub fn unique_var_mapping_avoiding<S: AsRef<str>>(keys: &[S], taken: &[&str]) -> Vec<VarBinding> {
    let mut seen: std::collections::HashSet<String> = taken.iter().map(|name| name.to_string()).collect();
    keys.iter()
        .map(|key| {
            let key = key.as_ref();
            let base = safe_var_name(key);
            let mut safe = base.clone();
            let mut counter = 2;
            while seen.contains(&safe) {
                safe = format!("{}_{}", base, counter);
                counter += 1;
            }
            seen.insert(safe.clone());
            VarBinding {
                key: key.to_string(),
                safe,
            }
        })
        .collect()
}

/// Join binding patterns with `, ` (e.g. `id, "user-name": userName`).
pub fn join_patterns(bindings: &[VarBinding]) -> String {
    bindings
        .iter()
        .map(VarBinding::pattern)
        .collect::<Vec<_>>()
        .join(", ")
}
