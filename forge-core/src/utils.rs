//! Shared string helpers for identifier derivation.

/// Uppercase the first character, leaving the rest untouched ("getUser" -> "GetUser").
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character, leaving the rest untouched ("GetUser" -> "getUser").
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase, treating every non-alphanumeric character
/// as a word boundary (e.g., "user_profile-item" -> "UserProfileItem").
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .map(upper_first)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("getUser"), "GetUser");
        assert_eq!(upper_first("x"), "X");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("GetUser"), "getUser");
        assert_eq!(lower_first("getUser"), "getUser");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("user-profile item"), "UserProfileItem");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case("__x"), "X");
        assert_eq!(to_pascal_case(""), "");
    }
}
