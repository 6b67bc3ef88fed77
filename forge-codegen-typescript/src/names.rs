//! Identifiers derived from a feature name.

use hookforge_core::{lower_first, upper_first};

/// Every generated identifier for one feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureNames {
    /// `GetUser`: prefix of every declared type.
    pub pascal: String,
    /// `getUser`: accessor name and cache-key scope.
    pub camel: String,
    /// `getUserKey`
    pub query_key: String,
    /// `useGetUser`
    pub hook: String,
}

impl FeatureNames {
    pub fn new(feature: &str) -> Self {
        let pascal = upper_first(feature);
        let camel = lower_first(feature);
        Self {
            query_key: format!("{}Key", camel),
            hook: format!("use{}", pascal),
            pascal,
            camel,
        }
    }

    /// `{Pascal}Response`
    pub fn response(&self) -> String {
        format!("{}Response", self.pascal)
    }

    /// `{Pascal}Data`
    pub fn data(&self) -> String {
        format!("{}Data", self.pascal)
    }

    /// `{Pascal}Item`
    pub fn item(&self) -> String {
        format!("{}Item", self.pascal)
    }

    /// `{Pascal}Variables`
    pub fn variables(&self) -> String {
        format!("{}Variables", self.pascal)
    }

    /// Root type name of a response declared from a schema.
    pub fn response_root(&self, wrapped: bool) -> String {
        if wrapped { self.data() } else { self.response() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_names() {
        let names = FeatureNames::new("getUser");
        assert_eq!(names.pascal, "GetUser");
        assert_eq!(names.camel, "getUser");
        assert_eq!(names.query_key, "getUserKey");
        assert_eq!(names.hook, "useGetUser");
        assert_eq!(names.response_root(true), "GetUserData");
        assert_eq!(names.response_root(false), "GetUserResponse");
    }

    #[test]
    fn test_pascal_input_is_lowered_for_camel() {
        let names = FeatureNames::new("ListOrders");
        assert_eq!(names.camel, "listOrders");
        assert_eq!(names.variables(), "ListOrdersVariables");
    }
}
