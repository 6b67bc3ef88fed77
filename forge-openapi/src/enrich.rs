//! Title enrichment.
//!
//! The type compiler names object types after their `title`. Overwriting the
//! titles of a schema tree with names derived from the feature keeps nested
//! types unique across a batch (`GetUserDataAddress`,
//! `ListOrdersDataItemsItem`, ...) instead of generic `Data`/`Item` names.

use hookforge_core::upper_first;
use serde_json::Value;

/// Overwrite `title` on `schema` and its nested object schemas.
///
/// Properties that are objects (they have `properties` or
/// `additionalProperties`) are titled `{base}{Key}`; otherwise array `items`
/// are titled `{base}{Key}Item`. An object-valued `additionalProperties` is
/// titled `{base}Value`.
pub fn enrich_titles(schema: &mut Value, base: &str) {
    let Value::Object(object) = schema else {
        return;
    };
    object.insert("title".to_string(), Value::String(base.to_string()));

    if let Some(Value::Object(properties)) = object.get_mut("properties") {
        for (key, property) in properties.iter_mut() {
            let name = format!("{}{}", base, upper_first(key));
            if is_truthy(property.get("properties")) || is_truthy(property.get("additionalProperties")) {
                enrich_titles(property, &name);
            } else if let Some(items) = property.get_mut("items").filter(|items| !items.is_null()) {
                enrich_titles(items, &format!("{}Item", name));
            }
        }
    }

    if let Some(additional @ Value::Object(_)) = object.get_mut("additionalProperties") {
        enrich_titles(additional, &format!("{}Value", base));
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_nested_titles() {
        let mut schema = json!({
            "title": "Generic",
            "type": "object",
            "properties": {
                "address": {"type": "object", "properties": {"city": {"type": "string"}}},
                "tags": {"type": "array", "items": {"type": "object", "properties": {"k": {}}}},
                "meta": {"type": "object", "additionalProperties": {"type": "object"}},
                "flags": {"type": "object", "additionalProperties": true},
                "name": {"type": "string"}
            }
        });
        enrich_titles(&mut schema, "getUserData");

        assert_eq!(schema["title"], "getUserData");
        assert_eq!(schema["properties"]["address"]["title"], "getUserDataAddress");
        assert_eq!(schema["properties"]["tags"]["items"]["title"], "getUserDataTagsItem");
        assert_eq!(schema["properties"]["meta"]["title"], "getUserDataMeta");
        assert_eq!(
            schema["properties"]["meta"]["additionalProperties"]["title"],
            "getUserDataMetaValue"
        );
        assert_eq!(schema["properties"]["flags"]["title"], "getUserDataFlags");
        assert!(schema["properties"]["name"].get("title").is_none());
    }

    #[test]
    fn test_non_objects_are_left_alone() {
        let mut schema = json!(true);
        enrich_titles(&mut schema, "X");
        assert_eq!(schema, json!(true));
    }
}
