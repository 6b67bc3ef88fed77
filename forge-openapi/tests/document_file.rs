use std::fs;

use hookforge_openapi::{Document, Error, feature_name};

#[test]
fn loads_swagger_definitions_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("swagger.json");
    fs::write(
        &path,
        r##"{
            "swagger": "2.0",
            "paths": {"/orders/{orderId}/lines": {"patch": {"responses": {}}}},
            "definitions": {"Line": {"type": "object"}}
        }"##,
    )
    .unwrap();

    let document = Document::from_file(&path).unwrap();
    assert!(document.definitions().is_some());
    assert!(document.components().is_none());
    assert_eq!(feature_name(&document.all()[0]), "patchLines");
}

#[test]
fn reports_missing_file_and_missing_paths() {
    let dir = tempfile::tempdir().unwrap();
    let err = Document::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));

    let err = r#"{"openapi": "3.0.0"}"#.parse::<Document>().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Invalid OpenAPI spec: no paths found");
}
