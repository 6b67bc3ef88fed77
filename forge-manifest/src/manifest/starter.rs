/// Manifest written by `hookforge init`.
pub const STARTER_MANIFEST: &str = r#"[output]
model = "src/api/models.ts"
api = "src/api/requests.ts"
query_key = "src/api/keys.ts"
hook = "src/api/hooks.ts"

[openapi]
strip_prefix = "/api"

# [format]
# command = ["npx", "prettier", "--stdin-filepath", "generated.ts"]

[workspace]
root = "src"
exclude = ["dist"]

[features.getUser]
method = "GET"
url = "/v1/user/{id}"
hook = "query"
response = '{"success": true, "data": {"id": 1, "name": "Test"}}'
wrapper = "WithResponse"

[features.updateUser]
method = "PUT"
url = "/v1/user/{id}"
hook = "mutation"
params = '{"id": 1, "name": "Test"}'
"#;
