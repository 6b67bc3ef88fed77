//! Accessor synthesis: the function that performs the HTTP call.
//!
//! Query-style accessors (plain and infinite queries) read their variables
//! from the cache key handed over by react-query and cancel the request when
//! the query is aborted. Mutations and generic queries get a direct-call
//! accessor taking the variables object.

use hookforge_codegen::{
    builder::{CodeBuilder, CodeFragment},
    naming::{VarBinding, join_patterns, string_literal, unique_var_mapping_avoiding},
};
use hookforge_ir::{FeatureSpec, HookKind, ModelResult};

use crate::{
    ast::{ConstFn, Param},
    names::FeatureNames,
    url::interpolate,
};

/// Body/query variable overridden with the page parameter in infinite queries.
pub const PAGE_NUMBER_KEY: &str = "pageNo";

const WRAPPER_REJECTION: &str = "Something went wrong!";

/// Names a query accessor binds or reads besides the variables.
const QUERY_LOCALS: &[&str] = &[
    "context",
    "signal",
    "queryKey",
    "pageParam",
    "axios",
    "CancelToken",
    "source",
    "getInstance",
    "response",
    "e",
];

/// Names a direct-call accessor binds or reads besides the variables.
const DIRECT_LOCALS: &[&str] = &["getInstance", "response", "e"];

/// Generate the accessor declaration for one feature.
pub fn generate_accessor(spec: &FeatureSpec, model: &ModelResult, names: &FeatureNames) -> String {
    let locals = if spec.hook.is_query_style() {
        QUERY_LOCALS
    } else {
        DIRECT_LOCALS
    };
    let bindings = unique_var_mapping_avoiding(&model.variable_keys, locals);
    let url = interpolate(&spec.url, &bindings);
    let body = body_bindings(model, &bindings);

    let accessor = if spec.hook.is_query_style() {
        query_accessor(spec, model, names, &bindings, &body, &url)
    } else {
        direct_accessor(spec, model, names, &bindings, &body, &url)
    };
    CodeBuilder::typescript().node(&accessor).finish()
}

fn query_accessor(
    spec: &FeatureSpec,
    model: &ModelResult,
    names: &FeatureNames,
    bindings: &[VarBinding],
    body: &[VarBinding],
    url: &str,
) -> ConstFn {
    let infinite = spec.hook == HookKind::InfiniteQuery;
    let method = spec.method.client_method();

    let entries = if infinite {
        body.iter()
            .map(|binding| {
                if binding.key == PAGE_NUMBER_KEY {
                    format!("{}: {} ?? pageParam ?? 1", PAGE_NUMBER_KEY, binding.safe)
                } else {
                    binding.pattern()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        join_patterns(body)
    };

    let call = if spec.method.sends_query_params() {
        if body.is_empty() {
            format!("await getInstance().{}(`{}`, {{ cancelToken: source.token }})", method, url)
        } else {
            format!(
                "await getInstance().{}(`{}`, {{ params: {{ {} }}, cancelToken: source.token }})",
                method, url, entries
            )
        }
    } else {
        format!(
            "await getInstance().{}(`{}`, {}, {{ cancelToken: source.token }})",
            method,
            url,
            object_literal(&entries)
        )
    };

    let mut accessor = ConstFn::new(&names.camel)
        .async_()
        .param(Param::new(
            "context",
            format!("QueryFunctionContext<ReturnType<typeof {}.keys>>", names.query_key),
        ))
        .multiline_params()
        .returns(format!("Promise<{}>", model.api_return_type))
        .body("const { signal, queryKey } = context;");
    if !bindings.is_empty() {
        accessor = accessor.body(&format!("const {{ {} }} = queryKey[0];", join_patterns(bindings)));
    }
    if infinite {
        accessor = accessor.body("const { pageParam } = context;");
    }
    accessor
        .blank()
        .body(&format!(
            "const {{ CancelToken }} = axios;\n\
             const source = CancelToken.source();\n\
             signal?.addEventListener('abort', () => {{\n  \
             source.cancel(`{} - Request cancelled`);\n\
             }});",
            url
        ))
        .blank()
        .statement(try_call(
            spec,
            model,
            &call,
            "return Promise.reject(((e as any).response as AxiosResponse) ?? e);",
        ))
}

fn direct_accessor(
    spec: &FeatureSpec,
    model: &ModelResult,
    names: &FeatureNames,
    bindings: &[VarBinding],
    body: &[VarBinding],
    url: &str,
) -> ConstFn {
    let method = spec.method.client_method();
    let data = match (body.is_empty(), spec.method.sends_query_params()) {
        (true, _) => String::new(),
        (false, true) => format!(", {{ params: {{ {} }} }}", join_patterns(body)),
        (false, false) => format!(", {{ {} }}", join_patterns(body)),
    };
    let call = format!("await getInstance().{}(`{}`{})", method, url, data);

    let mut accessor = ConstFn::new(&names.camel).async_();
    if model.has_variables() && !bindings.is_empty() {
        accessor = accessor.param(Param::new(
            format!("{{ {} }}", join_patterns(bindings)),
            model.variables_type.as_str(),
        ));
    } else if !model.url_vars.is_empty() {
        // Without a variables type the path variables are typed inline.
        let url_bindings = unique_var_mapping_avoiding(&model.url_vars, DIRECT_LOCALS);
        let shape = model
            .url_vars
            .iter()
            .map(|var| format!("{}: any", string_literal(var)))
            .collect::<Vec<_>>()
            .join("; ");
        accessor = accessor.param(Param::new(
            format!("{{ {} }}", join_patterns(&url_bindings)),
            format!("{{ {} }}", shape),
        ));
    }

    accessor
        .returns(format!("Promise<{}>", model.api_return_type))
        .statement(try_call(
            spec,
            model,
            &call,
            "return Promise.reject((e as AxiosError).response ?? e);",
        ))
}

/// `try { const response = <call>; return ... } catch (e) { <reject> }`
fn try_call(spec: &FeatureSpec, model: &ModelResult, call: &str, reject: &str) -> CodeFragment {
    let internal = match &spec.wrapper {
        Some(wrapper) => format!("{}<{}>", wrapper, model.api_return_type),
        None => model.api_return_type.clone(),
    };

    let mut body = vec![
        CodeFragment::line(format!("const response: AxiosResponse<{}> =", internal)),
        CodeFragment::indent(vec![CodeFragment::line(format!("{};", call))]),
    ];
    if spec.wrapper.is_some() {
        body.push(CodeFragment::block(
            "if (response.data.success !== true) {",
            vec![CodeFragment::line(format!(
                "return Promise.reject('{}');",
                WRAPPER_REJECTION
            ))],
            Some("}".to_string()),
        ));
        body.push(CodeFragment::line("return response.data?.data;"));
    } else {
        body.push(CodeFragment::line("return response.data;"));
    }

    CodeFragment::sequence(vec![
        CodeFragment::block("try {", body, Some("} catch (e) {".to_string())),
        CodeFragment::indent(vec![CodeFragment::line(reject)]),
        CodeFragment::line("}"),
    ])
}

/// Bindings of the variables that travel as query params or body.
fn body_bindings(model: &ModelResult, bindings: &[VarBinding]) -> Vec<VarBinding> {
    let body_keys: Vec<&str> = model.body_keys().collect();
    bindings
        .iter()
        .filter(|binding| body_keys.contains(&binding.key.as_str()))
        .cloned()
        .collect()
}

fn object_literal(entries: &str) -> String {
    if entries.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", entries)
    }
}

#[cfg(test)]
mod tests {
    use hookforge_ir::{HttpMethod, VariablesType};

    use super::*;

    fn model(url_vars: &[&str], keys: &[&str], ret: &str) -> ModelResult {
        let variables_type = if keys.is_empty() {
            VariablesType::Void
        } else {
            VariablesType::Named("XVariables".into())
        };
        ModelResult {
            response_model: String::new(),
            api_return_type: ret.into(),
            variables_definition: String::new(),
            variables_type,
            params_json: None,
            url_vars: url_vars.iter().map(|s| s.to_string()).collect(),
            variables_interface_name: "XVariables".into(),
            variable_keys: keys.iter().map(|s| s.to_string()).collect(),
            records_key: None,
        }
    }

    fn accessor(spec: &FeatureSpec, model: &ModelResult) -> String {
        generate_accessor(spec, model, &FeatureNames::new(&spec.name))
    }

    #[test]
    fn test_query_accessor_without_variables() {
        let spec = FeatureSpec::new("getUser", HttpMethod::Get, "/v1/user", HookKind::Query);
        let code = accessor(&spec, &model(&[], &[], "GetUserResponse"));
        insta::assert_snapshot!(code, @r"
        export const getUser = async (
          context: QueryFunctionContext<ReturnType<typeof getUserKey.keys>>
        ): Promise<GetUserResponse> => {
          const { signal, queryKey } = context;

          const { CancelToken } = axios;
          const source = CancelToken.source();
          signal?.addEventListener('abort', () => {
            source.cancel(`/v1/user - Request cancelled`);
          });

          try {
            const response: AxiosResponse<GetUserResponse> =
              await getInstance().get(`/v1/user`, { cancelToken: source.token });
            return response.data;
          } catch (e) {
            return Promise.reject(((e as any).response as AxiosResponse) ?? e);
          }
        };
        ");
    }

    #[test]
    fn test_query_accessor_with_wrapper_and_params() {
        let spec = FeatureSpec::new("getUser", HttpMethod::Get, "/v1/{orgId}/user", HookKind::Query)
            .with_wrapper("WithResponse");
        let code = accessor(&spec, &model(&["orgId"], &["orgId", "user-id"], "GetUserResponse"));
        assert!(code.contains("  const { orgId, \"user-id\": userId } = queryKey[0];\n"));
        assert!(code.contains(
            "await getInstance().get(`/v1/${orgId}/user`, { params: { \"user-id\": userId }, cancelToken: source.token });"
        ));
        assert!(code.contains("const response: AxiosResponse<WithResponse<GetUserResponse>> ="));
        assert!(code.contains(
            "    if (response.data.success !== true) {\n      return Promise.reject('Something went wrong!');\n    }\n    return response.data?.data;"
        ));
    }

    #[test]
    fn test_infinite_accessor_overrides_page_number() {
        let spec = FeatureSpec::new("listUsers", HttpMethod::Post, "/v1/users", HookKind::InfiniteQuery);
        let code = accessor(&spec, &model(&[], &["pageNo", "query"], "WithRecordResponse<ListUsersItem[]>"));
        assert!(code.contains("  const { pageNo, query } = queryKey[0];\n  const { pageParam } = context;\n"));
        assert!(code.contains(
            "await getInstance().post(`/v1/users`, { pageNo: pageNo ?? pageParam ?? 1, query }, { cancelToken: source.token });"
        ));
    }

    #[test]
    fn test_query_variables_do_not_shadow_locals() {
        let spec = FeatureSpec::new("search", HttpMethod::Get, "/v1/search", HookKind::Query);
        let code = accessor(&spec, &model(&[], &["source", "signal", "q"], "SearchResponse"));
        assert!(code.contains("  const { \"source\": source_2, \"signal\": signal_2, q } = queryKey[0];\n"));
        assert!(code.contains("  const source = CancelToken.source();\n"));
        assert!(code.contains(
            "{ params: { \"source\": source_2, \"signal\": signal_2, q }, cancelToken: source.token }"
        ));
    }

    #[test]
    fn test_direct_variables_do_not_shadow_response() {
        let spec = FeatureSpec::new("reply", HttpMethod::Post, "/v1/{e}/reply", HookKind::Mutation);
        let code = accessor(&spec, &model(&["e"], &["e", "response", "source"], "ReplyResponse"));
        assert!(code.contains("async ({ \"e\": e_2, \"response\": response_2, source }: XVariables)"));
        assert!(code.contains(
            "await getInstance().post(`/v1/${e_2}/reply`, { \"response\": response_2, source });"
        ));
    }

    #[test]
    fn test_query_post_without_body_sends_empty_object() {
        let spec = FeatureSpec::new("refresh", HttpMethod::Post, "/v1/{id}/refresh", HookKind::Query);
        let code = accessor(&spec, &model(&["id"], &["id"], "RefreshResponse"));
        assert!(code.contains("await getInstance().post(`/v1/${id}/refresh`, {}, { cancelToken: source.token });"));
    }

    #[test]
    fn test_direct_accessor_mutation() {
        let spec = FeatureSpec::new("updateUser", HttpMethod::Put, "/v1/user/{id}", HookKind::Mutation);
        let code = accessor(&spec, &model(&["id"], &["id", "name"], "UpdateUserResponse"));
        insta::assert_snapshot!(code, @r"
        export const updateUser = async ({ id, name }: XVariables): Promise<UpdateUserResponse> => {
          try {
            const response: AxiosResponse<UpdateUserResponse> =
              await getInstance().put(`/v1/user/${id}`, { name });
            return response.data;
          } catch (e) {
            return Promise.reject((e as AxiosError).response ?? e);
          }
        };
        ");
    }

    #[test]
    fn test_direct_accessor_get_sends_params() {
        let spec = FeatureSpec::new("search", HttpMethod::Get, "/v1/search", HookKind::Generic);
        let code = accessor(&spec, &model(&[], &["q"], "SearchResponse"));
        assert!(code.contains("async ({ q }: XVariables)"));
        assert!(code.contains("await getInstance().get(`/v1/search`, { params: { q } });"));
    }

    #[test]
    fn test_direct_accessor_inline_url_shape() {
        let spec = FeatureSpec::new("deleteClass", HttpMethod::Delete, "/v1/{class}", HookKind::Mutation);
        let code = accessor(&spec, &model(&["class"], &[], "DeleteClassResponse"));
        assert!(code.starts_with(
            "export const deleteClass = async ({ \"class\": _class }: { \"class\": any }): Promise<DeleteClassResponse> => {"
        ));
        assert!(code.contains("await getInstance().delete(`/v1/${_class}`);"));
    }

    #[test]
    fn test_direct_accessor_without_variables() {
        let spec = FeatureSpec::new("logout", HttpMethod::Post, "/v1/logout", HookKind::Mutation);
        let code = accessor(&spec, &model(&[], &[], "LogoutResponse"));
        assert!(code.starts_with("export const logout = async (): Promise<LogoutResponse> => {"));
        assert!(code.contains("await getInstance().post(`/v1/logout`);"));
    }
}
