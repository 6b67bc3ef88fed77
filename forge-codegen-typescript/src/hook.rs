//! Hook synthesis, one shape per [`HookKind`].

use hookforge_codegen::{
    builder::CodeBuilder,
    naming::{TYPESCRIPT_NAMING, join_patterns, string_literal, unique_var_mapping_avoiding},
};
use hookforge_ir::{FeatureSpec, HookKind, ModelResult};

use crate::{
    ast::{ArrowFn, ConstFn, JsObject, Param},
    model::RECORDS_KEY,
    names::FeatureNames,
};

const ENABLED_OPTION: &str = "options?: { enabled?: boolean }";

/// Names a query hook binds or reads besides the variables.
const HOOK_LOCALS: &[&str] = &["options", "response", "queryData", "useQuery", "useInfiniteQuery"];

/// Generate the hook declaration for one feature.
pub fn generate_hook(spec: &FeatureSpec, model: &ModelResult, names: &FeatureNames) -> String {
    let hook = match spec.hook {
        HookKind::Query => query_hook(model, names),
        HookKind::InfiniteQuery => infinite_query_hook(model, names),
        HookKind::Mutation => mutation_hook(model, names),
        HookKind::Generic => generic_hook(model, names),
    };
    CodeBuilder::typescript().node(&hook).finish()
}

/// `{ a, b, options }: Vars & { options?: ... }` plus the cache-key entries.
fn destructured_props(model: &ModelResult, names: &FeatureNames) -> (Param, String) {
    let taken: Vec<&str> = HOOK_LOCALS
        .iter()
        .copied()
        .chain([names.camel.as_str(), names.query_key.as_str()])
        .collect();
    let bindings = unique_var_mapping_avoiding(&model.variable_keys, &taken);
    let (pattern, scope) = if bindings.is_empty() {
        (
            "{ options }".to_string(),
            format!("scope: '{}'", names.camel),
        )
    } else {
        let patterns = join_patterns(&bindings);
        (
            format!("{{ {}, options }}", patterns),
            format!("scope: '{}', {}", names.camel, patterns),
        )
    };
    let ty = if model.has_variables() {
        format!("{} & {{ {} }}", model.variables_interface_name, ENABLED_OPTION)
    } else {
        format!("{{ {} }}", ENABLED_OPTION)
    };
    (Param::new(pattern, ty), scope)
}

fn query_hook(model: &ModelResult, names: &FeatureNames) -> ConstFn {
    let (props, scope) = destructured_props(model, names);
    ConstFn::new(&names.hook).param(props).body(&format!(
        "const response = useQuery(\n  \
         {key}.keys({{\n    \
         {scope}\n  \
         }}),\n  \
         {api},\n  \
         {{\n    \
         ...options\n  \
         }}\n\
         );\n\
         return response;",
        key = names.query_key,
        scope = scope,
        api = names.camel,
    ))
}

fn infinite_query_hook(model: &ModelResult, names: &FeatureNames) -> ConstFn {
    let (props, scope) = destructured_props(model, names);
    let records = model.records_key.as_deref().unwrap_or(RECORDS_KEY);
    let records_access = if TYPESCRIPT_NAMING.is_valid(records) {
        format!("?.{}", records)
    } else {
        format!("?.[{}]", string_literal(records))
    };

    ConstFn::new(&names.hook).param(props).body(&format!(
        "const queryData = useInfiniteQuery(\n  \
         {key}.keys({{\n    \
         {scope}\n  \
         }}),\n  \
         {api},\n  \
         {{\n    \
         getNextPageParam: (lastPage: any, pages: any) => {{\n      \
         const totalRecordsFetched = pages.reduce((prev: number, one: any) => {{\n        \
         return prev + (one{records}?.length || 0);\n      \
         }}, 0);\n      \
         if (lastPage?.totalRecords !== undefined && totalRecordsFetched < lastPage.totalRecords) {{\n        \
         return pages.length + 1;\n      \
         }}\n      \
         if (lastPage?.filteredRecords !== undefined && totalRecordsFetched < lastPage.filteredRecords) {{\n        \
         return pages.length + 1;\n      \
         }}\n      \
         return null;\n    \
         }},\n    \
         enabled: options?.enabled,\n  \
         }}\n\
         );\n\
         return queryData;",
        key = names.query_key,
        scope = scope,
        api = names.camel,
        records = records_access,
    ))
}

fn mutation_hook(model: &ModelResult, names: &FeatureNames) -> ConstFn {
    let options_type = format!(
        "{{\n  \
         onSuccess?: (\n    \
         data: {ret},\n    \
         variables: {vars},\n    \
         context: unknown\n  \
         ) => void;\n  \
         onError?: (error: AxiosResponse) => void;\n\
         }}",
        ret = model.api_return_type,
        vars = model.variables_type.as_str(),
    );

    let callbacks = JsObject::new()
        .raw("mutationFn", &names.camel)
        .arrow_fn(
            "onSuccess",
            ArrowFn::new("...args")
                .body_line("invalidateQueries();")
                .body_line("options?.onSuccess?.(...args);"),
        )
        .arrow_fn(
            "onError",
            ArrowFn::new("error: AxiosResponse")
                .body_line("showSnackbarOnApiError(error);")
                .body_line("options?.onError?.(error);"),
        );

    ConstFn::new(&names.hook)
        .param(Param::new("options", options_type).optional())
        .body("const invalidateQueries = useInvalidateCommonQueries();")
        .statement(callbacks.block("return useMutation({", "});"))
}

fn generic_hook(model: &ModelResult, names: &FeatureNames) -> ConstFn {
    let options = Param::new("options", format!("UseQueryOptions<{}>", model.api_return_type)).optional();
    let hook = ConstFn::new(&names.hook);

    let (hook, scope, query_fn) = if model.has_variables() {
        (
            hook.param(Param::new("variables", &model.variables_interface_name).optional()),
            format!("{{ scope: '{}', ...(variables ?? {{}}) }}", names.camel),
            format!(
                "() => {}(variables ?? ({{}} as {}))",
                names.camel, model.variables_interface_name
            ),
        )
    } else {
        (
            hook,
            format!("{{ scope: '{}' }}", names.camel),
            names.camel.clone(),
        )
    };

    hook.param(options).body(&format!(
        "return useQuery({{\n  \
         queryKey: {key}.keys({scope}),\n  \
         queryFn: {query_fn},\n  \
         ...options\n\
         }});",
        key = names.query_key,
        scope = scope,
        query_fn = query_fn,
    ))
}
