//! Cache-key factory synthesis.

use hookforge_codegen::builder::CodeBuilder;
use hookforge_ir::{FeatureSpec, ModelResult};

use crate::{
    ast::{Const, JsObject},
    names::FeatureNames,
};

/// Generate `export const {feature}Key = { keys: ... }`; empty for mutations.
pub fn generate_query_key(spec: &FeatureSpec, model: &ModelResult, names: &FeatureNames) -> String {
    if !spec.hook.has_query_key() {
        return String::new();
    }

    let mut args = format!("{{ scope: '{}' }}", names.camel);
    if model.has_variables() {
        args.push_str(" & ");
        args.push_str(&model.variables_interface_name);
    }

    let factory = Const::object(
        &names.query_key,
        JsObject::new().raw("keys", format!("(args: {}) => [args] as const", args)),
    );
    CodeBuilder::typescript().node(&factory).finish()
}
