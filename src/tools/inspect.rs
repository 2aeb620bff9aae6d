//! The `inspect_dom` tool: bounded subtree outline.

use serde::Deserialize;

use crate::dom::DomQuery;
use crate::errors::ProbeError;
use crate::format;
use crate::tools::base::{parse_args, resolve_target};
use crate::types::SubtreeOptions;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InspectParams {
    selector: String,
    element_index: Option<usize>,
    max_depth: Option<usize>,
    max_children: Option<usize>,
    include_hidden: Option<bool>,
}

pub async fn run(dom: &dyn DomQuery, args: serde_json::Value) -> Result<String, ProbeError> {
    let params: InspectParams = parse_args(args)?;
    let defaults = SubtreeOptions::default();
    let opts = SubtreeOptions {
        max_depth: params.max_depth.unwrap_or(defaults.max_depth),
        max_children: params.max_children.unwrap_or(defaults.max_children),
        include_hidden: params.include_hidden.unwrap_or(defaults.include_hidden),
    };

    let target = resolve_target(dom, &params.selector, params.element_index, false).await?;
    let tree = dom.subtree(&target.selector, target.index, opts).await?;

    Ok(format::render_subtree(&target.notes, &tree))
}
