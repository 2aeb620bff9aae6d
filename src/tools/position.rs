//! The `element_position` tool: bounding box, center, visibility.

use serde::Deserialize;

use crate::dom::DomQuery;
use crate::errors::ProbeError;
use crate::format;
use crate::tools::base::{parse_args, resolve_target};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PositionParams {
    selector: String,
    element_index: Option<usize>,
}

pub async fn run(dom: &dyn DomQuery, args: serde_json::Value) -> Result<String, ProbeError> {
    let params: PositionParams = parse_args(args)?;
    let target = resolve_target(dom, &params.selector, params.element_index, false).await?;
    Ok(format::render_position(&target.notes, &target.facts))
}
