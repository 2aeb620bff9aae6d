//! The `inspect_ancestors` tool: ancestor-chain walk plus layout
//! diagnostics.

use serde::Deserialize;

use crate::dom::DomQuery;
use crate::errors::ProbeError;
use crate::tools::base::{parse_args, resolve_target};
use crate::{diagnostics, format};

/// Default ancestor count above the target.
const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AncestorsParams {
    selector: String,
    element_index: Option<usize>,
    limit: Option<usize>,
}

pub async fn run(dom: &dyn DomQuery, args: serde_json::Value) -> Result<String, ProbeError> {
    let params: AncestorsParams = parse_args(args)?;
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    let target = resolve_target(dom, &params.selector, params.element_index, false).await?;

    let raw = dom
        .ancestor_chain(&target.selector, target.index, limit)
        .await?;
    if raw.is_empty() {
        // The element disappeared between the query and the walk.
        return Err(ProbeError::NotFound {
            selector: params.selector,
        });
    }

    let records = diagnostics::build_records(&raw);
    let diag = diagnostics::synthesize(&raw, &records);
    Ok(format::render_ancestors(
        &params.selector,
        &target.notes,
        &records,
        &diag,
    ))
}
