//! The `click` tool. Interaction requires an unambiguous target: multiple
//! matches fail with remediation guidance instead of being silently picked.

use serde::Deserialize;

use crate::describe::describe;
use crate::dom::DomQuery;
use crate::errors::ProbeError;
use crate::tools::base::{parse_args, resolve_target};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClickParams {
    selector: String,
    element_index: Option<usize>,
    #[serde(default)]
    force_multiple: bool,
}

pub async fn run(dom: &dyn DomQuery, args: serde_json::Value) -> Result<String, ProbeError> {
    let params: ClickParams = parse_args(args)?;

    let target = resolve_target(
        dom,
        &params.selector,
        params.element_index,
        !params.force_multiple,
    )
    .await?;

    dom.click(&target.selector, target.index).await?;

    let mut out = format!("Clicked {}", describe(&target.facts.node));
    if !target.notes.is_empty() {
        out.push('\n');
        out.push_str(&target.notes);
    }
    Ok(out)
}
