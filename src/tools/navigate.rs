//! The `navigate` tool.

use serde::Deserialize;

use crate::dom::DomQuery;
use crate::errors::ProbeError;
use crate::tools::base::parse_args;

#[derive(Debug, Deserialize)]
struct NavigateParams {
    url: String,
}

pub async fn run(dom: &dyn DomQuery, args: serde_json::Value) -> Result<String, ProbeError> {
    let params: NavigateParams = parse_args(args)?;
    dom.goto(&params.url).await?;
    Ok(format!("Navigated to {}", params.url))
}
