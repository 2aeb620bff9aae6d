//! The shared selector pipeline every element tool goes through:
//! normalize, split the nth suffix, query, resolve, explain.

use crate::dom::DomQuery;
use crate::errors::ProbeError;
use crate::resolve::{self, SelectOptions};
use crate::selector::{self, NthSpec};
use crate::types::MatchFacts;

/// A fully resolved target element plus the text that explains how it was
/// chosen.
pub struct ResolvedTarget {
    /// Engine-ready selector with any nth suffix removed.
    pub selector: String,
    /// 0-based index into the MatchSet.
    pub index: usize,
    pub total: usize,
    pub facts: MatchFacts,
    /// Selection warning, uniqueness tip, and nth examples; empty when the
    /// selector was unambiguous or explicitly indexed.
    pub notes: String,
}

/// Resolve a raw tool-call selector down to one element.
///
/// `element_index` is the tool parameter (1-based); a `>> nth=` suffix in
/// the selector takes precedence over it. `error_on_multiple` applies only
/// when neither picks an explicit match.
pub async fn resolve_target(
    dom: &dyn DomQuery,
    raw_selector: &str,
    element_index: Option<usize>,
    error_on_multiple: bool,
) -> Result<ResolvedTarget, ProbeError> {
    let (base, nth) = selector::strip_nth_suffix(raw_selector);
    let normalized = selector::normalize(base);

    let matches = dom.query(&normalized).await?;

    let explicit = match nth {
        // The suffix is 0-based; the resolver takes 1-based indices.
        Some(NthSpec::Index(i)) => Some(i + 1),
        Some(NthSpec::Last) => Some(matches.len()),
        None => element_index,
    };

    let resolved = resolve::select(
        &matches,
        &SelectOptions {
            element_index: explicit,
            error_on_multiple,
            original_selector: raw_selector,
        },
    )?;

    let notes = if explicit.is_none() {
        let mut notes = resolve::selection_info(raw_selector, resolved.index, resolved.total);
        notes.push_str(&resolve::nth_hint(raw_selector, resolved.total));
        notes
    } else {
        String::new()
    };

    Ok(ResolvedTarget {
        selector: normalized,
        index: resolved.index,
        total: resolved.total,
        facts: matches[resolved.index].clone(),
        notes,
    })
}

/// Decode tool-call arguments into a typed parameter struct.
pub fn parse_args<T: serde::de::DeserializeOwned>(args: serde_json::Value) -> Result<T, ProbeError> {
    serde_json::from_value(args)
        .map_err(|e| ProbeError::Other(anyhow::anyhow!("Invalid tool arguments: {e}")))
}
