//! Ambiguity resolution: given a MatchSet that may hold several elements,
//! pick one deterministically and explain the choice.
//!
//! The default policy prefers the first visible match in document order;
//! interaction tools instead require a unique target and fail with full
//! remediation guidance.

use crate::describe::describe;
use crate::errors::ProbeError;
use crate::selector::has_nth_suffix;
use crate::types::MatchFacts;

/// How many per-match descriptions an Ambiguous error carries at most.
const MAX_LISTED_MATCHES: usize = 5;

/// Inner-text cap for per-match descriptions.
const MAX_TEXT_LEN: usize = 80;

/// Caller preferences for picking one element out of a MatchSet.
#[derive(Debug, Default)]
pub struct SelectOptions<'a> {
    /// Explicit 1-based index into the MatchSet.
    pub element_index: Option<usize>,
    /// Fail instead of silently picking when several elements match.
    pub error_on_multiple: bool,
    /// The selector as the caller wrote it, for messages and suggestions.
    pub original_selector: &'a str,
}

/// A single chosen element out of a MatchSet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// 0-based index into the MatchSet. Always < total.
    pub index: usize,
    pub total: usize,
}

/// Resolve a MatchSet to one element.
///
/// An explicit 1-based index always wins; with none given, a single match is
/// taken silently, `error_on_multiple` turns several matches into an
/// [`ProbeError::Ambiguous`], and otherwise the first visible match (falling
/// back to match 0) is chosen.
pub fn select(matches: &[MatchFacts], opts: &SelectOptions) -> Result<Resolved, ProbeError> {
    let total = matches.len();

    if total == 0 {
        return Err(ProbeError::NotFound {
            selector: opts.original_selector.to_string(),
        });
    }

    if let Some(requested) = opts.element_index {
        if requested < 1 || requested > total {
            return Err(ProbeError::IndexOutOfRange {
                selector: opts.original_selector.to_string(),
                index: requested,
                count: total,
            });
        }
        return Ok(Resolved {
            index: requested - 1,
            total,
        });
    }

    if total == 1 {
        return Ok(Resolved { index: 0, total });
    }

    if opts.error_on_multiple {
        return Err(ProbeError::Ambiguous {
            selector: opts.original_selector.to_string(),
            count: total,
            message: ambiguous_message(matches, opts.original_selector),
        });
    }

    // Prefer-visible policy: first visible match in document order, or the
    // first match when nothing is visible.
    let index = matches.iter().position(|m| m.visible).unwrap_or(0);
    Ok(Resolved { index, total })
}

/// Remediation text for an ambiguous selector under `error_on_multiple`.
fn ambiguous_message(matches: &[MatchFacts], selector: &str) -> String {
    let total = matches.len();
    let mut out = format!(
        "Found {total} elements matching '{selector}'. Add a unique data-testid attribute to the element you mean, or append '>> nth=<i>' to the selector to pick one by index.\nMatches:\n"
    );

    for (i, m) in matches.iter().take(MAX_LISTED_MATCHES).enumerate() {
        let mut line = format!("  [{i}] {}", describe(&m.node));

        let text = trimmed_text(&m.text);
        if !text.is_empty() {
            line.push_str(&format!(" \"{text}\""));
        }

        if let Some(hint) = &m.ancestor_hint {
            line.push_str(&format!(
                " (inside <{} {}=\"{}\">)",
                hint.tag, hint.attr, hint.value
            ));
        }

        let suggestion = if let Some(test_id) = m.node.test_id.as_deref().filter(|v| !v.is_empty())
        {
            format!("testid:{test_id}")
        } else if let Some(id) = m.node.id.as_deref().filter(|v| !v.is_empty()) {
            format!("id={id}")
        } else {
            format!("{selector} >> nth={i}")
        };
        line.push_str(&format!(" -> try: {suggestion}"));

        out.push_str(&line);
        out.push('\n');
    }

    if total > MAX_LISTED_MATCHES {
        out.push_str(&format!("  ... and {} more\n", total - MAX_LISTED_MATCHES));
    }

    out.trim_end().to_string()
}

fn trimmed_text(text: &str) -> String {
    let collapsed: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= MAX_TEXT_LEN {
        collapsed
    } else {
        let cut: String = collapsed.chars().take(MAX_TEXT_LEN - 3).collect();
        format!("{cut}...")
    }
}

/// One-line warning about a silently resolved multi-match selector, plus a
/// uniqueness tip. Empty when the selector was unambiguous.
pub fn selection_info(selector: &str, index: usize, total: usize) -> String {
    if total <= 1 {
        return String::new();
    }

    let mut out = format!(
        "⚠ Found {total} elements matching {selector}, using element {} (first visible)\n",
        index + 1
    );

    if is_test_attribute_form(selector) {
        out.push_str("Tip: this test id is not unique; give each element a distinct value.\n");
    } else {
        out.push_str("Tip: add a unique test id (data-testid) to the element you mean.\n");
    }
    out
}

/// Copy-paste `>> nth=` examples for narrowing a multi-match selector. Empty
/// when there is nothing to disambiguate or the selector already carries an
/// nth suffix.
pub fn nth_hint(selector: &str, total: usize) -> String {
    if total <= 1 || has_nth_suffix(selector) {
        return String::new();
    }
    format!(
        "Pick one by index: `{selector} >> nth=0` (first) or `{selector} >> nth={}` (last; `{selector} >> nth=last` also works)\n",
        total - 1
    )
}

fn is_test_attribute_form(selector: &str) -> bool {
    let s = selector.trim_start();
    s.starts_with("testid:")
        || s.starts_with("data-test:")
        || s.starts_with("data-cy:")
        || s.starts_with("[data-testid")
        || s.starts_with("[data-test")
        || s.starts_with("[data-cy")
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;
