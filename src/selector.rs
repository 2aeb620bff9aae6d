//! Selector normalization: shorthand prefixes, escape cleanup, and the
//! `>> nth=` disambiguation suffix.
//!
//! Everything here is pure string rewriting; after `normalize` the result is
//! always valid input to the DOM collaborator's query API.

use lazy_static::lazy_static;
use regex::Regex;

/// Shorthand prefixes expanded to attribute selectors. Only a match at
/// position 0 triggers the rewrite.
const SHORTHANDS: &[(&str, &str)] = &[
    ("testid:", "data-testid"),
    ("data-test:", "data-test"),
    ("data-cy:", "data-cy"),
];

/// Trailing disambiguation suffix: `>> nth=<i>` (0-based) or `>> nth=last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NthSpec {
    Index(usize),
    Last,
}

/// Rewrite a shorthand or over-escaped selector into engine-valid form.
/// Idempotent: normalizing an already-normalized selector is the identity.
pub fn normalize(selector: &str) -> String {
    let selector = selector.trim();

    for (prefix, attr) in SHORTHANDS {
        if let Some(rest) = selector.strip_prefix(prefix) {
            // The value ends at the first whitespace; any trailing combinator
            // is preserved verbatim after the substitution.
            let (value, tail) = match rest.find(char::is_whitespace) {
                Some(pos) => (&rest[..pos], &rest[pos..]),
                None => (rest, ""),
            };
            return format!("[{attr}=\"{value}\"]{tail}");
        }
    }

    // Bare simple ID selectors with CSS-hostile characters switch to the
    // unambiguous `id=` engine form, sidestepping escaping pitfalls with
    // framework-generated ids like `radix-:rc:-trigger`. `#id .child` is a
    // descendant selector and is left to the escape-collapse path.
    if let Some(id) = simple_id_token(selector) {
        if id.contains(['\\', ':', '[', ']']) {
            return format!("id={}", id.replace('\\', ""));
        }
        return selector.to_string();
    }

    collapse_escapes(selector)
}

/// The id token of a standalone `#id` selector, or None when the selector
/// contains whitespace or combinators.
fn simple_id_token(selector: &str) -> Option<&str> {
    let token = selector.strip_prefix('#')?;
    if token.is_empty() || token.contains([' ', '\t', '\n', '>', '+', '~', ',']) {
        return None;
    }
    Some(token)
}

/// Collapse runs of backslashes immediately before `[`, `]` or `:` down to a
/// single backslash. `.top-\[36px\]` is already minimal and passes through.
fn collapse_escapes(selector: &str) -> String {
    let chars: Vec<char> = selector.chars().collect();
    let mut out = String::with_capacity(selector.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '\\' {
            let start = i;
            while i < chars.len() && chars[i] == '\\' {
                i += 1;
            }
            match chars.get(i) {
                Some(&c) if c == '[' || c == ']' || c == ':' => {
                    out.push('\\');
                    out.push(c);
                    i += 1;
                }
                _ => {
                    // Backslashes before anything else are none of our
                    // business; keep the run as written.
                    for _ in start..i {
                        out.push('\\');
                    }
                }
            }
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

/// Split a trailing `>> nth=` suffix off a selector. Returns the base
/// selector and the parsed spec, or the input untouched.
pub fn strip_nth_suffix(selector: &str) -> (&str, Option<NthSpec>) {
    if let Some(pos) = selector.rfind(">> nth=") {
        let value = selector[pos + 7..].trim();
        let base = selector[..pos].trim_end();
        if value == "last" {
            return (base, Some(NthSpec::Last));
        }
        if let Ok(index) = value.parse::<usize>() {
            return (base, Some(NthSpec::Index(index)));
        }
    }
    (selector, None)
}

/// Whether the selector already carries an nth suffix (hints must not
/// compound them).
pub fn has_nth_suffix(selector: &str) -> bool {
    selector.contains(">> nth=")
}

lazy_static! {
    // `at handler (eval at <anonymous>)`, `at q (...)`
    static ref STACK_FRAME: Regex = Regex::new(r"^\s*at\s+\S.*\(.*\)\s*$").unwrap();
    // `<anonymous>:12:34`
    static ref ANON_FRAME: Regex = Regex::new(r"<anonymous>:\d+:\d+").unwrap();
}

/// Reduce a raw selector-engine error to its useful part. Keeps the prefix
/// through "is not a valid selector" when present, otherwise strips
/// stack-frame-looking lines.
pub fn sanitize_engine_error(message: &str) -> String {
    const MARKER: &str = "is not a valid selector";

    if let Some(pos) = message.find(MARKER) {
        return message[..pos + MARKER.len()].trim().to_string();
    }

    message
        .lines()
        .filter(|line| !STACK_FRAME.is_match(line) && !ANON_FRAME.is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;
