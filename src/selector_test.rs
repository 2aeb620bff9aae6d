// Unit tests for selector normalization

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_shorthand_rewrites() {
    assert_eq!(normalize("testid:submit"), "[data-testid=\"submit\"]");
    assert_eq!(normalize("data-test:login"), "[data-test=\"login\"]");
    assert_eq!(normalize("data-cy:nav-bar"), "[data-cy=\"nav-bar\"]");
}

#[test]
fn test_shorthand_preserves_trailing_combinator() {
    assert_eq!(
        normalize("testid:x button:first-child"),
        "[data-testid=\"x\"] button:first-child"
    );
    assert_eq!(
        normalize("data-cy:card > .title"),
        "[data-cy=\"card\"] > .title"
    );
}

#[test]
fn test_shorthand_only_at_position_zero() {
    // A prefix in the middle of the selector is not a shorthand.
    assert_eq!(normalize("div testid:x"), "div testid:x");
}

#[test]
fn test_normalize_is_idempotent() {
    for s in [
        "testid:submit",
        "data-test:login",
        "data-cy:nav",
        "#radix-\\:rc\\:-trigger",
        ".top-\\\\[36px\\\\]",
        "button.primary",
    ] {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
    }
}

#[test]
fn test_simple_id_with_specials_switches_to_id_form() {
    assert_eq!(normalize("#radix-\\:rc\\:-trigger"), "id=radix-:rc:-trigger");
    assert_eq!(normalize("#a[0]"), "id=a[0]");
    assert_eq!(normalize("#with\\\\slash"), "id=withslash");
}

#[test]
fn test_simple_id_without_specials_is_identity() {
    assert_eq!(normalize("#main"), "#main");
    assert_eq!(normalize("#nav-bar_2"), "#nav-bar_2");
    // Other CSS-significant characters do not trigger the rewrite.
    assert_eq!(normalize("#a.b"), "#a.b");
}

#[test]
fn test_id_with_descendant_is_not_rewritten() {
    // Only standalone IDs switch to the id= form.
    assert_eq!(normalize("#id .child"), "#id .child");
    assert_eq!(normalize("#id > span"), "#id > span");
}

#[test]
fn test_escape_collapse() {
    // Single escapes are already minimal.
    assert_eq!(normalize(".top-\\[36px\\]"), ".top-\\[36px\\]");
    // Double escapes collapse to single.
    assert_eq!(normalize(".top-\\\\[36px\\\\]"), ".top-\\[36px\\]");
    // Longer runs also collapse to one.
    assert_eq!(normalize(".p-\\\\\\\\[2px\\\\\\\\]"), ".p-\\[2px\\]");
    assert_eq!(normalize("a\\\\:hover"), "a\\:hover");
}

#[test]
fn test_escape_collapse_leaves_other_backslashes_alone() {
    assert_eq!(normalize("div \\\\x"), "div \\\\x");
}

#[test]
fn test_plain_selectors_pass_through() {
    assert_eq!(normalize("button.primary"), "button.primary");
    assert_eq!(normalize("nav > ul li:first-child"), "nav > ul li:first-child");
    assert_eq!(normalize("[data-testid=\"x\"]"), "[data-testid=\"x\"]");
}

#[test]
fn test_strip_nth_suffix() {
    assert_eq!(
        strip_nth_suffix(".card >> nth=2"),
        (".card", Some(NthSpec::Index(2)))
    );
    assert_eq!(
        strip_nth_suffix("text=Add Recipe >> nth=last"),
        ("text=Add Recipe", Some(NthSpec::Last))
    );
    assert_eq!(strip_nth_suffix(".card"), (".card", None));
    // Unparseable value is left in place.
    assert_eq!(strip_nth_suffix(".card >> nth=x"), (".card >> nth=x", None));
}

#[test]
fn test_has_nth_suffix() {
    assert!(has_nth_suffix(".card >> nth=1"));
    assert!(!has_nth_suffix(".card"));
}

#[test]
fn test_sanitize_keeps_invalid_selector_prefix() {
    let raw = "Failed to execute 'querySelectorAll' on 'Document': 'div[' is not a valid selector.\n    at q (<anonymous>:3:17)\n    at eval (eval at run (app.js:1:2))";
    let cleaned = sanitize_engine_error(raw);
    assert!(cleaned.ends_with("is not a valid selector"));
    assert!(!cleaned.contains("<anonymous>"));
}

#[test]
fn test_sanitize_strips_stack_frames() {
    let raw = "script error\n    at handler (main.js:10:5)\n    <anonymous>:2:9\nplain detail line";
    let cleaned = sanitize_engine_error(raw);
    assert_eq!(cleaned, "script error\nplain detail line");
}
