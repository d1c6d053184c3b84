#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The desktop app embeds `ui/assets/theme/main.css` at compile time, so a renamed
or dropped class only shows up as broken styling at runtime. These checks fail
early instead.

If you intentionally rename or remove a selector, update the component markup
and REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page__header",
    ".site-main",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".card {",
    ".tag--accent",
    ".check-list",
    // Translator widget
    ".translator__card",
    ".translator__languages",
    ".translator__swap",
    ".translator__panes",
    ".translator__textarea",
    ".translator__char-count",
    ".translator__loading",
    ".translator__result",
    ".translator__translation",
    ".translator__result-footer",
    ".translator__status--error",
    ".translator__demo-note",
    ".spinner",
    // Analysis panel
    ".analysis__grid",
    ".analysis__tags",
    ".analysis__example",
    ".analysis__structure-row",
    ".analysis__idiom",
    // Pricing & API docs
    ".billing-toggle__option--active",
    ".plan--popular",
    ".plan__savings",
    ".code-panel__tab--active",
    ".endpoint__method--get",
    ".endpoint__method--post",
    // Footer
    ".site-footer__inner",
    // Responsive block
    "@media (max-width: 820px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars); \
         did the file get truncated or the path change?"
    );
}

#[test]
fn error_and_demo_states_are_visually_distinct() {
    let status = THEME_CSS.contains(".translator__status--error");
    let demo = THEME_CSS.contains(".translator__demo-note");
    assert!(
        status && demo,
        "Translator status selectors missing (error: {status}, demo note: {demo})"
    );
}
