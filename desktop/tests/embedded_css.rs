#![cfg(test)]
//! Ensures the embedded desktop CSS (shared theme) remains present and non-trivial.
//!
//! Desktop builds inline `ui/assets/theme/main.css`. An accidental truncation or
//! path break would silently degrade styling only at runtime.
//!
//! If you rename or relocate the theme, update both this test and the
//! `include_str!` constant in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", ".translator {", "body {", ".button--primary"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn navbar_css_styles_mobile_menu() {
    for token in [".navbar__links--open", ".navbar__toggle", ".navbar__link--active"] {
        assert!(
            NAVBAR_CSS.contains(token),
            "Expected token `{token}` missing from navbar CSS"
        );
    }
}
