//! Localized counter labels for the translator widget. Plural forms live in
//! the FTL bundles (`translator-char-count`, `translator-words`).

use crate::t;

pub fn format_char_count(count: usize) -> String {
    t!("translator-char-count", count = count)
}

pub fn format_words_translated(count: usize) -> String {
    t!("translator-words", count = count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n;

    #[test]
    fn pluralizes_through_the_fallback_bundle() {
        i18n::init();
        i18n::set_language("en-US").expect("en-US bundle");
        assert_eq!(format_char_count(0), "0 characters");
        assert_eq!(format_char_count(1), "1 character");
        assert_eq!(format_words_translated(1), "1 word translated");
        assert_eq!(format_words_translated(3), "3 words translated");
    }
}
