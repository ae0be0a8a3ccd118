//! Cell text sanitization.
//!
//! Applied to every cell before width fitting, so stripped characters never
//! count toward truncation decisions.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

use crate::types::SanitizeMode;

/// Sanitize `text` according to `mode`.
///
/// Borrows the input unchanged whenever nothing needs removing.
pub fn sanitize(text: &str, mode: SanitizeMode) -> Cow<'_, str> {
    match mode {
        SanitizeMode::None => Cow::Borrowed(text),
        SanitizeMode::AsciiOnly => ascii_only(text),
        SanitizeMode::StripEmoji => strip_emoji(text),
    }
}

/// Drop every character outside 7-bit ASCII. Silent removal, no
/// transliteration or escaping.
fn ascii_only(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(char::is_ascii).collect())
}

/// Remove emoji grapheme clusters, preserving all other Unicode text.
///
/// Working on grapheme clusters keeps ZWJ sequences, flag pairs, and
/// skin-tone modifiers together with their base pictograph, so a whole
/// sequence is removed as one unit instead of leaving orphaned joiners.
fn strip_emoji(text: &str) -> Cow<'_, str> {
    if !text.graphemes(true).any(is_emoji_cluster) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.graphemes(true)
            .filter(|cluster| !is_emoji_cluster(cluster))
            .collect(),
    )
}

/// Whether a grapheme cluster is an emoji per the Unicode emoji registry.
///
/// Registry entries are canonical sequences, usually carrying U+FE0F where
/// emoji presentation is optional; real-world text may omit or add the
/// selector, so both spellings are checked.
fn is_emoji_cluster(cluster: &str) -> bool {
    if emojis::get(cluster).is_some() {
        return true;
    }
    const VARIATION_SELECTOR: char = '\u{fe0f}';
    if cluster.contains(VARIATION_SELECTOR) {
        let bare: String = cluster.chars().filter(|&c| c != VARIATION_SELECTOR).collect();
        emojis::get(&bare).is_some()
    } else {
        let mut presented = cluster.to_string();
        presented.push(VARIATION_SELECTOR);
        emojis::get(&presented).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_identity() {
        let text = "café 🎉 naïve";
        assert_eq!(sanitize(text, SanitizeMode::None), text);
    }

    #[test]
    fn ascii_only_drops_accents_and_emoji() {
        assert_eq!(sanitize("café 🎉", SanitizeMode::AsciiOnly), "caf ");
    }

    #[test]
    fn ascii_only_borrows_clean_input() {
        let out = sanitize("plain text", SanitizeMode::AsciiOnly);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn ascii_only_character_by_character() {
        let out = sanitize("café 🎉", SanitizeMode::AsciiOnly);
        let expected: Vec<char> = vec!['c', 'a', 'f', ' '];
        assert_eq!(out.chars().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn strip_emoji_keeps_non_latin_text() {
        assert_eq!(
            sanitize("héllo 世界 🎉", SanitizeMode::StripEmoji),
            "héllo 世界 "
        );
    }

    #[test]
    fn strip_emoji_removes_zwj_sequence_whole() {
        // Family sequence: four pictographs joined by ZWJ, one cluster.
        assert_eq!(
            sanitize("a👨‍👩‍👧‍👦b", SanitizeMode::StripEmoji),
            "ab"
        );
    }

    #[test]
    fn strip_emoji_removes_flags() {
        assert_eq!(sanitize("de 🇩🇪", SanitizeMode::StripEmoji), "de ");
    }

    #[test]
    fn strip_emoji_removes_skin_tone_sequences() {
        assert_eq!(sanitize("hi 👍🏽", SanitizeMode::StripEmoji), "hi ");
    }

    #[test]
    fn strip_emoji_handles_variation_selector_spellings() {
        // Heart with and without U+FE0F both count as emoji.
        assert_eq!(sanitize("x❤️y", SanitizeMode::StripEmoji), "xy");
        assert_eq!(sanitize("x❤y", SanitizeMode::StripEmoji), "xy");
    }

    #[test]
    fn strip_emoji_borrows_emoji_free_input() {
        let out = sanitize("héllo 世界", SanitizeMode::StripEmoji);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sanitize("", SanitizeMode::AsciiOnly), "");
        assert_eq!(sanitize("", SanitizeMode::StripEmoji), "");
    }
}
