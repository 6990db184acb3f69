//! Natural-language ordering for country names
//!
//! Names are compared in levels, the way dictionary collation works:
//!
//! 1. **Primary** - base letters, with case folded and diacritics removed
//!    (`"Åland"` sorts next to `"Aland"`, not after `"Zambia"`).
//! 2. **Secondary** - unaccented letters before accented ones.
//! 3. **Tertiary** - lowercase before uppercase.
//!
//! Decomposed input (a base letter followed by a combining mark) yields the
//! same key as the precomposed letter.
//!
//! A final code point comparison makes the ordering total, so two distinct
//! strings never compare equal.

use std::cmp::Ordering;

/// Diacritic classes, ordered by their secondary weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
enum Accent {
    None = 0,
    Acute,
    Grave,
    Breve,
    Circumflex,
    Caron,
    Ring,
    Diaeresis,
    DoubleAcute,
    Tilde,
    Dot,
    Stroke,
    Cedilla,
    Ogonek,
    Macron,
}

/// Precomputed multi-level sort key for one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollationKey {
    primary: Vec<char>,
    secondary: Vec<Accent>,
    tertiary: Vec<bool>,
}

impl CollationKey {
    pub fn new(s: &str) -> Self {
        let mut key = Self {
            primary: Vec::with_capacity(s.len()),
            secondary: Vec::with_capacity(s.len()),
            tertiary: Vec::with_capacity(s.len()),
        };

        for c in s.chars() {
            if is_combining_mark(c) {
                key.attach_mark(c);
                continue;
            }
            let upper = c.is_uppercase();
            for lower in c.to_lowercase() {
                let (base, accent) = strip_diacritic(lower);
                match expand_ligature(base) {
                    Some(parts) => {
                        for part in parts.chars() {
                            key.push(part, accent, upper);
                        }
                    }
                    None => key.push(base, accent, upper),
                }
            }
        }
        key
    }

    fn push(&mut self, base: char, accent: Accent, upper: bool) {
        self.primary.push(base);
        self.secondary.push(accent);
        self.tertiary.push(upper);
    }

    /// Folds a combining mark into the accent of the preceding letter.
    fn attach_mark(&mut self, mark: char) {
        let Some(last) = self.secondary.last_mut() else {
            return;
        };
        if *last == Accent::None {
            *last = combining_accent(mark);
        }
    }

    /// Compares keys level by level, stopping at the first difference.
    fn compare_levels(&self, other: &Self) -> Ordering {
        self.primary
            .cmp(&other.primary)
            .then_with(|| self.secondary.cmp(&other.secondary))
            .then_with(|| self.tertiary.cmp(&other.tertiary))
    }
}

/// Locale-aware comparison of two names.
pub fn collate(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    CollationKey::new(a)
        .compare_levels(&CollationKey::new(b))
        .then_with(|| a.cmp(b))
}

fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

/// Accent class of a combining diacritical mark. Marks without a
/// precomposed counterpart in [`strip_diacritic`] carry no weight.
fn combining_accent(mark: char) -> Accent {
    match mark {
        '\u{0300}' => Accent::Grave,
        '\u{0301}' => Accent::Acute,
        '\u{0302}' => Accent::Circumflex,
        '\u{0303}' => Accent::Tilde,
        '\u{0304}' => Accent::Macron,
        '\u{0306}' => Accent::Breve,
        '\u{0307}' => Accent::Dot,
        '\u{0308}' => Accent::Diaeresis,
        '\u{030A}' => Accent::Ring,
        '\u{030B}' => Accent::DoubleAcute,
        '\u{030C}' => Accent::Caron,
        '\u{0326}' | '\u{0327}' => Accent::Cedilla,
        '\u{0328}' => Accent::Ogonek,
        _ => Accent::None,
    }
}

fn expand_ligature(c: char) -> Option<&'static str> {
    match c {
        'ß' => Some("ss"),
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        'ĳ' => Some("ij"),
        _ => None,
    }
}

/// Maps a lowercase Latin letter to its base letter and diacritic class.
///
/// Characters outside the table are returned unchanged with no accent.
fn strip_diacritic(c: char) -> (char, Accent) {
    use Accent::{
        Acute, Breve, Caron, Cedilla, Circumflex, Diaeresis, Dot, DoubleAcute, Grave, Macron,
        Ogonek, Ring, Stroke, Tilde,
    };

    match c {
        'á' => ('a', Acute),
        'à' => ('a', Grave),
        'â' => ('a', Circumflex),
        'ã' => ('a', Tilde),
        'ä' => ('a', Diaeresis),
        'å' => ('a', Ring),
        'ā' => ('a', Macron),
        'ă' => ('a', Breve),
        'ą' => ('a', Ogonek),
        'ç' => ('c', Cedilla),
        'ć' => ('c', Acute),
        'č' => ('c', Caron),
        'ĉ' => ('c', Circumflex),
        'ċ' => ('c', Dot),
        'ď' => ('d', Caron),
        'đ' => ('d', Stroke),
        'é' => ('e', Acute),
        'è' => ('e', Grave),
        'ê' => ('e', Circumflex),
        'ë' => ('e', Diaeresis),
        'ē' => ('e', Macron),
        'ĕ' => ('e', Breve),
        'ė' => ('e', Dot),
        'ę' => ('e', Ogonek),
        'ě' => ('e', Caron),
        'ğ' => ('g', Breve),
        'ĝ' => ('g', Circumflex),
        'ġ' => ('g', Dot),
        'ģ' => ('g', Cedilla),
        'ĥ' => ('h', Circumflex),
        'ħ' => ('h', Stroke),
        'í' => ('i', Acute),
        'ì' => ('i', Grave),
        'î' => ('i', Circumflex),
        'ï' => ('i', Diaeresis),
        'ī' => ('i', Macron),
        'ĭ' => ('i', Breve),
        'į' => ('i', Ogonek),
        'ĵ' => ('j', Circumflex),
        'ķ' => ('k', Cedilla),
        'ĺ' => ('l', Acute),
        'ļ' => ('l', Cedilla),
        'ľ' => ('l', Caron),
        'ł' => ('l', Stroke),
        'ñ' => ('n', Tilde),
        'ń' => ('n', Acute),
        'ņ' => ('n', Cedilla),
        'ň' => ('n', Caron),
        'ó' => ('o', Acute),
        'ò' => ('o', Grave),
        'ô' => ('o', Circumflex),
        'õ' => ('o', Tilde),
        'ö' => ('o', Diaeresis),
        'ø' => ('o', Stroke),
        'ō' => ('o', Macron),
        'ŏ' => ('o', Breve),
        'ő' => ('o', DoubleAcute),
        'ŕ' => ('r', Acute),
        'ř' => ('r', Caron),
        'ŗ' => ('r', Cedilla),
        'ś' => ('s', Acute),
        'š' => ('s', Caron),
        'ş' => ('s', Cedilla),
        'ŝ' => ('s', Circumflex),
        'ș' => ('s', Cedilla),
        'ť' => ('t', Caron),
        'ţ' => ('t', Cedilla),
        'ț' => ('t', Cedilla),
        'ŧ' => ('t', Stroke),
        'ú' => ('u', Acute),
        'ù' => ('u', Grave),
        'û' => ('u', Circumflex),
        'ü' => ('u', Diaeresis),
        'ū' => ('u', Macron),
        'ŭ' => ('u', Breve),
        'ů' => ('u', Ring),
        'ű' => ('u', DoubleAcute),
        'ų' => ('u', Ogonek),
        'ũ' => ('u', Tilde),
        'ŵ' => ('w', Circumflex),
        'ý' => ('y', Acute),
        'ÿ' => ('y', Diaeresis),
        'ŷ' => ('y', Circumflex),
        'ź' => ('z', Acute),
        'ż' => ('z', Dot),
        'ž' => ('z', Caron),
        _ => (c, Accent::None),
    }
}
