//! Unicode codepoint labels for group keys.

use serde::Serialize;

/// Codepoint labels of a key: the base character and, for an IVS key, its
/// variation selector. Empty strings mean "no annotation".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Codepoints {
    pub primary: String,
    pub secondary: String,
}

impl Codepoints {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }
}

/// `U+XXXX` label, uppercase hex, at least four digits.
pub fn label(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

/// Annotate a key. One character yields its codepoint, two characters
/// (base + selector) yield both; any other length yields nothing.
pub fn codepoints(key: &str) -> Codepoints {
    let mut chars = key.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(base), None, _) => Codepoints {
            primary: label(base),
            secondary: String::new(),
        },
        (Some(base), Some(selector), None) => Codepoints {
            primary: label(base),
            secondary: label(selector),
        },
        _ => Codepoints::default(),
    }
}

/// Standardized (VS1-VS16) and ideographic (VS17-VS256) variation selectors.
pub fn is_variation_selector(c: char) -> bool {
    matches!(c, '\u{FE00}'..='\u{FE0F}' | '\u{E0100}'..='\u{E01EF}')
}

/// True when `key` is a base character followed by a variation selector.
pub fn is_ivs(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(_), Some(selector), None) if is_variation_selector(selector)
    )
}
