//! Email local-part derivation from personal names.
//!
//! Names are folded to lowercase and decomposed so accented letters split
//! into a base letter plus combining marks, which are then dropped. Latin
//! letters with no decomposition (`ł`, `ø`, `ß`, ...) are spelled out first.
//! Every character left outside `[a-z0-9]` becomes a period.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Derives an email local part from a personal name.
///
/// # Example
///
/// ```
/// use fake_records::local_part_from_name;
///
/// assert_eq!(local_part_from_name("John Doe"), "john.doe");
/// assert_eq!(local_part_from_name("José Muñoz"), "jose.munoz");
/// ```
#[must_use]
pub fn local_part_from_name(name: &str) -> String {
    let mut folded = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        match spell_latin(c) {
            Some(spelled) => folded.push_str(spelled),
            None => folded.push(c),
        }
    }
    folded
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '.'
            }
        })
        .collect()
}

/// ASCII spelling of lowercase Latin letters that NFD leaves whole.
const fn spell_latin(c: char) -> Option<&'static str> {
    let spelled = match c {
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        'ø' => "o",
        'ł' => "l",
        'đ' | 'ð' => "d",
        'þ' => "th",
        'ħ' => "h",
        'ı' => "i",
        _ => return None,
    };
    Some(spelled)
}

/// Joins a local part and a domain into an address.
pub(crate) fn address(local_part: &str, domain: &str) -> String {
    format!("{local_part}@{domain}")
}
