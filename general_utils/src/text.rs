//! Text helpers: template placeholders, accent stripping and ISO-8859-9

use crate::errors::UtilError;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const USER_PLACEHOLDER: &str = "{user}";
const GENDER_PLACEHOLDER: &str = "{x}";

/// Grammatical gender used to pick word endings in message templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// `"M"` is male; any other code falls back to female.
    pub fn from_code(code: &str) -> Self {
        if code == "M" {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    fn ending(self) -> &'static str {
        match self {
            Gender::Male => "o",
            Gender::Female => "a",
        }
    }
}

/// Fill `{user}` with `username` and `{x}` with the gendered word ending
pub fn replace_gender(gender: Gender, username: &str, text: &str) -> String {
    text.replace(USER_PLACEHOLDER, username)
        .replace(GENDER_PLACEHOLDER, gender.ending())
}

/// Strip diacritics: decompose, drop combining marks, recompose
///
/// Every combining mark goes, spacing ones (`Mc`) and enclosing ones (`Me`)
/// included, not only nonspacing accents. Scripts that write vowels as
/// spacing marks, such as Devanagari, lose those vowel signs.
pub fn remove_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

// ISO-8859-9 is Latin-1 with six Icelandic letters swapped for Turkish ones
const LATIN5_OVERRIDES: [(u8, char); 6] = [
    (0xD0, 'Ğ'),
    (0xDD, 'İ'),
    (0xDE, 'Ş'),
    (0xF0, 'ğ'),
    (0xFD, 'ı'),
    (0xFE, 'ş'),
];

/// Decode ISO-8859-9 bytes. Every byte maps to a character.
pub fn decode_latin5(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&byte| {
            LATIN5_OVERRIDES
                .iter()
                .find(|(code, _)| *code == byte)
                .map(|(_, ch)| *ch)
                .unwrap_or(char::from(byte))
        })
        .collect()
}

/// Encode text as ISO-8859-9, failing on the first unrepresentable character
pub fn encode_latin5(text: &str) -> Result<Vec<u8>, UtilError> {
    text.chars()
        .map(|ch| {
            if let Some((code, _)) = LATIN5_OVERRIDES.iter().find(|(_, c)| *c == ch) {
                return Ok(*code);
            }
            match u8::try_from(u32::from(ch)) {
                // The Latin-1 letters at the overridden positions do not exist in Latin-5
                Ok(code) if !LATIN5_OVERRIDES.iter().any(|(c, _)| *c == code) => Ok(code),
                _ => Err(UtilError::Encoding(ch)),
            }
        })
        .collect()
}
