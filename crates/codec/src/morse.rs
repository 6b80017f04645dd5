//! Text <-> Morse transliteration
//!
//! Both directions are total functions: characters or tokens outside the
//! table pass through unchanged instead of failing.

use crate::table::MorseTable;

/// Stateless codec over the shared symbol table.
///
/// Encode uppercases the input, maps each character to its token and joins
/// tokens with single spaces. Decode splits on single spaces, maps each token
/// back and concatenates with no separator; the `/` token becomes a space.
/// Tokens are case-sensitive.
pub struct MorseCodec {
    table: &'static MorseTable,
}

impl MorseCodec {
    pub fn new() -> Self {
        Self {
            table: MorseTable::shared(),
        }
    }

    /// Encode text to Morse, one space between tokens.
    ///
    /// Unmapped characters pass through literally (already uppercased by the
    /// normalization pass).
    pub fn encode(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 4);
        for ch in text.to_uppercase().chars() {
            if !out.is_empty() {
                out.push(' ');
            }
            match self.table.token(ch) {
                Some(token) => out.push_str(token),
                None => out.push(ch),
            }
        }
        out
    }

    /// Decode space-separated Morse tokens back to text.
    ///
    /// Unknown tokens pass through literally. Consecutive spaces split into
    /// empty tokens, which miss lookup and contribute nothing.
    pub fn decode(&self, morse: &str) -> String {
        if morse.is_empty() {
            return String::new();
        }
        let mut out = String::with_capacity(morse.len() / 2);
        for token in morse.split(' ') {
            match self.table.character(token) {
                Some(ch) => out.push(ch),
                None => out.push_str(token),
            }
        }
        out
    }
}

impl Default for MorseCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode text to Morse over the shared table.
pub fn encode(text: &str) -> String {
    MorseCodec::new().encode(text)
}

/// Decode Morse to text over the shared table.
pub fn decode(morse: &str) -> String {
    MorseCodec::new().decode(morse)
}
