//! Morse symbol table
//!
//! Forward (character -> token) and inverse (token -> character) maps built
//! from a single ordered enumeration of the international Morse alphabet plus
//! common punctuation.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

/// Token that encodes the space character (word separator on the wire).
pub const WORD_SEPARATOR: &str = "/";

/// Ordered (character, token) pairs covering letters, digits, punctuation and
/// the space character.
///
/// The enumeration order is load-bearing: when two entries share a token, the
/// later entry wins in the inverse map. The tokens `.-..-.` (`"` and `}`) and
/// `-.-.-.` (`;` and `|`) collide, so `}` and `|` own them on decode. The
/// repeated `(` `)` `_` `=` entries carry identical tokens, so they do not
/// affect either map.
pub const SYMBOL_PAIRS: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
    ('#', "...--.-"),
    ('%', ".....-"),
    ('^', "..-..-"),
    ('*', "---.-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('_', "..--.-"),
    ('=', "-...-"),
    ('{', ".--..-"),
    ('}', ".-..-."),
    ('[', "-..--."),
    (']', "-.-..-"),
    ('|', "-.-.-."),
    ('~', "--...-"),
    ('`', "--..-."),
    (' ', WORD_SEPARATOR),
];

/// Immutable lookup tables for both transliteration directions.
pub struct MorseTable {
    forward: HashMap<char, &'static str>,
    inverse: HashMap<&'static str, char>,
}

impl MorseTable {
    /// Build both maps in one ordered pass over [`SYMBOL_PAIRS`].
    pub fn new() -> Self {
        let mut forward = HashMap::with_capacity(SYMBOL_PAIRS.len());
        let mut inverse = HashMap::with_capacity(SYMBOL_PAIRS.len());
        let mut overrides = 0usize;

        for &(ch, token) in SYMBOL_PAIRS {
            forward.insert(ch, token);
            if inverse.insert(token, ch).is_some() {
                overrides += 1;
            }
        }

        debug!(
            characters = forward.len(),
            inverse_overrides = overrides,
            "morse table built"
        );

        Self { forward, inverse }
    }

    /// Process-wide table, built once before first use.
    pub fn shared() -> &'static MorseTable {
        static TABLE: OnceLock<MorseTable> = OnceLock::new();
        TABLE.get_or_init(MorseTable::new)
    }

    /// Token for a character, if the character is in the alphabet.
    pub fn token(&self, ch: char) -> Option<&'static str> {
        self.forward.get(&ch).copied()
    }

    /// Character owning a token, if any. For colliding tokens this is the
    /// last-enumerated character.
    pub fn character(&self, token: &str) -> Option<char> {
        self.inverse.get(token).copied()
    }

    /// Number of distinct characters in the alphabet.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Deduplicated (character, token) pairs in first-seen enumeration order.
    pub fn entries(&self) -> Vec<(char, &'static str)> {
        let mut seen = Vec::with_capacity(self.forward.len());
        for &(ch, token) in SYMBOL_PAIRS {
            if !seen.iter().any(|&(c, _)| c == ch) {
                seen.push((ch, token));
            }
        }
        seen
    }
}

impl Default for MorseTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_letters_digits_punctuation_and_space() {
        let table = MorseTable::new();

        for ch in 'A'..='Z' {
            assert!(table.token(ch).is_some(), "missing letter {ch}");
        }
        for ch in '0'..='9' {
            assert!(table.token(ch).is_some(), "missing digit {ch}");
        }
        for ch in r#".,?'!/()&:;=+-_"$@#%^*{}[]|~`"#.chars() {
            assert!(table.token(ch).is_some(), "missing punctuation {ch}");
        }
        assert_eq!(table.token(' '), Some(WORD_SEPARATOR));

        // 26 letters + 10 digits + 29 punctuation + space
        assert_eq!(table.len(), 66);
        assert_eq!(table.entries().len(), 66);
    }

    #[test]
    fn tokens_are_nonempty_over_dot_dash_slash() {
        for &(ch, token) in SYMBOL_PAIRS {
            assert!(!token.is_empty(), "empty token for {ch}");
            assert!(
                token.chars().all(|c| matches!(c, '.' | '-' | '/')),
                "token {token} for {ch} outside alphabet"
            );
        }
    }

    #[test]
    fn inverse_keeps_last_entry_on_collision() {
        let table = MorseTable::new();

        // '"' and '}' share a token; '}' is enumerated later and wins.
        assert_eq!(table.token('"'), Some(".-..-."));
        assert_eq!(table.token('}'), Some(".-..-."));
        assert_eq!(table.character(".-..-."), Some('}'));

        // ';' and '|' share a token; '|' wins.
        assert_eq!(table.token(';'), Some("-.-.-."));
        assert_eq!(table.token('|'), Some("-.-.-."));
        assert_eq!(table.character("-.-.-."), Some('|'));
    }

    #[test]
    fn duplicate_entries_carry_identical_tokens() {
        for target in ['(', ')', '_', '='] {
            let tokens: Vec<&str> = SYMBOL_PAIRS
                .iter()
                .filter(|&&(ch, _)| ch == target)
                .map(|&(_, token)| token)
                .collect();
            assert_eq!(tokens.len(), 2, "expected two entries for {target}");
            assert_eq!(tokens[0], tokens[1]);
        }
    }

    #[test]
    fn word_separator_round_trips() {
        let table = MorseTable::new();
        assert_eq!(table.token(' '), Some("/"));
        assert_eq!(table.character("/"), Some(' '));
    }

    #[test]
    fn unknown_lookups_miss() {
        let table = MorseTable::new();
        assert_eq!(table.token('a'), None); // lookups are post-normalization
        assert_eq!(table.token('日'), None);
        assert_eq!(table.character(""), None);
        assert_eq!(table.character("......."), None);
    }

    #[test]
    fn shared_table_matches_fresh_table() {
        let shared = MorseTable::shared();
        let fresh = MorseTable::new();
        for &(ch, _) in SYMBOL_PAIRS {
            assert_eq!(shared.token(ch), fresh.token(ch));
        }
        assert_eq!(shared.len(), fresh.len());
    }
}
