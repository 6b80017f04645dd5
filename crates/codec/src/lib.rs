//! Morsewire Codec - text to Morse code transliteration
//!
//! This crate provides the symbol table and the encode/decode pair
//! used by the morsewire tools.

pub mod morse;
pub mod table;

pub use morse::{decode, encode, MorseCodec};
pub use table::{MorseTable, SYMBOL_PAIRS, WORD_SEPARATOR};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        morse::{decode, encode, MorseCodec},
        table::{MorseTable, WORD_SEPARATOR},
    };
}
