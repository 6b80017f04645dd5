//! One-shot conversion between text and Morse

use anyhow::{Context, Result};
use morsewire_codec::MorseCodec;
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::config::Direction;

/// Resolve the input to convert: inline argument, file, or standard input.
///
/// One trailing line terminator is trimmed so piped input does not encode
/// its newline.
pub fn read_input(inline: Option<&str>, file: Option<&Path>) -> Result<String> {
    let raw = if let Some(text) = inline {
        text.to_string()
    } else if let Some(path) = file {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {path:?}"))?
    } else {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read standard input")?;
        buf
    };

    Ok(trim_line_terminator(raw))
}

fn trim_line_terminator(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}

/// Run one conversion in the given direction. Never fails: both directions
/// are total over arbitrary input.
pub fn convert(input: &str, direction: Direction) -> String {
    let codec = MorseCodec::new();
    let output = match direction {
        Direction::Text => codec.encode(input),
        Direction::Morse => codec.decode(input),
    };
    info!(
        direction = ?direction,
        input_chars = input.chars().count(),
        output_chars = output.chars().count(),
        "converted"
    );
    output
}
