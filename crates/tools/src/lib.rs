//! Morsewire Tools library

pub mod clipboard;
pub mod config;
pub mod convert;
pub mod interactive;

pub use clipboard::{copy_and_notify, copy_text, ClipboardError};
pub use config::{AppConfig, ColorMode, Direction};
pub use convert::{convert, read_input};
pub use interactive::Session;
