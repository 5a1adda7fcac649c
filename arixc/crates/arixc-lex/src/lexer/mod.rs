//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, scan loop, and dispatch
//! - `number` - Number literal lexing
//! - `string` - Reserved string literal path

mod core;
mod number;
mod string;

pub use self::core::{Lexer, ScanOutcome, TokenIter};
