//! The token buffer.
//!
//! Tokens are collected in a [`GrowVec`], which grows by half its capacity
//! (starting from [`INITIAL_CAP`](arixc_util::INITIAL_CAP)) and panics on
//! out-of-range `get`/`set`. Tokens are `Copy`, so callers read them by
//! value: `*tokens.get(i)` or `tokens[i]`.

use arixc_util::GrowVec;

use crate::token::Token;

/// Ordered tokens produced by a scan, borrowing their text from the source.
pub type TokenBuffer<'src> = GrowVec<Token<'src>>;
