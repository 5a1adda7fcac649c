//! arixc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Foundation types shared by every arixc phase:
//!
//! - [`span`] - byte ranges with line/column ([`Span`]) and borrowed text
//!   views into the source buffer ([`TextSpan`])
//! - [`arena`] - bump allocation released all at once ([`Arena`])
//! - [`grow_vec`] - owned sequence with a 1.5x growth policy and fail-fast
//!   indexing ([`GrowVec`])
//! - [`diagnostic`] - collected errors and warnings ([`Handler`])
//! - [`error`] - error types for the fallible operations above
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. ZERO-COPY
//!    Source text is borrowed, never duplicated. A [`TextSpan`] is a pointer
//!    and a length; the compiler checks that the source outlives it.
//!
//! 2. FAIL FAST ON CALLER BUGS
//!    Out-of-range indices and spans panic. Conditions the caller cannot rule
//!    out in advance (running out of memory under a limit) are `Result`s.
//
// MEMORY LAYOUT (Span, 64-bit):
// -----------------------------
// ```
// ┌────────┬────────┬──────┬────────┐
// │ start  │  end   │ line │ column │
// │   8B   │   8B   │  4B  │   4B   │
// └────────┴────────┴──────┴────────┘
// ```

pub mod arena;
pub mod diagnostic;
pub mod error;
pub mod grow_vec;
pub mod span;

pub use arena::{Arena, ARENA_ALIGNMENT};
pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, Level};
pub use error::{ArenaError, ArenaResult, GrowVecError, GrowVecResult};
pub use grow_vec::{GrowVec, INITIAL_CAP};
pub use span::{Span, TextSpan};

use static_assertions::{assert_impl_all, assert_not_impl_any};

assert_impl_all!(Span: Copy, Send, Sync);
assert_impl_all!(TextSpan<'static>: Copy, Send, Sync);
assert_impl_all!(Arena: Send);
assert_not_impl_any!(Arena: Sync);
