//! Arena - bump allocation with all-at-once release.
//!
//! An [`Arena`] hands out memory regions from a chain of blocks. Allocation
//! only advances a pointer inside the newest block; when a request does not
//! fit, a fresh block is chained in front of the old ones and becomes the
//! allocation target. Individual regions are never freed or moved. Memory
//! comes back only when the whole arena is released or dropped.
//!
//! The block chain is [`bumpalo::Bump`]: blocks grow geometrically and every
//! block is at least as large as the request that created it.
//!
//! # Example
//!
//! ```
//! use arixc_util::arena::{Arena, ARENA_ALIGNMENT};
//!
//! let arena = Arena::new();
//! let a = arena.alloc_bytes(3);
//! let b = arena.alloc_bytes(5);
//! assert_eq!(a.len(), 3);
//! assert_eq!(b.as_ptr() as usize % ARENA_ALIGNMENT, 0);
//! ```

use std::alloc::Layout;
use std::fmt;

use bumpalo::Bump;

use crate::error::{ArenaError, ArenaResult};

#[cfg(test)]
mod tests;

/// Alignment of every region returned by [`Arena::alloc_bytes`].
///
/// `u128` carries the strictest alignment of the primitive scalar types.
pub const ARENA_ALIGNMENT: usize = std::mem::align_of::<u128>();

/// Bump allocator backing long-lived compiler data.
///
/// Regions borrowed from the arena live as long as the shared borrow of the
/// arena. [`Arena::release`] takes `&mut self`, so the borrow checker rejects
/// any use of a region after the arena that produced it was released.
#[derive(Default)]
pub struct Arena {
    bump: Bump,
}

impl Arena {
    /// Creates an empty arena. No block is allocated until the first request.
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates an arena whose first block holds at least `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Creates an empty arena that never acquires more than `limit` bytes of
    /// block storage in total.
    ///
    /// Requests that would exceed the limit fail with
    /// [`ArenaError::OutOfMemory`] on the `try_` path.
    pub fn with_limit(limit: usize) -> Self {
        let bump = Bump::new();
        bump.set_allocation_limit(Some(limit));
        Self { bump }
    }

    /// Allocates a zeroed region of `size` bytes aligned to
    /// [`ARENA_ALIGNMENT`].
    ///
    /// The reservation is rounded up to the alignment, so consecutive regions
    /// never share an aligned word.
    ///
    /// # Panics
    ///
    /// Out-of-memory is unrecoverable on this path. Use
    /// [`Arena::try_alloc_bytes`] to observe it as an error instead.
    pub fn alloc_bytes(&self, size: usize) -> &mut [u8] {
        match self.try_alloc_bytes(size) {
            Ok(region) => region,
            Err(err) => panic!("{}", err),
        }
    }

    /// Fallible variant of [`Arena::alloc_bytes`].
    pub fn try_alloc_bytes(&self, size: usize) -> ArenaResult<&mut [u8]> {
        if size == 0 {
            return Ok(&mut []);
        }

        let layout = Layout::from_size_align(size, ARENA_ALIGNMENT)
            .map_err(|_| ArenaError::SizeOverflow { size })?
            .pad_to_align();

        let ptr = self
            .bump
            .try_alloc_layout(layout)
            .map_err(|_| ArenaError::OutOfMemory {
                requested: layout.size(),
            })?;

        // SAFETY: `ptr` is a fresh, exclusively owned allocation of at least
        // `size` bytes that lives until the bump is reset, which requires
        // `&mut self`. Zeroing it first makes every byte initialized.
        let region = unsafe {
            ptr.as_ptr().write_bytes(0, size);
            std::slice::from_raw_parts_mut(ptr.as_ptr(), size)
        };
        Ok(region)
    }

    /// Moves `value` into the arena.
    ///
    /// The arena never runs destructors; values owning heap memory leak it
    /// when the arena is released.
    #[inline]
    pub fn alloc<T>(&self, value: T) -> &mut T {
        self.bump.alloc(value)
    }

    /// Copies a slice into the arena.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, src: &[T]) -> &mut [T] {
        self.bump.alloc_slice_copy(src)
    }

    /// Copies a string into the arena.
    #[inline]
    pub fn alloc_str(&self, src: &str) -> &mut str {
        self.bump.alloc_str(src)
    }

    /// Frees every allocation at once.
    ///
    /// The newest block is kept for reuse, so allocating after a release
    /// behaves like allocating from a fresh arena.
    pub fn release(&mut self) {
        self.bump.reset();
    }

    /// Total bytes of block storage currently held, including unused tails.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Number of blocks in the chain.
    pub fn block_count(&mut self) -> usize {
        self.bump.iter_allocated_chunks().count()
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("allocated_bytes", &self.allocated_bytes())
            .finish()
    }
}
