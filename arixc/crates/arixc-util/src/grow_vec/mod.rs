//! GrowVec - A growable vector with an explicit growth policy.
//!
//! [`GrowVec`] wraps a `Vec<T>` but owns the decision of when and by how much
//! the storage grows: capacity starts at [`INITIAL_CAP`] and is multiplied by
//! 1.5 whenever an append finds the buffer full. Capacity never shrinks while
//! the buffer is alive; only [`GrowVec::deinit`] gives the storage back.
//!
//! Indexing is fail-fast: reading or writing at `index >= len` is a bug in
//! the caller and panics instead of returning stale data.
//!
//! # Example
//!
//! ```
//! use arixc_util::grow_vec::GrowVec;
//!
//! let mut numbers = GrowVec::new();
//! for n in 0..11 {
//!     numbers.append(n);
//! }
//! assert_eq!(numbers.len(), 11);
//! assert_eq!(numbers.capacity(), 15);
//! assert_eq!(*numbers.get(10), 10);
//! ```

use std::fmt;
use std::ops::Index;

use crate::error::{GrowVecError, GrowVecResult};


/// Capacity of a freshly initialised buffer, and the floor for every growth.
pub const INITIAL_CAP: usize = 10;

/// Computes the capacity that follows `cap`.
///
/// Always strictly greater than `cap` for any `cap < usize::MAX`.
#[inline]
pub const fn next_capacity(cap: usize) -> usize {
    let grown = cap.saturating_add(cap / 2);
    if grown < INITIAL_CAP {
        INITIAL_CAP
    } else {
        grown
    }
}

/// An ordered, owned, growable sequence.
pub struct GrowVec<T> {
    raw: Vec<T>,
    /// Logical capacity; `raw` always has room for at least this many.
    cap: usize,
}

impl<T> GrowVec<T> {
    /// Creates an empty buffer with capacity [`INITIAL_CAP`].
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAP)
    }

    /// Creates an empty buffer with room for `capacity` elements.
    ///
    /// Requests below [`INITIAL_CAP`] are raised to it. The request is a
    /// hint: if the storage cannot be reserved, the buffer starts at
    /// [`INITIAL_CAP`] instead.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut raw = Vec::new();
        let mut cap = capacity.max(INITIAL_CAP);
        if raw.try_reserve_exact(cap).is_err() {
            cap = INITIAL_CAP;
            raw.reserve_exact(cap);
        }
        Self { raw, cap }
    }

    /// Releases the backing storage. Length and capacity drop to zero.
    ///
    /// The buffer stays usable: the next append re-initialises the storage
    /// at [`INITIAL_CAP`].
    pub fn deinit(&mut self) {
        self.raw = Vec::new();
        self.cap = 0;
    }

    /// Appends `value` at the end, growing the storage first if it is full.
    pub fn append(&mut self, value: T) {
        if self.raw.len() == self.cap {
            self.grow();
        }
        self.raw.push(value);
    }

    fn grow(&mut self) {
        let new_cap = next_capacity(self.cap);
        self.raw.reserve_exact(new_cap - self.raw.len());
        self.cap = new_cap;
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.check_index(index);
        &self.raw[index]
    }

    /// Overwrites the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn set(&mut self, index: usize, value: T) {
        self.check_index(index);
        self.raw[index] = value;
    }

    /// Returns the element at `index`, or an error if it is out of bounds.
    pub fn checked_get(&self, index: usize) -> GrowVecResult<&T> {
        self.raw.get(index).ok_or(GrowVecError::OutOfBounds {
            index,
            length: self.raw.len(),
        })
    }

    #[inline]
    #[track_caller]
    fn check_index(&self, index: usize) {
        assert!(
            index < self.raw.len(),
            "index out of bounds: the len is {} but the index is {}",
            self.raw.len(),
            index
        );
    }

    /// Returns number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Get capacity
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Drops every element but keeps the storage.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.raw
    }

    /// Iterates over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.raw.iter()
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    fn clone(&self) -> Self {
        let mut raw = Vec::with_capacity(self.cap);
        raw.extend_from_slice(&self.raw);
        Self { raw, cap: self.cap }
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for GrowVec<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        self.get(index)
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.raw.iter()).finish()
    }
}

impl<T> Extend<T> for GrowVec<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.raw.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.raw.iter()
    }
}
