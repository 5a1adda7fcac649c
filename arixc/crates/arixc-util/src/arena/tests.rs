//! Tests for the Arena module.

use super::*;

use quickcheck_macros::quickcheck;

fn region_range(region: &[u8]) -> std::ops::Range<usize> {
    let start = region.as_ptr() as usize;
    start..start + region.len()
}

fn overlaps(a: &std::ops::Range<usize>, b: &std::ops::Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

// ============================================================================
// ALLOCATION
// ============================================================================

#[test]
fn test_new_arena_has_no_blocks() {
    let mut arena = Arena::new();
    assert_eq!(arena.block_count(), 0);
}

#[test]
fn test_alloc_bytes_is_zeroed_and_sized() {
    let arena = Arena::new();
    let region = arena.alloc_bytes(37);
    assert_eq!(region.len(), 37);
    assert!(region.iter().all(|&b| b == 0));
}

#[test]
fn test_alloc_bytes_is_aligned() {
    let arena = Arena::new();
    for size in [1, 3, 8, 15, 16, 17, 100] {
        let region = arena.alloc_bytes(size);
        assert_eq!(region.as_ptr() as usize % ARENA_ALIGNMENT, 0, "size {}", size);
    }
}

#[test]
fn test_zero_sized_request() {
    let arena = Arena::new();
    assert!(arena.alloc_bytes(0).is_empty());
}

#[test]
fn test_live_regions_do_not_overlap() {
    let arena = Arena::new();
    let mut ranges = Vec::new();
    for size in 1..64 {
        let region = arena.alloc_bytes(size);
        region.fill(size as u8);
        ranges.push(region_range(region));
    }

    for (i, a) in ranges.iter().enumerate() {
        for b in &ranges[i + 1..] {
            assert!(!overlaps(a, b), "{:?} overlaps {:?}", a, b);
        }
    }
}

#[test]
fn test_regions_keep_their_contents() {
    let arena = Arena::new();
    let first = arena.alloc_bytes(4);
    first.copy_from_slice(b"1+2*");
    // Force several new blocks behind the first one.
    for _ in 0..16 {
        arena.alloc_bytes(1024);
    }
    assert_eq!(first, b"1+2*");
}

#[test]
fn test_oversized_request_gets_its_own_block() {
    let mut arena = Arena::new();
    arena.alloc_bytes(8);
    let big = arena.alloc_bytes(1 << 16).len();
    assert_eq!(big, 1 << 16);
    assert!(arena.block_count() >= 2);
}

#[test]
fn test_typed_helpers() {
    let arena = Arena::new();
    let n = arena.alloc(42u64);
    *n += 1;
    assert_eq!(*n, 43);
    assert_eq!(arena.alloc_str("87"), "87");
    assert_eq!(arena.alloc_slice_copy(&[1u8, 2, 3]), &[1, 2, 3]);
}

// ============================================================================
// RELEASE
// ============================================================================

#[test]
fn test_allocate_after_release() {
    let mut arena = Arena::new();
    for _ in 0..8 {
        arena.alloc_bytes(512);
    }
    arena.release();
    assert!(arena.block_count() <= 1);

    let region = arena.alloc_bytes(16);
    assert_eq!(region.len(), 16);
    assert!(region.iter().all(|&b| b == 0));
}

#[test]
fn test_release_of_empty_arena() {
    let mut arena = Arena::new();
    arena.release();
    assert_eq!(arena.alloc_bytes(1).len(), 1);
}

// ============================================================================
// FAILURE
// ============================================================================

#[test]
fn test_limit_surfaces_out_of_memory() {
    let arena = Arena::with_limit(1024);
    let err = arena.try_alloc_bytes(1 << 20).unwrap_err();
    assert!(matches!(err, ArenaError::OutOfMemory { requested } if requested >= 1 << 20));
}

#[test]
fn test_size_overflow() {
    let arena = Arena::new();
    let err = arena.try_alloc_bytes(usize::MAX).unwrap_err();
    assert_eq!(err, ArenaError::SizeOverflow { size: usize::MAX });
}

#[test]
#[should_panic(expected = "out of memory")]
fn test_alloc_bytes_panics_on_limit() {
    let arena = Arena::with_limit(1024);
    arena.alloc_bytes(1 << 20);
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[quickcheck]
fn prop_regions_are_disjoint_and_aligned(sizes: Vec<u16>) -> bool {
    let arena = Arena::new();
    let ranges: Vec<_> = sizes
        .iter()
        .map(|&size| region_range(arena.alloc_bytes(size as usize)))
        .collect();

    let aligned = ranges
        .iter()
        .filter(|r| !r.is_empty())
        .all(|r| r.start % ARENA_ALIGNMENT == 0);

    let disjoint = ranges.iter().enumerate().all(|(i, a)| {
        ranges[i + 1..]
            .iter()
            .all(|b| a.is_empty() || b.is_empty() || !overlaps(a, b))
    });

    aligned && disjoint
}
