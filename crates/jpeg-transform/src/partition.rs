//! Static partitioning of an index range across workers

use std::ops::Range;

/// Split `0..len` into at most `parts` contiguous ranges
///
/// Every range but the last holds `len / parts` indices; the last one also
/// takes the remainder. `parts` is capped at `len` so no range is empty.
pub fn partition_ranges(len: usize, parts: usize) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }

    let parts = parts.clamp(1, len);
    let chunk = len / parts;

    (0..parts)
        .map(|p| {
            let start = p * chunk;
            let end = if p + 1 == parts { len } else { start + chunk };
            start..end
        })
        .collect()
}
