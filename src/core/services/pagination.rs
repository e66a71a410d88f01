//! Page slicing
//!
//! Pages are 1-indexed windows of `page_size` items. Offsets are computed
//! as `start = (page - 1) * page_size` with no clamping of `page`, so
//! non-positive pages produce negative offsets. Negative offsets count back
//! from the end of the sequence, and both ends are then clamped to the
//! sequence bounds. Page 0 is therefore always empty.

/// Number of items per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Return the items on `page`
///
/// Pages past the end yield an empty vector rather than an error.
///
/// # Examples
///
/// ```
/// use trivia::core::services::paginate;
///
/// let items: Vec<u32> = (0..25).collect();
/// assert_eq!(paginate(items.clone(), 3, 10), vec![20, 21, 22, 23, 24]);
/// assert!(paginate(items, 4, 10).is_empty());
/// ```
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: i64, page_size: usize) -> Vec<T> {
    let (start, end) = page_bounds(items.len(), page, page_size);
    if start >= end {
        return Vec::new();
    }
    items.into_iter().skip(start).take(end - start).collect()
}

/// Resolve the `[start, end)` index range a page covers in a sequence of `len` items
#[must_use]
pub fn page_bounds(len: usize, page: i64, page_size: usize) -> (usize, usize) {
    let size = i64::try_from(page_size).unwrap_or(i64::MAX);
    let start = page.saturating_sub(1).saturating_mul(size);
    let end = start.saturating_add(size);
    (resolve_offset(start, len), resolve_offset(end, len))
}

fn resolve_offset(offset: i64, len: usize) -> usize {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let resolved = if offset < 0 {
        offset.saturating_add(len_i).max(0)
    } else {
        offset.min(len_i)
    };
    usize::try_from(resolved).unwrap_or(0)
}
