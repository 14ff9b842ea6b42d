//! Fixed-size pagination over the filtered country list.
//!
//! Page arithmetic is deliberately dumb: slicing clamps to the list bounds
//! instead of panicking, an out-of-range page yields an empty slice, and
//! nothing here ever adjusts the page index itself. The reset-to-first-page
//! rule on search changes lives with the event handler, which is the only
//! place that knows why the list changed.

/// Rows per page on the list screen.
pub const PAGE_SIZE: usize = 10;

/// Returns the number of pages needed for `len` items.
///
/// `total_pages(0, p)` is 0; pagination controls are only shown when the
/// result exceeds 1.
#[must_use]
pub const fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    (len + page_size - 1) / page_size
}

/// Returns the slice of `list` belonging to `page`.
///
/// Bounds are clamped: a page past the end yields an empty slice rather than
/// an error.
#[must_use]
pub fn paginate<T>(list: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size).min(list.len());
    let end = start.saturating_add(page_size).min(list.len());
    &list[start..end]
}

/// Whether a "previous page" control should accept input.
#[must_use]
pub const fn prev_enabled(page: usize) -> bool {
    page > 0
}

/// Whether a "next page" control should accept input.
#[must_use]
pub const fn next_enabled(page: usize, total: usize) -> bool {
    page + 1 < total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(12, 10), 2);
        assert_eq!(total_pages(250, 10), 25);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let list: Vec<usize> = (0..12).collect();
        let total = total_pages(list.len(), PAGE_SIZE);

        assert_eq!(paginate(&list, total - 1, PAGE_SIZE).len(), 2);
        assert_eq!(paginate(&list, total - 1, PAGE_SIZE), &[10, 11]);
    }

    #[test]
    fn out_of_range_page_is_empty_not_a_panic() {
        let list: Vec<usize> = (0..12).collect();
        let total = total_pages(list.len(), PAGE_SIZE);

        assert!(paginate(&list, total, PAGE_SIZE).is_empty());
        assert!(paginate(&list, usize::MAX, PAGE_SIZE).is_empty());
    }

    #[test]
    fn full_pages_have_page_size_rows() {
        let list: Vec<usize> = (0..25).collect();

        assert_eq!(paginate(&list, 0, PAGE_SIZE), &(0..10).collect::<Vec<_>>()[..]);
        assert_eq!(paginate(&list, 1, PAGE_SIZE), &(10..20).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn control_enablement_follows_the_bounds() {
        assert!(!prev_enabled(0));
        assert!(prev_enabled(1));
        assert!(next_enabled(0, 2));
        assert!(!next_enabled(1, 2));
        assert!(!next_enabled(0, 0));
    }
}
