use std::ops::RangeInclusive;

/// Page numbers to show as buttons when there may be more pages than room.
///
/// The window is centered on `current_page` and shifted left only when it
/// runs into the last page, so the bar always shows
/// `min(window_size, total_pages)` buttons.
pub fn visible_page_numbers(
    current_page: usize,
    total_pages: usize,
    window_size: usize,
) -> RangeInclusive<usize> {
    if total_pages == 0 || window_size == 0 {
        return 1..=0;
    }
    if total_pages <= window_size {
        return 1..=total_pages;
    }

    // An out-of-range page is not an error, show the window around the last page
    let current_page = current_page.min(total_pages);
    let half = window_size / 2;
    let mut start = current_page.saturating_sub(half).max(1);
    let end = start.saturating_add(window_size - 1).min(total_pages);
    // Tail got cut off by the last page, re-anchor there
    if end - start + 1 < window_size {
        start = end - (window_size - 1);
    }
    start..=end
}

/// One element of a page bar, independent of how it ends up being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { enabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { enabled: bool },
}

/// Build the control strip for a page bar: previous, the visible page
/// numbers with an ellipsis on each side that hides pages, then next.
///
/// A single page (or none) needs no navigation and yields an empty strip.
pub fn page_controls(
    current_page: usize,
    total_pages: usize,
    max_pages_to_show: usize,
) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let numbers = visible_page_numbers(current_page, total_pages, max_pages_to_show);
    let (first, last) = (*numbers.start(), *numbers.end());

    let mut controls = Vec::with_capacity(numbers.clone().count() + 4);
    controls.push(PageControl::Previous {
        enabled: current_page > 1,
    });
    if first > 1 {
        controls.push(PageControl::Ellipsis);
    }
    controls.extend(numbers.map(|number| PageControl::Page {
        number,
        active: number == current_page,
    }));
    if last < total_pages {
        controls.push(PageControl::Ellipsis);
    }
    controls.push(PageControl::Next {
        enabled: current_page < total_pages,
    });
    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(current: usize, total: usize, window: usize) -> Vec<usize> {
        visible_page_numbers(current, total, window).collect()
    }

    #[test]
    fn test_fewer_pages_than_window() {
        assert_eq!(numbers(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(numbers(3, 5, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_centered_window() {
        assert_eq!(numbers(6, 12, 5), vec![4, 5, 6, 7, 8]);
        assert_eq!(numbers(1, 12, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(numbers(2, 12, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reanchored_at_last_page() {
        assert_eq!(numbers(10, 12, 5), vec![8, 9, 10, 11, 12]);
        assert_eq!(numbers(11, 12, 5), vec![8, 9, 10, 11, 12]);
        assert_eq!(numbers(12, 12, 5), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_even_window() {
        // half = 2, so the current page sits right of center
        assert_eq!(numbers(6, 12, 4), vec![4, 5, 6, 7]);
        assert_eq!(numbers(12, 12, 4), vec![9, 10, 11, 12]);
    }

    #[test]
    fn test_current_page_past_the_end() {
        assert_eq!(numbers(50, 12, 5), vec![8, 9, 10, 11, 12]);
        assert_eq!(numbers(usize::MAX, 100, 5), vec![96, 97, 98, 99, 100]);
        assert_eq!(numbers(usize::MAX, 3, 5), vec![1, 2, 3]);
    }

    #[test]
    fn test_huge_window() {
        assert_eq!(numbers(2, 4, usize::MAX), vec![1, 2, 3, 4]);
        let last = visible_page_numbers(usize::MAX, usize::MAX, usize::MAX - 1);
        assert_eq!((*last.start(), *last.end()), (2, usize::MAX));
    }

    #[test]
    fn test_no_pages() {
        assert!(numbers(1, 0, 5).is_empty());
        assert!(numbers(1, 10, 0).is_empty());
    }

    #[test]
    fn test_always_full_width_and_in_bounds() {
        for total in 1..=30 {
            for window in 1..=9 {
                for current in 1..=total {
                    let shown = numbers(current, total, window);
                    assert_eq!(shown.len(), window.min(total), "{current}/{total} w{window}");
                    assert!(shown.contains(&current));
                    assert!(shown.windows(2).all(|w| w[1] == w[0] + 1));
                    assert!(shown[0] >= 1 && *shown.last().unwrap() <= total);
                }
            }
        }
    }

    #[test]
    fn test_page_controls_single_page_is_empty() {
        assert!(page_controls(1, 1, 5).is_empty());
        assert!(page_controls(1, 0, 5).is_empty());
    }

    #[test]
    fn test_page_controls_with_ellipses() {
        let controls = page_controls(6, 12, 3);
        assert_eq!(
            controls,
            vec![
                PageControl::Previous { enabled: true },
                PageControl::Ellipsis,
                PageControl::Page { number: 5, active: false },
                PageControl::Page { number: 6, active: true },
                PageControl::Page { number: 7, active: false },
                PageControl::Ellipsis,
                PageControl::Next { enabled: true },
            ]
        );
    }

    #[test]
    fn test_page_controls_edges_disable_navigation() {
        let controls = page_controls(1, 3, 5);
        assert_eq!(controls.first(), Some(&PageControl::Previous { enabled: false }));
        assert_eq!(controls.last(), Some(&PageControl::Next { enabled: true }));
        assert!(!controls.contains(&PageControl::Ellipsis));

        let controls = page_controls(3, 3, 5);
        assert_eq!(controls.first(), Some(&PageControl::Previous { enabled: true }));
        assert_eq!(controls.last(), Some(&PageControl::Next { enabled: false }));
    }
}
