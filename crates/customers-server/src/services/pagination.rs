//! Pagination over an ordered collection
//!
//! Page bounds arrive as raw path segments. They are parsed leniently: a
//! leading integer is taken and anything after it ignored, and a segment with
//! no leading integer falls back to the default.

use customers_types::Page;

pub const DEFAULT_SKIP: i64 = 0;
pub const DEFAULT_TOP: i64 = 10;

/// Parsed `skip`/`top` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: i64,
    pub top: i64,
}

impl PageRequest {
    pub fn parse(skip: &str, top: &str) -> Self {
        Self {
            skip: parse_leading_int(skip).unwrap_or(DEFAULT_SKIP),
            top: parse_leading_int(top).unwrap_or(DEFAULT_TOP),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            top: DEFAULT_TOP,
        }
    }
}

/// Parse the leading decimal integer of `raw`.
///
/// Leading whitespace and one sign are accepted, and parsing stops at the
/// first non-digit: `"12abc"` is 12, `"abc"` is `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    // Saturate instead of failing on absurdly long digit runs.
    let magnitude = rest[..digits_end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Resolve the half-open `[start, end)` range selected by `request`.
///
/// The end is `skip + top`, clamped to `len`. Negative bounds count back
/// from the end of the collection and are floored at zero.
pub fn bounds(request: PageRequest, len: usize) -> (usize, usize) {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let upper = request.skip.saturating_add(request.top).min(len_i);

    let resolve = |index: i64| -> usize {
        let index = if index < 0 {
            (len_i + index).max(0)
        } else {
            index.min(len_i)
        };
        usize::try_from(index).unwrap_or(0)
    };

    let start = resolve(request.skip);
    let end = resolve(upper);
    (start, end.max(start))
}

/// Take one page of `items`, reporting the size of the whole collection.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let (start, end) = bounds(request, items.len());
    Page {
        results: items[start..end].to_vec(),
        total_records: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    fn page(skip: i64, top: i64, n: usize) -> Page<usize> {
        paginate(&items(n), PageRequest { skip, top })
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("12"), Some(12));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+4"), Some(4));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("1.9"), Some(1));
    }

    #[test]
    fn test_unparseable_defaults() {
        assert_eq!(PageRequest::parse("abc", "xyz"), PageRequest::default());
        assert_eq!(
            PageRequest::parse("abc", "xyz"),
            PageRequest { skip: 0, top: 10 }
        );
        assert_eq!(PageRequest::parse("5", "x"), PageRequest { skip: 5, top: 10 });
    }

    #[test]
    fn test_page_sizes_match_formula() {
        for n in [0usize, 1, 5, 23] {
            for skip in 0..30i64 {
                for top in 0..15i64 {
                    let page = page(skip, top, n);
                    let expected = (top.min(n as i64 - skip)).max(0) as usize;
                    assert_eq!(page.results.len(), expected, "skip={skip} top={top} n={n}");
                    assert_eq!(page.total_records, n);
                }
            }
        }
    }

    #[test]
    fn test_clamp_returns_tail() {
        let page = page(8, 10, 10);
        assert_eq!(page.results, vec![8, 9]);
        assert_eq!(page.total_records, 10);
    }

    #[test]
    fn test_skip_past_end_is_empty() {
        let page = page(12, 5, 10);
        assert!(page.results.is_empty());
        assert_eq!(page.total_records, 10);
    }

    #[test]
    fn test_keeps_insertion_order() {
        let page = page(2, 3, 10);
        assert_eq!(page.results, vec![2, 3, 4]);
    }

    #[test]
    fn test_negative_skip_counts_from_end() {
        // skip -3, top 5: upper bound is 2, start resolves to 7 -> empty
        assert!(page(-3, 5, 10).results.is_empty());
        // skip -3, top 20: upper bound clamps to 10, start resolves to 7
        assert_eq!(page(-3, 20, 10).results, vec![7, 8, 9]);
    }
}
