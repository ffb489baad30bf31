//! Result limiting

use std::iter::Take;

/// Yields at most `n` items of `iter`. `None` and `Some(0)` do not limit.
pub fn limit<I: Iterator>(iter: I, n: Option<usize>) -> Take<I> {
    let n = match n {
        Some(n) if n > 0 => n,
        _ => usize::MAX,
    };
    iter.take(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_limit() {
        assert_eq!(limit(0..10, None).count(), 10);
        assert_eq!(limit(0..10, Some(0)).count(), 10);
    }

    #[test]
    fn test_limit_keeps_native_order() {
        assert_eq!(limit(0..10, Some(3)).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_limit_larger_than_input() {
        assert_eq!(limit(0..2, Some(5)).count(), 2);
    }

    #[test]
    fn test_limit_stops_pulling() {
        let mut pulled = 0;
        let taken: Vec<_> = limit(
            (0..100).inspect(|_| pulled += 1),
            Some(3),
        )
        .collect();
        assert_eq!(taken.len(), 3);
        assert_eq!(pulled, 3);
    }
}
