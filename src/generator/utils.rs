/// The last `limit` items of an oldest-first listing, newest first.
pub(crate) fn recent<T>(items: &[T], limit: usize) -> impl Iterator<Item = &T> {
    items[items.len().saturating_sub(limit)..].iter().rev()
}

/// Every item of an oldest-first listing, newest first.
pub(crate) fn newest_first<T>(items: &[T]) -> impl Iterator<Item = &T> {
    items.iter().rev()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_keeps_all_when_few() {
        let items = ["a", "b", "c"];
        assert_eq!(recent(&items, 5).collect::<Vec<_>>(), [&"c", &"b", &"a"]);
    }

    #[test]
    fn recent_truncates_to_newest() {
        let items = ["1", "2", "3", "4", "5", "6", "7"];
        assert_eq!(
            recent(&items, 5).copied().collect::<Vec<_>>(),
            ["7", "6", "5", "4", "3"]
        );
    }

    #[test]
    fn recent_of_exactly_limit() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(recent(&items, 5).copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
    }

    #[test]
    fn recent_of_nothing() {
        let items: [u8; 0] = [];
        assert_eq!(recent(&items, 5).count(), 0);
    }

    #[test]
    fn newest_first_reverses() {
        let items = [1, 2, 3, 4, 5, 6];
        assert_eq!(
            newest_first(&items).copied().collect::<Vec<_>>(),
            [6, 5, 4, 3, 2, 1]
        );
    }
}
