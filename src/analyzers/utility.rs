/// Arithmetic mean over the present values. `None` entries are skipped in
/// both sum and count; if nothing is present the mean is `None`, not 0.0.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// `part` as a percentage of `total`. Returns 0.0 when `total` is zero.
pub fn pct(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Min,
    Max,
}

/// Picks the item with the smallest or largest key. Items with no key are
/// skipped; on a tie the earliest item wins.
pub fn select_first<T, K, I>(items: I, which: Extremum) -> Option<(T, K)>
where
    I: IntoIterator<Item = (T, Option<K>)>,
    K: PartialOrd + Copy,
{
    let mut best: Option<(T, K)> = None;
    for (item, key) in items {
        let Some(key) = key else { continue };
        let replace = match &best {
            None => true,
            Some((_, current)) => match which {
                Extremum::Max => key > *current,
                Extremum::Min => key < *current,
            },
        };
        if replace {
            best = Some((item, key));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_skips_missing() {
        assert_eq!(mean([Some(1.0), None, Some(3.0)]), Some(2.0));
    }

    #[test]
    fn test_mean_all_missing_is_none() {
        assert_eq!(mean([None, None]), None);
        assert_eq!(mean(Vec::<Option<f64>>::new()), None);
    }

    #[test]
    fn test_pct() {
        assert_eq!(pct(10, 0), 0.0);
        assert_eq!(pct(1, 4), 25.0);
        assert_eq!(pct(3, 4), 75.0);
    }

    #[test]
    fn test_select_first_breaks_ties_by_position() {
        let items = vec![("a", Some(2)), ("b", None), ("c", Some(5)), ("d", Some(5)), ("e", Some(2))];

        assert_eq!(select_first(items.clone(), Extremum::Max), Some(("c", 5)));
        assert_eq!(select_first(items, Extremum::Min), Some(("a", 2)));
    }

    #[test]
    fn test_select_first_with_no_keys() {
        let items: Vec<(&str, Option<f64>)> = vec![("a", None)];
        assert_eq!(select_first(items, Extremum::Max), None);
    }
}
