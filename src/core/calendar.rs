use chrono::Month;

/// The months directly before and after `month`, wrapping across the year boundary
#[inline]
pub fn adjacent_months(month: Month) -> [Month; 2] {
    [month.pred(), month.succ()]
}

/// Check whether `month` is one calendar month away from any month in `accepted`
#[inline]
pub fn is_adjacent_to_any(month: Month, accepted: &[Month]) -> bool {
    adjacent_months(month)
        .iter()
        .any(|neighbour| accepted.contains(neighbour))
}

/// Join month names for display, e.g. "June, July"
pub fn format_months(months: &[Month]) -> String {
    months
        .iter()
        .map(|month| month.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_months() {
        assert_eq!(adjacent_months(Month::July), [Month::June, Month::August]);
    }

    #[test]
    fn test_adjacent_months_wrap_year() {
        assert_eq!(adjacent_months(Month::January), [Month::December, Month::February]);
        assert_eq!(adjacent_months(Month::December), [Month::November, Month::January]);
    }

    #[test]
    fn test_is_adjacent_to_any() {
        assert!(is_adjacent_to_any(Month::December, &[Month::January]));
        assert!(!is_adjacent_to_any(Month::July, &[Month::July]));
        assert!(!is_adjacent_to_any(Month::March, &[Month::July, Month::August]));
    }

    #[test]
    fn test_format_months() {
        assert_eq!(format_months(&[Month::June, Month::July]), "June, July");
        assert_eq!(format_months(&[]), "");
    }
}
