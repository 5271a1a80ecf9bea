use std::cmp::Ordering;

/// Row types that support column sorting.
pub trait Sortable {
    /// Compare two rows by the named column.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort in place by the named column.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort table__sort--active"
    } else {
        "table__sort"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        amount: f64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(other.name),
                "amount" => self
                    .amount
                    .partial_cmp(&other.amount)
                    .unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let mut rows = vec![
            Row { name: "b", amount: 2.0 },
            Row { name: "a", amount: 9.0 },
            Row { name: "c", amount: 1.0 },
        ];
        sort_list(&mut rows, "amount", true);
        assert_eq!(rows[0].name, "c");
        sort_list(&mut rows, "amount", false);
        assert_eq!(rows[0].name, "a");
    }

    #[test]
    fn test_unknown_field_keeps_order() {
        let mut rows = vec![Row { name: "b", amount: 2.0 }, Row { name: "a", amount: 1.0 }];
        sort_list(&mut rows, "does_not_exist", true);
        assert_eq!(rows[0].name, "b");
    }
}
