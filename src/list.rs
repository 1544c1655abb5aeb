//! List Utilities
//!
//! Maps labels to rows for the list container.

/// One row of the list. `index` is the row identity, so duplicate labels
/// stay distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub index: usize,
    pub label: String,
}

/// One row per label, in input order
pub fn rows<S: AsRef<str>>(labels: &[S]) -> Vec<ListRow> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| ListRow {
            index,
            label: label.as_ref().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_preserve_order() {
        let rows = rows(&["A", "B", "C"]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ListRow { index: 0, label: "A".to_string() });
        assert_eq!(rows[1], ListRow { index: 1, label: "B".to_string() });
        assert_eq!(rows[2], ListRow { index: 2, label: "C".to_string() });
    }

    #[test]
    fn test_rows_empty() {
        let labels: [&str; 0] = [];
        assert!(rows(&labels).is_empty());
    }

    #[test]
    fn test_rows_keep_duplicates_distinct() {
        let rows = rows(&["Pollo", "Pollo"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, rows[1].label);
        assert_ne!(rows[0], rows[1]);
    }
}
