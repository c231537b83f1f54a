//! Row normalization
//!
//! Converts a sheet's raw 2-D cell grid (row 0 = header) into an ordered
//! sequence of key→value records. Row order is load-bearing: the slot and
//! intent reducers forward-fill blank group keys from preceding rows.

use indexmap::IndexMap;
use intentml_core::{CellValue, NormalizedRow};

/// Normalize a raw grid into keyed records.
///
/// The header row is dropped; every record carries every header key in
/// header order. Short rows are right-padded with absent values before
/// coercion. Headers are trimmed; columns with blank headers are dropped.
/// The transform is idempotent and order-preserving.
#[must_use]
pub fn normalize_grid(grid: &[Vec<String>]) -> Vec<NormalizedRow> {
    let Some((header, data)) = grid.split_first() else {
        return Vec::new();
    };
    let keys: Vec<(usize, String)> = header
        .iter()
        .enumerate()
        .filter(|(_, key)| !key.trim().is_empty())
        .map(|(index, key)| (index, key.trim().to_string()))
        .collect();

    data.iter()
        .map(|row| {
            let mut record = IndexMap::with_capacity(keys.len());
            for (index, key) in &keys {
                let cell = row
                    .get(*index)
                    .map_or(CellValue::Empty, |raw| CellValue::coerce(raw));
                record.insert(key.clone(), cell);
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }

    #[test]
    fn test_header_row_dropped_and_keys_ordered() {
        let rows = normalize_grid(&grid(&[
            &["intent", "slotName", "slotType"],
            &["HelloIntent", "country", "LIST_OF_COUNTRIES"],
        ]));
        assert_eq!(rows.len(), 1);
        let keys: Vec<&String> = rows[0].keys().collect();
        assert_eq!(keys, ["intent", "slotName", "slotType"]);
    }

    #[test]
    fn test_short_rows_right_padded() {
        let rows = normalize_grid(&grid(&[&["a", "b", "c"], &["1"]]));
        assert_eq!(rows[0]["a"], CellValue::Text("1".to_string()));
        assert_eq!(rows[0]["b"], CellValue::Empty);
        assert_eq!(rows[0]["c"], CellValue::Empty);
    }

    #[test]
    fn test_boolean_and_empty_coercion() {
        let rows = normalize_grid(&grid(&[
            &["a", "b", "c", "d"],
            &["Yes", "FALSE", "  ", "text"],
        ]));
        assert_eq!(rows[0]["a"], CellValue::Bool(true));
        assert_eq!(rows[0]["b"], CellValue::Bool(false));
        assert_eq!(rows[0]["c"], CellValue::Empty);
        assert_eq!(rows[0]["d"], CellValue::Text("text".to_string()));
    }

    #[test]
    fn test_blank_header_columns_dropped() {
        let rows = normalize_grid(&grid(&[&["a", "", "c"], &["1", "2", "3"]]));
        assert_eq!(rows[0].len(), 2);
        assert!(!rows[0].contains_key(""));
        assert_eq!(rows[0]["c"], CellValue::Text("3".to_string()));
    }

    #[test]
    fn test_empty_grid() {
        assert!(normalize_grid(&[]).is_empty());
        assert!(normalize_grid(&grid(&[&["only", "headers"]])).is_empty());
    }

    /// Rendering a normalized record back to strings and normalizing again
    /// must yield the same record sequence.
    fn render(rows: &[NormalizedRow]) -> Vec<Vec<String>> {
        let mut grid = Vec::with_capacity(rows.len() + 1);
        if let Some(first) = rows.first() {
            grid.push(first.keys().cloned().collect());
        }
        for row in rows {
            grid.push(
                row.values()
                    .map(|cell| match cell {
                        CellValue::Empty => String::new(),
                        CellValue::Bool(b) => b.to_string(),
                        CellValue::Text(s) => s.clone(),
                    })
                    .collect(),
            );
        }
        grid
    }

    proptest! {
        #[test]
        fn prop_normalization_idempotent(
            cells in proptest::collection::vec(
                proptest::collection::vec("[a-z0-9 ]{0,8}|true|yes|no|false", 3),
                1..6,
            )
        ) {
            let mut raw = vec![vec!["a".to_string(), "b".to_string(), "c".to_string()]];
            raw.extend(cells);
            let once = normalize_grid(&raw);
            let twice = normalize_grid(&render(&once));
            prop_assert_eq!(once, twice);
        }
    }
}
