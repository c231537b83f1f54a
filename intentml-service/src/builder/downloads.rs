//! Downloads reducer
//!
//! `DOWNLOAD_` sheets are pass-through content: the sheet title minus its
//! marker names the resource, and the row records become the payload
//! untouched (absent cells are omitted from the records).

use intentml_core::{CellValue, Download, LocaleTable, Sheet, SheetRole};
use serde_json::{Map, Value};

use super::sheet_locale;
use crate::sheet::classifier::strip_marker;

/// Reduce every Downloads-role sheet into a [`Download`] collection
#[must_use]
pub fn reduce(sheets: &[Sheet], locales: &LocaleTable) -> Vec<Download> {
    sheets
        .iter()
        .filter(|sheet| sheet.role == SheetRole::Downloads)
        .map(|sheet| Download {
            name: strip_marker(&sheet.sheet_title, SheetRole::Downloads).to_string(),
            locale: sheet_locale(sheet, locales),
            data: sheet.rows.iter().map(row_to_value).collect(),
        })
        .collect()
}

fn row_to_value(row: &intentml_core::NormalizedRow) -> Value {
    let mut object = Map::new();
    for (key, cell) in row {
        let value = match cell {
            CellValue::Empty => continue,
            CellValue::Bool(b) => Value::Bool(*b),
            CellValue::Text(text) => Value::String(text.clone()),
        };
        object.insert(key.clone(), value);
    }
    Value::Object(object)
}
