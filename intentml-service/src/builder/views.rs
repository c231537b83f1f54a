//! Views reducer
//!
//! A `VIEWS_FILE` sheet carries a `path` column plus one column per locale.
//! Rows reduce into a nested key/value tree per locale; paths whose last
//! segment is a recognized reply type accumulate into an array so one path
//! can hold several alternate phrasings.

use intentml_core::{CellValue, LocaleTable, Sheet, SheetRole, View};
use serde_json::{Map, Value};

/// Path segments treated as reply types: their leaves accumulate arrays
const REPLY_SUFFIXES: &[&str] = &["say", "ask", "tell", "reprompt"];

/// Reduce every Views-role sheet into a [`View`] collection, one per
/// locale column
#[must_use]
pub fn reduce(sheets: &[Sheet], locales: &LocaleTable) -> Vec<View> {
    let mut views: Vec<View> = Vec::new();
    for sheet in sheets.iter().filter(|s| s.role == SheetRole::Views) {
        let headers: Vec<String> = sheet
            .rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();

        for header in headers {
            if header.eq_ignore_ascii_case("path") || !locales.contains(&header) {
                continue;
            }
            let locale = locales.resolve_title(&header);
            let mut data = Map::new();
            for row in &sheet.rows {
                let Some(path) = Sheet::cell(row, "path") else {
                    continue;
                };
                let Some(cell) = row.get(&header) else {
                    continue;
                };
                let value = match cell {
                    CellValue::Empty => continue,
                    CellValue::Bool(b) => Value::Bool(*b),
                    CellValue::Text(text) => Value::String(sanitize(text)),
                };
                assign_path(&mut data, path, value);
            }
            views.push(View {
                locale,
                data: Value::Object(data),
            });
        }
    }
    views
}

/// Normalize typographic quotes and expand ampersands
fn sanitize(text: &str) -> String {
    text.replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"")
        .replace('&', "and")
}

fn is_reply_path(path: &str) -> bool {
    path.rsplit('.')
        .next()
        .is_some_and(|last| REPLY_SUFFIXES.contains(&last.to_lowercase().as_str()))
}

/// Assign `value` at the dotted `path`, creating intermediate objects.
/// Reply-type leaves append to an array instead of overwriting.
fn assign_path(root: &mut Map<String, Value>, path: &str, value: Value) {
    let accumulate = is_reply_path(path);
    let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
    let Some((leaf, branch)) = segments.split_last() else {
        return;
    };

    let mut current = root;
    for segment in branch {
        let entry = current
            .entry((*segment).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        let Value::Object(next) = entry else { return };
        current = next;
    }

    if accumulate {
        match current
            .entry((*leaf).to_string())
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            Value::Array(items) => items.push(value),
            other => *other = Value::Array(vec![other.take(), value]),
        }
    } else {
        current.insert((*leaf).to_string(), value);
    }
}
