//! Reducers from classified sheets to the intermediate representation
//!
//! Six independent reducers, each pure over its sheet role, together
//! produce the [`ModelDefinition`] consumed by validation and every
//! platform generator. A reducer that finds no matching sheets yields an
//! empty collection; that is a legitimate state, not an error.

pub mod downloads;
pub mod intents;
pub mod invocations;
pub mod publishing;
pub mod slots;
pub mod views;

use intentml_core::{
    CellValue, Locale, LocaleTable, ModelDefinition, NormalizedRow, Sheet,
};
use tracing::debug;

/// Builds the intermediate representation from an immutable sheet snapshot
pub struct IrBuilder<'a> {
    sheets: &'a [Sheet],
    locales: &'a LocaleTable,
}

impl<'a> IrBuilder<'a> {
    /// Create a builder over classified, normalized sheets
    #[must_use]
    pub fn new(sheets: &'a [Sheet], locales: &'a LocaleTable) -> Self {
        Self { sheets, locales }
    }

    /// Run every reducer and assemble the model
    #[must_use]
    pub fn build(&self) -> ModelDefinition {
        let model = ModelDefinition {
            intents: intents::reduce(self.sheets, self.locales),
            slots: slots::reduce(self.sheets, self.locales),
            views: views::reduce(self.sheets, self.locales),
            downloads: downloads::reduce(self.sheets, self.locales),
            invocations: invocations::reduce(self.sheets, self.locales),
            publishing: publishing::reduce(self.sheets, self.locales),
        };
        debug!(
            intents = model.intents.len(),
            slots = model.slots.len(),
            views = model.views.len(),
            downloads = model.downloads.len(),
            invocations = model.invocations.len(),
            publishing = model.publishing.len(),
            "model built"
        );
        model
    }
}

/// Resolve a sheet's locale: the sheet title wins over the spreadsheet
/// title; a title naming no locale falls back to the table's first entry.
pub(crate) fn sheet_locale(sheet: &Sheet, locales: &LocaleTable) -> Locale {
    locales
        .try_resolve_title(&sheet.sheet_title)
        .or_else(|| locales.try_resolve_title(&sheet.source_title))
        .unwrap_or_else(|| locales.fallback())
}

/// Forward-fill a group-key column over the merged-cell convention: a
/// blank cell belongs to the last non-blank value seen in row order.
///
/// Implemented as an explicit left fold carrying the last seen key; rows
/// before the first non-blank key yield `None`.
pub(crate) fn forward_fill<'r>(
    rows: &'r [NormalizedRow],
    key: &str,
) -> Vec<(Option<String>, &'r NormalizedRow)> {
    rows.iter()
        .scan(None::<String>, |last, row| {
            if let Some(value) = row.get(key).and_then(CellValue::as_str) {
                *last = Some(value.to_string());
            }
            Some((last.clone(), row))
        })
        .collect()
}

/// Split a comma-separated cell into trimmed, non-empty entries
pub(crate) fn comma_list(cell: Option<&str>) -> Vec<String> {
    cell.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(ToString::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    fn row(pairs: &[(&str, CellValue)]) -> NormalizedRow {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect::<IndexMap<_, _>>()
    }

    #[test]
    fn test_forward_fill_carries_last_seen_key() {
        let rows = vec![
            row(&[("synonym", CellValue::Text("s1".to_string()))]),
            row(&[("synonym", CellValue::Empty)]),
            row(&[("synonym", CellValue::Text("s2".to_string()))]),
        ];
        let filled = forward_fill(&rows, "synonym");
        assert_eq!(filled[0].0.as_deref(), Some("s1"));
        assert_eq!(filled[1].0.as_deref(), Some("s1"));
        assert_eq!(filled[2].0.as_deref(), Some("s2"));
    }

    #[test]
    fn test_forward_fill_leading_blanks_have_no_group() {
        let rows = vec![
            row(&[("intent", CellValue::Empty)]),
            row(&[("intent", CellValue::Text("A".to_string()))]),
        ];
        let filled = forward_fill(&rows, "intent");
        assert_eq!(filled[0].0, None);
        assert_eq!(filled[1].0.as_deref(), Some("A"));
    }

    #[test]
    fn test_comma_list() {
        assert_eq!(
            comma_list(Some("alexa, dialogflow ,cortana")),
            vec!["alexa", "dialogflow", "cortana"]
        );
        assert_eq!(comma_list(Some(" , ")), Vec::<String>::new());
        assert_eq!(comma_list(None), Vec::<String>::new());
    }
}
