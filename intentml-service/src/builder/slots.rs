//! Slots reducer
//!
//! One `LIST_OF_` sheet yields one custom slot type named after the sheet
//! title. The `synonym` column carries the canonical value and is
//! forward-filled over merged cells; the `value` column carries one
//! synonym per row. Rows that never acquire a group key become degenerate
//! values with no synonyms.

use indexmap::IndexMap;
use intentml_core::{LocaleTable, Sheet, SheetRole, Slot, SlotValue};

use super::{forward_fill, sheet_locale};

/// Reduce every Slots-role sheet into a [`Slot`] collection
#[must_use]
pub fn reduce(sheets: &[Sheet], locales: &LocaleTable) -> Vec<Slot> {
    sheets
        .iter()
        .filter(|sheet| sheet.role == SheetRole::Slots)
        .map(|sheet| reduce_sheet(sheet, locales))
        .collect()
}

fn reduce_sheet(sheet: &Sheet, locales: &LocaleTable) -> Slot {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();

    for (canonical, row) in forward_fill(&sheet.rows, "synonym") {
        let synonym = Sheet::cell(row, "value").map(ToString::to_string);
        match canonical {
            Some(canonical) => {
                let entry = groups.entry(canonical.clone()).or_default();
                if let Some(synonym) = synonym {
                    if synonym != canonical && !entry.contains(&synonym) {
                        entry.push(synonym);
                    }
                }
            }
            // No synonym group of its own: a degenerate value.
            None => {
                if let Some(synonym) = synonym {
                    groups.entry(synonym).or_default();
                }
            }
        }
    }

    Slot {
        locale: sheet_locale(sheet, locales),
        name: sheet.sheet_title.clone(),
        values: groups
            .into_iter()
            .map(|(value, synonyms)| SlotValue { value, synonyms })
            .collect(),
    }
}
