//! Intents/Utterances reducer
//!
//! Intent rows group by a forward-filled `intent` column; the first row of
//! each group supplies the scalar attributes, and rows carrying a
//! `slotName` add slot declarations. Sample phrases come from a companion
//! Utterances-role sheet of the same spreadsheet source, whose header
//! cells are intent names.

use indexmap::IndexMap;
use intentml_core::{
    CellValue, Intent, LocaleTable, NormalizedRow, Sheet, SheetRole, SlotDefinition,
};

use super::{comma_list, forward_fill, sheet_locale};

/// Reduce every Intents-role sheet (with its companion Utterances sheets)
/// into an [`Intent`] collection
#[must_use]
pub fn reduce(sheets: &[Sheet], locales: &LocaleTable) -> Vec<Intent> {
    sheets
        .iter()
        .filter(|sheet| sheet.role == SheetRole::Intents)
        .flat_map(|sheet| {
            let samples = utterances_for_source(sheets, &sheet.source_id);
            reduce_sheet(sheet, &samples, locales)
        })
        .collect()
}

/// Collect sample phrases keyed by intent name from every Utterances-role
/// sheet sharing `source_id`. Column order and row order are preserved.
fn utterances_for_source(sheets: &[Sheet], source_id: &str) -> IndexMap<String, Vec<String>> {
    let mut samples: IndexMap<String, Vec<String>> = IndexMap::new();
    for sheet in sheets
        .iter()
        .filter(|s| s.role == SheetRole::Utterances && s.source_id == source_id)
    {
        let headers: Vec<String> = sheet
            .rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();
        for header in headers {
            if header.eq_ignore_ascii_case("intent") {
                continue;
            }
            let column = samples.entry(header.clone()).or_default();
            for row in &sheet.rows {
                if let Some(phrase) = Sheet::cell(row, &header) {
                    column.push(phrase.to_string());
                }
            }
        }
    }
    samples
}

fn reduce_sheet(
    sheet: &Sheet,
    samples: &IndexMap<String, Vec<String>>,
    locales: &LocaleTable,
) -> Vec<Intent> {
    let locale = sheet_locale(sheet, locales);

    let mut groups: IndexMap<String, Vec<&NormalizedRow>> = IndexMap::new();
    for (name, row) in forward_fill(&sheet.rows, "intent") {
        if let Some(name) = name {
            groups.entry(name).or_default().push(row);
        }
    }

    groups
        .into_iter()
        .map(|(name, rows)| {
            let first = rows[0];
            let slots = rows
                .iter()
                .filter_map(|row| {
                    let slot_name = Sheet::cell(row, "slotName")?;
                    Some(SlotDefinition {
                        name: strip_braces(slot_name).to_string(),
                        slot_type: Sheet::cell(row, "slotType")
                            .map(strip_braces)
                            .unwrap_or_default()
                            .to_string(),
                    })
                })
                .collect();

            Intent {
                samples: samples.get(&name).cloned().unwrap_or_default(),
                slots,
                can_fulfill_intent: bool_cell(first, "canFulfillIntent"),
                start_intent: bool_cell(first, "startIntent"),
                end_intent: bool_cell(first, "endIntent"),
                sign_in_required: bool_cell(first, "signInRequired"),
                events: comma_list(Sheet::cell(first, "events")),
                environments: comma_list(Sheet::cell(first, "environments"))
                    .into_iter()
                    .collect(),
                platforms: comma_list(Sheet::cell(first, "platforms"))
                    .into_iter()
                    .collect(),
                locale: locale.clone(),
                name,
            }
        })
        .collect()
}

fn bool_cell(row: &NormalizedRow, key: &str) -> bool {
    row.get(key).is_some_and(CellValue::as_bool)
}

/// Strip `{` / `}` markup from sheet-side slot references
fn strip_braces(raw: &str) -> &str {
    raw.trim_start_matches('{').trim_end_matches('}')
}
