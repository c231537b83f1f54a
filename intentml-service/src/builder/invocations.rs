//! Invocations reducer
//!
//! Each row of an `INVOCATION_NAMES` sheet flattens into one
//! (locale, environment, spoken name) triple. These triples drive which
//! artifact sets get compiled.

use intentml_core::{Invocation, LocaleTable, Sheet, SheetRole};

use super::sheet_locale;

/// Reduce every Invocations-role sheet into an [`Invocation`] collection
#[must_use]
pub fn reduce(sheets: &[Sheet], locales: &LocaleTable) -> Vec<Invocation> {
    sheets
        .iter()
        .filter(|sheet| sheet.role == SheetRole::Invocations)
        .flat_map(|sheet| {
            let locale = sheet_locale(sheet, locales);
            sheet.rows.iter().filter_map(move |row| {
                let environment = Sheet::cell(row, "environment")?;
                let name = Sheet::cell(row, "invocationName")?;
                Some(Invocation {
                    locale: locale.clone(),
                    environment: environment.to_string(),
                    name: name.to_string(),
                })
            })
        })
        .collect()
}
