//! Publishing reducer
//!
//! General, locale and environment publishing sheets all reduce to flat
//! {key, value, environments} triples. Locale-scoped sheets substitute the
//! `{locale}` placeholder in each key with the sheet's resolved locale;
//! environment-scoped sheets read their environment set from the row.

use intentml_core::{CellValue, LocaleTable, PublishingInfo, Sheet, SheetRole};
use serde_json::Value;

use super::{comma_list, sheet_locale};

/// Reduce every publishing-role sheet into a [`PublishingInfo`] collection
#[must_use]
pub fn reduce(sheets: &[Sheet], locales: &LocaleTable) -> Vec<PublishingInfo> {
    sheets
        .iter()
        .filter(|sheet| sheet.role.is_publishing())
        .flat_map(|sheet| {
            let locale = sheet_locale(sheet, locales);
            sheet.rows.iter().filter_map(move |row| {
                let key = Sheet::cell(row, "key")?;
                let key = if sheet.role == SheetRole::PublishingLocale {
                    key.replace("{locale}", locale.tag())
                } else {
                    key.to_string()
                };
                let value = match row.get("value")? {
                    CellValue::Empty => return None,
                    CellValue::Bool(b) => Value::Bool(*b),
                    CellValue::Text(text) => Value::String(text.clone()),
                };
                let environments = if sheet.role == SheetRole::PublishingEnvironments {
                    comma_list(Sheet::cell(row, "environments"))
                        .into_iter()
                        .collect()
                } else {
                    std::collections::BTreeSet::new()
                };
                Some(PublishingInfo {
                    key,
                    value,
                    environments,
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use intentml_core::NormalizedRow;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sheet(title: &str, role: SheetRole, rows: Vec<Vec<(&str, &str)>>) -> Sheet {
        Sheet {
            source_id: "source".to_string(),
            source_title: "My App en-GB".to_string(),
            sheet_title: title.to_string(),
            role,
            rows: rows
                .into_iter()
                .map(|pairs| {
                    pairs
                        .into_iter()
                        .map(|(k, v)| (k.to_string(), CellValue::coerce(v)))
                        .collect::<NormalizedRow>()
                })
                .collect(),
        }
    }

    #[test]
    fn test_general_rows_have_no_environment_scope() {
        let rows = reduce(
            &[sheet(
                "SKILL_GENERAL_INFORMATION",
                SheetRole::PublishingGeneral,
                vec![vec![("key", "alexa.manifestVersion"), ("value", "1.0")]],
            )],
            &LocaleTable::default(),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key, "alexa.manifestVersion");
        assert_eq!(rows[0].value, json!("1.0"));
        assert!(rows[0].environments.is_empty());
    }

    #[test]
    fn test_locale_placeholder_substituted() {
        let rows = reduce(
            &[sheet(
                "SKILL_LOCALE_INFORMATION",
                SheetRole::PublishingLocale,
                vec![vec![
                    ("key", "alexa.publishingInformation.locales.{locale}.name"),
                    ("value", "My App"),
                ]],
            )],
            &LocaleTable::default(),
        );
        assert_eq!(
            rows[0].key,
            "alexa.publishingInformation.locales.en-GB.name"
        );
    }

    #[test]
    fn test_environment_rows_carry_their_scope() {
        let rows = reduce(
            &[sheet(
                "SKILL_ENVIRONMENTS_INFORMATION",
                SheetRole::PublishingEnvironments,
                vec![vec![
                    ("key", "alexa.events.endpoint.uri"),
                    ("value", "https://staging.example.com"),
                    ("environments", "staging, development"),
                ]],
            )],
            &LocaleTable::default(),
        );
        assert!(rows[0].environments.contains("staging"));
        assert!(rows[0].environments.contains("development"));
        assert_eq!(rows[0].environments.len(), 2);
    }

    #[test]
    fn test_rows_without_key_or_value_skipped() {
        let rows = reduce(
            &[sheet(
                "SKILL_GENERAL_INFORMATION",
                SheetRole::PublishingGeneral,
                vec![
                    vec![("key", "alexa.x"), ("value", "")],
                    vec![("key", ""), ("value", "y")],
                ],
            )],
            &LocaleTable::default(),
        );
        assert!(rows.is_empty());
    }
}
