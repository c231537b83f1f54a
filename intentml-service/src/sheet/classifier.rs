//! Sheet title classification
//!
//! A sheet's role is decided by a fixed, ordered table of naming-convention
//! markers; the first marker that is a substring of the title wins. The
//! generic `INTENT` marker sits last so the more specific conventions take
//! precedence.

use intentml_core::SheetRole;

/// Ordered (role, marker) table. Ties are broken by table order.
const ROLE_MARKERS: &[(SheetRole, &str)] = &[
    (SheetRole::Slots, "LIST_OF_"),
    (SheetRole::Utterances, "UTTERANCES_"),
    (SheetRole::Invocations, "INVOCATION_NAMES"),
    (SheetRole::Views, "VIEWS_FILE"),
    (SheetRole::Downloads, "DOWNLOAD_"),
    (SheetRole::PublishingGeneral, "SKILL_GENERAL_INFORMATION"),
    (SheetRole::PublishingLocale, "SKILL_LOCALE_INFORMATION"),
    (
        SheetRole::PublishingEnvironments,
        "SKILL_ENVIRONMENTS_INFORMATION",
    ),
    (SheetRole::Intents, "INTENT"),
];

/// Classify a sheet title against the marker table.
///
/// Deterministic and side-effect free; titles matching no marker yield
/// [`SheetRole::Unclassified`].
#[must_use]
pub fn classify_title(title: &str) -> SheetRole {
    ROLE_MARKERS
        .iter()
        .find(|(_, marker)| title.contains(marker))
        .map_or(SheetRole::Unclassified, |(role, _)| *role)
}

/// Strip the role marker from a sheet title, e.g. `DOWNLOAD_FAQ` → `FAQ`.
///
/// Returns the title unchanged when the role has no marker in the table.
#[must_use]
pub fn strip_marker(title: &str, role: SheetRole) -> &str {
    ROLE_MARKERS
        .iter()
        .find(|(r, _)| *r == role)
        .and_then(|(_, marker)| {
            let start = title.find(marker)?;
            Some(&title[start + marker.len()..])
        })
        .unwrap_or(title)
}
