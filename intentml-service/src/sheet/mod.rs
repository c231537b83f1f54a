//! Sheet classification and row normalization
//!
//! The first two pipeline stages: tag each incoming sheet with a semantic
//! role from its title, then convert its raw cell grid into keyed records.
//! Unclassified sheets are dropped before they reach any reducer.

pub mod classifier;
pub mod normalizer;

pub use classifier::classify_title;
pub use normalizer::normalize_grid;

use intentml_core::{Sheet, SheetRole, SheetSource};
use tracing::debug;

/// Classify and normalize one raw sheet.
///
/// Returns `None` for sheets whose title matches no naming convention;
/// those are excluded from all downstream processing.
#[must_use]
pub fn ingest(source: SheetSource) -> Option<Sheet> {
    let role = classify_title(&source.sheet_title);
    if role == SheetRole::Unclassified {
        debug!(sheet = %source.sheet_title, "dropping unclassified sheet");
        return None;
    }
    let rows = normalize_grid(&source.grid);
    Some(Sheet {
        source_id: source.source_id,
        source_title: source.source_title,
        sheet_title: source.sheet_title,
        role,
        rows,
    })
}
