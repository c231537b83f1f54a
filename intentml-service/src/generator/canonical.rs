//! Canonical JSON serialization and content-addressed identifiers
//!
//! Artifact ids are a hash of the artifact's own canonicalized JSON:
//! stable across runs for identical content. Canonicalization sorts
//! object keys and uses serde's stable number formatting, so the hash is
//! reproducible regardless of insertion order.

use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Render a value as canonical JSON: object keys sorted, no whitespace
#[must_use]
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            out.push('{');
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            for (index, key) in keys.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                // serde_json's Display for strings handles escaping.
                let _ = write!(out, "{}:", Value::String((*key).clone()));
                write_canonical(&map[*key], out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => {
            let _ = write!(out, "{scalar}");
        }
    }
}

/// Deterministic content-addressed id in UUID form: the first sixteen
/// bytes of the SHA-256 of the canonical JSON
#[must_use]
pub fn content_id(value: &Value) -> String {
    let digest = Sha256::digest(canonical_json(value).as_bytes());
    let hex: String = digest
        .iter()
        .take(16)
        .fold(String::with_capacity(32), |mut acc, byte| {
            let _ = write!(acc, "{byte:02x}");
            acc
        });
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}
