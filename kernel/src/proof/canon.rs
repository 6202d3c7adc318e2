//! Canonical JSON bytes: the one serialization used for hashing.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact form, no whitespace: `{"a":1,"b":[2,3]}`.
//! 3. Numbers must be integers. Floats are rejected because their textual
//!    form is not something two implementations reliably agree on; callers
//!    render costs as strings instead.
//!
//! `serde_json::Map` is backed by a `BTreeMap` unless the `preserve_order`
//! feature is enabled, so rule 1 holds as long as this workspace never turns
//! that feature on. [`canonical_json_bytes`] sorts explicitly anyway, by
//! rebuilding every object, so a stray feature flag elsewhere in the
//! dependency graph cannot change the bytes.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON at {path}: {raw}")]
    NonIntegerNumber { path: String, raw: String },
    /// `serde_json` failed to write the value.
    #[error("canonical JSON serialization failed: {detail}")]
    Serialize { detail: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number in `value` is not
/// representable as `i64` or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let normalized = normalize(value, "$")?;
    serde_json::to_vec(&normalized).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

fn normalize(value: &serde_json::Value, path: &str) -> Result<serde_json::Value, CanonError> {
    use serde_json::Value;

    match value {
        Value::Number(n) if !(n.is_i64() || n.is_u64()) => Err(CanonError::NonIntegerNumber {
            path: path.to_string(),
            raw: n.to_string(),
        }),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| normalize(item, &format!("{path}[{i}]")))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            let mut out = serde_json::Map::new();
            for (key, item) in entries {
                out.insert(key.clone(), normalize(item, &format!("{path}.{key}"))?);
            }
            Ok(Value::Object(out))
        }
        other => Ok(other.clone()),
    }
}
