//! Deterministic cache key derivation for workflow identities.
//!
//! A key is the SHA-256 digest of the canonical JSON encoding of the
//! `(department, backend, params)` triple, hex-encoded. Canonicalization
//! sorts object keys recursively, so the insertion order of `params`
//! never affects the derived key.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::error::Result;

/// Key material hashed for one workflow identity. Field order is fixed by
/// the struct definition; `params` must already be canonical.
#[derive(Serialize)]
struct KeyMaterial<'a> {
    department: &'a str,
    backend: &'a str,
    params: Value,
}

/// Rebuild a JSON value with all object keys in sorted order, recursively.
///
/// Sorting is done through an explicit `BTreeMap` rather than relying on
/// the backing map implementation of `serde_json`, so the canonical form
/// is stable even if the `preserve_order` feature is pulled in by a
/// downstream crate.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<&String, &Value> = map.iter().collect();
            let mut out = Map::with_capacity(map.len());
            for (k, v) in sorted {
                out.insert(k.clone(), canonicalize(v));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

/// Derive the hex-encoded cache key for a workflow identity.
///
/// Equal `(department, backend, params)` triples always produce the same
/// key regardless of params key order; any difference in any field
/// changes the key.
pub fn cache_key(department: &str, backend: &str, params: &Map<String, Value>) -> Result<String> {
    let material = KeyMaterial {
        department,
        backend,
        params: canonicalize(&Value::Object(params.clone())),
    };
    let bytes = serde_json::to_vec(&material)?;
    let digest = Sha256::digest(&bytes);
    Ok(hex::encode(digest))
}
