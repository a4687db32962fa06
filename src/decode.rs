//! JSON → typed model.
//!
//! Walks `serde_json::Value` by hand: every domain union here is discriminated
//! by a string tag and has literal/object sugar, so serde derive cannot give
//! us path-qualified errors for the shapes we actually reject. All decoding is
//! single-pass and allocation happens only on descent.

pub mod condition;
pub mod predicate;
pub mod provider;

use serde_json::{Map, Value};

use crate::ast::{Pool, Table};
use crate::error::{Error, NodePath, Result};

// ————————————————————————————————————————————————————————————————————————————
// ENTRY POINTS
// ————————————————————————————————————————————————————————————————————————————

/// Decode a whole loot-table document.
pub fn table(v: &Value) -> Result<Table> {
    let path = NodePath::root();
    let m = obj(v, &path, "a loot table object")?;
    let pools_v = req(m, "pools", &path)?;
    let pools_path = path.field("pools");
    let arr = list(pools_v, &pools_path, "an array of pools")?;

    let mut pools = Vec::with_capacity(arr.len());
    for (i, p) in arr.iter().enumerate() {
        pools.push(pool(p, &pools_path.index(i))?);
    }
    Ok(Table { pools })
}

/// Decode one pool. `entries` are out of scope and skipped; a `functions` key
/// is an explicit unsupported-feature error rather than silent truncation.
pub fn pool(v: &Value, path: &NodePath) -> Result<Pool> {
    let m = obj(v, path, "a pool object")?;

    if m.contains_key("functions") {
        return Err(Error::Unsupported {
            path: path.field("functions"),
            feature: "loot functions",
        });
    }

    let rolls = provider::number(req(m, "rolls", path)?, &path.field("rolls"))?;
    let bonus_rolls = m
        .get("bonus_rolls")
        .map(|b| provider::number(b, &path.field("bonus_rolls")))
        .transpose()?;

    let mut conditions = Vec::new();
    if let Some(cs) = m.get("conditions") {
        let cs_path = path.field("conditions");
        for (i, c) in list(cs, &cs_path, "an array of conditions")?.iter().enumerate() {
            conditions.push(condition::condition(c, &cs_path.index(i))?);
        }
    }

    Ok(Pool {
        rolls,
        bonus_rolls,
        conditions,
    })
}

// ————————————————————————————————————————————————————————————————————————————
// SHARED SHAPE HELPERS
// ————————————————————————————————————————————————————————————————————————————

pub(crate) fn obj<'a>(
    v: &'a Value,
    path: &NodePath,
    expected: &'static str,
) -> Result<&'a Map<String, Value>> {
    v.as_object().ok_or_else(|| Error::Shape {
        path: path.clone(),
        expected,
    })
}

pub(crate) fn list<'a>(
    v: &'a Value,
    path: &NodePath,
    expected: &'static str,
) -> Result<&'a Vec<Value>> {
    v.as_array().ok_or_else(|| Error::Shape {
        path: path.clone(),
        expected,
    })
}

pub(crate) fn req<'a>(
    m: &'a Map<String, Value>,
    field: &'static str,
    path: &NodePath,
) -> Result<&'a Value> {
    m.get(field).ok_or_else(|| Error::MissingField {
        path: path.clone(),
        field,
    })
}

pub(crate) fn num(v: &Value, path: &NodePath) -> Result<f64> {
    v.as_f64().ok_or_else(|| Error::Shape {
        path: path.clone(),
        expected: "a number",
    })
}

pub(crate) fn int(v: &Value, path: &NodePath) -> Result<i64> {
    v.as_i64().ok_or_else(|| Error::Shape {
        path: path.clone(),
        expected: "an integer",
    })
}

pub(crate) fn boolean(v: &Value, path: &NodePath) -> Result<bool> {
    v.as_bool().ok_or_else(|| Error::Shape {
        path: path.clone(),
        expected: "a boolean",
    })
}

pub(crate) fn string<'a>(v: &'a Value, path: &NodePath) -> Result<&'a str> {
    v.as_str().ok_or_else(|| Error::Shape {
        path: path.clone(),
        expected: "a string",
    })
}

/// Discriminators compare with the `minecraft:` namespace stripped, so
/// `uniform` and `minecraft:uniform` select the same variant.
pub(crate) fn local_tag(tag: &str) -> &str {
    tag.strip_prefix("minecraft:").unwrap_or(tag)
}

/// A field that is a plain integer literal (not a nested provider object).
pub(crate) fn is_plain_int(v: &Value) -> bool {
    v.as_i64().is_some()
}
