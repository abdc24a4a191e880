//! The four structural edit operations.
//!
//! Every operation is a pure function: the input document is never mutated.
//! Internally the root is cloned once and the clone is edited in place
//! through a `&mut` descent along the resolved accessors, so sibling
//! subtrees are never visited.
//!
//! The default operations are fail-soft: when a path does not resolve (or
//! the target has the wrong shape for the edit) they return the original
//! tree unchanged, which keeps call sites pipeline-friendly. The `try_*`
//! variants surface the same conditions as [`EditError`] for callers that
//! want loud failures.

use crate::error::{value_type_name, EditError, EditResult};
use crate::resolve::{resolve, Resolution};
use crate::{Path, Seg};
use serde_json::Value;
use tracing::debug;

/// Append `entry` as the new last element of the array at `path`.
///
/// Returns the input unchanged if the path does not resolve or the target
/// is not an array.
///
/// # Examples
///
/// ```
/// use treepatch::append;
/// use serde_json::json;
///
/// let tree = json!({"pets": [{"id": 1}]});
/// let tree = append(&tree, "pets", json!({"id": 2}));
/// assert_eq!(tree["pets"][1]["id"], 2);
/// ```
pub fn append(doc: &Value, path: &str, entry: Value) -> Value {
    soften(doc, path, "append", try_append(doc, path, entry))
}

/// Replace the value at `path` with `entry` verbatim (no merge).
///
/// Returns the input unchanged if the path does not resolve.
pub fn set(doc: &Value, path: &str, entry: Value) -> Value {
    soften(doc, path, "set", try_set(doc, path, entry))
}

/// Shallow-merge the object `data` into the object at `path`.
///
/// Fields in `data` overwrite same-named fields in the target; fields
/// present only in the target are preserved. Returns the input unchanged
/// if the path does not resolve or either side is not an object.
///
/// # Examples
///
/// ```
/// use treepatch::update;
/// use serde_json::json;
///
/// let tree = json!({"pets": [{"id": 3, "name": "Pikachu", "type": "pokemon"}]});
/// let tree = update(&tree, "pets/id:3", json!({"name": "Charmander", "gender": "F"}));
/// assert_eq!(tree["pets"][0]["name"], "Charmander");
/// assert_eq!(tree["pets"][0]["type"], "pokemon");
/// ```
pub fn update(doc: &Value, path: &str, data: Value) -> Value {
    soften(doc, path, "update", try_update(doc, path, data))
}

/// Remove the value at `path` from its containing collection.
///
/// Removal is type-directed: an array container drops the element at the
/// resolved index (later elements shift down), an object container deletes
/// the field. Returns the input unchanged if the path does not resolve.
pub fn remove(doc: &Value, path: &str) -> Value {
    soften(doc, path, "remove", try_remove(doc, path))
}

/// Strict variant of [`append`].
pub fn try_append(doc: &Value, path: &str, entry: Value) -> EditResult<Value> {
    let accessors = resolve_or_err(doc, path)?;
    let mut out = doc.clone();
    let target = value_at_mut(&mut out, accessors.segments())
        .ok_or_else(|| EditError::unresolved(path))?;
    match target {
        Value::Array(items) => items.push(entry),
        other => return Err(EditError::append_requires_array(path, value_type_name(other))),
    }
    Ok(out)
}

/// Strict variant of [`set`].
pub fn try_set(doc: &Value, path: &str, entry: Value) -> EditResult<Value> {
    let accessors = resolve_or_err(doc, path)?;
    let mut out = doc.clone();
    let target = value_at_mut(&mut out, accessors.segments())
        .ok_or_else(|| EditError::unresolved(path))?;
    *target = entry;
    Ok(out)
}

/// Strict variant of [`update`].
pub fn try_update(doc: &Value, path: &str, data: Value) -> EditResult<Value> {
    let Value::Object(fields) = data else {
        return Err(EditError::merge_requires_object(path, value_type_name(&data)));
    };

    let accessors = resolve_or_err(doc, path)?;
    let mut out = doc.clone();
    let target = value_at_mut(&mut out, accessors.segments())
        .ok_or_else(|| EditError::unresolved(path))?;
    match target {
        Value::Object(obj) => obj.extend(fields),
        other => return Err(EditError::merge_requires_object(path, value_type_name(other))),
    }
    Ok(out)
}

/// Strict variant of [`remove`].
pub fn try_remove(doc: &Value, path: &str) -> EditResult<Value> {
    let accessors = resolve_or_err(doc, path)?;
    let Some((leaf, parents)) = accessors.segments().split_last() else {
        // Root has no containing collection to detach from.
        return Ok(doc.clone());
    };

    let mut out = doc.clone();
    let container =
        value_at_mut(&mut out, parents).ok_or_else(|| EditError::unresolved(path))?;
    match (container, leaf) {
        (Value::Array(items), Seg::Index(idx)) if *idx < items.len() => {
            items.remove(*idx);
        }
        (Value::Object(obj), Seg::Key(key)) => {
            obj.remove(key);
        }
        // Any other container shape is left as-is.
        _ => {}
    }
    Ok(out)
}

fn resolve_or_err(doc: &Value, path: &str) -> EditResult<Path> {
    match resolve(doc, path) {
        Resolution::Resolved(p) => Ok(p),
        Resolution::Unresolved => Err(EditError::unresolved(path)),
    }
}

fn soften(doc: &Value, path: &str, op: &'static str, result: EditResult<Value>) -> Value {
    match result {
        Ok(out) => out,
        Err(err) => {
            debug!(op, path, %err, "edit fell back to no-op");
            doc.clone()
        }
    }
}

/// Follow resolved accessors to a value (for editing in place).
fn value_at_mut<'a>(current: &'a mut Value, segments: &[Seg]) -> Option<&'a mut Value> {
    match segments {
        [] => Some(current),
        [Seg::Key(key), rest @ ..] => {
            value_at_mut(current.as_object_mut()?.get_mut(key)?, rest)
        }
        [Seg::Index(idx), rest @ ..] => {
            value_at_mut(current.as_array_mut()?.get_mut(*idx)?, rest)
        }
    }
}
