//! Resolving path strings against a concrete document.
//!
//! Resolution turns the string grammar into a [`Path`] of concrete
//! accessors by walking the document: plain segments become key accessors,
//! predicate segments become the index of the first matching array element.

use crate::segment::{parse_path_str, Segment};
use crate::{Path, Seg};
use serde_json::Value;

/// The outcome of resolving a path string against a document.
///
/// Resolution is all-or-nothing: the first segment that cannot be matched
/// makes the whole path [`Unresolved`](Resolution::Unresolved); there are
/// no partial results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Every segment matched; the path holds the concrete accessors.
    Resolved(Path),
    /// Some segment failed to match this document.
    Unresolved,
}

impl Resolution {
    /// Returns true if the path resolved.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    /// Extract the resolved path, if any.
    #[inline]
    pub fn into_path(self) -> Option<Path> {
        match self {
            Resolution::Resolved(p) => Some(p),
            Resolution::Unresolved => None,
        }
    }
}

/// Resolve a path string into concrete accessors for this document.
///
/// Predicate segments are matched against the document as it is right now,
/// so a path must be re-resolved after every edit; the index a predicate
/// picks can differ between trees. When several elements match a predicate,
/// the earliest one wins.
///
/// # Examples
///
/// ```
/// use treepatch::{path, resolve, Resolution};
/// use serde_json::json;
///
/// let doc = json!({"pets": [{"id": 1}, {"id": 2}]});
/// assert_eq!(
///     resolve(&doc, "pets/id:2"),
///     Resolution::Resolved(path!("pets", 1))
/// );
/// assert_eq!(resolve(&doc, "pets/id:99"), Resolution::Unresolved);
/// ```
pub fn resolve(doc: &Value, path: &str) -> Resolution {
    let mut accessors = Path::new();
    let mut current = doc;

    for segment in parse_path_str(path) {
        match segment {
            Segment::Plain(key) => match current.as_object().and_then(|obj| obj.get(&key)) {
                Some(child) => {
                    current = child;
                    accessors.push(Seg::Key(key));
                }
                None => return Resolution::Unresolved,
            },
            Segment::Predicate { field, value } => {
                let Some(items) = current.as_array() else {
                    return Resolution::Unresolved;
                };
                let hit = items
                    .iter()
                    .position(|el| el.get(&field).is_some_and(|v| value.matches(v)));
                match hit {
                    Some(idx) => {
                        current = &items[idx];
                        accessors.push(Seg::Index(idx));
                    }
                    None => return Resolution::Unresolved,
                }
            }
        }
    }

    Resolution::Resolved(accessors)
}

/// Resolve a path and read the value it points at.
///
/// Returns `None` when the path does not resolve.
pub fn get<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    match resolve(doc, path) {
        Resolution::Resolved(p) => value_at(doc, p.segments()),
        Resolution::Unresolved => None,
    }
}

/// Follow resolved accessors to a value (for reading).
pub(crate) fn value_at<'a>(doc: &'a Value, segments: &[Seg]) -> Option<&'a Value> {
    let mut current = doc;
    for seg in segments {
        match seg {
            Seg::Key(key) => current = current.get(key)?,
            Seg::Index(idx) => current = current.get(idx)?,
        }
    }
    Some(current)
}
