//! Path-addressed structural editing for immutable JSON trees.
//!
//! `treepatch` lets a caller address and edit a location deep inside a
//! nested, heterogeneous tree (`serde_json::Value`) with a compact string
//! path grammar, without writing manual traversal code.
//!
//! # Path grammar
//!
//! Paths are `/`-delimited. Each segment is either:
//!
//! - a **plain segment** — a bare object key (`pets`, `name`);
//! - a **predicate segment** — `field:value`, which locates the first
//!   element of an array whose `field` equals `value`. The value gets
//!   best-effort integer coercion: `id:5` matches the number `5`, never
//!   the string `"5"`.
//!
//! # Editing
//!
//! Four operations sit on top of resolution, each a pure function that
//! returns a new tree and leaves the input untouched:
//!
//! ```
//! use treepatch::{append, remove, set, update};
//! use serde_json::json;
//!
//! let tree = json!({
//!     "pets": [
//!         {"id": 1, "name": "Red", "type": "cat"},
//!         {"id": 2, "name": "Blue", "type": "dog"},
//!         {"id": 3, "name": "Pikachu", "type": "pokemon"},
//!     ],
//! });
//!
//! let tree = append(&tree, "pets", json!({"id": 4, "name": "Gary", "type": "yeti"}));
//! let tree = set(&tree, "pets/id:2/name", json!("Purple"));
//! let tree = update(&tree, "pets/id:3", json!({"name": "Charmander", "gender": "F"}));
//! let tree = remove(&tree, "pets/type:yeti");
//!
//! assert_eq!(tree["pets"][1]["name"], "Purple");
//! assert_eq!(tree["pets"][2]["name"], "Charmander");
//! assert_eq!(tree["pets"].as_array().unwrap().len(), 3);
//! ```
//!
//! # Failure policy
//!
//! There is exactly one failure mode: the path does not resolve (missing
//! field, predicate with no match, predicate on a non-array, malformed
//! segment). The default operations treat it as a silent no-op and return
//! the original tree, so results can be piped into further edits without
//! error checks. The `try_*` variants return [`EditError`] instead, and
//! every silent fallback emits a `tracing` debug event for diagnosis.
//!
//! Resolution is instance-specific: predicate indices are recomputed
//! against the current tree on every call, never cached.

mod edit;
mod error;
mod path;
mod resolve;
mod segment;

pub use edit::{append, remove, set, try_append, try_remove, try_set, try_update, update};
pub use error::{value_type_name, EditError, EditResult};
pub use path::{Path, Seg};
pub use resolve::{get, resolve, Resolution};
pub use segment::{parse_path_str, PredValue, Segment};

// Re-export serde_json::Value for convenience
pub use serde_json::Value;
