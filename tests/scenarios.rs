//! End-to-end scenarios against a small pet roster.

use serde_json::{json, Value};
use treepatch::{append, remove, set, update};

fn roster() -> Value {
    json!({
        "pets": [
            {"id": 1, "name": "Red", "type": "cat"},
            {"id": 2, "name": "Blue", "type": "dog"},
            {"id": 3, "name": "Pikachu", "type": "pokemon"},
        ],
        "owner": {"name": "Ash", "badges": 8},
    })
}

// ============================================================================
// The four operations
// ============================================================================

#[test]
fn test_append_adds_last_element() {
    let tree = append(&roster(), "pets", json!({"id": 4, "name": "Gary", "type": "yeti"}));
    let pets = tree["pets"].as_array().unwrap();
    assert_eq!(pets.len(), 4);
    assert_eq!(pets[3]["name"], "Gary");
    assert_eq!(pets[3]["type"], "yeti");
}

#[test]
fn test_set_by_predicate() {
    let tree = set(&roster(), "pets/id:2/name", json!("Purple"));
    assert_eq!(tree["pets"][1]["name"], "Purple");
    // Others unchanged
    assert_eq!(tree["pets"][0]["name"], "Red");
    assert_eq!(tree["pets"][2]["name"], "Pikachu");
}

#[test]
fn test_update_merges_and_preserves() {
    let tree = update(&roster(), "pets/id:3", json!({"name": "Charmander", "gender": "F"}));
    let pikachu = &tree["pets"][2];
    assert_eq!(pikachu["name"], "Charmander");
    assert_eq!(pikachu["gender"], "F");
    assert_eq!(pikachu["id"], 3);
    assert_eq!(pikachu["type"], "pokemon");
}

#[test]
fn test_remove_by_predicate_keeps_order() {
    let tree = remove(&roster(), "pets/type:pokemon");
    let pets = tree["pets"].as_array().unwrap();
    assert_eq!(pets.len(), 2);
    assert_eq!(pets[0]["id"], 1);
    assert_eq!(pets[1]["id"], 2);
}

#[test]
fn test_unresolved_set_is_noop() {
    let tree = roster();
    let out = set(&tree, "pets/id:99/name", json!("X"));
    assert_eq!(out, tree);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_set_is_idempotent() {
    let tree = roster();
    let once = set(&tree, "pets/id:1/name", json!("Scarlet"));
    let twice = set(&once, "pets/id:1/name", json!("Scarlet"));
    assert_eq!(once, twice);
}

#[test]
fn test_append_remove_round_trip() {
    let tree = roster();
    let grown = append(&tree, "pets", json!({"id": 4, "name": "Gary", "type": "yeti"}));
    let back = remove(&grown, "pets/id:4");
    assert_eq!(back, tree);
}

#[test]
fn test_sibling_branches_untouched() {
    let tree = roster();
    let out = set(&tree, "pets/id:2/name", json!("Purple"));
    assert_eq!(out["owner"], tree["owner"]);
    assert_eq!(out["pets"][0], tree["pets"][0]);
}

#[test]
fn test_operations_are_pure() {
    let tree = roster();
    let snapshot = tree.clone();

    let _ = append(&tree, "pets", json!({"id": 4}));
    let _ = set(&tree, "pets/id:1/name", json!("X"));
    let _ = update(&tree, "owner", json!({"badges": 9}));
    let _ = remove(&tree, "pets/id:1");

    assert_eq!(tree, snapshot);
}

#[test]
fn test_first_match_wins_for_duplicates() {
    let tree = json!({
        "pets": [
            {"id": 1, "type": "cat", "name": "Red"},
            {"id": 2, "type": "cat", "name": "Blue"},
        ],
    });
    let out = set(&tree, "pets/type:cat/name", json!("First"));
    assert_eq!(out["pets"][0]["name"], "First");
    assert_eq!(out["pets"][1]["name"], "Blue");
}

#[test]
fn test_predicate_re_resolves_after_edit() {
    // Removing the first cat makes the second one the new first match.
    let tree = json!({
        "pets": [
            {"id": 1, "type": "cat"},
            {"id": 2, "type": "cat"},
        ],
    });
    let out = remove(&tree, "pets/type:cat");
    let out = remove(&out, "pets/type:cat");
    assert_eq!(out["pets"].as_array().unwrap().len(), 0);
}

#[test]
fn test_edits_compose_as_pipeline() {
    let tree = roster();
    let tree = append(&tree, "pets", json!({"id": 4, "name": "Gary", "type": "yeti"}));
    let tree = set(&tree, "pets/id:4/name", json!("Garold"));
    // A typo'd path in the middle must not break the pipeline
    let tree = update(&tree, "pets/id:40", json!({"name": "nobody"}));
    let tree = remove(&tree, "pets/type:pokemon");

    let pets = tree["pets"].as_array().unwrap();
    assert_eq!(pets.len(), 3);
    assert_eq!(pets[2]["name"], "Garold");
}
