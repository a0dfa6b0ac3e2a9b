/// Tests for operator-document updates (`Cursor::apply_update`).
use jsonview_core::Cursor;
use serde_json::{json, Value};

fn apply(doc: Value, ops: Value) -> Value {
    let target = Cursor::new(doc);
    target.apply_update(&Cursor::new(ops));
    target.value().unwrap_or(Value::Null)
}

// ============================================================================
// $set / $setOnInsert / $unset
// ============================================================================

#[test]
fn set_writes_dotted_paths() {
    let out = apply(json!({"a": 1}), json!({"$set": {"a": 2, "b.c": "x", "list.1": true}}));
    assert_eq!(out, json!({"a": 2, "b": {"c": "x"}, "list": [null, true]}));
}

#[test]
fn set_on_insert_applies_to_missing_target() {
    let target = Cursor::missing();
    target.apply_update(&Cursor::new(json!({"$setOnInsert": {"created": 1}})));
    assert_eq!(target.value().unwrap(), json!({"created": 1}));
}

#[test]
fn set_on_insert_applies_to_null_target() {
    let out = apply(json!(null), json!({"$setOnInsert": {"created": 1}}));
    assert_eq!(out, json!({"created": 1}));
}

#[test]
fn set_on_insert_skipped_for_existing_target() {
    let out = apply(json!({"a": 1}), json!({"$setOnInsert": {"created": 1}}));
    assert_eq!(out, json!({"a": 1}));
}

#[test]
fn set_wins_over_set_on_insert() {
    let out = apply_missing(json!({"$setOnInsert": {"a": 1}, "$set": {"a": 2}}));
    assert_eq!(out, json!({"a": 2}));
}

#[test]
fn operator_order_ignores_document_order() {
    // $set is listed after $inc but still runs first.
    let out = apply(json!({}), json!({"$inc": {"n": 1}, "$set": {"n": 10}}));
    assert_eq!(out, json!({"n": 11}));
}

#[test]
fn unset_removes_fields() {
    let out = apply(
        json!({"a": 1, "b": {"c": 2, "d": 3}}),
        json!({"$unset": {"a": "", "b.c": 1, "nope": 1}}),
    );
    assert_eq!(out, json!({"b": {"d": 3}}));
}

fn apply_missing(ops: Value) -> Value {
    let target = Cursor::missing();
    target.apply_update(&Cursor::new(ops));
    target.value().unwrap_or(Value::Null)
}

// ============================================================================
// Numeric operators
// ============================================================================

#[test]
fn inc_keeps_integers() {
    let out = apply(json!({"n": 1}), json!({"$inc": {"n": 2, "m": 5}}));
    assert_eq!(out, json!({"n": 3, "m": 5}));
}

#[test]
fn inc_with_float_operand_produces_float() {
    let out = apply(json!({"n": 1}), json!({"$inc": {"n": 0.5}}));
    assert_eq!(out, json!({"n": 1.5}));
}

#[test]
fn inc_coerces_numeric_strings() {
    let out = apply(json!({"n": "4"}), json!({"$inc": {"n": "6"}}));
    assert_eq!(out, json!({"n": 10}));
}

#[test]
fn inc_treats_non_numeric_values_as_zero() {
    let out = apply(json!({"n": "abc"}), json!({"$inc": {"n": true}}));
    assert_eq!(out, json!({"n": 0}));
}

#[test]
fn mul_scales_and_defaults_to_zero() {
    let out = apply(json!({"n": 3}), json!({"$mul": {"n": 4, "absent": 7}}));
    assert_eq!(out, json!({"n": 12, "absent": 0}));
}

#[test]
fn mul_non_numeric_operand_zeroes_accumulator() {
    let out = apply(json!({"n": 3}), json!({"$mul": {"n": "x"}}));
    assert_eq!(out, json!({"n": 0}));
}

#[test]
fn min_replaces_only_smaller() {
    let out = apply(json!({"a": 5, "b": 5}), json!({"$min": {"a": 3, "b": 8}}));
    assert_eq!(out, json!({"a": 3, "b": 5}));
}

#[test]
fn max_replaces_only_larger() {
    let out = apply(json!({"a": 5, "b": 5}), json!({"$max": {"a": 3, "b": 8}}));
    assert_eq!(out, json!({"a": 5, "b": 8}));
}

#[test]
fn min_and_max_treat_absent_fields_as_zero() {
    let out = apply(json!({}), json!({"$min": {"neg": -1, "pos": 1}}));
    assert_eq!(out, json!({"neg": -1}));
    let out = apply(json!({}), json!({"$max": {"neg": -1, "pos": 1}}));
    assert_eq!(out, json!({"pos": 1}));
}

#[test]
fn max_stores_numeric_form_of_string_operand() {
    let out = apply(json!({"a": 1}), json!({"$max": {"a": "9"}}));
    assert_eq!(out, json!({"a": 9}));
}

// ============================================================================
// $rename / $push
// ============================================================================

#[test]
fn rename_moves_value() {
    let out = apply(
        json!({"old": {"x": 1}, "keep": true}),
        json!({"$rename": {"old": "fresh.nested"}}),
    );
    assert_eq!(out, json!({"keep": true, "fresh": {"nested": {"x": 1}}}));
}

#[test]
fn rename_sees_earlier_operators() {
    let out = apply(json!({}), json!({"$rename": {"a": "b"}, "$set": {"a": 1}}));
    assert_eq!(out, json!({"b": 1}));
}

#[test]
fn rename_of_absent_field_erases_destination() {
    let out = apply(json!({"b": 1}), json!({"$rename": {"a": "b"}}));
    assert_eq!(out, json!({}));
}

#[test]
fn rename_with_non_string_target_is_skipped() {
    let out = apply(json!({"a": 1}), json!({"$rename": {"a": 5}}));
    assert_eq!(out, json!({"a": 1}));
}

#[test]
fn rename_to_empty_path_targets_empty_key() {
    let out = apply(json!({"a": 1}), json!({"$rename": {"a": ""}}));
    assert_eq!(out, json!({"": 1}));
}

#[test]
fn empty_path_operators_address_empty_key() {
    let out = apply(json!({"a": 1}), json!({"$set": {"": 5}}));
    assert_eq!(out, json!({"a": 1, "": 5}));

    let out = apply(json!({"a": 1, "": 2}), json!({"$unset": {"": 1}}));
    assert_eq!(out, json!({"a": 1}));
}

#[test]
fn push_appends_to_existing_array() {
    let out = apply(
        json!({"addresses": [{"city": "London"}]}),
        json!({"$push": {"addresses": {"city": "Moscow"}}}),
    );
    assert_eq!(
        out,
        json!({"addresses": [{"city": "London"}, {"city": "Moscow"}]})
    );
}

#[test]
fn push_ignores_non_arrays() {
    let out = apply(
        json!({"s": "text"}),
        json!({"$push": {"s": 1, "absent": 1}}),
    );
    assert_eq!(out, json!({"s": "text"}));
}

#[test]
fn push_appends_arrays_as_single_element() {
    let out = apply(json!({"a": [1]}), json!({"$push": {"a": [2, 3]}}));
    assert_eq!(out, json!({"a": [1, [2, 3]]}));
}

// ============================================================================
// Operator documents
// ============================================================================

#[test]
fn unknown_and_malformed_operators_are_ignored() {
    let out = apply(
        json!({"a": 1}),
        json!({"$pull": {"a": 1}, "$set": "not an object", "plain": 2}),
    );
    assert_eq!(out, json!({"a": 1}));
}

#[test]
fn apply_update_on_child_cursor_writes_through() {
    let root = Cursor::new(json!({"user": {"visits": 1}}));
    root.get("user")
        .apply_update(&Cursor::new(json!({"$inc": {"visits": 1}})));
    assert_eq!(root.select("user.visits").as_int(0), 2);
}

#[test]
fn apply_update_returns_target_for_chaining() {
    let root = Cursor::object();
    let n = root
        .apply_update(&Cursor::new(json!({"$set": {"n": 1}})))
        .apply_update(&Cursor::new(json!({"$inc": {"n": 1}})))
        .get("n")
        .as_int(0);
    assert_eq!(n, 2);
}

#[test]
fn partial_effects_are_kept() {
    // $set lands before $push silently skips the scalar target.
    let out = apply(
        json!({"a": 1}),
        json!({"$set": {"b": 2}, "$push": {"a": 3}}),
    );
    assert_eq!(out, json!({"a": 1, "b": 2}));
}
