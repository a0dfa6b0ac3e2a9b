//! Recursive reshaping of documents.
//!
//! All walks build a new document and leave the source untouched. Paths
//! handed to callbacks are dotted field paths: object keys extend the path,
//! array positions do not, so every element of `items` is reported under
//! `items` and a field `id` inside them under `items.id`.
//!
//! Returning `None` (Missing) from a [`Cursor::map`] callback drops the
//! element or field from the output. Results are written into a Missing root,
//! so a container whose children were all dropped, or that had none, maps to
//! Missing and disappears from its parent as well.

use crate::case::FieldCase;
use crate::cursor::Cursor;
use crate::path;
use serde_json::{Map, Value};
use std::collections::HashSet;

impl Cursor {
    /// Rebuild the document, passing every leaf (recursive) or every direct
    /// child (non-recursive) through `f`.
    ///
    /// A scalar, Null or Missing source is passed to `f` itself.
    pub fn map<F>(&self, recursive: bool, mut f: F) -> Cursor
    where
        F: FnMut(&str, &Cursor) -> Option<Value>,
    {
        self.map_at(&mut f, recursive, "")
    }

    fn map_at(
        &self,
        f: &mut dyn FnMut(&str, &Cursor) -> Option<Value>,
        recursive: bool,
        path: &str,
    ) -> Cursor {
        if self.is_array() {
            let out = Cursor::missing();
            for element in self.iter() {
                let mapped = if recursive {
                    element.map_at(f, true, path)
                } else {
                    Cursor::new(f(path, &element))
                };
                out.add(&mapped);
            }
            return out;
        }
        if self.is_object() {
            let out = Cursor::missing();
            for (key, child) in self.fields() {
                let mapped = if recursive {
                    child.map_at(f, true, &path::extend(path, &key))
                } else {
                    Cursor::new(f(path, &child))
                };
                if !mapped.is_missing() {
                    out.set_at(key.as_str(), &mapped);
                }
            }
            return out;
        }
        Cursor::new(f(path, self))
    }

    /// Keep only the leaves for which `keep` returns `true`.
    pub fn filter_fields<P>(&self, mut keep: P) -> Cursor
    where
        P: FnMut(&str, &Cursor) -> bool,
    {
        self.map(true, |path, value| {
            if keep(path, value) {
                value.value()
            } else {
                None
            }
        })
    }

    /// Keep only the direct children for which `keep` returns `true`.
    /// The predicate sees the unextended (empty) path.
    pub fn filter_fields_shallow<P>(&self, mut keep: P) -> Cursor
    where
        P: FnMut(&str, &Cursor) -> bool,
    {
        self.map(false, |path, value| {
            if keep(path, value) {
                value.value()
            } else {
                None
            }
        })
    }

    /// Keep only the leaves whose full field path is listed in `fields`.
    ///
    /// `fields` is comma-separated; whitespace around names is ignored.
    ///
    /// ```
    /// use jsonview_core::Cursor;
    /// use serde_json::json;
    ///
    /// let doc = Cursor::new(json!({"a": 1, "b": [{"a": 1, "b": 1}], "c": 3}));
    /// let kept = doc.filter_field_names("a, b.b");
    /// assert_eq!(kept.value().unwrap(), json!({"a": 1, "b": [{"b": 1}]}));
    /// ```
    pub fn filter_field_names(&self, fields: &str) -> Cursor {
        let allowed: HashSet<&str> = fields.split(',').map(str::trim).collect();
        self.filter_fields(|path, _| allowed.contains(path))
    }

    /// Drop every Null leaf.
    pub fn remove_nulls(&self) -> Cursor {
        self.filter_fields(|_, value| !value.is_null())
    }

    /// Rename every object key, at any depth, through `f`.
    ///
    /// Unlike [`Cursor::map`] this keeps empty containers.
    pub fn map_field_names<F>(&self, mut f: F) -> Cursor
    where
        F: FnMut(&str) -> String,
    {
        Cursor::new(self.value().map(|value| rename_keys(value, &mut f)))
    }

    pub fn to_field_case(&self, case: FieldCase) -> Cursor {
        self.map_field_names(|name| case.apply(name))
    }

    pub fn to_camel_case(&self) -> Cursor {
        self.to_field_case(FieldCase::Camel)
    }

    pub fn to_lower_camel_case(&self) -> Cursor {
        self.to_field_case(FieldCase::LowerCamel)
    }

    pub fn to_snake_case(&self) -> Cursor {
        self.to_field_case(FieldCase::Snake)
    }

    pub fn to_kebab_case(&self) -> Cursor {
        self.to_field_case(FieldCase::Kebab)
    }

    pub fn to_train_case(&self) -> Cursor {
        self.to_field_case(FieldCase::Train)
    }

    pub fn to_screaming_snake_case(&self) -> Cursor {
        self.to_field_case(FieldCase::ScreamingSnake)
    }
}

fn rename_keys(value: Value, f: &mut dyn FnMut(&str) -> String) -> Value {
    match value {
        Value::Array(arr) => Value::Array(arr.into_iter().map(|v| rename_keys(v, f)).collect()),
        Value::Object(map) => {
            let mut renamed = Map::new();
            for (key, child) in map {
                renamed.insert(f(&key), rename_keys(child, f));
            }
            Value::Object(renamed)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rename_keys_walks_arrays() {
        let renamed = rename_keys(json!([{"a": {"b": 1}}, 2]), &mut |k| k.to_uppercase());
        assert_eq!(renamed, json!([{"A": {"B": 1}}, 2]));
    }

    #[test]
    fn rename_keys_later_collision_wins() {
        let renamed = rename_keys(json!({"a_b": 1, "aB": 2}), &mut |k| {
            FieldCase::Snake.apply(k)
        });
        assert_eq!(renamed, json!({"a_b": 2}));
    }
}
