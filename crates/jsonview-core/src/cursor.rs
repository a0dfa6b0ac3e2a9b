//! Cursors: addressable, mutable views into a shared JSON document.
//!
//! A [`Cursor`] is a handle on one location of a document. Navigation with
//! [`Cursor::get`] or [`Cursor::select`] never fails; it yields a cursor whose
//! content may be Missing. Writes through any cursor land in the shared
//! document, creating or replacing intermediate containers on the way.
//!
//! ```
//! use jsonview_core::Cursor;
//!
//! let root = Cursor::object();
//! root.get("a").get(1).set("x");
//! assert_eq!(root.to_string(), r#"{"a":[null,"x"]}"#);
//! ```
//!
//! # Write-back
//!
//! Every cursor remembers the chain of segments that leads to it from the
//! document root; the prefix of that chain is its parent. A write on a
//! non-root cursor is delegated to the parent's field or index write, which
//! may in turn have to turn the parent into a container and so delegate to
//! the grandparent, up to the root. Cursors never cache content: every read
//! resolves the chain against the document, so a cursor always observes
//! exactly what its parent stored, including padding and container
//! replacement performed on the way.
//!
//! # Threading
//!
//! A document and its cursors are single-threaded (`!Send`). To hand a
//! document to another thread, take a deep copy with [`Cursor::value`].

use crate::error::{JsonError, Result};
use crate::path::{self, Segment};
use crate::value::{self, IntoJson};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use tracing::{debug, warn};

type Document = Rc<RefCell<Option<Value>>>;

/// A view of one location in a JSON document.
///
/// Cloning a cursor yields another view of the same location. Use
/// [`Cursor::deep_clone`] for an independent copy.
#[derive(Clone)]
pub struct Cursor {
    doc: Document,
    path: Vec<Segment>,
}

impl Cursor {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// A new root over the given content.
    pub fn new(content: impl IntoJson) -> Self {
        Self {
            doc: Rc::new(RefCell::new(content.into_json())),
            path: Vec::new(),
        }
    }

    /// A root that does not exist yet. Writing into it creates the container.
    pub fn missing() -> Self {
        Self::new(crate::Missing)
    }

    /// A root holding an empty object.
    pub fn object() -> Self {
        Self::new(Value::Object(Map::new()))
    }

    /// A root holding an empty array.
    pub fn array() -> Self {
        Self::new(Value::Array(Vec::new()))
    }

    /// A root object with a single field.
    pub fn with(key: &str, content: impl IntoJson) -> Self {
        let root = Self::object();
        root.set_at(key, content);
        root
    }

    /// Parse JSON text into a new root.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(JsonError::Parse)?;
        Ok(Self::new(value))
    }

    /// Map any serializable value into a new root.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(JsonError::Binding)?;
        Ok(Self::new(value))
    }

    /// A detached root over a deep copy of this cursor's content.
    pub fn deep_clone(&self) -> Self {
        Self::new(self.value())
    }

    fn at_path(&self, path: Vec<Segment>) -> Self {
        Self {
            doc: Rc::clone(&self.doc),
            path,
        }
    }

    // ------------------------------------------------------------------
    // Reading
    // ------------------------------------------------------------------

    /// Run `f` against this cursor's current content (`None` when Missing).
    ///
    /// The document stays borrowed while `f` runs, so `f` must not write
    /// through any cursor of the same document.
    pub(crate) fn with_content<R>(&self, f: impl FnOnce(Option<&Value>) -> R) -> R {
        let doc = self.doc.borrow();
        f(resolve((*doc).as_ref(), &self.path))
    }

    /// A deep copy of the current content, `None` when Missing.
    pub fn value(&self) -> Option<Value> {
        self.with_content(|v| v.cloned())
    }

    /// The segments leading from the document root to this location.
    pub fn path(&self) -> &[Segment] {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// The cursor one step closer to the root, `None` for a root.
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.path.split_last()?;
        Some(self.at_path(parent.to_vec()))
    }

    pub fn is_object(&self) -> bool {
        self.with_content(|v| matches!(v, Some(Value::Object(_))))
    }

    pub fn is_array(&self) -> bool {
        self.with_content(|v| matches!(v, Some(Value::Array(_))))
    }

    pub fn is_string(&self) -> bool {
        self.with_content(|v| matches!(v, Some(Value::String(_))))
    }

    pub fn is_number(&self) -> bool {
        self.with_content(|v| matches!(v, Some(Value::Number(_))))
    }

    pub fn is_boolean(&self) -> bool {
        self.with_content(|v| matches!(v, Some(Value::Bool(_))))
    }

    pub fn is_null(&self) -> bool {
        self.with_content(|v| matches!(v, Some(Value::Null)))
    }

    pub fn is_missing(&self) -> bool {
        self.with_content(|v| v.is_none())
    }

    /// Array length; 0 for anything that is not an array.
    pub fn size(&self) -> usize {
        self.with_content(|v| match v {
            Some(Value::Array(arr)) => arr.len(),
            _ => 0,
        })
    }

    /// `true` for empty containers, empty strings, Null, Missing and every
    /// non-string scalar.
    pub fn is_empty(&self) -> bool {
        self.with_content(value::is_empty)
    }

    /// Object keys in document order; empty for non-objects.
    pub fn keys(&self) -> Vec<String> {
        self.with_content(|v| match v {
            Some(Value::Object(map)) => map.keys().cloned().collect(),
            _ => Vec::new(),
        })
    }

    /// `(key, child cursor)` pairs in document order; empty for non-objects.
    pub fn fields(&self) -> Vec<(String, Cursor)> {
        self.keys()
            .into_iter()
            .map(|key| {
                let child = self.get(key.as_str());
                (key, child)
            })
            .collect()
    }

    /// Cursors over the elements of an array; empty for non-arrays.
    pub fn iter(&self) -> impl Iterator<Item = Cursor> + '_ {
        (0..self.size()).map(move |i| self.get(i))
    }

    pub fn as_int(&self, default: i32) -> i32 {
        self.with_content(|v| value::as_int(v, default))
    }

    pub fn as_long(&self, default: i64) -> i64 {
        self.with_content(|v| value::as_long(v, default))
    }

    pub fn as_number(&self, default: f64) -> f64 {
        self.with_content(|v| value::as_number(v, default))
    }

    /// String content, numbers rendered as JSON text, `""` otherwise.
    pub fn as_string(&self) -> String {
        self.as_string_or("")
    }

    pub fn as_string_or(&self, default: &str) -> String {
        self.with_content(|v| value::as_string(v, default))
    }

    pub fn as_bool(&self) -> bool {
        self.as_bool_or(false)
    }

    pub fn as_bool_or(&self, default: bool) -> bool {
        self.with_content(|v| value::as_bool(v, default))
    }

    /// Map the content onto a Rust type. Missing binds like Null.
    pub fn bind<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self.value().unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(JsonError::Binding)
    }

    /// Overlay this cursor's top-level fields onto `target`, keeping every
    /// field of `target` that this document does not mention.
    pub fn update_object<T: Serialize + DeserializeOwned>(&self, target: &mut T) -> Result<()> {
        let base = Self::from_serialize(target)?;
        for (key, child) in self.fields() {
            base.set_at(key.as_str(), &child);
        }
        *target = base.bind()?;
        Ok(())
    }

    /// Pretty-printed JSON; the empty string when Missing.
    pub fn to_pretty(&self) -> String {
        self.with_content(|v| v.map(|v| format!("{v:#}")).unwrap_or_default())
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// The child at `segment`. Absent keys, out-of-range indices and
    /// navigation into scalars yield a Missing cursor that can still be
    /// written through.
    pub fn get(&self, segment: impl Into<Segment>) -> Cursor {
        let mut path = self.path.clone();
        path.push(segment.into());
        self.at_path(path)
    }

    /// Follow a dotted path, e.g. `"addresses.0.street"`.
    ///
    /// Equivalent to chaining [`Cursor::get`] over the path's segments.
    pub fn select(&self, dotted: &str) -> Cursor {
        self.select_segments(&path::split(dotted))
    }

    pub fn select_segments(&self, segments: &[Segment]) -> Cursor {
        segments
            .iter()
            .fold(self.clone(), |cursor, segment| cursor.get(segment.clone()))
    }

    // ------------------------------------------------------------------
    // Writing
    // ------------------------------------------------------------------

    /// Replace this location's content.
    ///
    /// Writing [`Missing`](crate::Missing) removes the location from its
    /// parent (field deletion, or element removal for array slots).
    pub fn set(&self, content: impl IntoJson) -> &Self {
        self.update_element(content.into_json());
        self
    }

    /// Write the child at `segment`.
    ///
    /// A key write turns this location into an empty object first unless it
    /// already is one; an index write does the same with an empty array and
    /// pads with nulls up to the index.
    pub fn set_at(&self, segment: impl Into<Segment>, content: impl IntoJson) -> &Self {
        self.write_child(&segment.into(), content.into_json());
        self
    }

    /// Map `value` through serde and write it at `key`.
    pub fn set_serialized<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<&Self> {
        let value = serde_json::to_value(value).map_err(JsonError::Binding)?;
        Ok(self.set_at(key, value))
    }

    /// Append to an array. A non-array location becomes a one-element array.
    /// Appending Missing leaves the location untouched.
    pub fn add(&self, content: impl IntoJson) -> &Self {
        let Some(content) = content.into_json() else {
            return self;
        };
        let index = if self.is_array() { self.size() } else { 0 };
        self.set_index(index, Some(content));
        self
    }

    fn write_child(&self, segment: &Segment, content: Option<Value>) {
        match segment {
            Segment::Key(key) => self.set_field(key, content),
            Segment::Index(index) => self.set_index(*index, content),
        }
    }

    fn set_field(&self, key: &str, content: Option<Value>) {
        if !self.is_object() {
            debug!(path = %path::join(&self.path), "replacing location with an empty object");
            self.update_element(Some(Value::Object(Map::new())));
        }
        let mut doc = self.doc.borrow_mut();
        if let Some(Value::Object(map)) = resolve_mut(&mut doc, &self.path) {
            match content {
                Some(value) => {
                    map.insert(key.to_string(), value);
                }
                None => {
                    map.shift_remove(key);
                }
            }
        }
    }

    fn set_index(&self, index: usize, content: Option<Value>) {
        if !self.is_array() {
            debug!(path = %path::join(&self.path), "replacing location with an empty array");
            self.update_element(Some(Value::Array(Vec::new())));
        }
        let mut doc = self.doc.borrow_mut();
        if let Some(Value::Array(arr)) = resolve_mut(&mut doc, &self.path) {
            match content {
                Some(value) if index < arr.len() => arr[index] = value,
                Some(value) => {
                    let padding = index - arr.len();
                    if padding.checked_add(1).is_none_or(|n| arr.try_reserve(n).is_err()) {
                        warn!(
                            path = %path::join(&self.path),
                            index,
                            "cannot pad array up to index, skipping write"
                        );
                        return;
                    }
                    arr.resize(index, Value::Null);
                    arr.push(value);
                }
                None if index < arr.len() => {
                    arr.remove(index);
                }
                None => {}
            }
        }
    }

    /// Store `content` at this location by delegating to the parent's
    /// field or index write, recursively up to the root.
    fn update_element(&self, content: Option<Value>) {
        match self.path.split_last() {
            None => *self.doc.borrow_mut() = content,
            Some((segment, parent)) => {
                self.at_path(parent.to_vec()).write_child(segment, content);
            }
        }
    }
}

fn resolve<'a>(root: Option<&'a Value>, path: &[Segment]) -> Option<&'a Value> {
    path.iter().try_fold(root?, |current, segment| match (segment, current) {
        (Segment::Key(key), Value::Object(map)) => map.get(key),
        (Segment::Index(index), Value::Array(arr)) => arr.get(*index),
        _ => None,
    })
}

fn resolve_mut<'a>(root: &'a mut Option<Value>, path: &[Segment]) -> Option<&'a mut Value> {
    let mut current = root.as_mut()?;
    for segment in path {
        current = match (segment, current) {
            (Segment::Key(key), Value::Object(map)) => map.get_mut(key)?,
            (Segment::Index(index), Value::Array(arr)) => arr.get_mut(*index)?,
            _ => return None,
        };
    }
    Some(current)
}

impl IntoJson for &Cursor {
    fn into_json(self) -> Option<Value> {
        self.value()
    }
}

impl IntoJson for Cursor {
    fn into_json(self) -> Option<Value> {
        self.value()
    }
}

impl From<Value> for Cursor {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::missing()
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        self.with_content(|a| other.with_content(|b| a == b))
    }
}

impl Eq for Cursor {}

impl Hash for Cursor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.with_content(|v| value::hash_content(v, state));
    }
}

/// Compact JSON; Missing renders as the empty string.
impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_content(|v| match v {
            Some(v) => write!(f, "{v}"),
            None => Ok(()),
        })
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_content(|v| {
            f.debug_struct("Cursor")
                .field("path", &path::join(&self.path))
                .field("value", &v)
                .finish()
        })
    }
}

impl Serialize for Cursor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.with_content(|v| match v {
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_unit(),
        })
    }
}

impl<'de> Deserialize<'de> for Cursor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Cursor::new)
    }
}
