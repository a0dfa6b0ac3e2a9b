//! Conditional fallbacks on a cursor.
//!
//! ```
//! use jsonview_core::Cursor;
//! use serde_json::json;
//!
//! let doc = Cursor::new(json!({"tags": []}));
//! let tags = doc
//!     .get("tags")
//!     .check(|tags| tags.size() > 0)
//!     .or_else_map(|tags| {
//!         tags.add("default");
//!         tags.clone()
//!     });
//! assert_eq!(tags.size(), 1);
//! assert_eq!(doc.value().unwrap(), json!({"tags": ["default"]}));
//! ```

use crate::cursor::Cursor;
use crate::error::{JsonError, Result};
use crate::value::IntoJson;

/// A pending predicate over a cursor, resolved by one of the `or_else*`
/// methods.
#[must_use = "a check does nothing until one of its or_else methods is called"]
pub struct Check<P> {
    cursor: Cursor,
    predicate: P,
}

impl Cursor {
    pub fn check<P>(&self, predicate: P) -> Check<P>
    where
        P: FnOnce(&Cursor) -> bool,
    {
        Check {
            cursor: self.clone(),
            predicate,
        }
    }
}

impl<P> Check<P>
where
    P: FnOnce(&Cursor) -> bool,
{
    fn passes(self) -> (bool, Cursor) {
        let passed = (self.predicate)(&self.cursor);
        (passed, self.cursor)
    }

    /// The cursor when the check passes, otherwise a new root over `fallback`.
    pub fn or_else(self, fallback: impl IntoJson) -> Cursor {
        match self.passes() {
            (true, cursor) => cursor,
            (false, _) => Cursor::new(fallback),
        }
    }

    /// Like [`Check::or_else`], computing the fallback only when needed.
    pub fn or_else_get<V: IntoJson>(self, fallback: impl FnOnce() -> V) -> Cursor {
        match self.passes() {
            (true, cursor) => cursor,
            (false, _) => Cursor::new(fallback()),
        }
    }

    /// Like [`Check::or_else`], deriving the fallback from the cursor itself.
    pub fn or_else_map(self, fallback: impl FnOnce(&Cursor) -> Cursor) -> Cursor {
        match self.passes() {
            (true, cursor) => cursor,
            (false, cursor) => fallback(&cursor),
        }
    }

    /// The cursor when the check passes, otherwise [`JsonError::Check`].
    pub fn or_else_err(self, message: impl Into<String>) -> Result<Cursor> {
        match self.passes() {
            (true, cursor) => Ok(cursor),
            (false, _) => Err(JsonError::Check(message.into())),
        }
    }
}
