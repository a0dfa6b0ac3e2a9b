//! Dotted paths.
//!
//! A path such as `"addresses.0.street"` is split on `.` into segments. A
//! segment made only of ASCII digits addresses an array index, any other
//! segment addresses an object key. Empty segments, including the whole
//! empty path, address the key `""`.

use std::fmt;

/// One step of a path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl Segment {
    /// Classify a single textual segment.
    pub fn parse(segment: &str) -> Self {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = segment.parse() {
                return Segment::Index(index);
            }
        }
        Segment::Key(segment.to_string())
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

impl From<u32> for Segment {
    fn from(index: u32) -> Self {
        Segment::Index(index as usize)
    }
}

/// Negative numbers are not positions; they address the key with the same
/// text, just like `"-1"` inside a dotted path.
impl From<i32> for Segment {
    fn from(index: i32) -> Self {
        match usize::try_from(index) {
            Ok(index) => Segment::Index(index),
            Err(_) => Segment::Key(index.to_string()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Split a dotted path into ordered segments.
///
/// ```
/// use jsonview_core::path::{split, Segment};
///
/// assert_eq!(
///     split("a.0.b"),
///     vec![Segment::Key("a".into()), Segment::Index(0), Segment::Key("b".into())]
/// );
/// assert_eq!(split(""), vec![Segment::Key(String::new())]);
/// ```
pub fn split(path: &str) -> Vec<Segment> {
    path.split('.').map(Segment::parse).collect()
}

/// Join segments back into dotted form.
pub fn join(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(Segment::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// Extend an accumulated field path with one more key.
///
/// Used by the reshaping walks, where array positions never appear in the
/// accumulated path.
pub(crate) fn extend(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}
