//! # jsonview-core
//!
//! Navigate and mutate JSON documents through lightweight cursor views.
//!
//! A [`Cursor`] addresses one location of a shared document. Chained
//! navigation never fails and writes through any cursor land in the shared
//! document, turning scalars or absent locations into containers on demand:
//!
//! ```rust
//! use jsonview_core::Cursor;
//!
//! let doc = Cursor::parse(r#"{"user":{"name":"Ada"}}"#).unwrap();
//! assert!(doc.select("user.email").is_missing());
//!
//! doc.select("user.roles").add("admin");
//! doc.get("user").set_at("active", true);
//! assert_eq!(
//!     doc.to_string(),
//!     r#"{"user":{"name":"Ada","roles":["admin"],"active":true}}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`cursor`]: the [`Cursor`] view (navigation, coercion and write-back)
//! - [`path`]: dotted path splitting
//! - [`update`]: `$set`/`$inc`/`$push`/... operator documents
//! - [`transform`]: `map`, `filter_fields`, `map_field_names`
//! - [`case`]: field-name casing presets
//! - [`check`]: conditional fallbacks
//! - [`value`]: conversions between native values and document content
//! - [`error`]: error types for parsing and binding

pub mod case;
pub mod check;
pub mod cursor;
pub mod error;
pub mod path;
pub mod transform;
pub mod update;
pub mod value;

pub use case::{change_field_name_case, FieldCase};
pub use check::Check;
pub use cursor::Cursor;
pub use error::JsonError;
pub use path::Segment;
pub use update::Operator;
pub use value::{IntoJson, Missing};
