//! Documents, collections and the read pipeline.
//!
//! # Documents
//!
//! A `Document` is an insertion-ordered map from field names to `Value`s.
//! Nested fields can be addressed with a configurable separator
//! (default: ".").
//!
//! ```rust,ignore
//! use docsift::doc;
//!
//! let doc = doc! {
//!     name: "Alice",
//!     address: { city: "New York" },
//!     tags: ["admin", "ops"],
//! };
//! ```
//!
//! # Collections
//!
//! Any type implementing [DocumentCollection] can be queried: slices and
//! vectors of documents, and the values of `IndexMap`, `BTreeMap` or
//! `HashMap`.
//!
//! ```rust,ignore
//! use docsift::collection::{find_many, find_one, FindOptions};
//!
//! let adults = find_many(&doc! { age: { "$gte": 18 } }, &FindOptions::new(), &users)?;
//! let alice = find_one(&doc! { name: "Alice" }, &users)?;
//! ```

#[allow(clippy::module_inception)]
mod collection;
mod document;
mod find_options;
pub(crate) mod operation;

pub use collection::*;
pub use document::*;
pub use find_options::*;
pub use operation::*;
