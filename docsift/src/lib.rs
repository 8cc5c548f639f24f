#![allow(
    dead_code,
    unused_imports,
)]
//! # docsift - Query Matching for Schemaless Documents
//!
//! docsift decides which documents of an in-memory collection satisfy a
//! declarative filter expression, and shapes the matches with sorting,
//! skip and limit. It is the query layer of a document store without the
//! store: no persistence, no indexes, no writes. Every query is a full scan.
//!
//! ## Key Features
//!
//! - **Filter expressions**: `$and`, `$or`, `$lt`, `$gt`, `$lte`, `$gte`,
//!   literal equality and structural equality on arrays and documents
//! - **Nested fields**: `address.city`, `tags.0`, with a configurable separator
//! - **Result shaping**: multi-key sort, skip, limit and find-one
//! - **Fluent API**: build the same filters in code with `field("age").gt(18)`
//! - **JSON transport**: filters, options and documents as `serde_json` values
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use docsift::doc;
//! use docsift::collection::{find_many, find_one, FindOptions};
//!
//! let docs = vec![
//!     doc! { a: 1, b: 2 },
//!     doc! { a: 1, b: 1 },
//!     doc! { a: 2, b: 1 },
//! ];
//!
//! let matches = find_many(&doc! { a: 1 }, &FindOptions::new(), &docs)?;
//! assert_eq!(matches.len(), 2);
//!
//! let options = FindOptions::from_document(&doc! { sort: { b: 1 }, limit: 1 })?;
//! let lowest_b = find_many(&doc! {}, &options, &docs)?;
//!
//! let first = find_one(&doc! { "$or": [{ a: 2 }, { b: 2 }] }, &docs)?;
//! ```
//!
//! ## Module Organization
//!
//! - [`collection`] - Documents, collections, find options and the read pipeline
//! - [`common`] - Values, sort orders and comparison primitives
//! - [`config`] - Query configuration
//! - [`errors`] - Error types and result definitions
//! - [`filter`] - Filter expression parser and filter providers

pub mod collection;
pub mod common;
pub mod config;
pub mod errors;
pub mod filter;

pub use collection::{find_many, find_one, Document, FindOptions, ReadOperations};
pub use common::{SortOrder, Value};
pub use config::QueryConfig;
pub use errors::{DocSiftError, DocSiftResult, ErrorKind};
