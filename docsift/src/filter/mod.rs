//! Query filters for selecting documents.
//!
//! Filters are built either by parsing a filter expression document or with
//! the fluent API. Both produce the same [Filter] tree.
//!
//! # Filter expressions
//!
//! ```rust,ignore
//! use docsift::doc;
//! use docsift::filter::parse_filter;
//!
//! // implicit AND of two field conditions
//! let expression = doc! { status: "active", age: { "$gte": 18, "$lt": 65 } };
//!
//! // explicit combinators
//! let expression = doc! { "$or": [{ a: 2 }, { b: 2 }] };
//! let filter = parse_filter(&expression, &config)?;
//! ```
//!
//! # Fluent API
//!
//! ```rust,ignore
//! use docsift::filter::{field, or};
//!
//! let filter = field("age").gt(30).and(field("status").eq("active"));
//! let filter = or(vec![field("a").eq(2), field("b").eq(2)]);
//! ```
//!
//! # Supported Operators
//!
//! - **Logical**: `$and`, `$or`
//! - **Comparison**: `$lt`, `$gt`, `$lte`, `$gte`
//! - **Equality**: a literal condition, compared structurally for arrays and documents
//!
//! `$ne`, `$nin`, `$not`, `$nor`, `$exists`, `$type` and `$in` are reserved and
//! rejected as not implemented.

mod filter;
mod fluent;
mod operators;
mod parser;

mod basic_filters;
mod logical_filters;
mod range_filters;

pub(crate) use basic_filters::*;
pub use filter::*;
pub use fluent::*;
pub(crate) use logical_filters::*;
pub use operators::*;
pub use parser::*;
pub(crate) use range_filters::*;
