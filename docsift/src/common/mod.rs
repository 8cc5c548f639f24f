//! Common types shared across docsift: values, sort orders and the
//! comparison primitives used by filters and the sorter.

mod comparator;
mod sort_order;
pub(crate) mod stream;
mod value;

pub use comparator::*;
pub use sort_order::*;
pub use value::*;

/// Default separator for addressing nested fields, e.g. `address.city`.
pub const DEFAULT_FIELD_SEPARATOR: &str = ".";
