use crate::collection::Document;
use crate::common::{Value, DEFAULT_FIELD_SEPARATOR};
use crate::errors::{DocSiftError, DocSiftResult, ErrorKind};
use std::any::Any;
use std::fmt::Display;
use std::ops::Deref;
use std::sync::Arc;

use super::AllFilter;
use super::AndFilter;
use super::OrFilter;

/// Trait for implementing filters.
///
/// A `FilterProvider` decides whether a single document satisfies a
/// condition. Providers are immutable once built and may be evaluated from
/// several threads at once.
pub trait FilterProvider: Any + Send + Sync + Display {
    /// Applies the filter to a document and returns whether it matches.
    ///
    /// # Arguments
    ///
    /// * `entry` - The document to evaluate
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the document matches the filter, `Ok(false)` otherwise.
    /// An `Err` aborts the query the filter is part of.
    fn apply(&self, entry: &Document) -> DocSiftResult<bool>;

    /// Checks if this filter operates on a specific field.
    #[inline]
    fn has_field(&self) -> bool {
        false
    }

    /// Gets the field name this filter operates on.
    fn get_field_name(&self) -> DocSiftResult<String> {
        log::error!("Filter {} does not have field name", self);
        Err(DocSiftError::new(
            "Filter does not have field name",
            ErrorKind::InvalidQuery,
        ))
    }

    /// Gets the operand this filter compares the field against.
    fn get_field_value(&self) -> DocSiftResult<Option<Value>> {
        log::debug!("Filter {} does not have field value", self);
        Err(DocSiftError::new(
            "Filter does not have field value",
            ErrorKind::InvalidQuery,
        ))
    }

    /// Gets the child filters of a logical filter.
    fn logical_filters(&self) -> DocSiftResult<Vec<Filter>> {
        Err(DocSiftError::new(
            "Filter is not a logical filter",
            ErrorKind::InvalidQuery,
        ))
    }

    fn as_any(&self) -> &dyn Any;
}

/// A parsed, ready-to-evaluate filter.
///
/// `Filter` wraps a [FilterProvider] behind an `Arc`, so cloning is cheap and
/// a single parsed filter can be shared across threads. Filters are built
/// either by parsing a filter expression with [super::parse_filter] or with
/// the fluent API ([super::field], [and], [or], [all]).
///
/// # Filter Composition
///
/// - `and(other)` - Combines with another filter using logical AND
/// - `or(other)` - Combines with another filter using logical OR
#[derive(Clone)]
pub struct Filter {
    inner: Arc<dyn FilterProvider>,
}

impl Filter {
    /// Creates a new filter from a filter provider implementation.
    pub fn new<T: FilterProvider + 'static>(inner: T) -> Self {
        Filter { inner: Arc::new(inner) }
    }

    /// Combines this filter with another using logical AND.
    ///
    /// `self` is evaluated first.
    pub fn and(&self, filter: Filter) -> Self {
        Filter::new(AndFilter::new(vec![self.clone(), filter]))
    }

    /// Combines this filter with another using logical OR.
    ///
    /// `self` is evaluated first.
    pub fn or(&self, filter: Filter) -> Self {
        Filter::new(OrFilter::new(vec![self.clone(), filter]))
    }
}

impl Display for Filter {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::fmt::Debug for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Filter{}", self.inner)
    }
}

impl Deref for Filter {
    type Target = Arc<dyn FilterProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// A field key together with the separator used to resolve it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FieldPath {
    name: String,
    separator: String,
}

impl FieldPath {
    pub(crate) fn new(name: String, separator: &str) -> Self {
        FieldPath {
            name,
            separator: separator.to_string(),
        }
    }

    #[inline]
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Looks the field up in `entry`. `None` means the field is absent.
    #[inline]
    pub(crate) fn resolve<'a>(&self, entry: &'a Document) -> Option<&'a Value> {
        entry.get_path(&self.name, &self.separator)
    }
}

impl From<&str> for FieldPath {
    fn from(name: &str) -> Self {
        FieldPath::new(name.to_string(), DEFAULT_FIELD_SEPARATOR)
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Creates a filter that matches all documents.
pub fn all() -> Filter {
    Filter::new(AllFilter {})
}

/// Combines multiple filters using logical AND.
///
/// Filters are evaluated in order and evaluation stops at the first one that
/// does not match. An empty list matches every document.
pub fn and(filters: Vec<Filter>) -> Filter {
    Filter::new(AndFilter::new(filters))
}

/// Combines multiple filters using logical OR.
///
/// Filters are evaluated in order and evaluation stops at the first one that
/// matches. An empty list matches no document.
pub fn or(filters: Vec<Filter>) -> Filter {
    Filter::new(OrFilter::new(filters))
}

pub(crate) fn is_all_filter(filter: &Filter) -> bool {
    filter.as_any().is::<AllFilter>()
}

pub(crate) fn is_and_filter(filter: &Filter) -> bool {
    filter.as_any().is::<AndFilter>()
}

pub(crate) fn is_or_filter(filter: &Filter) -> bool {
    filter.as_any().is::<OrFilter>()
}
