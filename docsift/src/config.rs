//! Configuration for query evaluation.

use crate::common::DEFAULT_FIELD_SEPARATOR;
use crate::errors::{DocSiftError, DocSiftResult, ErrorKind};
use std::sync::Arc;

/// Settings that change how filters are evaluated.
///
/// # Examples
///
/// ```rust,ignore
/// use docsift::config::QueryConfig;
///
/// let config = QueryConfig::builder()
///     .field_separator("|")
///     .strict_comparison(true)
///     .build()?;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct QueryConfig {
    /// The pointer to implementation. Uses Arc for cheap cloning and thread safety.
    inner: Arc<QueryConfigInner>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryConfig {
    /// Creates a configuration with `.` as the field separator and lenient
    /// comparisons.
    pub fn new() -> Self {
        QueryConfig {
            inner: Arc::new(QueryConfigInner {
                field_separator: DEFAULT_FIELD_SEPARATOR.to_string(),
                strict_comparison: false,
            }),
        }
    }

    pub fn builder() -> QueryConfigBuilder {
        QueryConfigBuilder::new()
    }

    /// Returns the separator used to address nested fields.
    pub fn field_separator(&self) -> &str {
        &self.inner.field_separator
    }

    /// Returns `true` if range comparisons between incomparable types fail
    /// with [ErrorKind::TypeMismatch] instead of evaluating to `false`.
    pub fn strict_comparison(&self) -> bool {
        self.inner.strict_comparison
    }
}

#[derive(Debug, PartialEq)]
struct QueryConfigInner {
    field_separator: String,
    strict_comparison: bool,
}

/// Builder for [QueryConfig].
///
/// The first invalid setting is captured and returned from
/// [QueryConfigBuilder::build]; later settings are ignored.
#[derive(Default)]
pub struct QueryConfigBuilder {
    error: Option<DocSiftError>,
    field_separator: Option<String>,
    strict_comparison: bool,
}

impl QueryConfigBuilder {
    pub fn new() -> Self {
        QueryConfigBuilder {
            error: None,
            field_separator: None,
            strict_comparison: false,
        }
    }

    /// Sets the separator for nested document fields.
    ///
    /// With `.` as separator, the field key `user.name` addresses the `name`
    /// field inside a nested `user` document. An empty separator is an error.
    pub fn field_separator(mut self, field_separator: &str) -> Self {
        if self.error.is_none() {
            if field_separator.is_empty() {
                log::error!("Field separator cannot be empty");
                self.error = Some(DocSiftError::new(
                    "Field separator cannot be empty",
                    ErrorKind::InvalidConfig,
                ));
            } else {
                self.field_separator = Some(field_separator.to_string());
            }
        }
        self
    }

    /// Makes range comparisons between incomparable types fail instead of
    /// evaluating to `false`.
    pub fn strict_comparison(mut self, strict: bool) -> Self {
        self.strict_comparison = strict;
        self
    }

    pub fn build(self) -> DocSiftResult<QueryConfig> {
        if let Some(error) = self.error {
            return Err(error);
        }

        Ok(QueryConfig {
            inner: Arc::new(QueryConfigInner {
                field_separator: self
                    .field_separator
                    .unwrap_or_else(|| DEFAULT_FIELD_SEPARATOR.to_string()),
                strict_comparison: self.strict_comparison,
            }),
        })
    }
}
