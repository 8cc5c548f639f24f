use crate::{common::Value, config::QueryConfig};

use super::{ComparisonOperator, EqualsFilter, FieldPath, Filter, RangeFilter};

/// Creates a fluent filter builder for the specified field name.
///
/// The builder resolves nested fields with `.` and evaluates range
/// comparisons leniently unless [FluentFilter::with_config] says otherwise.
///
/// ```rust,ignore
/// use docsift::filter::{and, field};
///
/// let filter = and(vec![field("qty").gt(10), field("qty").lt(20)]);
/// ```
pub fn field(field_name: &str) -> FluentFilter {
    FluentFilter {
        field_name: field_name.to_string(),
        config: QueryConfig::default(),
    }
}

/// A fluent builder for constructing filters on a specific field.
///
/// Each method returns a [Filter] that evaluates exactly like the parsed
/// form of the same condition.
pub struct FluentFilter {
    field_name: String,
    config: QueryConfig,
}

impl FluentFilter {
    /// Uses the field separator and comparison mode of `config`.
    pub fn with_config(mut self, config: &QueryConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Creates a filter that matches documents where the field equals the
    /// specified value. Arrays and documents compare structurally.
    #[inline]
    pub fn eq<T: Into<Value>>(self, value: T) -> Filter {
        let field = self.path();
        Filter::new(EqualsFilter::new(field, value.into()))
    }

    /// Creates a filter that matches documents where the field is greater
    /// than the specified value.
    #[inline]
    pub fn gt<T: Into<Value>>(self, value: T) -> Filter {
        self.range(ComparisonOperator::Gt, value.into())
    }

    /// Creates a filter that matches documents where the field is greater
    /// than or equal to the specified value.
    #[inline]
    pub fn gte<T: Into<Value>>(self, value: T) -> Filter {
        self.range(ComparisonOperator::Gte, value.into())
    }

    /// Creates a filter that matches documents where the field is less than
    /// the specified value.
    #[inline]
    pub fn lt<T: Into<Value>>(self, value: T) -> Filter {
        self.range(ComparisonOperator::Lt, value.into())
    }

    /// Creates a filter that matches documents where the field is less than
    /// or equal to the specified value.
    #[inline]
    pub fn lte<T: Into<Value>>(self, value: T) -> Filter {
        self.range(ComparisonOperator::Lte, value.into())
    }

    fn range(self, operator: ComparisonOperator, value: Value) -> Filter {
        let field = self.path();
        Filter::new(RangeFilter::new(
            field,
            value,
            operator,
            self.config.strict_comparison(),
        ))
    }

    fn path(&self) -> FieldPath {
        FieldPath::new(self.field_name.clone(), self.config.field_separator())
    }
}
