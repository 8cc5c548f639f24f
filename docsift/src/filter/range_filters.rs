use std::{any::Any, fmt::Display};

use crate::{collection::Document, common::Value, errors::DocSiftResult};

use super::{ComparisonOperator, FieldPath, FilterProvider};

/// Evaluates `field <op> operand` for one of the range operators.
///
/// Created by the parser for every entry of an operator map, and by the
/// fluent methods `gt()`, `gte()`, `lt()` and `lte()`.
///
/// An absent field never satisfies the comparison and is not a type
/// mismatch, even in strict mode. Incomparable operand pairs are decided by
/// the `strict` flag: unsatisfied when lenient, a failure when strict.
pub(crate) struct RangeFilter {
    field: FieldPath,
    field_value: Value,
    operator: ComparisonOperator,
    strict: bool,
}

impl RangeFilter {
    #[inline]
    pub(crate) fn new(
        field: FieldPath,
        field_value: Value,
        operator: ComparisonOperator,
        strict: bool,
    ) -> Self {
        RangeFilter {
            field,
            field_value,
            operator,
            strict,
        }
    }
}

impl Display for RangeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({} {} {})",
            self.field,
            self.operator.symbol(),
            self.field_value
        )
    }
}

impl FilterProvider for RangeFilter {
    #[inline]
    fn apply(&self, entry: &Document) -> DocSiftResult<bool> {
        match self.field.resolve(entry) {
            Some(value) => self.operator.evaluate(value, &self.field_value, self.strict),
            None => Ok(false),
        }
    }

    fn has_field(&self) -> bool {
        true
    }

    fn get_field_name(&self) -> DocSiftResult<String> {
        Ok(self.field.name().to_string())
    }

    fn get_field_value(&self) -> DocSiftResult<Option<Value>> {
        Ok(Some(self.field_value.clone()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
