use std::{any::Any, fmt::Display};

use crate::{
    collection::Document,
    common::{deep_equals, equals, Value},
    errors::DocSiftResult,
};

use super::{FieldPath, FilterProvider};

/// A filter that matches all documents.
///
/// This is what an empty filter expression parses to.
pub(crate) struct AllFilter;

impl FilterProvider for AllFilter {
    fn apply(&self, _entry: &Document) -> DocSiftResult<bool> {
        Ok(true)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Display for AllFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AllFilter")
    }
}

/// A filter that matches documents where a field equals a value.
///
/// Array and document operands are compared structurally with
/// [deep_equals]: arrays element by element in order, documents by key set
/// regardless of key order. Any other operand (including `null`) is compared
/// with [equals], which performs no coercion.
///
/// A field that is absent from the document never matches, not even a
/// `null` operand.
pub(crate) struct EqualsFilter {
    field: FieldPath,
    field_value: Value,
}

impl EqualsFilter {
    #[inline]
    pub(crate) fn new(field: FieldPath, field_value: Value) -> Self {
        EqualsFilter { field, field_value }
    }
}

impl Display for EqualsFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} == {})", self.field, self.field_value)
    }
}

impl FilterProvider for EqualsFilter {
    #[inline]
    fn apply(&self, entry: &Document) -> DocSiftResult<bool> {
        let value = match self.field.resolve(entry) {
            Some(value) => value,
            None => return Ok(false),
        };

        match &self.field_value {
            Value::Array(_) | Value::Document(_) => Ok(deep_equals(value, &self.field_value)),
            scalar => Ok(equals(value, scalar)),
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
