use crate::common::Value;
use crate::errors::{DocSiftError, DocSiftResult, ErrorKind};
use itertools::Itertools;
use std::fmt::Display;

/// Specifies the direction for sorting documents.
///
/// # Purpose
/// Defines whether documents should be sorted in ascending (low to high) or descending
/// (high to low) order. Used in query options to control result ordering.
///
/// # Variants
/// - `Ascending`: Sort from smallest to largest value (A to Z, 0 to 9)
/// - `Descending`: Sort from largest to smallest value (Z to A, 9 to 0)
///
/// # Usage
/// Used with `order_by()` helper function when querying collections:
/// ```text
/// let options = order_by("age", SortOrder::Ascending);
/// let docs = ReadOperations::default().find_many(&filter, &options, &collection)?;
/// ```
///
/// When sort options are parsed from a document, a direction of `1` means
/// ascending and any other value means descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort in ascending order (smallest to largest, A-Z)
    Ascending,
    /// Sort in descending order (largest to smallest, Z-A)
    Descending,
}

impl SortOrder {
    /// Maps a direction value from an options document to a sort order.
    pub fn from_direction(direction: &Value) -> SortOrder {
        match direction.as_i64() {
            Some(1) => SortOrder::Ascending,
            _ => SortOrder::Descending,
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "1"),
            SortOrder::Descending => write!(f, "-1"),
        }
    }
}

/// An ordered list of `(field, direction)` sort keys.
///
/// Keys are kept in the order they were specified. The sorter gives the
/// LAST key the highest priority; earlier keys only break ties left by
/// later ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortableFields {
    sorting_order: Vec<(String, SortOrder)>,
}

impl SortableFields {
    pub fn new() -> SortableFields {
        SortableFields {
            sorting_order: Vec::new(),
        }
    }

    pub fn with_names(field_names: Vec<String>) -> DocSiftResult<SortableFields> {
        if field_names.is_empty() {
            log::error!("Field names cannot be empty");
            return Err(DocSiftError::new(
                "Field names cannot be empty",
                ErrorKind::InvalidOptions,
            ));
        }

        let sorting_order = field_names
            .into_iter()
            .map(|field_name| (field_name, SortOrder::Ascending))
            .collect();

        Ok(SortableFields { sorting_order })
    }

    #[inline]
    pub fn add_field(self, field_name: String) -> SortableFields {
        self.add_sorted_field(field_name, SortOrder::Ascending)
    }

    #[inline]
    pub fn add_sorted_field(mut self, field_name: String, sort_order: SortOrder) -> SortableFields {
        self.sorting_order.push((field_name, sort_order));
        self
    }

    #[inline]
    pub fn field_names(&self) -> Vec<String> {
        self.sorting_order.iter().map(|(name, _)| name.clone()).collect()
    }

    #[inline]
    pub fn sorting_order(&self) -> &[(String, SortOrder)] {
        &self.sorting_order
    }

    pub fn is_empty(&self) -> bool {
        self.sorting_order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sorting_order.len()
    }
}

impl Display for SortableFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.sorting_order
                .iter()
                .map(|(name, order)| format!("{}: {}", name, order))
                .join(", ")
        )
    }
}
