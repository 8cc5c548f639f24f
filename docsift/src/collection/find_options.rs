use crate::collection::Document;
use crate::common::{SortOrder, SortableFields, Value};
use crate::errors::{DocSiftError, DocSiftResult, ErrorKind};

const SKIP: &str = "skip";
const LIMIT: &str = "limit";
const SORT: &str = "sort";

/// Options for shaping the results of a find operation.
///
/// `FindOptions` specifies sorting and pagination. Matches are filtered
/// first, then sorted, then `skip` matches are dropped and at most `limit`
/// are returned. It supports method chaining for convenient configuration.
///
/// # Examples
///
/// ```rust,ignore
/// use docsift::collection::FindOptions;
/// use docsift::common::SortOrder;
///
/// // Create options with sorting, skip, and limit
/// let options = FindOptions::new()
///     .sort_by("age".into(), SortOrder::Descending)
///     .skip(10)
///     .limit(20);
///
/// // Use convenience functions
/// let options = order_by("name", SortOrder::Ascending);
/// let options = skip_by(5);
/// let options = limit_to(100);
///
/// // Parse from an options document
/// let options = FindOptions::from_document(&doc! { skip: 3, limit: 4, sort: { age: 1 } })?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindOptions {
    pub(crate) sort_by: Option<SortableFields>,
    pub(crate) skip: Option<u64>,
    pub(crate) limit: Option<u64>,
}

/// Creates `FindOptions` with sorting by a field.
pub fn order_by(field_name: &str, sort_order: SortOrder) -> FindOptions {
    FindOptions::new().sort_by(field_name.to_string(), sort_order)
}

/// Creates `FindOptions` that skips a number of results.
///
/// Useful for pagination: skip the first N matches and return the rest.
pub fn skip_by(skip: u64) -> FindOptions {
    FindOptions::new().skip(skip)
}

/// Creates `FindOptions` that limits the number of results.
///
/// Combined with skip for pagination: skip(10).limit(20) returns matches 11-30.
pub fn limit_to(limit: u64) -> FindOptions {
    FindOptions::new().limit(limit)
}

impl FindOptions {
    /// Creates a new `FindOptions` with no sorting, no skip and no limit.
    pub fn new() -> FindOptions {
        FindOptions {
            sort_by: None,
            skip: None,
            limit: None,
        }
    }

    /// Sets the number of matches to skip.
    pub fn skip(mut self, skip: u64) -> FindOptions {
        self.skip = Some(skip);
        self
    }

    /// Sets the maximum number of documents to return.
    pub fn limit(mut self, limit: u64) -> FindOptions {
        self.limit = Some(limit);
        self
    }

    /// Appends a sort key.
    ///
    /// Keys added later take priority: the last key decides the order and
    /// earlier keys only break its ties.
    pub fn sort_by(mut self, field_name: String, sort_order: SortOrder) -> FindOptions {
        let fields = self.sort_by.unwrap_or_default();
        self.sort_by = Some(fields.add_sorted_field(field_name, sort_order));
        self
    }

    pub fn sort_fields(&self) -> Option<&SortableFields> {
        self.sort_by.as_ref().filter(|fields| !fields.is_empty())
    }

    pub fn skip_count(&self) -> u64 {
        self.skip.unwrap_or(0)
    }

    pub fn limit_count(&self) -> Option<u64> {
        self.limit
    }

    /// Parses options from a document with the keys `skip`, `limit` and
    /// `sort`.
    ///
    /// * `skip` must be a non-negative integer.
    /// * `limit` must be a non-negative integer; `0` means no limit.
    /// * `sort` must be a document mapping field names to a direction, where
    ///   `1` is ascending and anything else is descending.
    ///
    /// A `null` value is the same as an absent key. Unknown keys are ignored.
    pub fn from_document(options: &Document) -> DocSiftResult<FindOptions> {
        let mut find_options = FindOptions::new();
        for (key, value) in options.iter() {
            match key.as_str() {
                SKIP => find_options.skip = parse_count(SKIP, value)?,
                LIMIT => find_options.limit = parse_count(LIMIT, value)?.filter(|limit| *limit > 0),
                SORT => find_options.sort_by = parse_sort(value)?,
                other => log::warn!("Ignoring unknown find option {}", other),
            }
        }
        Ok(find_options)
    }

    /// Parses options given as a JSON object. See [FindOptions::from_document].
    pub fn from_json(options: &serde_json::Value) -> DocSiftResult<FindOptions> {
        if options.is_null() {
            return Ok(FindOptions::new());
        }

        let options = Document::try_from(options.clone()).map_err(|e| {
            log::error!("Find options must be a JSON object");
            DocSiftError::new_with_cause(
                "Find options must be a JSON object",
                ErrorKind::InvalidOptions,
                e,
            )
        })?;
        FindOptions::from_document(&options)
    }
}

fn parse_count(name: &str, value: &Value) -> DocSiftResult<Option<u64>> {
    if value.is_null() {
        return Ok(None);
    }

    match value.as_i64() {
        Some(count) if count >= 0 => Ok(Some(count as u64)),
        _ => {
            log::error!("Option {} must be a non-negative integer, found {}", name, value);
            Err(DocSiftError::new(
                &format!("Option {} must be a non-negative integer", name),
                ErrorKind::InvalidOptions,
            ))
        }
    }
}

fn parse_sort(value: &Value) -> DocSiftResult<Option<SortableFields>> {
    match value {
        Value::Null => Ok(None),
        Value::Document(directions) => {
            let mut fields = SortableFields::new();
            for (field, direction) in directions.iter() {
                fields = fields.add_sorted_field(field.clone(), SortOrder::from_direction(direction));
            }
            Ok(Some(fields).filter(|fields| !fields.is_empty()))
        }
        other => {
            log::error!("Option sort must be a document, found {}", other.type_name());
            Err(DocSiftError::new(
                "Option sort must be a document",
                ErrorKind::InvalidOptions,
            ))
        }
    }
}
