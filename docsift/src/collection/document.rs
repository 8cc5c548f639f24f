use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::common::Value;
use crate::errors::{DocSiftError, DocSiftResult, ErrorKind};
use std::fmt::{Debug, Display};

pub(crate) type FieldVec = SmallVec<[String; 8]>;

/// A schemaless document: a mapping from field name to [Value].
///
/// Fields keep the order in which they were inserted (or parsed). That order
/// carries meaning only when a document is used as a filter expression or a
/// sort specification, where keys are processed first to last. Equality
/// between documents ignores field order: `{a: 1, b: 2}` equals `{b: 2, a: 1}`.
///
/// Nested values can be addressed with a separator-joined path through
/// [Document::get_path], e.g. `"address.city"` or `"tags.0"`.
#[derive(Clone, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct Document {
    data: IndexMap<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document {
            data: IndexMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Associates the specified [Value] with the specified key in this document.
    ///
    /// An existing key keeps its position and gets the new value. Keys are
    /// stored verbatim; a separator inside the key is not interpreted.
    ///
    /// ```ignore
    /// let mut doc = Document::new();
    /// doc.put("name", "Alice")?;
    /// doc.put("age", 30)?;
    /// assert_eq!(doc.size(), 2);
    /// ```
    pub fn put<K: Into<String>, T: Into<Value>>(&mut self, key: K, value: T) -> DocSiftResult<()> {
        let key = key.into();
        // key cannot be empty
        if key.is_empty() {
            log::error!("Document does not support empty key");
            return Err(DocSiftError::new(
                "Document does not support empty key",
                ErrorKind::InvalidQuery,
            ));
        }

        self.data.insert(key, value.into());
        Ok(())
    }

    /// Returns the value stored under `key`, or `None` if the field is absent.
    ///
    /// An absent field is distinct from a field holding [Value::Null].
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Resolves a field path against this document.
    ///
    /// A verbatim top-level key always wins. Otherwise the path is split on
    /// `separator` and walked through nested documents; numeric segments index
    /// into arrays. Returns `None` as soon as a segment cannot be resolved.
    ///
    /// ```ignore
    /// let doc = doc!{ location: { city: "New York" }, tags: ["a", "b"] };
    /// assert_eq!(doc.get_path("location.city", "."), Some(&Value::from("New York")));
    /// assert_eq!(doc.get_path("tags.1", "."), Some(&Value::from("b")));
    /// ```
    pub fn get_path(&self, path: &str, separator: &str) -> Option<&Value> {
        if let Some(value) = self.data.get(path) {
            return Some(value);
        }

        if separator.is_empty() || !path.contains(separator) {
            return None;
        }

        let mut segments = path.split(separator);
        let first = segments.next()?;
        let mut current = self.data.get(first)?;
        for segment in segments {
            current = match current {
                Value::Document(doc) => doc.data.get(segment)?,
                Value::Array(items) => {
                    let index = segment.parse::<usize>().ok()?;
                    items.get(index)?
                }
                _ => return None,
            };
        }
        Some(current)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Returns the top-level field names in insertion order.
    pub fn fields(&self) -> FieldVec {
        self.data.keys().cloned().collect()
    }

    /// Returns the first field name, if any.
    pub fn first_key(&self) -> Option<&str> {
        self.data.keys().next().map(String::as_str)
    }

    /// Removes a top-level field, preserving the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.shift_remove(key)
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Iterates over `(field, value)` pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.data.iter()
    }

    /// Parses a JSON object text into a document.
    pub fn from_json_str(json: &str) -> DocSiftResult<Document> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Document::try_from(value)
    }

    /// Converts this document into a JSON object, keeping field order.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .data
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect::<serde_json::Map<String, serde_json::Value>>();
        serde_json::Value::Object(map)
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Document {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Document {
            data: map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
        }
    }
}

impl TryFrom<serde_json::Value> for Document {
    type Error = DocSiftError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Object(map) => Ok(Document::from(map)),
            other => {
                log::error!("Expected a JSON object but found {}", other);
                Err(DocSiftError::new(
                    "Expected a JSON object",
                    ErrorKind::EncodingError,
                ))
            }
        }
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Document {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.data.iter()).finish()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

pub fn normalize(value: &str) -> String {
    value.trim_matches('"').to_string()
}

/// Creates a [Document] with JSON-like syntax.
///
/// Keys may be bare identifiers or string literals (string literals are
/// needed for `$`-prefixed operator keys). Negative numbers and other
/// multi-token expressions must be wrapped in parentheses.
///
/// ```rust
/// use docsift::doc;
///
/// let empty = doc!{};
///
/// let simple = doc!{
///     name: "Alice",
///     age: 30
/// };
///
/// let filter = doc!{
///     "$or": [{ age: { "$lt": 18 } }, { score: (-1) }]
/// };
/// ```
#[macro_export]
macro_rules! doc {
    // match an empty document (with braces)
    ({}) => {
        $crate::collection::Document::new()
    };

    // match an empty document
    () => {
        $crate::collection::Document::new()
    };

    // match a document with key value pairs (with outer braces)
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::doc!($($key : $value),*)
    };

    // match a document with key value pairs
    ($($key:tt : $value:tt),* $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::doc_value;

            let mut doc = $crate::collection::Document::new();
            $(
                doc.put($crate::collection::normalize(stringify!($key)), $crate::doc_value!($value))
                .expect(&format!("Failed to put value {} in document", stringify!($value)));
            )*
            doc
        }
    };
}

/// Helper macro to convert values for the doc! macro.
#[macro_export]
macro_rules! doc_value {
    // match a json style null
    (null) => {
        $crate::common::Value::Null
    };

    // match a nested document
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        {
            $crate::common::Value::Document($crate::doc!{ $($key : $value),* })
        }
    };

    // match an array of values
    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    // match an expression (variable, literal, parenthesized arithmetic, etc.)
    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
