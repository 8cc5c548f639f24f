use crate::{
    collection::{Document, DocumentCollection, FindOptions},
    common::stream::{FilteredStream, SortedStream},
    config::QueryConfig,
    errors::{DocSiftError, DocSiftResult, ErrorKind},
    filter::{is_all_filter, parse_filter, parse_filter_json, Filter},
};
use std::ops::Deref;
use std::sync::Arc;

/// Runs queries against a [DocumentCollection].
///
/// Every query is a full scan of the collection. Matches are filtered
/// first, then sorted if the options ask for it, then paginated. A failure
/// anywhere aborts the whole query.
///
/// # Examples
///
/// ```rust,ignore
/// use docsift::collection::{FindOptions, ReadOperations};
/// use docsift::doc;
///
/// let docs = vec![doc! { a: 1, b: 2 }, doc! { a: 1, b: 1 }, doc! { a: 2, b: 1 }];
/// let read = ReadOperations::default();
///
/// let matches = read.find_many(&doc! { a: 1 }, &FindOptions::new(), &docs)?;
/// assert_eq!(matches.len(), 2);
///
/// let first = read.find_one(&doc! { "$or": [{ a: 2 }, { b: 2 }] }, &docs)?;
/// assert_eq!(first, Some(&docs[0]));
/// ```
#[derive(Clone, Default)]
pub struct ReadOperations {
    inner: Arc<ReadOperationsInner>,
}

impl ReadOperations {
    pub fn new(config: QueryConfig) -> Self {
        Self {
            inner: Arc::new(ReadOperationsInner::new(config)),
        }
    }
}

impl Deref for ReadOperations {
    type Target = Arc<ReadOperationsInner>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Default)]
pub struct ReadOperationsInner {
    config: QueryConfig,
}

impl ReadOperationsInner {
    fn new(config: QueryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Returns the documents matching the filter expression, shaped by
    /// `options`.
    ///
    /// An empty expression matches every document. Without sort options the
    /// result keeps collection order and the scan stops once `limit`
    /// matches past `skip` have been collected.
    pub fn find_many<'a, C: DocumentCollection + ?Sized>(
        &self,
        expression: &Document,
        options: &FindOptions,
        collection: &'a C,
    ) -> DocSiftResult<Vec<&'a Document>> {
        let filter = parse_filter(expression, &self.config)?;
        self.find(&filter, options, collection)
    }

    /// Returns the first document matching the filter expression in
    /// collection order, or `None`.
    pub fn find_one<'a, C: DocumentCollection + ?Sized>(
        &self,
        expression: &Document,
        collection: &'a C,
    ) -> DocSiftResult<Option<&'a Document>> {
        let filter = parse_filter(expression, &self.config)?;
        self.find_first(&filter, collection)
    }

    /// Counts the documents matching the filter expression.
    pub fn count<C: DocumentCollection + ?Sized>(
        &self,
        expression: &Document,
        collection: &C,
    ) -> DocSiftResult<usize> {
        let filter = parse_filter(expression, &self.config)?;
        if is_all_filter(&filter) {
            return Ok(collection.size());
        }

        FilteredStream::new(collection.documents(), filter)
            .try_fold(0, |count, doc| doc.map(|_| count + 1))
    }

    /// Like [ReadOperationsInner::find_many] for an already built filter.
    pub fn find<'a, C: DocumentCollection + ?Sized>(
        &self,
        filter: &Filter,
        options: &FindOptions,
        collection: &'a C,
    ) -> DocSiftResult<Vec<&'a Document>> {
        log::debug!(
            "Finding documents with filter {} (skip {:?}, limit {:?}, sort {:?})",
            filter,
            options.skip,
            options.limit,
            options.sort_by.as_ref().map(|fields| fields.to_string()),
        );

        let skip = to_usize(options.skip_count());
        let limit = options.limit_count().map(to_usize);
        let stream = FilteredStream::new(collection.documents(), filter.clone());

        match options.sort_fields() {
            Some(fields) => {
                let sorted = SortedStream::new(
                    stream,
                    fields.sorting_order(),
                    self.config.field_separator(),
                );
                paginate(sorted, skip, limit)
            }
            None => paginate(stream, skip, limit),
        }
    }

    /// Like [ReadOperationsInner::find_one] for an already built filter.
    pub fn find_first<'a, C: DocumentCollection + ?Sized>(
        &self,
        filter: &Filter,
        collection: &'a C,
    ) -> DocSiftResult<Option<&'a Document>> {
        if is_all_filter(filter) {
            return Ok(collection.documents().next());
        }

        log::debug!("Finding first document with filter {}", filter);
        FilteredStream::new(collection.documents(), filter.clone())
            .next()
            .transpose()
    }

    /// JSON form of [ReadOperationsInner::find_many].
    ///
    /// `expression` and `options` must be JSON objects (`options` may also
    /// be `null`), and every element of `documents` must be a JSON object.
    /// Matches are returned as owned JSON values.
    pub fn find_many_json(
        &self,
        expression: &serde_json::Value,
        options: &serde_json::Value,
        documents: &[serde_json::Value],
    ) -> DocSiftResult<Vec<serde_json::Value>> {
        let filter = parse_filter_json(expression, &self.config)?;
        let options = FindOptions::from_json(options)?;
        let documents = to_documents(documents)?;

        let matches = self.find(&filter, &options, &documents)?;
        Ok(matches.into_iter().map(Document::to_json).collect())
    }

    /// JSON form of [ReadOperationsInner::find_one].
    pub fn find_one_json(
        &self,
        expression: &serde_json::Value,
        documents: &[serde_json::Value],
    ) -> DocSiftResult<Option<serde_json::Value>> {
        let filter = parse_filter_json(expression, &self.config)?;
        let documents = to_documents(documents)?;

        let first = self.find_first(&filter, &documents)?;
        Ok(first.map(Document::to_json))
    }
}

fn to_usize(count: u64) -> usize {
    usize::try_from(count).unwrap_or(usize::MAX)
}

/// Drops the first `skip` items and collects at most `limit` of the rest,
/// without pulling more items than needed. Errors are never skipped.
fn paginate<'a, I: Iterator<Item = DocSiftResult<&'a Document>>>(
    stream: I,
    skip: usize,
    limit: Option<usize>,
) -> DocSiftResult<Vec<&'a Document>> {
    let limit = limit.unwrap_or(usize::MAX);
    if limit == 0 {
        return Ok(Vec::new());
    }

    let mut skipped = 0;
    let mut results = Vec::new();
    for doc in stream {
        let doc = doc?;
        if skipped < skip {
            skipped += 1;
            continue;
        }

        results.push(doc);
        if results.len() >= limit {
            break;
        }
    }
    Ok(results)
}

fn to_documents(documents: &[serde_json::Value]) -> DocSiftResult<Vec<Document>> {
    documents
        .iter()
        .enumerate()
        .map(|(index, value)| {
            Document::try_from(value.clone()).map_err(|e| {
                log::error!("Collection element {} is not a JSON object", index);
                DocSiftError::new_with_cause(
                    &format!("Collection element {} is not a JSON object", index),
                    ErrorKind::EncodingError,
                    e,
                )
            })
        })
        .collect()
}

/// Runs [ReadOperationsInner::find_many] with the default configuration.
pub fn find_many<'a, C: DocumentCollection + ?Sized>(
    expression: &Document,
    options: &FindOptions,
    collection: &'a C,
) -> DocSiftResult<Vec<&'a Document>> {
    ReadOperations::default().find_many(expression, options, collection)
}

/// Runs [ReadOperationsInner::find_one] with the default configuration.
pub fn find_one<'a, C: DocumentCollection + ?Sized>(
    expression: &Document,
    collection: &'a C,
) -> DocSiftResult<Option<&'a Document>> {
    ReadOperations::default().find_one(expression, collection)
}
