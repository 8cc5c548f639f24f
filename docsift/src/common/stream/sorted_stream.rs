use crate::{
    collection::Document,
    common::{sort_cmp, SortOrder},
    errors::{DocSiftError, DocSiftResult},
};
use std::cmp::Ordering;

/// Collects a stream of matches and yields them sorted.
///
/// The sort is a single stable sort whose key priority runs from the LAST
/// sort field to the first: the last field decides, earlier fields only
/// break its ties, and remaining ties keep stream order. This yields the
/// same order as sorting stably once per field in the given order.
///
/// If the raw stream yields an error, collection stops and the stream yields
/// only that error.
pub(crate) struct SortedStream<'a> {
    sorted: std::vec::IntoIter<&'a Document>,
    error: Option<DocSiftError>,
}

impl<'a> SortedStream<'a> {
    pub fn new<I: Iterator<Item = DocSiftResult<&'a Document>>>(
        raw_stream: I,
        sort_order: &[(String, SortOrder)],
        separator: &str,
    ) -> Self {
        let mut error = None;
        let mut cleaned = Vec::new();
        for doc in raw_stream {
            match doc {
                Ok(doc) => cleaned.push(doc),
                Err(e) => {
                    error = Some(e);
                    break;
                }
            }
        }

        if error.is_some() {
            cleaned.clear();
        } else {
            log::trace!("Sorting {} documents by {:?}", cleaned.len(), sort_order);
            cleaned.sort_by(|a, b| compare_documents(a, b, sort_order, separator));
        }

        Self {
            sorted: cleaned.into_iter(),
            error,
        }
    }
}

fn compare_documents(
    a: &Document,
    b: &Document,
    sort_order: &[(String, SortOrder)],
    separator: &str,
) -> Ordering {
    for (field, order) in sort_order.iter().rev() {
        let cmp = sort_cmp(a.get_path(field, separator), b.get_path(field, separator));
        if cmp != Ordering::Equal {
            return match order {
                SortOrder::Ascending => cmp,
                SortOrder::Descending => cmp.reverse(),
            };
        }
    }
    Ordering::Equal
}

impl<'a> Iterator for SortedStream<'a> {
    type Item = DocSiftResult<&'a Document>;

    fn next(&mut self) -> Option<Self::Item> {
        // fail fast if any error occurs
        if let Some(error) = self.error.take() {
            return Some(Err(error));
        }
        self.sorted.next().map(Ok)
    }
}
