use crate::{collection::Document, errors::DocSiftResult, filter::Filter};

/// Lazily yields the documents of `raw_stream` that satisfy `filter`.
///
/// A filter failure is yielded once as an `Err`, after which the stream is
/// exhausted.
pub(crate) struct FilteredStream<'a, I: Iterator<Item = &'a Document>> {
    raw_stream: I,
    filter: Filter,
    failed: bool,
}

impl<'a, I: Iterator<Item = &'a Document>> FilteredStream<'a, I> {
    pub fn new(raw_stream: I, filter: Filter) -> Self {
        FilteredStream {
            raw_stream,
            filter,
            failed: false,
        }
    }
}

impl<'a, I: Iterator<Item = &'a Document>> Iterator for FilteredStream<'a, I> {
    type Item = DocSiftResult<&'a Document>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        for doc in self.raw_stream.by_ref() {
            match self.filter.apply(doc) {
                Ok(true) => return Some(Ok(doc)),
                Ok(false) => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}
