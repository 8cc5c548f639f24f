use crate::collection::Document;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A finite, read-only source of documents to query.
///
/// The iteration order of [DocumentCollection::documents] is the collection
/// order: unsorted results keep it, `find_one` returns the first match in
/// it, and sorting breaks ties with it. Implementations must yield the same
/// order every time for as long as they are borrowed.
///
/// Implemented for slices and vectors of documents or document references,
/// and for the values of `IndexMap`, `BTreeMap` and `HashMap` (a `HashMap`
/// has no stable order across instances, only within one).
pub trait DocumentCollection {
    /// Iterates over every document of the collection.
    fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_>;

    /// Returns the number of documents in the collection.
    fn size(&self) -> usize {
        self.documents().count()
    }
}

impl DocumentCollection for [Document] {
    fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_> {
        Box::new(self.iter())
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl DocumentCollection for Vec<Document> {
    fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_> {
        Box::new(self.iter())
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<'d> DocumentCollection for [&'d Document] {
    fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_> {
        Box::new(self.iter().copied())
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<'d> DocumentCollection for Vec<&'d Document> {
    fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_> {
        Box::new(self.iter().copied())
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K> DocumentCollection for IndexMap<K, Document> {
    fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_> {
        Box::new(self.values())
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K> DocumentCollection for BTreeMap<K, Document> {
    fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_> {
        Box::new(self.values())
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, S: BuildHasher> DocumentCollection for HashMap<K, Document, S> {
    fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_> {
        Box::new(self.values())
    }

    fn size(&self) -> usize {
        self.len()
    }
}
