// src/data.rs
//
// Row-index views over a store.
//
// Query results never copy records: a RowSet holds positions into the
// canonical store, in store order. Materialize with `records()` at the
// UI/export boundary.

use crate::store::{PlayerRecord, RecordStore};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowSet {
    /// Positions of kept rows in the store
    row_ix: Vec<usize>,
}

impl RowSet {
    pub fn new(row_ix: Vec<usize>) -> Self { Self { row_ix } }

    /// Keep every row for which `keep` returns true, in store order.
    pub fn from_predicate<T, F>(rows: &[T], keep: F) -> Self
    where
        F: Fn(&T) -> bool,
    {
        Self::new(
            rows.iter()
                .enumerate()
                .filter(|(_, r)| keep(*r))
                .map(|(i, _)| i)
                .collect(),
        )
    }

    #[inline] pub fn len(&self) -> usize { self.row_ix.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }
    #[inline] pub fn indices(&self) -> &[usize] { &self.row_ix }

    pub fn contains(&self, ix: usize) -> bool {
        self.row_ix.contains(&ix)
    }

    /// True when every row here is also in `other`.
    pub fn is_subset_of(&self, other: &RowSet) -> bool {
        self.row_ix.iter().all(|ix| other.contains(*ix))
    }

    /// Borrow the records behind this set (no cloning).
    pub fn records<'a>(&'a self, store: &'a RecordStore) -> impl Iterator<Item = &'a PlayerRecord> + 'a {
        self.row_ix.iter().filter_map(move |&ix| store.get(ix))
    }
}
