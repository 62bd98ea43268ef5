//! Auto-incrementing in-memory table.
//!
//! Identifiers start at 1 and come from a counter that is never reset, so an
//! identifier is never handed out twice. Rows are keyed by identifier in a
//! `BTreeMap`, which makes identifier order the same as insertion order.

use std::collections::BTreeMap;

#[derive(Debug)]
pub struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the next identifier, builds the row from it and stores it.
    pub fn insert_with<F>(&mut self, build: F) -> T
    where
        F: FnOnce(i64) -> T,
    {
        let id = self.next_id;
        self.next_id += 1;

        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.rows.contains_key(&id)
    }

    /// All rows in insertion order.
    pub fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    /// Rows matching `predicate`, in insertion order.
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.values().filter(|row| predicate(row)).cloned().collect()
    }

    /// First row matching `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.values().find(|row| predicate(row)).cloned()
    }

    /// Runs `apply` against an existing row in place and returns its result.
    ///
    /// `None` means there is no row with that identifier.
    pub fn update<F, R>(&mut self, id: i64, apply: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.rows.get_mut(&id).map(apply)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
