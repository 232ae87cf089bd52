//! The bounded, ordered record store and its shelf-assignment and search
//! policy.
//!
//! Records live contiguously in insertion order. Each insertion stamps the
//! record with a shelf location derived from the *current live count*, and
//! removal shifts later records left without restamping them, so a catalog
//! that has seen removals can legitimately hold two records sharing a
//! row/block. That is the historical assignment scheme, preserved exactly.

mod record;

pub use record::{Record, RecordId, ShelfLocation};

use crate::error::{CatalogError, Result};
use tracing::{debug, warn};

/// Default maximum number of records a catalog holds.
pub const MAX_RECORDS: usize = 100;

/// Records per row letter.
pub const GROUP_SIZE: usize = 5;

/// Block numbers cycle through 1..=BLOCK_CYCLE, decoupled from the row
/// grouping.
pub const BLOCK_CYCLE: usize = 10;

/// Bounded, ordered collection of [`Record`]s.
///
/// Single-threaded by design: insertion and removal depend on the live
/// count and on left-shift compaction, neither of which is safe under
/// interleaving. Callers that share a catalog across threads must wrap the
/// whole object in one exclusive lock.
pub struct Catalog {
    records: Vec<Record>,
    capacity: usize,
    next_id: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Catalog with the default capacity of [`MAX_RECORDS`].
    pub fn new() -> Self {
        Self::with_capacity(MAX_RECORDS)
    }

    /// Catalog bounded at `capacity` records.
    ///
    /// Row letters walk past 'Z' for positions beyond 129, so callers that
    /// raise the capacity above 130 get multi-byte-looking row chars; the
    /// CLI clamps its flag accordingly.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
            next_id: 0,
        }
    }

    /// Shelf location for the next insertion, derived from the live count.
    fn next_location(&self) -> ShelfLocation {
        let position = self.records.len();
        ShelfLocation {
            row_section: (b'A' + (position / GROUP_SIZE) as u8) as char,
            block_number: (position % BLOCK_CYCLE) as u8 + 1,
        }
    }

    /// Insert a record, stamping its id and shelf location.
    ///
    /// Fails with [`CatalogError::CapacityExceeded`] when the catalog is
    /// full; nothing changes in that case and the record is dropped.
    pub fn add(&mut self, mut record: Record) -> Result<RecordId> {
        if self.records.len() >= self.capacity {
            warn!(
                capacity = self.capacity,
                title = record.title(),
                "catalog full, rejecting record"
            );
            return Err(CatalogError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let id = RecordId(self.next_id);
        self.next_id += 1;
        let location = self.next_location();
        record.id = Some(id);
        record.location = Some(location);
        debug!(id = id.0, title = record.title(), %location, "record added");
        self.records.push(record);
        Ok(id)
    }

    /// Remove the record with the given id, shifting later records left.
    ///
    /// Returns `false` when no record has that id. Surviving records keep
    /// the locations they were stamped with at insertion.
    pub fn remove(&mut self, id: RecordId) -> bool {
        match self.records.iter().position(|r| r.id == Some(id)) {
            Some(index) => {
                let removed = self.records.remove(index);
                debug!(id = id.0, title = removed.title(), "record removed");
                true
            }
            None => false,
        }
    }

    /// Look up a record by id.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == Some(id))
    }

    /// All records whose title matches `title`, ignoring case.
    pub fn search_by_title(&self, title: &str) -> Vec<&Record> {
        self.search(|r| eq_ignore_case(r.title(), title))
    }

    /// All records whose author matches `author`, ignoring case.
    pub fn search_by_author(&self, author: &str) -> Vec<&Record> {
        self.search(|r| eq_ignore_case(r.author(), author))
    }

    /// All records whose genre matches `genre`, ignoring case.
    pub fn search_by_genre(&self, genre: &str) -> Vec<&Record> {
        self.search(|r| eq_ignore_case(r.genre(), genre))
    }

    /// All records published in `year`.
    pub fn search_by_year(&self, year: i32) -> Vec<&Record> {
        self.search(|r| r.year() == year)
    }

    fn search<F>(&self, matches: F) -> Vec<&Record>
    where
        F: Fn(&Record) -> bool,
    {
        self.records.iter().filter(|r| matches(r)).collect()
    }

    /// Every live record in catalog order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Exact match ignoring case, Unicode-aware like the searches it backs.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
