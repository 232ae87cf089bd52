//! Book records and their assigned shelf locations.

use std::fmt;

/// Opaque handle for a record inside a [`Catalog`](super::Catalog).
///
/// Ids are assigned at insertion and never reused, so two records with
/// identical business fields remain distinguishable. Removal goes through
/// this handle rather than field equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub(crate) u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Physical shelf position stamped on a record by the catalog.
///
/// `row_section` groups five records per letter; `block_number` cycles 1-10
/// independently of the row grouping. Both reflect the record's
/// insertion-order position at the time it was added and are never
/// recomputed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelfLocation {
    /// Single uppercase row letter ('A' for positions 0-4, 'B' for 5-9, ...).
    pub row_section: char,
    /// 1-indexed cyclic slot in 1..=10.
    pub block_number: u8,
}

impl fmt::Display for ShelfLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, block {}", self.row_section, self.block_number)
    }
}

/// A catalogued book entry.
///
/// Business fields are immutable once created. The id and shelf location are
/// `None` until [`Catalog::add`](super::Catalog::add) stamps them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub(crate) id: Option<RecordId>,
    pub(crate) location: Option<ShelfLocation>,
    title: String,
    author: String,
    year: i32,
    genre: String,
}

impl Record {
    /// Create a record with business fields only; the catalog assigns the
    /// id and location at insertion.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            location: None,
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Handle assigned by the catalog, `None` before insertion.
    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    /// Shelf location assigned by the catalog, `None` before insertion.
    pub fn location(&self) -> Option<ShelfLocation> {
        self.location
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" by {} ({}, {})",
            self.title, self.author, self.year, self.genre
        )
    }
}
