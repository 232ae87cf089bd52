//! End-to-end catalog behavior against the documented shelf-assignment and
//! search policy.

use pretty_assertions::assert_eq;
use shelfmark_core::catalog::{Catalog, Record, ShelfLocation, BLOCK_CYCLE, GROUP_SIZE, MAX_RECORDS};
use shelfmark_core::CatalogError;

fn filler(i: usize) -> Record {
    Record::new(format!("Title {i}"), format!("Author {i}"), 1900 + i as i32, "Filler")
}

#[test]
fn capacity_invariant_holds_at_the_boundary() {
    let mut catalog = Catalog::new();
    for i in 0..MAX_RECORDS {
        catalog.add(filler(i)).expect("catalog should accept records up to capacity");
    }
    assert_eq!(catalog.len(), MAX_RECORDS);

    let err = catalog.add(filler(MAX_RECORDS)).unwrap_err();
    assert_eq!(
        err,
        CatalogError::CapacityExceeded {
            capacity: MAX_RECORDS
        }
    );
    assert_eq!(catalog.len(), MAX_RECORDS);
}

#[test]
fn every_position_gets_the_scheme_location() {
    let mut catalog = Catalog::new();
    for position in 0..MAX_RECORDS {
        let id = catalog.add(filler(position)).unwrap();
        let expected = ShelfLocation {
            row_section: (b'A' + (position / GROUP_SIZE) as u8) as char,
            block_number: (position % BLOCK_CYCLE) as u8 + 1,
        };
        assert_eq!(catalog.get(id).unwrap().location(), Some(expected));
    }
    // Spot checks from the documented examples.
    let records = catalog.records();
    assert_eq!(records[0].location().unwrap().row_section, 'A');
    assert_eq!(records[0].location().unwrap().block_number, 1);
    assert_eq!(records[5].location().unwrap().row_section, 'B');
    assert_eq!(records[5].location().unwrap().block_number, 6);
    assert_eq!(records[10].location().unwrap().row_section, 'C');
    assert_eq!(records[10].location().unwrap().block_number, 1);
    assert_eq!(records[99].location().unwrap().row_section, 'T');
    assert_eq!(records[99].location().unwrap().block_number, 10);
}

#[test]
fn search_is_idempotent_without_intervening_mutation() {
    let mut catalog = Catalog::new();
    catalog.add(Record::new("Dune", "Herbert", 1965, "Sci-Fi")).unwrap();
    catalog.add(Record::new("dune", "Herbert", 1965, "Sci-Fi")).unwrap();
    catalog.add(Record::new("Foundation", "Asimov", 1951, "Sci-Fi")).unwrap();

    let first: Vec<_> = catalog.search_by_title("Dune").iter().map(|r| r.id()).collect();
    let second: Vec<_> = catalog.search_by_title("Dune").iter().map(|r| r.id()).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);

    let by_genre_a: Vec<_> = catalog.search_by_genre("sci-fi").iter().map(|r| r.id()).collect();
    let by_genre_b: Vec<_> = catalog.search_by_genre("sci-fi").iter().map(|r| r.id()).collect();
    assert_eq!(by_genre_a, by_genre_b);
    assert_eq!(by_genre_a.len(), 3);
}

#[test]
fn orwell_scenario() {
    let mut catalog = Catalog::new();
    let nineteen = catalog
        .add(Record::new("1984", "Orwell", 1949, "Dystopian"))
        .unwrap();
    catalog
        .add(Record::new("Animal Farm", "Orwell", 1945, "Satire"))
        .unwrap();

    let by_author = catalog.search_by_author("orwell");
    assert_eq!(by_author.len(), 2);
    assert_eq!(by_author[0].title(), "1984");
    assert_eq!(by_author[1].title(), "Animal Farm");

    assert!(catalog.remove(nineteen));

    let by_author = catalog.search_by_author("orwell");
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].title(), "Animal Farm");
    assert_eq!(by_author[0].year(), 1945);
}

#[test]
fn removed_and_reinserted_catalog_can_share_locations() {
    let mut catalog = Catalog::new();
    let first = catalog.add(filler(0)).unwrap();
    let second = catalog.add(filler(1)).unwrap();
    assert!(catalog.remove(first));

    // Reinsertion happens at the freed position, so the new record and the
    // survivor are both stamped A/2. Preserved quirk, pinned here.
    let third = catalog.add(filler(2)).unwrap();
    assert_eq!(
        catalog.get(second).unwrap().location(),
        catalog.get(third).unwrap().location()
    );
}

#[test]
fn smaller_capacity_is_honored() {
    let mut catalog = Catalog::with_capacity(3);
    for i in 0..3 {
        catalog.add(filler(i)).unwrap();
    }
    assert_eq!(
        catalog.add(filler(3)).unwrap_err(),
        CatalogError::CapacityExceeded { capacity: 3 }
    );
    assert_eq!(catalog.capacity(), 3);
}
