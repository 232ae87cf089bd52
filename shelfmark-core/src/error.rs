use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog is full. Cannot add more records (capacity {capacity}).")]
    CapacityExceeded { capacity: usize },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
