use std::fs::File;
use std::path::Path;

use crate::error::CatalogResult;
use crate::model::Catalog;

/// The solar system that ships with the program
pub const BUNDLED_CATALOG: &str = include_str!("../data/solarsystem.csv");

pub fn read_file(filename: impl AsRef<Path>) -> CatalogResult<Catalog> {
    let file = File::open(filename)?;
    Catalog::load(file)
}

pub fn read_bundled() -> CatalogResult<Catalog> {
    Catalog::load(BUNDLED_CATALOG.as_bytes())
}

/// Reads `filename` if there is one, otherwise the bundled catalog
pub fn read_file_or_bundled(filename: Option<&Path>) -> CatalogResult<Catalog> {
    match filename {
        Some(filename) => read_file(filename),
        None => read_bundled(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = read_bundled().unwrap();
        assert_eq!(catalog.len(), 24);
    }

    #[test]
    fn test_missing_file() {
        let err = read_file("no-such-catalog.csv").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
        assert_eq!(err.line(), None);
    }
}
