//! Listing file I/O for the cesta binary

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use cesta_domain::{Category, ProductRecord};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid product listing in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no listing files could be read")]
    NothingToCombine,
}

/// Read and deserialize a JSON file.
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a JSON product listing.
pub fn load_listing(path: &Path) -> Result<Vec<ProductRecord>, CliError> {
    load_json(path)
}

/// Write pretty-printed JSON, exactly the structure it was given.
pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), CliError> {
    let pretty = serde_json::to_string_pretty(value).map_err(|source| CliError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, pretty).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Default output path for a categorized listing: `<stem>_categorized.json`
/// next to the input.
pub fn categorized_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "listing".to_string());
    input.with_file_name(format!("{stem}_categorized.json"))
}

/// Merge per-market listing files into one listing with ids renumbered
/// from 1 in read order. Unreadable files are logged and skipped; it is
/// an error only if nothing could be read at all.
pub fn combine_listings(inputs: &[PathBuf]) -> Result<Vec<ProductRecord>, CliError> {
    let mut combined: Vec<ProductRecord> = Vec::new();
    let mut next_id: i64 = 1;
    let mut read_any = false;

    for path in inputs {
        match load_listing(path) {
            Ok(products) => {
                tracing::debug!(path = %path.display(), count = products.len(), "merging listing");
                read_any = true;
                for product in products {
                    combined.push(ProductRecord::new(next_id, product.title, product.supermarket));
                    next_id += 1;
                }
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "skipping listing file");
            }
        }
    }

    if read_any {
        Ok(combined)
    } else {
        Err(CliError::NothingToCombine)
    }
}

/// Write the clustered categories verbatim.
pub fn write_categories(path: &Path, categories: &[Category]) -> Result<(), CliError> {
    write_json(path, &categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorized_path_keeps_directory_and_stem() {
        let path = categorized_path(Path::new("data/data01.json"));
        assert_eq!(path, Path::new("data/data01_categorized.json"));
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[{").unwrap();
        assert!(matches!(load_listing(&path), Err(CliError::Parse { .. })));
    }

    #[test]
    fn listing_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listing.json");
        let products = vec![
            ProductRecord::new(1, "Leite Integral Piracanjuba 1L", "MercadoLivre"),
            ProductRecord::new(2, "Arroz Branco Tio João 5kg", "Americanas"),
        ];

        write_json(&path, &products).unwrap();
        assert_eq!(load_listing(&path).unwrap(), products);
    }

    #[test]
    fn combine_renumbers_and_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("mercadolivre_products.json");
        let second = dir.path().join("americanas_products.json");
        write_json(
            &first,
            &vec![ProductRecord::new(40, "Leite Integral Italac 1L", "MercadoLivre")],
        )
        .unwrap();
        write_json(
            &second,
            &vec![ProductRecord::new(40, "Feijão Preto Camil 1kg", "Americanas")],
        )
        .unwrap();
        let missing = dir.path().join("magalu_products.json");

        let combined = combine_listings(&[first, missing, second]).unwrap();

        let ids: Vec<i64> = combined.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2]);
        assert_eq!(combined[1].supermarket, "Americanas");
    }

    #[test]
    fn combine_fails_only_when_nothing_is_readable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            combine_listings(&[missing]),
            Err(CliError::NothingToCombine)
        ));
    }
}
