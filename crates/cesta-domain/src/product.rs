//! Scraped product listing entry

use serde::{Deserialize, Serialize};

/// One product listing as delivered by a scraper or listing file.
///
/// `id` is assumed unique within a run; uniqueness is not validated here.
/// Every field defaults when absent so that malformed records degrade to
/// empty values instead of failing the whole listing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub supermarket: String,
}

impl ProductRecord {
    pub fn new(id: i64, title: impl Into<String>, supermarket: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            supermarket: supermarket.into(),
        }
    }
}
