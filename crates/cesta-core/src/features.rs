//! Structured feature extraction from product titles

use lazy_static::lazy_static;
use regex::Regex;

use crate::lexicon::Lexicon;
use crate::normalization::normalize_title;

lazy_static! {
    static ref SIZE: Regex = Regex::new(r"(?i)(\d+)\s*(l|kg)").unwrap();
}

/// Structured attributes derived from a product title.
///
/// Recomputed for every comparison, never cached. Whole-struct equality
/// is the equivalence hard gate, so `None == None` counts as agreement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductFeatures {
    pub brand: Option<String>,
    pub category: Option<String>,
    pub product_type: Option<String>,
    pub size: Option<String>,
}

/// Extract brand, category, type, and size from a title.
///
/// All detection runs over the normalized title as ordered substring
/// scans: the first matching lexicon entry wins, and category detection
/// stops at the first category so a title is never assigned to two.
/// Substring matching can false-positive on brand names embedded in
/// other words; that is an accepted limitation of the dictionary design.
pub fn extract_features(title: &str, lexicon: &Lexicon) -> ProductFeatures {
    let normalized = normalize_title(title);

    let brand = lexicon
        .brands
        .iter()
        .find(|brand| normalized.contains(brand.as_str()))
        .cloned();

    let mut category = None;
    let mut product_type = None;
    for entry in &lexicon.categories {
        if normalized.contains(entry.name.as_str()) {
            category = Some(entry.name.clone());
            product_type = entry
                .types
                .iter()
                .find(|keyword| normalized.contains(keyword.as_str()))
                .cloned();
            break;
        }
    }

    let size = SIZE.find(&normalized).map(|m| m.as_str().to_string());

    let features = ProductFeatures {
        brand,
        category,
        product_type,
        size,
    };
    tracing::trace!(?features, title, "extracted features");
    features
}
