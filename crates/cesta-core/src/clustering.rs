//! Greedy single-pass clustering of product listings

use std::collections::HashSet;

use cesta_domain::{Category, ProductRecord};

use crate::config::CategorizationConfig;
use crate::equivalence::are_equivalent;

/// Partition a listing into categories of equivalent products.
///
/// Greedy and single-pass: the first unprocessed record opens a category
/// and becomes its seed, then the whole remaining input is scanned in
/// original order and every unprocessed candidate is compared against the
/// seed only — never against members the category already absorbed.
/// Because equivalence is not transitive, two non-seed members of one
/// category are not guaranteed equivalent to each other; the seed-only
/// policy is deliberate and kept visible here rather than replaced with
/// pairwise-consistent clustering.
///
/// Output categories appear in first-seen seed order, each labeled with
/// its seed's literal title. The processed-id set is local to this call;
/// duplicate input ids are not detected and will suppress later records.
pub fn categorize_products(
    products: &[ProductRecord],
    config: &CategorizationConfig,
) -> Vec<Category> {
    tracing::debug!(total = products.len(), "categorizing products");

    let mut categories = Vec::new();
    let mut processed: HashSet<i64> = HashSet::new();

    for seed in products {
        if processed.contains(&seed.id) {
            continue;
        }

        let mut category = Category::seeded_with(seed);
        processed.insert(seed.id);

        for candidate in products {
            if candidate.id == seed.id || processed.contains(&candidate.id) {
                continue;
            }

            if are_equivalent(seed, candidate, config) {
                category.push(candidate);
                processed.insert(candidate.id);
            }
        }

        categories.push(category);
    }

    tracing::debug!(categories = categories.len(), "categorization complete");
    categories
}
