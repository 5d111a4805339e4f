//! Pairwise product equivalence

use strsim::sorensen_dice;

use cesta_domain::ProductRecord;

use crate::config::CategorizationConfig;
use crate::features::extract_features;
use crate::normalization::normalize_title;

/// Decide whether two records denote the same underlying product.
///
/// Hard gate first: brand, category, type, and size must all agree
/// exactly (two absent values agree). Only then is the soft gate
/// computed: Sørensen–Dice bigram similarity over the normalized titles,
/// which must strictly exceed the configured threshold. Symmetric by
/// construction; not transitive.
pub fn are_equivalent(a: &ProductRecord, b: &ProductRecord, config: &CategorizationConfig) -> bool {
    let features_a = extract_features(&a.title, &config.lexicon);
    let features_b = extract_features(&b.title, &config.lexicon);

    if features_a != features_b {
        tracing::debug!(a = %a.title, b = %b.title, "feature gate rejected pair");
        return false;
    }

    let norm_a = normalize_title(&a.title);
    let norm_b = normalize_title(&b.title);
    let similarity = sorensen_dice(&norm_a, &norm_b);
    tracing::debug!(a = %a.title, b = %b.title, similarity, "feature gate passed");

    similarity > config.similarity_threshold
}
