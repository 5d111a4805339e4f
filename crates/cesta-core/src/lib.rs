//! cesta-core: the decision core of the cesta product categorizer
//!
//! This library provides pure Rust implementations of:
//! - Title normalization (diacritics, casing, unit tokens, hyphens)
//! - Structured feature extraction (brand, category, type, size)
//! - Pairwise product equivalence (feature gate + Dice similarity)
//! - Greedy single-pass clustering into output categories
//!
//! The pipeline is synchronous and side-effect-free: it takes a complete
//! in-memory listing and returns the clustered categories. File and
//! network boundaries live in `cesta-cli`.

pub mod clustering;
pub mod config;
pub mod equivalence;
pub mod features;
pub mod lexicon;
pub mod normalization;

// Re-export main types for convenience
pub use clustering::categorize_products;
pub use config::CategorizationConfig;
pub use equivalence::are_equivalent;
pub use features::{extract_features, ProductFeatures};
pub use lexicon::{CategoryKeywords, Lexicon};
pub use normalization::normalize_title;
