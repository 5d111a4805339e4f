//! Categorization configuration

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// Configuration for a categorization run.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategorizationConfig {
    /// Matching dictionary injected into feature extraction.
    pub lexicon: Lexicon,
    /// Normalized-title similarity two records must strictly exceed once
    /// their structured features already agree (0.0 - 1.0).
    pub similarity_threshold: f64,
}

impl Default for CategorizationConfig {
    fn default() -> Self {
        Self {
            lexicon: Lexicon::default(),
            similarity_threshold: 0.7,
        }
    }
}

impl CategorizationConfig {
    /// Default thresholds with a caller-supplied lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            ..Self::default()
        }
    }
}
