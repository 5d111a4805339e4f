//! Injectable matching dictionary for feature extraction
//!
//! The lexicon is data, not behavior: it can be swapped (or loaded from
//! JSON) without touching the extraction algorithm. All entries must be
//! pre-normalized (lowercase, accent-free) because they are matched by
//! substring against normalized titles, and every list is ordered —
//! detection is first-match-wins, so order is a tie-break, not cosmetics.

use serde::{Deserialize, Serialize};

/// A product category and its type keywords, in match-priority order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryKeywords {
    pub name: String,
    pub types: Vec<String>,
}

/// Ordered brand and category/type dictionary.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Lexicon {
    pub brands: Vec<String>,
    pub categories: Vec<CategoryKeywords>,
}

impl Lexicon {
    fn category(name: &str, types: &[&str]) -> CategoryKeywords {
        CategoryKeywords {
            name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            brands: ["piracanjuba", "italac", "parmalat", "tio joao", "camil"]
                .iter()
                .map(|b| b.to_string())
                .collect(),
            categories: vec![
                Self::category(
                    "leite",
                    &["integral", "desnatado", "semi desnatado", "semi-desnatado"],
                ),
                Self::category("arroz", &["branco", "integral", "parboilizado"]),
                Self::category("feijao", &["carioca", "preto", "vermelho"]),
            ],
        }
    }
}
