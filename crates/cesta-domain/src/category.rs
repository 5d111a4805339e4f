//! Output cluster of equivalent listings

use serde::{Deserialize, Serialize};

use crate::ProductRecord;

/// A listing entry as it appears inside a category (id dropped).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryMember {
    pub title: String,
    pub supermarket: String,
}

impl From<&ProductRecord> for CategoryMember {
    fn from(record: &ProductRecord) -> Self {
        Self {
            title: record.title.clone(),
            supermarket: record.supermarket.clone(),
        }
    }
}

/// A cluster of listings judged equivalent to a shared seed product.
///
/// The label is the literal title of the earliest-indexed member, and
/// `products` preserves the relative input order. `count` always equals
/// `products.len()`; it is kept explicit because the output format
/// carries it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub category: String,
    pub count: usize,
    pub products: Vec<CategoryMember>,
}

impl Category {
    /// Open a new category seeded with a single record.
    pub fn seeded_with(record: &ProductRecord) -> Self {
        Self {
            category: record.title.clone(),
            count: 1,
            products: vec![CategoryMember::from(record)],
        }
    }

    /// Append a member and keep `count` in step.
    pub fn push(&mut self, record: &ProductRecord) {
        self.products.push(CategoryMember::from(record));
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_sets_label_and_count() {
        let seed = ProductRecord::new(1, "Arroz Branco Tio João 5kg", "Americanas");
        let category = Category::seeded_with(&seed);
        assert_eq!(category.category, "Arroz Branco Tio João 5kg");
        assert_eq!(category.count, 1);
        assert_eq!(category.products.len(), 1);
    }

    #[test]
    fn push_keeps_count_in_step() {
        let seed = ProductRecord::new(1, "Feijão Carioca Camil 1kg", "Magalu");
        let mut category = Category::seeded_with(&seed);
        category.push(&ProductRecord::new(2, "Feijão Camil Carioca 1kg", "Americanas"));
        assert_eq!(category.count, category.products.len());
        assert_eq!(category.products[1].supermarket, "Americanas");
    }

    #[test]
    fn serializes_in_output_shape() {
        let seed = ProductRecord::new(1, "Leite Integral Italac 1L", "Magalu");
        let category = Category::seeded_with(&seed);
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["category"], "Leite Integral Italac 1L");
        assert_eq!(json["count"], 1);
        assert!(json["products"][0].get("id").is_none());
    }
}
