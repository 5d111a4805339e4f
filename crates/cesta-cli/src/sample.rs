//! Bundled sample listing
//!
//! The fallback dataset used when no scraped listing is available, with
//! the title variations (word order, accents, unit spellings, hyphens)
//! the categorizer is built to absorb.

use cesta_domain::ProductRecord;

/// The bundled 20-product sample listing.
pub fn sample_products() -> Vec<ProductRecord> {
    let entries: [(&str, &str); 20] = [
        // Leites
        ("Leite Integral Piracanjuba 1L", "MercadoLivre"),
        ("Leite Piracanjuba Integral 1L", "Americanas"),
        ("Leite Integral Italac 1L", "Magalu"),
        ("Leite Italac Integral 1L", "MercadoLivre"),
        ("Leite Parmalat Integral 1L", "Americanas"),
        ("Leite Desnatado Piracanjuba 1L", "Magalu"),
        ("Piracanjuba Leite Desnatado 1L", "MercadoLivre"),
        ("Leite Semi-Desnatado Piracanjuba 1L", "Americanas"),
        ("Leite Piracanjuba Semi Desnatado 1 Litro", "Magalu"),
        // Arroz
        ("Arroz Branco Tio João 5kg", "MercadoLivre"),
        ("Arroz Tio João Branco 5kg", "Americanas"),
        ("Arroz Tio João Integral 5kg", "Magalu"),
        ("Arroz Camil Branco 5kg", "MercadoLivre"),
        ("Arroz Branco Camil Tipo 1 Pacote 5kg", "Americanas"),
        // Feijão
        ("Feijão Carioca Camil 1kg", "Magalu"),
        ("Feijão Camil Tipo Carioca 1kg", "MercadoLivre"),
        ("Feijao Carioca Camil 1 Quilo", "Americanas"),
        ("Feijão Preto Camil 1kg", "Magalu"),
        ("Feijão Camil Preto Tipo 1 Pacote 1kg", "MercadoLivre"),
        ("Feijão Kicaldo Carioca 1kg", "Americanas"),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, (title, supermarket))| ProductRecord::new(i as i64 + 1, *title, *supermarket))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cesta_core::{categorize_products, CategorizationConfig};

    #[test]
    fn sample_has_sequential_ids() {
        let products = sample_products();
        assert_eq!(products.len(), 20);
        for (i, product) in products.iter().enumerate() {
            assert_eq!(product.id, i as i64 + 1);
        }
    }

    #[test]
    fn sample_clusters_into_known_categories() {
        let products = sample_products();
        let categories = categorize_products(&products, &CategorizationConfig::default());

        let counts: Vec<usize> = categories.iter().map(|c| c.count).collect();
        assert_eq!(counts, [2, 2, 1, 4, 2, 1, 1, 1, 3, 1, 1, 1]);
        assert_eq!(counts.iter().sum::<usize>(), products.len());

        assert_eq!(categories[0].category, "Leite Integral Piracanjuba 1L");
        // Desnatado and semi-desnatado variants share the "desnatado"
        // type keyword and merge under the first desnatado seed
        assert_eq!(categories[3].category, "Leite Desnatado Piracanjuba 1L");
        assert_eq!(categories[3].count, 4);
        // Same features, but the filler words keep similarity at or
        // below the threshold, so the long Camil title stays separate
        assert_eq!(categories[7].category, "Arroz Branco Camil Tipo 1 Pacote 5kg");
        assert_eq!(categories[8].count, 3);
    }
}
