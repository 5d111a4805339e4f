//! Title normalization for product comparison

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // Alternation order is significant: longer unit spellings first, bare
    // unit letter last, matching the detection order the lexicon assumes.
    static ref VOLUME_UNITS: Regex = Regex::new(r"(?i)(\d+)\s*(litro|litros|l)").unwrap();
    static ref MASS_UNITS: Regex = Regex::new(r"(?i)(\d+)\s*(quilo|quilos|kg|kilo|kilos)").unwrap();
}

/// Normalize a raw title for comparison.
///
/// - Strips diacritics (NFD decomposition, combining marks removed)
/// - Converts to lowercase
/// - Collapses volume units ("1 Litro" → "1l") and mass units
///   ("5 Quilos" → "5kg")
/// - Replaces hyphens with spaces
///
/// Total over any input; surrounding whitespace is deliberately left
/// alone, so callers that split on words must trim themselves.
pub fn normalize_title(title: &str) -> String {
    let stripped: String = title
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect();

    let lowered = stripped.to_lowercase();

    let volume = VOLUME_UNITS.replace_all(&lowered, "${1}l");
    let mass = MASS_UNITS.replace_all(&volume, "${1}kg");

    mass.replace('-', " ")
}
