//! Selling points shown on the product detail page, chosen by product type name.

use serde::Serialize;

/// One line of the advantages panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductAdvantage {
    /// Text shown to the customer
    pub text: &'static str,
}

const fn advantage(text: &'static str) -> ProductAdvantage {
    ProductAdvantage { text }
}

const DEFAULT_ADVANTAGES: &[ProductAdvantage] = &[
    advantage("Material berkualitas tinggi"),
    advantage("Desain modern dan elegan"),
    advantage("Garansi 1 tahun"),
    advantage("Gratis ongkir area Bekasi & Jogja"),
];

const SOFA_ADVANTAGES: &[ProductAdvantage] = &[
    advantage("Garansi 3 tahun"),
    advantage("Gratis ongkir se Jawa"),
    advantage("Material berkualitas tinggi"),
    advantage("One day service"),
];

const WOOD_ADVANTAGES: &[ProductAdvantage] = &[
    advantage("Garansi 1 tahun"),
    advantage("Full kayu jati"),
    advantage("Gratis ongkir se Jawa"),
    advantage("Anti rayap"),
    advantage("Finishing premium"),
];

const FABRICATION_ADVANTAGES: &[ProductAdvantage] = &[
    advantage("1 minggu sampai"),
    advantage("Garansi dari vendor"),
    advantage("Gratis ongkir area Jogja dan sekitarnya"),
    advantage("Custom sesuai kebutuhan"),
];

/// Advantages for a product type; checked in order sofa, wood, fabrication, then default.
#[must_use]
pub fn product_advantages(product_type_name: Option<&str>) -> &'static [ProductAdvantage] {
    let Some(name) = product_type_name.filter(|n| !n.is_empty()) else {
        return DEFAULT_ADVANTAGES;
    };
    let name = name.to_lowercase();

    if name.contains("sofa") {
        SOFA_ADVANTAGES
    } else if name.contains("kayu") || name.contains("wood") {
        WOOD_ADVANTAGES
    } else if name.contains("fabrikasi") || name.contains("fabrication") {
        FABRICATION_ADVANTAGES
    } else {
        DEFAULT_ADVANTAGES
    }
}
