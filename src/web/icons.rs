//! Category icon lookup and the "others last" ordering of the category grid.
//!
//! Icons come from an ordered table of (pattern, icon) pairs matched against the lowercased
//! category name. The first matching row wins, so exact names sit above the keyword
//! families and the order of the rows matters.

use crate::core::category::CategoryWithSubCategories;
use regex::RegexSet;
use serde::Serialize;
use std::sync::LazyLock;

/// Icon shown on a category tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryIcon {
    /// Beds, mattresses, pillows
    Bed,
    /// Decoration
    Palette,
    /// Kitchen and dining
    Utensils,
    /// Gifts and complimentary items
    Gift,
    /// Chairs
    Armchair,
    /// Filing cabinets
    Archive,
    /// Storage of any kind
    Boxes,
    /// Tables and desks
    Table,
    /// Lighting and bedside tables
    Lamp,
    /// Sofas and living room
    Sofa,
    /// Office furniture
    Computer,
    /// Entertainment
    Tv,
    /// Bathroom
    Bath,
    /// Everything else
    Ellipsis,
}

const ICON_RULES: &[(&str, CategoryIcon)] = &[
    // Exact names used by the catalog
    (r"^bantal$", CategoryIcon::Bed),
    (r"^dekorasi$", CategoryIcon::Palette),
    (r"^kasur$", CategoryIcon::Bed),
    (r"^kitchen set$", CategoryIcon::Utensils),
    (r"^kitchen ware$", CategoryIcon::Utensils),
    (r"^komplimen$", CategoryIcon::Gift),
    (r"^kursi$", CategoryIcon::Armchair),
    (r"^lemari arsip$", CategoryIcon::Archive),
    (r"^lemari buffet$", CategoryIcon::Boxes),
    (r"^lemari pakaian$", CategoryIcon::Boxes),
    (r"^meja$", CategoryIcon::Table),
    (r"^nakas$", CategoryIcon::Lamp),
    (r"^rak$", CategoryIcon::Boxes),
    (r"^sofa$", CategoryIcon::Sofa),
    (r"^lainnya$|^others?$", CategoryIcon::Ellipsis),
    // Keyword families
    (r"(tamu|sofa|ruang tamu)", CategoryIcon::Sofa),
    (r"(kamar|tidur|bed|ranjang)", CategoryIcon::Bed),
    (r"(makan|dapur|kitchen|meja makan|utensil|ware)", CategoryIcon::Utensils),
    (r"(kantor|kerja|office|komputer|meja kerja)", CategoryIcon::Computer),
    (r"(kursi|armchair)", CategoryIcon::Armchair),
    (r"(lampu|penerangan|lighting)", CategoryIcon::Lamp),
    (r"(tv|hiburan|entertainment)", CategoryIcon::Tv),
    (r"(kamar mandi|bath|toilet)", CategoryIcon::Bath),
    (
        r"(storage|rak|lemari|box|penyimpanan|arsip|buffet|pakaian)",
        CategoryIcon::Boxes,
    ),
    (r"(meja|table|desk)", CategoryIcon::Table),
    (r"(dekor|dekorasi|deco|hias)", CategoryIcon::Palette),
    (r"(hadiah|gift|bonus|kompli)", CategoryIcon::Gift),
];

#[allow(clippy::expect_used)]
static ICON_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(ICON_RULES.iter().map(|(pattern, _)| *pattern))
        .expect("icon patterns are constant and valid")
});

/// Picks the icon for a category name; unknown or missing names get [`CategoryIcon::Ellipsis`].
#[must_use]
pub fn category_icon(name: Option<&str>) -> CategoryIcon {
    let name = name.unwrap_or_default().to_lowercase();
    ICON_PATTERNS
        .matches(&name)
        .iter()
        .next()
        .map_or(CategoryIcon::Ellipsis, |index| ICON_RULES[index].1)
}

/// Whether a category is a catch-all ("Lainnya", "Other", "Others").
#[must_use]
pub fn is_others(name: &str) -> bool {
    let name = name.to_lowercase();
    name.contains("lainnya") || name.contains("other")
}

/// Orders categories by lowercased name with catch-all categories moved to the end.
pub fn sort_others_last(categories: &mut [CategoryWithSubCategories]) {
    categories.sort_by_cached_key(|c| (is_others(&c.category.name), c.category.name.to_lowercase()));
}
