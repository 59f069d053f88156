use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical unit abbreviations, in display order
pub const CANONICAL_UNITS: &[&str] = &[
    "tbsp", "tsp", "cup", "oz", "lb", "g", "kg", "mg", "ml", "l", "qt", "pt", "gal", "pinch",
    "dash", "clove", "can", "pkg", "slice", "stick",
];

/// Accepted spellings grouped by canonical form. Plurals are resolved by
/// suffix stripping in [`lookup`].
const UNIT_ALIASES: &[(&str, &[&str])] = &[
    ("tbsp", &["tablespoon", "tbsp", "tbs", "tbl", "tblsp", "tblspn"]),
    ("tsp", &["teaspoon", "tsp", "tspn"]),
    ("cup", &["cup", "c"]),
    ("oz", &["ounce", "oz"]),
    ("lb", &["pound", "lb", "#"]),
    ("g", &["gram", "gramme", "g", "gr"]),
    ("kg", &["kilogram", "kilogramme", "kilo", "kg"]),
    ("mg", &["milligram", "milligramme", "mg"]),
    ("ml", &["milliliter", "millilitre", "ml"]),
    ("l", &["liter", "litre", "l", "ltr"]),
    ("qt", &["quart", "qt"]),
    ("pt", &["pint", "pt"]),
    ("gal", &["gallon", "gal"]),
    ("pinch", &["pinch"]),
    ("dash", &["dash"]),
    ("clove", &["clove"]),
    ("can", &["can", "tin"]),
    ("pkg", &["package", "packet", "pkg", "pack"]),
    ("slice", &["slice"]),
    ("stick", &["stick"]),
];

/// Alias -> canonical lookup table
static UNIT_TABLE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for (canonical, aliases) in UNIT_ALIASES {
        for alias in *aliases {
            m.insert(*alias, *canonical);
        }
    }
    m
});

/// Resolve a token to its canonical unit.
///
/// The token is case-folded and a trailing period or comma is dropped
/// before lookup. If the exact spelling is unknown, "es" and then "s"
/// suffixes are stripped.
pub fn lookup(token: &str) -> Option<&'static str> {
    let folded = token.trim_end_matches(['.', ',']).to_lowercase();
    if folded.is_empty() {
        return None;
    }

    if let Some(canonical) = UNIT_TABLE.get(folded.as_str()) {
        return Some(canonical);
    }

    ["es", "s"].iter().find_map(|suffix| {
        folded
            .strip_suffix(suffix)
            .filter(|stem| !stem.is_empty())
            .and_then(|stem| UNIT_TABLE.get(stem).copied())
    })
}

/// Whether `unit` is one of the canonical abbreviations
pub fn is_canonical(unit: &str) -> bool {
    CANONICAL_UNITS.contains(&unit)
}

/// Ordered list of canonical abbreviations
pub fn canonical_units() -> &'static [&'static str] {
    CANONICAL_UNITS
}
