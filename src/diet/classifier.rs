//! Keyword-based ingredient classification.
//!
//! An ingredient violates an axis when its case-folded name contains any of
//! the axis keywords as a substring. No plural, diacritic or synonym handling
//! is done, so unlisted synonyms slip through (`kaşar`) and embedded keywords
//! over-match (`et` in `Ketçap`, `bal` in `Balkabağı`, `un` in `Pirinç unu`).

pub const NON_VEGAN_KEYWORDS: &[&str] = &[
    "et", "süt", "yoğurt", "peynir", "tereyağı", "krema", "yumurta", "bal",
];

pub const NON_VEGETARIAN_KEYWORDS: &[&str] = &[
    "et", "tavuk", "balık", "jambon", "sosis", "sucuk", "pastırma",
];

pub const GLUTEN_KEYWORDS: &[&str] = &["buğday", "un", "makarna", "ekmek", "bulgur", "irmik"];

pub const LACTOSE_KEYWORDS: &[&str] = &["süt", "peynir", "yoğurt", "krema", "tereyağı"];

// (pattern, alternative) - first matching pattern wins
pub const VEGAN_SUBSTITUTES: &[(&str, &str)] = &[
    ("süt", "Badem sütü veya hindistan cevizi sütü"),
    ("et", "Tofu veya tempeh"),
];

pub const GLUTEN_SUBSTITUTES: &[(&str, &str)] = &[
    ("un", "Glutensiz un veya badem unu"),
    ("makarna", "Glutensiz makarna"),
];

pub const LACTOSE_SUBSTITUTES: &[(&str, &str)] = &[
    ("süt", "Laktozsuz süt veya badem sütü"),
    ("peynir", "Laktozsuz peynir"),
];

/// Lower-cases `s`. `İ` becomes a plain `i` instead of `i` + combining dot.
pub fn fold_case(s: &str) -> String {
    s.replace('İ', "i").to_lowercase()
}

/// True iff the folded `name` contains any of `keywords` as a substring.
pub fn matches_any(name: &str, keywords: &[&str]) -> bool {
    let name = fold_case(name);
    keywords
        .iter()
        .any(|keyword| !keyword.is_empty() && name.contains(&fold_case(keyword)))
}

/// Allergen check for a single allergy entry. Blank entries never match.
pub fn is_allergen(name: &str, allergy: &str) -> bool {
    let allergy = fold_case(allergy.trim());
    !allergy.is_empty() && fold_case(name).contains(&allergy)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vegan,
    Vegetarian,
    GlutenFree,
    LactoseFree,
}

impl Axis {
    /// Evaluation order of the preference axes.
    pub const ALL: [Axis; 4] = [Axis::Vegan, Axis::Vegetarian, Axis::GlutenFree, Axis::LactoseFree];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Axis::Vegan => NON_VEGAN_KEYWORDS,
            Axis::Vegetarian => NON_VEGETARIAN_KEYWORDS,
            Axis::GlutenFree => GLUTEN_KEYWORDS,
            Axis::LactoseFree => LACTOSE_KEYWORDS,
        }
    }

    pub fn substitutes(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Axis::Vegan => VEGAN_SUBSTITUTES,
            Axis::Vegetarian => &[],
            Axis::GlutenFree => GLUTEN_SUBSTITUTES,
            Axis::LactoseFree => LACTOSE_SUBSTITUTES,
        }
    }

    pub fn violated_by(self, name: &str) -> bool {
        matches_any(name, self.keywords())
    }

    pub fn substitute_for(self, name: &str) -> Option<&'static str> {
        let folded = fold_case(name);
        self.substitutes()
            .iter()
            .find(|(pattern, _)| folded.contains(pattern))
            .map(|(_, alternative)| *alternative)
    }

    /// User-facing reason text for a violating ingredient.
    pub fn reason(self, name: &str) -> String {
        match self {
            Axis::Vegan => format!("{} vegan değildir", name),
            Axis::Vegetarian => format!("{} vejetaryen değildir", name),
            Axis::GlutenFree => format!("{} gluten içerir", name),
            Axis::LactoseFree => format!("{} laktoz içerir", name),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Axis::Vegan => "vegan",
            Axis::Vegetarian => "vejetaryen",
            Axis::GlutenFree => "glutensiz",
            Axis::LactoseFree => "laktozsuz",
        };
        write!(f, "{}", s)
    }
}

/// Dietary tags of a single ingredient, independent of any user preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngredientFlags {
    pub contains_meat: bool,
    pub contains_dairy: bool,
    pub contains_gluten: bool,
    pub animal_derived: bool,
}

pub fn classify(name: &str) -> IngredientFlags {
    IngredientFlags {
        contains_meat: Axis::Vegetarian.violated_by(name),
        contains_dairy: Axis::LactoseFree.violated_by(name),
        contains_gluten: Axis::GlutenFree.violated_by(name),
        animal_derived: Axis::Vegan.violated_by(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_tables_are_folded() {
        for axis in Axis::ALL {
            assert!(!axis.keywords().is_empty(), "{} has no keywords", axis);
            for keyword in axis.keywords() {
                assert_eq!(*keyword, fold_case(keyword));
            }
            for (pattern, _) in axis.substitutes() {
                assert_eq!(*pattern, fold_case(pattern));
            }
        }
    }

    #[test]
    fn test_matches_any_is_case_insensitive() {
        assert!(matches_any("SÜT", NON_VEGAN_KEYWORDS));
        assert!(matches_any("Tam Buğday Ekmeği", GLUTEN_KEYWORDS));
        assert!(!matches_any("Domates", NON_VEGAN_KEYWORDS));
        assert!(!matches_any("", NON_VEGAN_KEYWORDS));
    }

    #[test]
    fn test_matches_any_empty_keyword_list() {
        assert!(!matches_any("Süt", &[]));
    }

    #[test]
    fn test_fold_case_dotted_capital_i() {
        assert_eq!(fold_case("İRMİK"), "irmik");
        assert!(Axis::GlutenFree.violated_by("İRMİK HELVASI"));
    }

    #[test]
    fn test_substring_collisions_are_kept() {
        // known imprecision of plain substring matching
        assert!(Axis::Vegan.violated_by("Ketçap"));
        assert!(Axis::Vegan.violated_by("Balkabağı"));
        assert!(Axis::GlutenFree.violated_by("Pirinç unu"));
        assert!(!Axis::LactoseFree.violated_by("Kaşar"));
    }

    #[test]
    fn test_substitute_first_pattern_wins() {
        // "Sütlü et sosu" contains both "süt" and "et"
        assert_eq!(
            Axis::Vegan.substitute_for("Sütlü et sosu"),
            Some("Badem sütü veya hindistan cevizi sütü")
        );
        assert_eq!(Axis::Vegan.substitute_for("Dana eti"), Some("Tofu veya tempeh"));
        assert_eq!(Axis::Vegan.substitute_for("Yumurta"), None);
        assert_eq!(Axis::Vegetarian.substitute_for("Tavuk"), None);
        assert_eq!(Axis::GlutenFree.substitute_for("Makarna"), Some("Glutensiz makarna"));
    }

    #[test]
    fn test_is_allergen() {
        assert!(is_allergen("fındık ezmesi", "Fındık"));
        assert!(is_allergen("Fıstık ezmesi", "fıstık"));
        assert!(!is_allergen("Ceviz", "fındık"));
        assert!(!is_allergen("Ceviz", ""));
        assert!(!is_allergen("Ceviz", "   "));
    }

    #[test]
    fn test_classify() {
        let flags = classify("Tavuk göğsü");
        assert!(flags.contains_meat);
        assert!(!flags.contains_dairy);

        let flags = classify("Beyaz peynir");
        assert!(flags.contains_dairy);
        assert!(flags.animal_derived);
        assert!(!flags.contains_meat);
        assert!(!flags.contains_gluten);

        assert_eq!(classify("Domates"), IngredientFlags::default());
    }
}
