use crate::diet::classifier::{is_allergen, Axis};
use crate::models::{DietaryPreferences, FoodRecognitionResponse, Ingredient, SuitabilityVerdict};

fn axis_enabled(preferences: &DietaryPreferences, axis: Axis) -> bool {
    match axis {
        Axis::Vegan => preferences.is_vegan,
        Axis::Vegetarian => preferences.is_vegetarian,
        Axis::GlutenFree => preferences.is_gluten_free,
        Axis::LactoseFree => preferences.is_lactose_free,
    }
}

/// Checks a recipe's ingredients against the user's dietary preferences.
///
/// Reasons come out in ingredient order and, per ingredient, in axis order
/// (vegan, vegetarian, gluten, lactose) followed by allergies in list order.
/// Each enabled axis runs independently, so a vegan user is also checked on
/// the vegetarian axis if that flag is set. An ingredient gets at most one
/// alternative; when several axes suggest one, the first suggestion is kept.
pub fn check_dietary_suitability(
    ingredients: &[Ingredient],
    preferences: &DietaryPreferences,
) -> SuitabilityVerdict {
    let mut verdict = SuitabilityVerdict::default();

    if preferences.is_unrestricted() {
        verdict.suitable = true;
        return verdict;
    }

    for ingredient in ingredients {
        let name = ingredient.name.as_str();

        for axis in Axis::ALL {
            if !axis_enabled(preferences, axis) || !axis.violated_by(name) {
                continue;
            }

            verdict.reasons.push(axis.reason(name));

            if let Some(alternative) = axis.substitute_for(name) {
                verdict
                    .alternatives
                    .entry(name.to_string())
                    .or_insert_with(|| alternative.to_string());
            }
        }

        for allergy in &preferences.allergies {
            if is_allergen(name, allergy) {
                verdict
                    .reasons
                    .push(format!("{} {} içerir (alerjen)", name, allergy.trim()));
            }
        }
    }

    verdict.suitable = verdict.reasons.is_empty();

    log::debug!(
        "🥗 Checked {} ingredients: suitable={}, {} reasons, {} alternatives",
        ingredients.len(),
        verdict.suitable,
        verdict.reasons.len(),
        verdict.alternatives.len()
    );

    verdict
}

pub fn evaluate_recipe(
    recipe: &FoodRecognitionResponse,
    preferences: &DietaryPreferences,
) -> SuitabilityVerdict {
    check_dietary_suitability(&recipe.ingredients, preferences)
}

impl SuitabilityVerdict {
    /// Short user-facing summary in Turkish.
    pub fn summary(&self) -> String {
        if self.suitable {
            return "✅ Bu tarif beslenme tercihlerinize uygun.".to_string();
        }

        let mut text = String::from("⚠️ Bu tarif beslenme tercihlerinize uygun değil:\n");
        for reason in &self.reasons {
            text.push_str(&format!("• {}\n", reason));
        }

        if !self.alternatives.is_empty() {
            text.push_str("\n🔄 Alternatif öneriler:\n");
            for (original, alternative) in &self.alternatives {
                text.push_str(&format!("• {} → {}\n", original, alternative));
            }
        }

        text.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients(names: &[&str]) -> Vec<Ingredient> {
        names.iter().map(|n| Ingredient::new(*n, 1.0, "adet")).collect()
    }

    fn all_axes() -> DietaryPreferences {
        DietaryPreferences {
            is_vegan: true,
            is_vegetarian: true,
            is_gluten_free: true,
            is_lactose_free: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_preferences_is_always_suitable() {
        let list = ingredients(&["Dana kıyma", "Süt", "Un", "Tavuk", "Yoğurt"]);
        let verdict = check_dietary_suitability(&list, &DietaryPreferences::default());

        assert!(verdict.suitable);
        assert!(verdict.reasons.is_empty());
        assert!(verdict.alternatives.is_empty());
    }

    #[test]
    fn test_milk_vegan_and_lactose_free() {
        let list = vec![Ingredient::new("Süt", 1.0, "L")];
        let prefs = DietaryPreferences {
            is_vegan: true,
            is_lactose_free: true,
            ..Default::default()
        };

        let verdict = check_dietary_suitability(&list, &prefs);

        assert!(!verdict.suitable);
        assert_eq!(verdict.reasons, vec!["Süt vegan değildir", "Süt laktoz içerir"]);
        assert_eq!(
            verdict.alternatives.get("Süt").map(String::as_str),
            Some("Badem sütü veya hindistan cevizi sütü")
        );
    }

    #[test]
    fn test_tomato_is_vegan() {
        let list = vec![Ingredient::new("Domates", 2.0, "adet")];
        let prefs = DietaryPreferences {
            is_vegan: true,
            ..Default::default()
        };

        let verdict = check_dietary_suitability(&list, &prefs);

        assert!(verdict.suitable);
        assert!(verdict.reasons.is_empty());
    }

    #[test]
    fn test_one_reason_per_ingredient_per_axis() {
        // tereyağı, süt and krema are all vegan keywords
        let list = ingredients(&["Tereyağı ve süt kreması"]);
        let prefs = DietaryPreferences {
            is_vegan: true,
            ..Default::default()
        };

        let verdict = check_dietary_suitability(&list, &prefs);

        assert_eq!(verdict.reasons.len(), 1);
        assert!(verdict.reasons[0].contains("Tereyağı ve süt kreması"));
    }

    #[test]
    fn test_vegan_does_not_skip_vegetarian() {
        let list = ingredients(&["Dana eti"]);
        let prefs = DietaryPreferences {
            is_vegan: true,
            is_vegetarian: true,
            ..Default::default()
        };

        let verdict = check_dietary_suitability(&list, &prefs);

        assert_eq!(
            verdict.reasons,
            vec!["Dana eti vegan değildir", "Dana eti vejetaryen değildir"]
        );
        assert_eq!(
            verdict.alternatives.get("Dana eti").map(String::as_str),
            Some("Tofu veya tempeh")
        );
    }

    #[test]
    fn test_reason_ordering() {
        let list = ingredients(&["Makarna", "Peynir", "Fındık"]);
        let prefs = DietaryPreferences {
            allergies: vec!["fındık".to_string()],
            ..all_axes()
        };

        let verdict = check_dietary_suitability(&list, &prefs);

        assert_eq!(
            verdict.reasons,
            vec![
                "Makarna gluten içerir",
                "Peynir vegan değildir",
                "Peynir laktoz içerir",
                "Fındık fındık içerir (alerjen)",
            ]
        );
        assert_eq!(verdict.alternatives.len(), 2);
        assert_eq!(verdict.alternatives["Makarna"], "Glutensiz makarna");
        assert_eq!(verdict.alternatives["Peynir"], "Laktozsuz peynir");
    }

    #[test]
    fn test_allergy_case_insensitive() {
        let list = ingredients(&["fındık ezmesi"]);
        let prefs = DietaryPreferences {
            allergies: vec!["Fındık".to_string()],
            ..Default::default()
        };

        let verdict = check_dietary_suitability(&list, &prefs);

        assert!(!verdict.suitable);
        assert_eq!(verdict.reasons, vec!["fındık ezmesi Fındık içerir (alerjen)"]);
        assert!(verdict.alternatives.is_empty());
    }

    #[test]
    fn test_blank_allergy_matches_nothing() {
        let list = ingredients(&["Domates", "Soğan"]);
        let prefs = DietaryPreferences {
            allergies: vec!["".to_string(), " ".to_string()],
            ..Default::default()
        };

        assert!(check_dietary_suitability(&list, &prefs).suitable);
    }

    #[test]
    fn test_missing_name_never_matches() {
        let list = vec![Ingredient::default()];
        let prefs = DietaryPreferences {
            allergies: vec!["süt".to_string()],
            ..all_axes()
        };

        assert!(check_dietary_suitability(&list, &prefs).suitable);
    }

    #[test]
    fn test_gluten_toggle_keeps_other_axes() {
        let list = ingredients(&["Un", "Süt", "Tavuk", "Ekmek", "Yoğurt"]);
        let without = DietaryPreferences {
            is_vegan: true,
            is_vegetarian: true,
            is_lactose_free: true,
            ..Default::default()
        };
        let with = DietaryPreferences {
            is_gluten_free: true,
            ..without.clone()
        };

        let a = check_dietary_suitability(&list, &without);
        let b = check_dietary_suitability(&list, &with);

        let non_gluten: Vec<_> = b
            .reasons
            .iter()
            .filter(|r| !r.ends_with("gluten içerir"))
            .cloned()
            .collect();
        assert_eq!(a.reasons, non_gluten);
        assert!(b.reasons.len() > a.reasons.len());
    }

    #[test]
    fn test_idempotent() {
        let list = ingredients(&["Dana kıyma", "Un", "Yumurta", "Yoğurt"]);
        let prefs = DietaryPreferences {
            allergies: vec!["yumurta".to_string()],
            ..all_axes()
        };

        assert_eq!(
            check_dietary_suitability(&list, &prefs),
            check_dietary_suitability(&list, &prefs)
        );
    }

    #[test]
    fn test_suitable_iff_no_reasons() {
        let lists = [
            ingredients(&[]),
            ingredients(&["Patlıcan", "Zeytinyağı"]),
            ingredients(&["Sucuk", "Kaşar"]),
        ];
        for list in &lists {
            let verdict = check_dietary_suitability(list, &all_axes());
            assert_eq!(verdict.suitable, verdict.reasons.is_empty());
        }
    }

    #[test]
    fn test_summary() {
        let ok = SuitabilityVerdict {
            suitable: true,
            ..Default::default()
        };
        assert!(ok.summary().starts_with("✅"));

        let prefs = DietaryPreferences {
            is_lactose_free: true,
            ..Default::default()
        };
        let verdict = check_dietary_suitability(&ingredients(&["Süt"]), &prefs);
        let summary = verdict.summary();

        assert!(summary.starts_with("⚠️"));
        assert!(summary.contains("• Süt laktoz içerir"));
        assert!(summary.contains("Süt → Laktozsuz süt veya badem sütü"));
    }
}
