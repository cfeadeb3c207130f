use crate::models::{
    CostComparison, Difficulty, FoodRecognitionResponse, Ingredient, IngredientPrices,
    NutritionalInfo, SimilarRecipe, StorePrice,
};

pub const DEMO_DISH_COUNT: usize = 4;

fn similar(items: &[(&str, &str)]) -> Vec<SimilarRecipe> {
    items
        .iter()
        .map(|(id, name)| SimilarRecipe {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect()
}

fn steps(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Demo dish `index % DEMO_DISH_COUNT`: Köfte, Mercimek Çorbası, Karnıyarık, Mantı.
pub fn demo_dish(index: usize) -> FoodRecognitionResponse {
    match index % DEMO_DISH_COUNT {
        0 => FoodRecognitionResponse {
            name: "Köfte".to_string(),
            description: "Türk mutfağının klasik lezzeti, baharatlı dana kıyma köftesi.".to_string(),
            ingredients: vec![
                Ingredient::new("Dana kıyma", 500.0, "g").with_notes("Yağlı"),
                Ingredient::new("Soğan", 1.0, "adet").with_notes("Rendelenmiş"),
                Ingredient::new("Sarımsak", 2.0, "diş").with_notes("Ezilmiş"),
                Ingredient::new("Maydanoz", 0.5, "demet").with_notes("İnce kıyılmış"),
                Ingredient::new("Kimyon", 1.0, "tatlı kaşığı"),
                Ingredient::new("Pul biber", 1.0, "çay kaşığı"),
                Ingredient::new("Tuz", 1.0, "çay kaşığı"),
                Ingredient::new("Karabiber", 0.5, "çay kaşığı"),
            ],
            nutritional_info: NutritionalInfo {
                calories: 320.0,
                protein: 28.0,
                carbs: 5.0,
                fat: 22.0,
                ..Default::default()
            },
            cost_comparison: CostComparison {
                restaurant: 120.0,
                homemade: 60.0,
                savings: None,
            },
            preparation_time: 30,
            difficulty: Difficulty::Kolay,
            steps: steps(&[
                "Kıymayı geniş bir kaba alın.",
                "Rendelenmiş soğan, ezilmiş sarımsak ve kıyılmış maydanozu ekleyin.",
                "Tüm baharatları ekleyip iyice yoğurun.",
                "Yoğurduğunuz harcı 30 dakika buzdolabında dinlendirin.",
                "Harçtan ceviz büyüklüğünde parçalar koparıp yuvarlayın ve hafifçe bastırarak yassılaştırın.",
                "Köfteleri ızgarada veya tavada arkalı önlü pişirin.",
            ]),
            similar_recipes: similar(&[("1", "İzmir Köfte"), ("2", "Adana Kebap"), ("3", "İnegöl Köfte")]),
        },
        1 => FoodRecognitionResponse {
            name: "Mercimek Çorbası".to_string(),
            description: "Geleneksel Türk mutfağından, sebzeli kırmızı mercimek çorbası.".to_string(),
            ingredients: vec![
                Ingredient::new("Kırmızı mercimek", 200.0, "g"),
                Ingredient::new("Soğan", 1.0, "adet").with_notes("Doğranmış"),
                Ingredient::new("Havuç", 1.0, "adet").with_notes("Doğranmış"),
                Ingredient::new("Patates", 1.0, "adet").with_notes("Küp şeklinde"),
                Ingredient::new("Zeytinyağı", 2.0, "yemek kaşığı"),
                Ingredient::new("Tuz", 1.0, "çay kaşığı"),
                Ingredient::new("Karabiber", 0.5, "çay kaşığı"),
                Ingredient::new("Pul biber", 0.5, "çay kaşığı"),
            ],
            nutritional_info: NutritionalInfo {
                calories: 230.0,
                protein: 13.0,
                carbs: 40.0,
                fat: 2.0,
                ..Default::default()
            },
            cost_comparison: CostComparison {
                restaurant: 45.0,
                homemade: 15.0,
                savings: None,
            },
            preparation_time: 40,
            difficulty: Difficulty::Kolay,
            steps: steps(&[
                "Mercimeği yıkayıp süzün.",
                "Zeytinyağında soğanları kavurun.",
                "Havuç ve patatesi ekleyip 2-3 dakika daha kavurun.",
                "Mercimek ve 6 su bardağı su ekleyip karıştırın.",
                "Tuz ve baharatları ekleyin.",
                "Kısık ateşte mercimekler yumuşayana kadar pişirin (yaklaşık 30 dakika).",
                "Blenderdan geçirip pürüzsüz hale getirin.",
            ]),
            similar_recipes: similar(&[("4", "Ezogelin Çorbası"), ("5", "Tarhana Çorbası"), ("6", "Yayla Çorbası")]),
        },
        2 => FoodRecognitionResponse {
            name: "Karnıyarık".to_string(),
            description: "Kıyma ile doldurulmuş, fırında pişirilmiş patlıcan yemeği.".to_string(),
            ingredients: vec![
                Ingredient::new("Patlıcan", 6.0, "adet").with_notes("Orta boy"),
                Ingredient::new("Dana kıyma", 400.0, "g"),
                Ingredient::new("Soğan", 2.0, "adet").with_notes("Doğranmış"),
                Ingredient::new("Domates", 3.0, "adet").with_notes("Doğranmış"),
                Ingredient::new("Sivri biber", 4.0, "adet").with_notes("Doğranmış"),
                Ingredient::new("Sarımsak", 3.0, "diş").with_notes("Ezilmiş"),
                Ingredient::new("Zeytinyağı", 4.0, "yemek kaşığı"),
                Ingredient::new("Tuz", 1.0, "çay kaşığı"),
                Ingredient::new("Karabiber", 0.5, "çay kaşığı"),
            ],
            nutritional_info: NutritionalInfo {
                calories: 320.0,
                protein: 18.0,
                carbs: 15.0,
                fat: 22.0,
                ..Default::default()
            },
            cost_comparison: CostComparison {
                restaurant: 95.0,
                homemade: 50.0,
                savings: None,
            },
            preparation_time: 60,
            difficulty: Difficulty::Orta,
            steps: steps(&[
                "Patlıcanları alacalı soyup tuzlu suda bekletin.",
                "Patlıcanları kurulayıp kızgın yağda kızartın.",
                "Ayrı bir tavada kıymayı kavurun.",
                "Soğan, sarımsak, biber ve domatesi ekleyip pişirin.",
                "Patlıcanları ortadan yarıp içine harç doldurun.",
                "Üzerine domates dilimleri yerleştirip fırında pişirin.",
            ]),
            similar_recipes: similar(&[("7", "İmam Bayıldı"), ("8", "Musakka"), ("9", "Patlıcan Kebabı")]),
        },
        _ => FoodRecognitionResponse {
            name: "Mantı".to_string(),
            description: "Türk mutfağının meşhur hamur işi, kıymalı mantı.".to_string(),
            ingredients: vec![
                Ingredient::new("Un", 3.0, "su bardağı"),
                Ingredient::new("Yumurta", 1.0, "adet"),
                Ingredient::new("Su", 1.0, "su bardağı"),
                Ingredient::new("Tuz", 1.0, "çay kaşığı"),
                Ingredient::new("Dana kıyma", 250.0, "g"),
                Ingredient::new("Soğan", 1.0, "adet").with_notes("Rendelenmiş"),
                Ingredient::new("Yoğurt", 2.0, "su bardağı"),
                Ingredient::new("Sarımsaklı yağ", 2.0, "yemek kaşığı"),
            ],
            nutritional_info: NutritionalInfo {
                calories: 380.0,
                protein: 22.0,
                carbs: 45.0,
                fat: 12.0,
                ..Default::default()
            },
            cost_comparison: CostComparison {
                restaurant: 85.0,
                homemade: 40.0,
                savings: None,
            },
            preparation_time: 120,
            difficulty: Difficulty::Zor,
            steps: steps(&[
                "Un, yumurta, su ve tuzu karıştırıp hamur yapın.",
                "Hamuru dinlendirip ince açın.",
                "Kare şeklinde kesin.",
                "İç harcı için kıyma, soğan, tuz ve karabiberi karıştırın.",
                "Her karenin ortasına harçtan koyup kapatın.",
                "Tuzlu suda haşlayın.",
                "Üzerine sarımsaklı yoğurt ve kızdırılmış yağ gezdirin.",
            ]),
            similar_recipes: similar(&[("10", "Su Böreği"), ("11", "Çiğ Börek"), ("12", "Gözleme")]),
        },
    }
}

/// Stable per-name offset in `0..modulo`, so demo prices don't change between calls.
fn name_offset(name: &str, modulo: u32) -> f64 {
    let sum = name
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    (sum % modulo) as f64
}

/// Demo prices for three stores, in the same ranges the market lookup usually returns.
pub fn demo_prices(ingredients: &[String]) -> Vec<IngredientPrices> {
    ingredients
        .iter()
        .map(|ingredient| IngredientPrices {
            ingredient: ingredient.clone(),
            prices: vec![
                StorePrice {
                    store: "Market A".to_string(),
                    price: name_offset(ingredient, 31) + 5.0,
                },
                StorePrice {
                    store: "Market B".to_string(),
                    price: name_offset(ingredient, 26) + 7.0,
                },
                StorePrice {
                    store: "Pazar".to_string(),
                    price: name_offset(ingredient, 21) + 3.0,
                },
            ],
        })
        .collect()
}
