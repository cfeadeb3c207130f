pub mod classifier;
pub mod evaluator;

pub use classifier::{classify, matches_any, Axis, IngredientFlags};
pub use evaluator::{check_dietary_suitability, evaluate_recipe};
