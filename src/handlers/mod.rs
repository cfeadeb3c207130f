pub mod recipe;

pub use recipe::{RecipeAnalysis, RecipeHandler};
