use crate::model::Recipe;

/// Results delivered by background tasks to the UI loop.
#[derive(Debug, Clone)]
pub enum Event {
    SearchCompleted { seq: u64, recipes: Vec<Recipe> },
    RecipeResolved { id: String, recipe: Option<Recipe> },
}
