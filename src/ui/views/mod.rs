pub mod drawer;
pub mod modal;
pub mod results;

pub use drawer::FavouritesDrawer;
pub use modal::RecipeModal;
pub use results::ResultsView;
