pub mod normalize;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

pub use normalize::{RawMeal, normalize};

/// A single dish as shown in the result list and the detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: String,
    pub thumbnail: String,
    pub instructions: String,
    pub video: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn has_video(&self) -> bool {
        !self.video.trim().is_empty()
    }
}

/// Reduced projection of a [`Recipe`] kept in the favourites file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavouriteEntry {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal", default)]
    pub name: String,
    #[serde(rename = "strCategory", default)]
    pub category: String,
    #[serde(rename = "strArea", default)]
    pub area: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: String,
}

impl From<&Recipe> for FavouriteEntry {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            category: recipe.category.clone(),
            area: recipe.area.clone(),
            thumbnail: recipe.thumbnail.clone(),
        }
    }
}

impl From<&FavouriteEntry> for Recipe {
    fn from(entry: &FavouriteEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            category: entry.category.clone(),
            area: entry.area.clone(),
            thumbnail: entry.thumbnail.clone(),
            instructions: String::new(),
            video: String::new(),
            ingredients: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccentPreference {
    pub h: u16,
    #[serde(default = "default_saturation")]
    pub s: u8,
    #[serde(default = "default_lightness")]
    pub l: u8,
}

fn default_saturation() -> u8 {
    AccentPreference::DEFAULT_SATURATION
}

fn default_lightness() -> u8 {
    AccentPreference::DEFAULT_LIGHTNESS
}

impl AccentPreference {
    pub const DEFAULT_HUE: u16 = 270;
    pub const DEFAULT_SATURATION: u8 = 78;
    pub const DEFAULT_LIGHTNESS: u8 = 56;

    pub fn with_hue(h: u16) -> Self {
        Self {
            h: h % 360,
            s: Self::DEFAULT_SATURATION,
            l: Self::DEFAULT_LIGHTNESS,
        }
    }

    pub fn with(self, s: u8, l: u8) -> Self {
        Self {
            s: s.min(100),
            l: l.min(100),
            ..self
        }
    }
}

impl Default for AccentPreference {
    fn default() -> Self {
        Self::with_hue(Self::DEFAULT_HUE)
    }
}

lazy_static! {
    /// Shown whenever the catalog cannot be reached.
    pub static ref SAMPLE_RECIPES: Vec<Recipe> = vec![Recipe {
        id: "s1".to_string(),
        name: "Sample Bowl".to_string(),
        category: "Sample".to_string(),
        area: "Global".to_string(),
        thumbnail: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?q=80&w=1200&auto=format&fit=crop".to_string(),
        instructions: "Sample instructions".to_string(),
        video: String::new(),
        ingredients: vec!["Ingredient 1".to_string(), "Ingredient 2".to_string()],
    }];
}

pub fn sample_recipes() -> Vec<Recipe> {
    SAMPLE_RECIPES.clone()
}
