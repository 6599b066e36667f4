pub mod error;

use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::model::{RawMeal, Recipe, normalize, sample_recipes};

pub use error::ApiError;

pub const DEFAULT_API_BASE: &str = "https://www.themealdb.com/api/json/v1/1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const SAMPLE_LETTERS: [&str; 10] = ["a", "b", "c", "d", "m", "s", "p", "t", "r", "l"];
const SAMPLE_QUERIES: usize = 6;
pub const SAMPLE_LIMIT: usize = 12;

/// Read-only access to the recipe catalog. Implementations never fail:
/// errors are logged and replaced by fallback values.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn search_by_text(&self, query: &str) -> Vec<Recipe>;
    async fn lookup_by_id(&self, id: &str) -> Option<Recipe>;
    async fn random_sample(&self) -> Vec<Recipe>;
}

#[derive(Debug, Deserialize)]
struct MealsResponse {
    meals: Option<Vec<RawMeal>>,
}

pub struct ApiService {
    client: reqwest::Client,
    base: String,
}

impl ApiService {
    pub fn new(api_base: &str) -> Result<Self, ApiError> {
        Url::parse(api_base).map_err(|e| ApiError::Url(e.to_string()))?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base: api_base.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str, key: &str, value: &str) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}/{}", self.base, path))
            .map_err(|e| ApiError::Url(e.to_string()))?;
        url.query_pairs_mut().append_pair(key, value);
        Ok(url)
    }

    async fn fetch_meals(&self, url: Url) -> Result<Vec<RawMeal>, ApiError> {
        debug!(url = url.as_str(), "catalog_request");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body: MealsResponse = response.json().await?;
        Ok(body.meals.unwrap_or_default())
    }

    async fn search_raw(&self, query: &str) -> Result<Vec<Recipe>, ApiError> {
        let url = self.endpoint("search.php", "s", query)?;
        let meals = self.fetch_meals(url).await?;
        Ok(meals.iter().map(normalize).collect())
    }

    async fn lookup_raw(&self, id: &str) -> Result<Option<Recipe>, ApiError> {
        let url = self.endpoint("lookup.php", "i", id)?;
        let meals = self.fetch_meals(url).await?;
        Ok(meals.first().map(normalize))
    }
}

/// Concatenates per-letter results in order and caps them. Falls back to the
/// sample list when nothing came back at all.
pub fn collect_sample(results: Vec<Option<Vec<Recipe>>>) -> Vec<Recipe> {
    let recipes: Vec<Recipe> = results
        .into_iter()
        .flatten()
        .flatten()
        .take(SAMPLE_LIMIT)
        .collect();

    if recipes.is_empty() {
        sample_recipes()
    } else {
        recipes
    }
}

#[async_trait]
impl RecipeSource for ApiService {
    async fn search_by_text(&self, query: &str) -> Vec<Recipe> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.search_raw(query).await {
            Ok(recipes) => recipes,
            Err(e) => {
                warn!(query, error = %e, "search failed, using sample recipes");
                sample_recipes()
            }
        }
    }

    async fn lookup_by_id(&self, id: &str) -> Option<Recipe> {
        if id.is_empty() {
            return None;
        }

        match self.lookup_raw(id).await {
            Ok(recipe) => recipe,
            Err(e) => {
                warn!(id, error = %e, "lookup failed");
                None
            }
        }
    }

    async fn random_sample(&self) -> Vec<Recipe> {
        let requests = SAMPLE_LETTERS
            .iter()
            .take(SAMPLE_QUERIES)
            .map(|letter| async move {
                match self.search_raw(letter).await {
                    Ok(recipes) => Some(recipes),
                    Err(e) => {
                        warn!(letter, error = %e, "sample query failed");
                        None
                    }
                }
            });

        collect_sample(join_all(requests).await)
    }
}
