use serde_json::{Map, Value};

use super::Recipe;

/// Raw catalog record. Kept untyped because the catalog spreads ingredients
/// across numbered `strIngredientN` / `strMeasureN` keys.
pub type RawMeal = Map<String, Value>;

pub const MAX_INGREDIENTS: usize = 20;

fn field(raw: &RawMeal, key: &str) -> String {
    match raw.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn generated_id() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("id_{}", &id[..8])
}

pub fn ingredients(raw: &RawMeal) -> Vec<String> {
    (1..=MAX_INGREDIENTS)
        .filter_map(|i| {
            let name = field(raw, &format!("strIngredient{i}"));
            let name = name.trim();
            if name.is_empty() {
                return None;
            }

            let measure = field(raw, &format!("strMeasure{i}"));
            let measure = measure.trim();
            if measure.is_empty() {
                Some(name.to_string())
            } else {
                Some(format!("{measure} {name}"))
            }
        })
        .collect()
}

pub fn normalize(raw: &RawMeal) -> Recipe {
    let id = field(raw, "idMeal");
    let id = if id.trim().is_empty() {
        generated_id()
    } else {
        id
    };

    Recipe {
        id,
        name: field(raw, "strMeal"),
        category: field(raw, "strCategory"),
        area: field(raw, "strArea"),
        thumbnail: field(raw, "strMealThumb"),
        instructions: field(raw, "strInstructions"),
        video: field(raw, "strYoutube"),
        ingredients: ingredients(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawMeal {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn joins_measure_and_name() {
        let meal = raw(json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup",
            "strIngredient2": "water",
            "strMeasure2": " 1/2 cup ",
            "strIngredient3": "brown sugar",
            "strMeasure3": "",
            "strIngredient4": "",
            "strMeasure4": "",
            "strIngredient5": null,
            "strMeasure5": null,
        }));

        let recipe = normalize(&meal);
        assert_eq!(
            recipe.ingredients,
            vec!["3/4 cup soy sauce", "1/2 cup water", "brown sugar"]
        );
    }

    #[test]
    fn produces_one_entry_per_non_blank_ingredient() {
        for n in 0..=MAX_INGREDIENTS {
            let mut meal = RawMeal::new();
            meal.insert("idMeal".into(), json!("1"));
            for i in 1..=n {
                meal.insert(format!("strIngredient{i}"), json!(format!("item{i}")));
                let measure = if i % 2 == 0 { json!("1 tsp") } else { json!("  ") };
                meal.insert(format!("strMeasure{i}"), measure);
            }

            let list = ingredients(&meal);
            assert_eq!(list.len(), n);
            for (idx, entry) in list.iter().enumerate() {
                let i = idx + 1;
                if i % 2 == 0 {
                    assert_eq!(entry, &format!("1 tsp item{i}"));
                } else {
                    assert_eq!(entry, &format!("item{i}"));
                }
            }
        }
    }

    #[test]
    fn ignores_fields_past_the_twentieth() {
        let meal = raw(json!({
            "idMeal": "1",
            "strIngredient21": "ghost",
        }));
        assert!(ingredients(&meal).is_empty());
    }

    #[test]
    fn coerces_missing_and_non_string_fields() {
        let meal = raw(json!({
            "idMeal": 42,
            "strMeal": null,
            "strCategory": true,
        }));

        let recipe = normalize(&meal);
        assert_eq!(recipe.id, "42");
        assert_eq!(recipe.name, "");
        assert_eq!(recipe.category, "true");
        assert_eq!(recipe.area, "");
        assert_eq!(recipe.video, "");
    }

    #[test]
    fn generates_an_id_when_missing() {
        let recipe = normalize(&RawMeal::new());
        assert!(recipe.id.starts_with("id_"));
        assert_eq!(recipe.id.len(), 11);
    }
}
