use serde::{Deserialize, Serialize};

use crate::nutrition::dto::NutritionReport;

#[derive(Debug, Deserialize)]
pub struct GenerateRecipeRequest {
    pub ingredients: String,
    pub equipment: String,
    #[serde(default)]
    pub dietary_restrictions: String,
    #[serde(default)]
    pub cuisine: Option<Cuisine>,
    #[serde(default)]
    pub time_constraint: Option<TimeConstraint>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// How many independent completions to request. Defaults to the
    /// configured variant count; clamped server-side.
    #[serde(default)]
    pub variants: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cuisine {
    Italian,
    Indian,
    Mexican,
    Chinese,
    Japanese,
    French,
    Mediterranean,
    Thai,
    American,
}

impl Cuisine {
    pub fn as_str(self) -> &'static str {
        match self {
            Cuisine::Italian => "Italian",
            Cuisine::Indian => "Indian",
            Cuisine::Mexican => "Mexican",
            Cuisine::Chinese => "Chinese",
            Cuisine::Japanese => "Japanese",
            Cuisine::French => "French",
            Cuisine::Mediterranean => "Mediterranean",
            Cuisine::Thai => "Thai",
            Cuisine::American => "American",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeConstraint {
    #[serde(rename = "15_minutes")]
    Minutes15,
    #[serde(rename = "30_minutes")]
    Minutes30,
    #[serde(rename = "45_minutes")]
    Minutes45,
    #[serde(rename = "1_hour")]
    OneHour,
    #[serde(rename = "over_1_hour")]
    OverOneHour,
}

impl TimeConstraint {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeConstraint::Minutes15 => "15 minutes",
            TimeConstraint::Minutes30 => "30 minutes",
            TimeConstraint::Minutes45 => "45 minutes",
            TimeConstraint::OneHour => "1 hour",
            TimeConstraint::OverOneHour => "over 1 hour",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateRecipeResponse {
    /// Free text straight from the model, one entry per successful variant.
    pub recipes: Vec<String>,
    pub nutrition: NutritionReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_with_optional_fields_absent() {
        let req: GenerateRecipeRequest =
            serde_json::from_str(r#"{"ingredients":"egg","equipment":"pan"}"#).unwrap();
        assert_eq!(req.ingredients, "egg");
        assert_eq!(req.dietary_restrictions, "");
        assert!(req.cuisine.is_none());
        assert!(req.variants.is_none());
    }

    #[test]
    fn enum_wire_names_match_the_form() {
        let req: GenerateRecipeRequest = serde_json::from_str(
            r#"{"ingredients":"egg","equipment":"pan",
                "cuisine":"thai","time_constraint":"over_1_hour","difficulty":"hard"}"#,
        )
        .unwrap();
        assert_eq!(req.cuisine, Some(Cuisine::Thai));
        assert_eq!(req.time_constraint, Some(TimeConstraint::OverOneHour));
        assert_eq!(req.difficulty, Some(Difficulty::Hard));
    }

    #[test]
    fn empty_warnings_are_omitted_from_the_response() {
        let response = GenerateRecipeResponse {
            recipes: vec!["text".into()],
            nutrition: NutritionReport::default(),
            warnings: Vec::new(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("warnings"));
    }
}
