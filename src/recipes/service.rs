use tracing::warn;

use super::dto::GenerateRecipeRequest;
use crate::providers::{ProviderError, RecipeProvider};

pub const MAX_VARIANTS: usize = 3;

const SYSTEM_PROMPT: &str = "You are a professional chef specializing in personalized \
recipe generation. Create a recipe considering the provided ingredients, the available \
kitchen equipment, and any dietary restrictions. Include a title, a short description, \
ingredients with measurements, step-by-step instructions, and the estimated cooking time.";

pub struct RecipePrompt {
    pub system: String,
    pub user: String,
}

/// Fixed chef-persona instruction with the optional constraints interpolated
/// into it when present; the user message carries the raw field text verbatim,
/// no escaping, no length limits.
pub fn build_prompt(req: &GenerateRecipeRequest) -> RecipePrompt {
    let mut system = String::from(SYSTEM_PROMPT);
    if let Some(cuisine) = req.cuisine {
        system.push_str(&format!(" The recipe should be {} cuisine.", cuisine.as_str()));
    }
    if let Some(difficulty) = req.difficulty {
        system.push_str(&format!(" Keep the difficulty {}.", difficulty.as_str()));
    }
    if let Some(time) = req.time_constraint {
        system.push_str(&format!(
            " Total cooking time must stay within {}.",
            time.as_str()
        ));
    }

    let user = format!(
        "Ingredients: {}\nEquipment: {}\nDietary Restrictions: {}\n",
        req.ingredients, req.equipment, req.dietary_restrictions
    );

    RecipePrompt { system, user }
}

/// Issue `count` independent completions with the identical prompt; variation
/// comes only from model sampling. A failed variant is skipped with a warning.
/// A missing API key aborts the loop, since every further call would fail the
/// same way.
pub async fn generate_variants(
    provider: &dyn RecipeProvider,
    prompt: &RecipePrompt,
    count: usize,
) -> (Vec<String>, Vec<String>) {
    let mut recipes = Vec::new();
    let mut warnings = Vec::new();

    for n in 1..=count {
        match provider.complete(&prompt.system, &prompt.user).await {
            Ok(text) => recipes.push(text),
            Err(ProviderError::MissingApiKey(name)) => {
                warn!(key = name, "recipe generation skipped, no API key");
                warnings.push(format!("recipe generation skipped: {name} is not configured"));
                break;
            }
            Err(e) => {
                warn!(variant = n, error = %e, "recipe generation failed");
                warnings.push(format!("recipe variant {n} failed: {e}"));
            }
        }
    }

    (recipes, warnings)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::recipes::dto::{Cuisine, Difficulty, TimeConstraint};

    fn request() -> GenerateRecipeRequest {
        GenerateRecipeRequest {
            ingredients: "egg, tomato".into(),
            equipment: "oven, blender".into(),
            dietary_restrictions: "vegetarian".into(),
            cuisine: None,
            time_constraint: None,
            difficulty: None,
            variants: None,
        }
    }

    struct CountingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RecipeProvider for CountingProvider {
        async fn complete(&self, _system: &str, user: &str) -> Result<String, ProviderError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("recipe {n} for {user}"))
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl RecipeProvider for FailingProvider {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
            Err(ProviderError::Request("connection refused".into()))
        }
    }

    #[test]
    fn prompt_carries_inputs_verbatim() {
        let prompt = build_prompt(&request());
        assert!(prompt.user.contains("Ingredients: egg, tomato"));
        assert!(prompt.user.contains("Equipment: oven, blender"));
        assert!(prompt.user.contains("Dietary Restrictions: vegetarian"));
        assert!(prompt.system.contains("professional chef"));
    }

    #[test]
    fn optional_constraints_appear_only_when_present() {
        let bare = build_prompt(&request());
        assert!(!bare.system.contains("cuisine."));
        assert!(!bare.system.contains("difficulty"));
        assert!(!bare.system.contains("cooking time must"));

        let mut req = request();
        req.cuisine = Some(Cuisine::Thai);
        req.difficulty = Some(Difficulty::Easy);
        req.time_constraint = Some(TimeConstraint::Minutes30);
        let full = build_prompt(&req);
        assert!(full.system.contains("Thai cuisine"));
        assert!(full.system.contains("difficulty easy"));
        assert!(full.system.contains("within 30 minutes"));
    }

    #[tokio::test]
    async fn two_variants_issue_two_calls() {
        let provider = CountingProvider {
            calls: AtomicUsize::new(0),
        };
        let prompt = build_prompt(&request());
        let (recipes, warnings) = generate_variants(&provider, &prompt, 2).await;

        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
        assert_eq!(recipes.len(), 2);
        assert!(warnings.is_empty());
    }

    #[tokio::test]
    async fn transport_failure_degrades_with_warning() {
        let prompt = build_prompt(&request());
        let (recipes, warnings) = generate_variants(&FailingProvider, &prompt, 2).await;

        assert!(recipes.is_empty());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("connection refused"));
    }

    #[tokio::test]
    async fn missing_key_warns_once_and_stops() {
        struct NoKey;
        #[async_trait]
        impl RecipeProvider for NoKey {
            async fn complete(&self, _s: &str, _u: &str) -> Result<String, ProviderError> {
                Err(ProviderError::MissingApiKey("GROQ_API_KEY"))
            }
        }

        let prompt = build_prompt(&request());
        let (recipes, warnings) = generate_variants(&NoKey, &prompt, 3).await;

        assert!(recipes.is_empty());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("GROQ_API_KEY"));
    }
}
