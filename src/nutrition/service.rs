use tracing::warn;

use super::dto::NutritionReport;
use crate::providers::{NutritionProvider, ProviderError};

/// Only the first five comma-separated ingredients are analyzed; the rest are
/// silently dropped.
pub const MAX_INGREDIENTS: usize = 5;

/// Split the raw ingredient text on commas and look each token up in turn,
/// sequentially. A failed lookup is logged, counted, and skipped; the report
/// always carries whatever subset succeeded.
pub async fn lookup_nutrition(
    provider: &dyn NutritionProvider,
    ingredients_csv: &str,
) -> (NutritionReport, Vec<String>) {
    let mut report = NutritionReport::default();
    let mut warnings = Vec::new();

    let tokens = ingredients_csv
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .take(MAX_INGREDIENTS);

    for ingredient in tokens {
        match provider.lookup(ingredient).await {
            Ok(records) => report.records.extend(records),
            Err(ProviderError::MissingApiKey(name)) => {
                warn!(key = name, "nutrition lookup skipped, no API key");
                warnings.push(format!("nutrition analysis skipped: {name} is not configured"));
                break;
            }
            Err(e) => {
                warn!(%ingredient, error = %e, "nutrition lookup failed");
                report.failed_lookups += 1;
                warnings.push(format!("could not fetch nutrition for {ingredient}"));
            }
        }
    }

    (report, warnings)
}
