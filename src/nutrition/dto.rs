use serde::{Deserialize, Serialize};

/// One nutrition match as returned by the hosted API. The free tier omits some
/// macro fields, so everything but the name is optional. Records are kept in
/// arrival order and never merged; one query can yield several matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionRecord {
    pub name: String,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein_g: Option<f64>,
    #[serde(default)]
    pub fat_total_g: Option<f64>,
    #[serde(default)]
    pub carbohydrates_total_g: Option<f64>,
    #[serde(default)]
    pub sugar_g: Option<f64>,
    #[serde(default)]
    pub fiber_g: Option<f64>,
}

/// The successfully fetched subset plus a count of per-ingredient lookups
/// that failed, so "API found nothing" and "API call failed" stay
/// distinguishable to the caller.
#[derive(Debug, Default, Serialize)]
pub struct NutritionReport {
    pub records: Vec<NutritionRecord>,
    pub failed_lookups: usize,
}

#[derive(Debug, Deserialize)]
pub struct NutritionQuery {
    pub ingredients: String,
}

/// Standalone lookup response: the report plus the warnings accumulated on
/// the way, so a skipped or failed lookup never looks like an empty match.
#[derive(Debug, Serialize)]
pub struct NutritionLookupResponse {
    #[serde(flatten)]
    pub report: NutritionReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tolerates_missing_macro_fields() {
        // The free API tier returns some fields as strings or not at all.
        let records: Vec<NutritionRecord> = serde_json::from_str(
            r#"[{"name":"egg","calories":147.0,"protein_g":12.5},
                {"name":"egg white","fat_total_g":0.2}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].calories, Some(147.0));
        assert!(records[0].fat_total_g.is_none());
        assert_eq!(records[1].name, "egg white");
    }
}
