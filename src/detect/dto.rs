use serde::Serialize;

/// An empty set with an error means detection failed; an empty set without
/// one means nothing was recognized. The form treats both as "type your
/// ingredients yourself".
#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
