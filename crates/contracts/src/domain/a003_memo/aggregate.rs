use crate::shared::validation::ValidationRules;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const TITLE_RULES: ValidationRules = ValidationRules::required().with_max_length(180);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memo {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "customerId")]
    pub customer_id: Option<i32>,
    #[serde(rename = "tagIds", default)]
    pub tag_ids: Vec<i32>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Payload of the memo form (host form of the inline-create selects).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoDto {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "customerId")]
    pub customer_id: Option<i32>,
    #[serde(rename = "tagIds", default)]
    pub tag_ids: Vec<i32>,
}
