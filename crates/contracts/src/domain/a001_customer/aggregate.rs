use crate::shared::inline_create::SelectOption;
use crate::shared::validation::ValidationRules;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NAME_RULES: ValidationRules = ValidationRules::required().with_max_length(180);
pub const EMAIL_RULES: ValidationRules = ValidationRules::none().with_max_length(254);
pub const PHONE_RULES: ValidationRules = ValidationRules::none().with_max_length(32);

/// Customer referenced from memos; creatable inline from the memo form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "logoUrl")]
    pub logo_url: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn to_option(&self) -> SelectOption {
        SelectOption::new(self.id.to_string(), self.name.clone())
    }
}

/// Very loose address check: one `@` with something on both sides and a dot in the domain.
pub fn looks_like_email(value: &str) -> bool {
    match value.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    }
}
