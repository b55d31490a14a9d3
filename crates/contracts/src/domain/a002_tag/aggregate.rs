use crate::shared::inline_create::SelectOption;
use crate::shared::validation::ValidationRules;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NAME_RULES: ValidationRules = ValidationRules::required().with_max_length(64);

/// Label attached to memos (multi-value select).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub color: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Tag {
    pub fn to_option(&self) -> SelectOption {
        SelectOption::new(self.id.to_string(), self.name.clone())
    }
}

/// `#rrggbb`
pub fn is_hex_color(value: &str) -> bool {
    let value = value.trim();
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#1a2B3c"));
        assert!(!is_hex_color("1a2b3c"));
        assert!(!is_hex_color("#1a2b3"));
        assert!(!is_hex_color("#zzzzzz"));
    }
}
