//! Person record attached to each graph node

use serde::{Deserialize, Serialize};

/// Display data for a single person in the family graph.
///
/// Field names mirror the attribute labels used by the upstream data source
/// (`gender`, `date_of_birth`, `date_of_death`, `image`). All attributes
/// except the name are optional; missing values are tolerated everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Display name of the person
    pub name: String,
    /// Gender label ("male", "female", or another value)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Birth date as an ISO date string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Death date as an ISO date string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_death: Option<String>,
    /// Portrait image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Person {
    /// Create a person with just a name; other attributes default to unknown.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let person: Person =
            serde_json::from_str(r#"{"name": "Ada Lovelace"}"#).expect("parse person");
        assert_eq!(person.name, "Ada Lovelace");
        assert!(person.gender.is_none());
        assert!(person.date_of_birth.is_none());
    }

    #[test]
    fn deserializes_full_record() {
        let person: Person = serde_json::from_str(
            r#"{
                "name": "Queen Victoria",
                "gender": "female",
                "date_of_birth": "1819-05-24",
                "date_of_death": "1901-01-22"
            }"#,
        )
        .expect("parse person");
        assert_eq!(person.gender.as_deref(), Some("female"));
        assert_eq!(person.date_of_death.as_deref(), Some("1901-01-22"));
    }
}
