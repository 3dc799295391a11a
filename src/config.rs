use crate::domain::sorting::{SortField, SortOrder};
use crate::domain::validation::{FieldValue, Validatable};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Constraints applied to one form field
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRules {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl FieldRules {
    /// Pairs a value with these rules
    pub fn check(&self, value: impl Into<FieldValue>) -> Validatable {
        Validatable {
            value: value.into(),
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            min: self.min,
            max: self.max,
        }
    }

    fn sanity_check(&self, field: &str) -> Result<()> {
        if let (Some(lo), Some(hi)) = (self.min_length, self.max_length) {
            if lo > hi {
                return Err(BoardError::ConfigError(format!(
                    "{}: min_length {} exceeds max_length {}",
                    field, lo, hi
                )));
            }
        }
        if let (Some(lo), Some(hi)) = (self.min, self.max) {
            if lo > hi {
                return Err(BoardError::ConfigError(format!(
                    "{}: min {} exceeds max {}",
                    field, lo, hi
                )));
            }
        }
        Ok(())
    }
}

/// Rules for the three fields of the project form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRules {
    pub title: FieldRules,
    pub description: FieldRules,
    pub people: FieldRules,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title: FieldRules {
                required: true,
                min_length: Some(3),
                max_length: Some(20),
                ..FieldRules::default()
            },
            description: FieldRules {
                required: false,
                max_length: Some(150),
                ..FieldRules::default()
            },
            people: FieldRules {
                required: true,
                min: Some(1.0),
                max: Some(10.0),
                ..FieldRules::default()
            },
        }
    }
}

/// Template ids the views clone from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateIds {
    pub input: String,
    pub list: String,
    pub item: String,
}

impl Default for TemplateIds {
    fn default() -> Self {
        Self {
            input: "project-input".to_string(),
            list: "project-list".to_string(),
            item: "single-project".to_string(),
        }
    }
}

/// Ordering applied by list views before rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSort {
    pub field: SortField,
    #[serde(default)]
    pub order: SortOrder,
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub host_id: String,
    pub templates: TemplateIds,
    pub form: FormRules,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<ListSort>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            host_id: "app".to_string(),
            templates: TemplateIds::default(),
            form: FormRules::default(),
            sort: None,
        }
    }
}

impl BoardConfig {
    /// Parses a configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.sanity_check()?;
        Ok(config)
    }

    /// Reads a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    fn sanity_check(&self) -> Result<()> {
        if self.host_id.trim().is_empty() {
            return Err(BoardError::ConfigError("host_id must not be empty".to_string()));
        }
        self.form.title.sanity_check("title")?;
        self.form.description.sanity_check("description")?;
        self.form.people.sanity_check("people")?;

        // A project always has a headcount of at least one.
        if !self.form.people.required {
            return Err(BoardError::ConfigError(
                "people: the headcount field cannot be optional".to_string(),
            ));
        }
        if let Some(min) = self.form.people.min {
            if min < 1.0 {
                return Err(BoardError::ConfigError(format!(
                    "people: min {} is below 1",
                    min
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_form_rules() {
        let rules = FormRules::default();

        assert!(rules.title.check("Build API").is_valid());
        assert!(!rules.title.check("ab").is_valid());
        assert!(!rules.title.check("x".repeat(21)).is_valid());

        assert!(rules.description.check("").is_valid());
        assert!(!rules.description.check("d".repeat(151)).is_valid());

        assert!(rules.people.check(10u32).is_valid());
        assert!(!rules.people.check(11u32).is_valid());
        assert!(!rules.people.check(0u32).is_valid());
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config =
            BoardConfig::from_json(r#"{"form": {"people": {"required": true, "max": 25}}}"#)
                .unwrap();

        assert_eq!(config.host_id, "app");
        assert_eq!(config.templates, TemplateIds::default());
        assert_eq!(config.form.people.max, Some(25.0));
        assert_eq!(config.form.people.min, None);
        assert_eq!(config.form.title, FormRules::default().title);
    }

    #[test]
    fn test_from_json_with_sort() {
        let config =
            BoardConfig::from_json(r#"{"sort": {"field": "people", "order": "desc"}}"#).unwrap();
        let sort = config.sort.unwrap();
        assert_eq!(sort.field, SortField::People);
        assert_eq!(sort.order, SortOrder::Descending);

        let config = BoardConfig::from_json(r#"{"sort": {"field": "title"}}"#).unwrap();
        assert_eq!(config.sort.unwrap().order, SortOrder::Ascending);
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let json = r#"{"form": {"title": {"min_length": 9, "max_length": 2}}}"#;
        let err = BoardConfig::from_json(json).unwrap_err();
        assert!(matches!(err, BoardError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_people_min_below_one() {
        let json = r#"{"form": {"people": {"required": true, "min": 0, "max": 10}}}"#;
        let err = BoardConfig::from_json(json).unwrap_err();
        assert!(matches!(err, BoardError::ConfigError(_)));

        let json = r#"{"form": {"people": {"required": true, "min": 0.5}}}"#;
        assert!(BoardConfig::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_optional_people() {
        let json = r#"{"form": {"people": {"required": false, "min": 1, "max": 10}}}"#;
        let err = BoardConfig::from_json(json).unwrap_err();
        assert!(matches!(err, BoardError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_empty_host() {
        let err = BoardConfig::from_json(r#"{"host_id": "  "}"#).unwrap_err();
        assert!(matches!(err, BoardError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = BoardConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, BoardError::SerializationError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"host_id": "board"}}"#).unwrap();

        let config = BoardConfig::load(file.path()).unwrap();
        assert_eq!(config.host_id, "board");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BoardConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, BoardError::IoError(_)));
    }

    #[test]
    fn test_default_roundtrips_through_json() {
        let json = serde_json::to_string(&BoardConfig::default()).unwrap();
        assert_eq!(BoardConfig::from_json(&json).unwrap(), BoardConfig::default());
    }
}
