use crate::{
    domain::{project::ProjectStatus, validation::Constraints},
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Configuration for a board column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    pub status: ProjectStatus,
}

impl Column {
    pub fn new(title: String, status: ProjectStatus) -> Self {
        Self { title, status }
    }

    /// Id of the list element rendered for this column
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status)
    }
}

/// Ids of the templates the board instantiates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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

/// Validation rules for the input form fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRules {
    pub title: Constraints,
    pub description: Constraints,
    pub people: Constraints,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title: Constraints::default().required(),
            description: Constraints::default().required().min_length(5),
            people: Constraints::default().required().min(1.0).max(5.0),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub host_id: String,
    #[serde(default)]
    pub templates: TemplateIds,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub form: FormRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Projects".to_string(),
            host_id: "app".to_string(),
            templates: TemplateIds::default(),
            columns: vec![
                Column::new("Active Projects".to_string(), ProjectStatus::Active),
                Column::new("Finished Projects".to_string(), ProjectStatus::Finished),
            ],
            form: FormRules::default(),
        }
    }
}

impl BoardConfig {
    /// Parses and validates a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that ids are non-empty and every column has a distinct status
    pub fn validate(&self) -> Result<()> {
        let ids = [
            ("host_id", &self.host_id),
            ("templates.input", &self.templates.input),
            ("templates.list", &self.templates.list),
            ("templates.item", &self.templates.item),
        ];
        for (field, value) in ids {
            if value.trim().is_empty() {
                return Err(BoardError::ConfigError(format!("{} must not be empty", field)));
            }
        }

        if self.columns.is_empty() {
            return Err(BoardError::ConfigError(
                "at least one column is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.status) {
                return Err(BoardError::ConfigError(format!(
                    "duplicate column for status {}",
                    column.status
                )));
            }
        }

        Ok(())
    }

    /// Gets the column configuration for a status
    pub fn get_column_for_status(&self, status: ProjectStatus) -> Option<&Column> {
        self.columns.iter().find(|col| col.status == status)
    }

    /// Every anchor id the host page must provide
    pub fn anchor_ids(&self) -> [&str; 4] {
        [
            self.host_id.as_str(),
            self.templates.input.as_str(),
            self.templates.list.as_str(),
            self.templates.item.as_str(),
        ]
    }
}
