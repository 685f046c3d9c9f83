use crate::{
    domain::{validate, FormRules, ProjectId, Validatable, Value},
    error::{BoardError, Result},
    store::SharedStore,
};

/// The "add project" form
///
/// Holds the raw field text. A rejected submit leaves the fields as they
/// were so the user can correct them.
#[derive(Debug, Clone, Default)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub people: String,
    rules: FormRules,
}

impl ProjectInput {
    pub fn new(rules: FormRules) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            people: String::new(),
            rules,
        }
    }

    /// Fills all three fields at once
    pub fn fill(&mut self, title: &str, description: &str, people: &str) {
        self.title = title.to_string();
        self.description = description.to_string();
        self.people = people.to_string();
    }

    /// Validates the fields and adds the project to the store
    ///
    /// Any invalid field yields the single `InvalidInput` notice.
    pub fn submit(&mut self, store: &SharedStore) -> Result<ProjectId> {
        let Some((title, description, people)) = self.gather_input() else {
            tracing::warn!("project form rejected");
            return Err(BoardError::InvalidInput);
        };

        let id = store.add_project(title, description, people);
        self.clear();
        Ok(id)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }

    fn gather_input(&self) -> Option<(String, String, u8)> {
        let people = Value::coerce_number(&self.people);

        let checks = [
            Validatable::new(self.title.as_str(), self.rules.title.clone()),
            Validatable::new(self.description.as_str(), self.rules.description.clone()),
            Validatable::new(people.clone(), self.rules.people.clone()),
        ];
        if !checks.iter().all(validate) {
            return None;
        }

        let people = match people {
            Value::Number(n) if n.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&n) => {
                n as u8
            }
            _ => return None,
        };

        Some((self.title.clone(), self.description.clone(), people))
    }
}
