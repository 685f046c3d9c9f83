use crate::{
    domain::Project,
    ui::drag::{DragEvent, Draggable, DropEffect, TEXT_PLAIN},
};

/// Text content of a rendered card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub element_id: String,
    /// `h2`
    pub title: String,
    /// `h3`
    pub people: String,
    /// `p`
    pub description: String,
}

/// A single project card, also the drag source for that project
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    project: Project,
}

impl ProjectCard {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn view(&self) -> CardView {
        CardView {
            element_id: self.project.id.to_string(),
            title: self.project.title.clone(),
            people: format!("{} assigned", self.project.persons()),
            description: self.project.description.clone(),
        }
    }
}

impl Draggable for ProjectCard {
    fn drag_start(&self, event: &mut DragEvent) {
        event
            .data_transfer
            .set_data(TEXT_PLAIN, self.project.id.as_str());
        event.data_transfer.effect_allowed = DropEffect::Move;
        tracing::debug!(project_id = %self.project.id, "drag started");
    }

    fn drag_end(&self, event: &DragEvent) {
        tracing::debug!(
            project_id = %self.project.id,
            dropped = event.default_prevented(),
            "drag ended"
        );
    }
}
