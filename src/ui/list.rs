use crate::{
    domain::{Column, Project, ProjectId, ProjectStatus},
    store::SharedStore,
    ui::{
        card::{CardView, ProjectCard},
        drag::{DragEvent, DragTarget, DropEffect, TEXT_PLAIN},
    },
};
use std::{cell::RefCell, rc::Rc};

/// Rendered state of a list, updated by store notifications
#[derive(Debug, Default)]
struct ListView {
    cards: Vec<ProjectCard>,
    droppable: bool,
    renders: usize,
}

impl ListView {
    fn render_projects(&mut self, status: ProjectStatus, projects: Vec<Project>) {
        self.cards = projects
            .into_iter()
            .filter(|p| p.status == status)
            .map(ProjectCard::new)
            .collect();
        self.renders += 1;
    }
}

/// One column of the board
///
/// Shows the projects with its status and accepts dropped cards, moving
/// them to that status. Handlers take `&self` and release the view before
/// calling the store, so the store's notification can re-render this list.
pub struct ProjectList {
    status: ProjectStatus,
    heading: String,
    element_id: String,
    view: Rc<RefCell<ListView>>,
    store: SharedStore,
}

impl ProjectList {
    /// Creates the list and subscribes it to the store
    pub fn new(column: &Column, store: SharedStore) -> Self {
        let status = column.status;
        let view = Rc::new(RefCell::new(ListView::default()));

        {
            let view = Rc::clone(&view);
            store.add_listener(move |projects| view.borrow_mut().render_projects(status, projects));
        }

        Self {
            status,
            heading: column.title.to_uppercase(),
            element_id: column.list_id(),
            view,
            store,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Views of the rendered cards, in store order
    pub fn cards(&self) -> Vec<CardView> {
        self.view.borrow().cards.iter().map(ProjectCard::view).collect()
    }

    pub fn project_ids(&self) -> Vec<ProjectId> {
        self.view
            .borrow()
            .cards
            .iter()
            .map(|card| card.project().id.clone())
            .collect()
    }

    pub fn contains(&self, id: &ProjectId) -> bool {
        self.card(id).is_some()
    }

    pub fn card(&self, id: &ProjectId) -> Option<ProjectCard> {
        self.view
            .borrow()
            .cards
            .iter()
            .find(|card| &card.project().id == id)
            .cloned()
    }

    pub fn is_droppable(&self) -> bool {
        self.view.borrow().droppable
    }

    /// How many times the list has re-rendered
    pub fn render_count(&self) -> usize {
        self.view.borrow().renders
    }

    fn set_droppable(&self, droppable: bool) {
        self.view.borrow_mut().droppable = droppable;
    }
}

impl DragTarget for ProjectList {
    fn drag_over(&self, event: &mut DragEvent) -> bool {
        let accepted = event.data_transfer.types().first() == Some(&TEXT_PLAIN);
        if accepted {
            event.prevent_default();
            event.data_transfer.drop_effect = DropEffect::Move;
            self.set_droppable(true);
        }
        tracing::trace!(list = %self.status, accepted, "drag over");
        accepted
    }

    fn drag_leave(&self, _event: &DragEvent) {
        self.set_droppable(false);
    }

    fn drop(&self, event: &DragEvent) {
        self.set_droppable(false);

        let Some(payload) = event.data_transfer.get_data(TEXT_PLAIN) else {
            tracing::debug!(list = %self.status, "drop without a project payload");
            return;
        };

        match payload.parse::<ProjectId>() {
            Ok(id) => {
                tracing::debug!(list = %self.status, project_id = %id, "project dropped");
                self.store.move_project(&id, self.status);
            }
            Err(err) => tracing::debug!(list = %self.status, error = %err, "drop ignored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoardConfig;

    fn list_for(status: ProjectStatus, store: &SharedStore) -> ProjectList {
        let config = BoardConfig::default();
        let column = config.get_column_for_status(status).unwrap();
        ProjectList::new(column, store.clone())
    }

    fn payload(id: &str) -> DragEvent {
        let mut event = DragEvent::new();
        event.data_transfer.set_data(TEXT_PLAIN, id);
        event
    }

    #[test]
    fn test_list_ids_and_heading() {
        let store = SharedStore::new();
        let list = list_for(ProjectStatus::Active, &store);

        assert_eq!(list.element_id(), "active-projects-list");
        assert_eq!(list.heading(), "ACTIVE PROJECTS");
        assert!(list.cards().is_empty());
    }

    #[test]
    fn test_renders_only_matching_status() {
        let store = SharedStore::new();
        let active = list_for(ProjectStatus::Active, &store);
        let finished = list_for(ProjectStatus::Finished, &store);

        let id = store.add_project("A".to_string(), "Description".to_string(), 1);

        assert_eq!(active.project_ids(), vec![id.clone()]);
        assert!(finished.project_ids().is_empty());

        store.move_project(&id, ProjectStatus::Finished);

        assert!(!active.contains(&id));
        assert!(finished.contains(&id));
        assert_eq!(active.render_count(), 2);
        assert_eq!(finished.render_count(), 2);
    }

    #[test]
    fn test_drag_over_accepts_text_plain() {
        let store = SharedStore::new();
        let list = list_for(ProjectStatus::Finished, &store);
        let mut event = payload("p1");

        assert!(list.drag_over(&mut event));
        assert!(event.default_prevented());
        assert_eq!(event.data_transfer.drop_effect, DropEffect::Move);
        assert!(list.is_droppable());
    }

    #[test]
    fn test_drag_over_rejects_other_payloads() {
        let store = SharedStore::new();
        let list = list_for(ProjectStatus::Finished, &store);

        let mut event = DragEvent::new();
        event.data_transfer.set_data("text/uri-list", "https://example.com");
        event.data_transfer.set_data(TEXT_PLAIN, "p1");

        assert!(!list.drag_over(&mut event));
        assert!(!event.default_prevented());
        assert!(!list.is_droppable());

        let mut empty = DragEvent::new();
        assert!(!list.drag_over(&mut empty));
    }

    #[test]
    fn test_drag_leave_clears_mark() {
        let store = SharedStore::new();
        let list = list_for(ProjectStatus::Finished, &store);
        let mut event = payload("p1");

        list.drag_over(&mut event);
        list.drag_leave(&event);
        assert!(!list.is_droppable());

        // Unconditional, even without a prior drag over
        list.drag_leave(&DragEvent::new());
        assert!(!list.is_droppable());
    }

    #[test]
    fn test_drop_moves_project_and_clears_mark() {
        let store = SharedStore::new();
        let active = list_for(ProjectStatus::Active, &store);
        let finished = list_for(ProjectStatus::Finished, &store);
        let id = store.add_project("A".to_string(), "Description".to_string(), 1);

        let mut event = payload(id.as_str());
        finished.drag_over(&mut event);
        finished.drop(&event);

        assert!(!finished.is_droppable());
        assert!(finished.contains(&id));
        assert!(!active.contains(&id));
        assert_eq!(
            store.borrow().get(&id).unwrap().status,
            ProjectStatus::Finished
        );
    }

    #[test]
    fn test_drop_unknown_or_missing_payload_is_ignored() {
        let store = SharedStore::new();
        let list = list_for(ProjectStatus::Finished, &store);
        store.add_project("A".to_string(), "Description".to_string(), 1);
        let renders = list.render_count();

        list.drop(&payload("no-such-project"));
        list.drop(&payload("   "));
        list.drop(&DragEvent::new());

        assert_eq!(list.render_count(), renders);
        assert!(list.cards().is_empty());
    }
}
