use crate::{
    domain::{BoardConfig, ProjectId, ProjectStatus},
    error::Result,
    store::SharedStore,
    ui::{DragEvent, DragTarget, Draggable, Page, ProjectInput, ProjectList},
};

/// The assembled board
///
/// Owns the one store of the running app and hands it to the form and the
/// lists. Host events are forwarded through the methods below.
pub struct Board {
    config: BoardConfig,
    store: SharedStore,
    input: ProjectInput,
    lists: Vec<ProjectList>,
}

impl Board {
    /// Builds the board on `page`
    ///
    /// Fails with `MissingAnchor` if the page lacks the host element or
    /// any template the board instantiates.
    pub fn new(page: &Page, config: BoardConfig) -> Result<Self> {
        config.validate()?;
        for id in config.anchor_ids() {
            page.require(id)?;
        }

        let store = SharedStore::new();
        let input = ProjectInput::new(config.form.clone());
        let lists = config
            .columns
            .iter()
            .map(|column| ProjectList::new(column, store.clone()))
            .collect();

        tracing::info!(board = %config.name, columns = config.columns.len(), "board initialized");

        Ok(Self {
            config,
            store,
            input,
            lists,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut ProjectInput {
        &mut self.input
    }

    pub fn lists(&self) -> &[ProjectList] {
        &self.lists
    }

    pub fn list(&self, status: ProjectStatus) -> Option<&ProjectList> {
        self.lists.iter().find(|list| list.status() == status)
    }

    /// Handles a form submit
    pub fn submit_form(&mut self) -> Result<ProjectId> {
        self.input.submit(&self.store)
    }

    /// Starts dragging the card for `id`
    ///
    /// Returns `None` when no list currently renders that project.
    pub fn drag_start(&self, id: &ProjectId) -> Option<DragEvent> {
        let card = self.lists.iter().find_map(|list| list.card(id))?;
        let mut event = DragEvent::new();
        card.drag_start(&mut event);
        Some(event)
    }

    pub fn drag_end(&self, id: &ProjectId, event: &DragEvent) {
        if let Some(card) = self.lists.iter().find_map(|list| list.card(id)) {
            card.drag_end(event);
        }
    }

    /// Returns whether the list for `status` accepted the drag
    pub fn drag_over(&self, status: ProjectStatus, event: &mut DragEvent) -> bool {
        self.list(status)
            .map(|list| list.drag_over(event))
            .unwrap_or(false)
    }

    pub fn drag_leave(&self, status: ProjectStatus, event: &DragEvent) {
        if let Some(list) = self.list(status) {
            list.drag_leave(event);
        }
    }

    pub fn drop(&self, status: ProjectStatus, event: &DragEvent) {
        if let Some(list) = self.list(status) {
            list.drop(event);
        }
    }
}
