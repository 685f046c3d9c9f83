use crate::domain::{Project, ProjectId, ProjectStatus};
use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

pub mod listeners;

pub use listeners::{Listener, Listeners};

/// In-memory holder of every project on the board
///
/// Projects keep insertion order and are never removed. Every committed
/// change is pushed to the listeners as a full snapshot.
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Listeners<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            listeners: Listeners::new(),
        }
    }

    /// Registers a listener called with a snapshot after every change
    pub fn add_listener(&mut self, callback: impl FnMut(Vec<Project>) + 'static) {
        self.listeners.add(callback);
    }

    /// Creates an active project and notifies listeners
    ///
    /// Inputs are trusted; the form validates before calling this.
    pub fn add_project(&mut self, title: String, description: String, people: u8) -> ProjectId {
        let id = self.insert(title, description, people);
        self.notify();
        id
    }

    /// Changes a project's status
    ///
    /// Unknown ids and unchanged statuses are silent no-ops; only a real
    /// change notifies listeners.
    pub fn move_project(&mut self, id: &ProjectId, new_status: ProjectStatus) {
        if self.set_status(id, new_status) {
            self.notify();
        }
    }

    /// All projects in insertion order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// Projects with the given status, in insertion order
    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.status == status).collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn insert(&mut self, title: String, description: String, people: u8) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id.clone();

        tracing::info!(project_id = %id, title = %project.title, people, "project added");
        self.projects.push(project);
        id
    }

    /// Returns whether the status actually changed
    fn set_status(&mut self, id: &ProjectId, new_status: ProjectStatus) -> bool {
        let Some(project) = self.projects.iter_mut().find(|p| &p.id == id) else {
            tracing::debug!(project_id = %id, "move ignored, unknown project");
            return false;
        };

        if project.status == new_status {
            tracing::trace!(project_id = %id, status = %new_status, "move ignored, status unchanged");
            return false;
        }

        tracing::info!(
            project_id = %id,
            from = %project.status,
            to = %new_status,
            "project moved"
        );
        project.status = new_status;
        true
    }

    fn notify(&mut self) {
        tracing::debug!(
            listeners = self.listeners.len(),
            projects = self.projects.len(),
            "notifying listeners"
        );
        self.listeners.notify(&self.projects);
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to the store shared by the board's components
///
/// The board is single-threaded, so `Rc<RefCell<_>>` is all the sharing it
/// needs. Mutations release the store before listeners run, so a listener
/// may read the store (or register another listener) while notified.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Rc<RefCell<ProjectStore>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the store
    pub fn borrow(&self) -> Ref<'_, ProjectStore> {
        self.inner.borrow()
    }

    pub fn add_listener(&self, callback: impl FnMut(Vec<Project>) + 'static) {
        self.inner.borrow_mut().add_listener(callback);
    }

    /// Same as [`ProjectStore::add_project`]
    pub fn add_project(&self, title: String, description: String, people: u8) -> ProjectId {
        let (id, snapshot) = {
            let mut store = self.inner.borrow_mut();
            let id = store.insert(title, description, people);
            (id, store.projects.clone())
        };
        self.notify(snapshot);
        id
    }

    /// Same as [`ProjectStore::move_project`]
    pub fn move_project(&self, id: &ProjectId, new_status: ProjectStatus) {
        let snapshot = {
            let mut store = self.inner.borrow_mut();
            if !store.set_status(id, new_status) {
                return;
            }
            store.projects.clone()
        };
        self.notify(snapshot);
    }

    fn notify(&self, snapshot: Vec<Project>) {
        let mut listeners = std::mem::take(&mut self.inner.borrow_mut().listeners);
        tracing::debug!(
            listeners = listeners.len(),
            projects = snapshot.len(),
            "notifying listeners"
        );
        listeners.notify(&snapshot);

        // Keep listeners registered during notification, after the old ones
        let mut store = self.inner.borrow_mut();
        let added = std::mem::replace(&mut store.listeners, listeners);
        store.listeners.append(added);
    }
}
