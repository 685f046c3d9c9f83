//! Model of the platform drag-and-drop event sequence.
//!
//! The host runtime drives the gesture (dragstart, dragover, dragleave,
//! drop, dragend). Cards and lists only see the [`DragEvent`] for each step
//! and act through the [`Draggable`] and [`DragTarget`] traits.

/// Format of the only payload the board exchanges
pub const TEXT_PLAIN: &str = "text/plain";

/// Operation hint attached to a drag; the board only ever moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Move,
}

/// Payload carried by a drag gesture
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    pub drop_effect: DropEffect,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data for a format, replacing any earlier entry for it
    pub fn set_data(&mut self, format: &str, data: &str) {
        let format = format.to_ascii_lowercase();
        match self.entries.iter_mut().find(|(f, _)| *f == format) {
            Some(entry) => entry.1 = data.to_string(),
            None => self.entries.push((format, data.to_string())),
        }
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        let format = format.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(f, _)| *f == format)
            .map(|(_, data)| data.as_str())
    }

    /// Declared formats in the order they were set
    pub fn types(&self) -> Vec<&str> {
        self.entries.iter().map(|(f, _)| f.as_str()).collect()
    }
}

/// One step of a drag gesture as delivered to a handler
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragEvent {
    pub data_transfer: DataTransfer,
    default_prevented: bool,
}

impl DragEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opts in to the drop; the platform rejects drops unless a dragover
    /// handler calls this.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Source side of a drag
pub trait Draggable {
    fn drag_start(&self, event: &mut DragEvent);
    fn drag_end(&self, event: &DragEvent);
}

/// Receiving side of a drag
pub trait DragTarget {
    /// Returns whether the target accepted the dragged payload
    fn drag_over(&self, event: &mut DragEvent) -> bool;
    fn drag_leave(&self, event: &DragEvent);
    fn drop(&self, event: &DragEvent);
}
