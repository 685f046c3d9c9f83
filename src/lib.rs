//! # Project Board Core
//!
//! State, validation and drag-and-drop logic for a two-column project board
//! (active / finished).
//!
//! The crate has no dependency on a real DOM. Lists and cards produce plain
//! render views, and drag gestures are modelled by [`ui::drag::DragEvent`],
//! so a host UI only has to forward its events to a [`Board`].

pub mod app;
pub mod domain;
pub mod error;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use app::Board;
pub use domain::{
    board::{BoardConfig, Column, FormRules},
    project::{Project, ProjectId, ProjectStatus},
    validation::{validate, Constraints, Validatable, Value},
};
pub use error::{BoardError, Result};
pub use store::{ProjectStore, SharedStore};
