//! Headless UI components: the input form, the project lists and cards,
//! and the drag-and-drop model connecting them.

pub mod card;
pub mod drag;
pub mod form;
pub mod list;
pub mod page;

pub use card::{CardView, ProjectCard};
pub use drag::{DataTransfer, DragEvent, DragTarget, Draggable, DropEffect, TEXT_PLAIN};
pub use form::ProjectInput;
pub use list::ProjectList;
pub use page::Page;
