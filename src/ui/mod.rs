//! Views and the rendering collaborator they drive.

pub mod component;
pub mod dom;
pub mod drag;
pub mod input;
pub mod item;
pub mod list;
pub mod memory;

pub use component::mount;
pub use dom::{Dom, InsertPosition, NodeId, SharedDom};
pub use drag::{DataTransfer, DragTarget, Draggable, EffectAllowed, PLAIN_TEXT};
pub use input::ProjectInput;
pub use item::ProjectItem;
pub use list::ProjectList;
pub use memory::{MemoryDom, Template};
