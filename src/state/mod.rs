pub mod observable;
pub mod project_state;

pub use observable::{Listener, Observable};
pub use project_state::{ProjectState, SharedState};
