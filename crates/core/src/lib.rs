#![forbid(unsafe_code)]

pub mod detail;
pub mod model;
pub mod progress;
pub mod sandbox;
pub mod selection;
pub mod view;

pub use detail::{DetailTopics, DetailView, open_detail};
pub use progress::{LessonState, ProgressSnapshot, aggregate, compute_runtime_state};
pub use selection::{Selection, SelectionState};
pub use view::{ViewName, initial_view};
