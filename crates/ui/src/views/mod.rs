mod lesson;
mod map;
mod name;
mod sandbox;
mod start;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use lesson::LessonView;
pub use map::MapView;
pub use name::NameView;
pub use sandbox::SandboxView;
pub use start::StartView;
pub use state::{ViewError, ViewState, view_state_from_resource};
